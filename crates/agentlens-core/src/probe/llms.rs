//! llms.txt variant probing
//!
//! All filename variants are fetched in parallel; the earliest entry
//! in `LLMS_VARIANTS` that validates wins. Validation has to reject
//! soft 404s: servers that answer 200 with an error page or an HTML
//! shell must not count as a hit.

use tracing::warn;

use super::{ProbeClient, ProbeMode};
use crate::types::{ProbeFinding, Signal, Thresholds};

const ID: &str = "llms-txt";
const LABEL: &str = "LLMs.txt";
const THRESHOLDS: Thresholds = Thresholds::new(80, 40);

pub const LLMS_VARIANTS: &[&str] = &["llms.txt", "LLMs.txt", "llms-full.txt"];

const NOT_FOUND_PHRASES: &[&str] = &["404 not found", "page not found", "cannot be found"];

pub async fn probe(client: &ProbeClient, origin: &str) -> ProbeFinding {
    let candidates: Vec<String> = LLMS_VARIANTS
        .iter()
        .map(|variant| format!("{origin}/{variant}"))
        .collect();

    let walk = client
        .first_valid(&candidates, ProbeMode::Parallel, is_valid_llms_body)
        .await;

    match walk.hit {
        Some((url, _body)) => {
            let variant = url.rsplit('/').next().unwrap_or_default();
            ProbeFinding::new(
                Signal::new(
                    ID,
                    LABEL,
                    100,
                    THRESHOLDS,
                    format!("{variant} present with plain-text content"),
                    "Keep the llms.txt content in step with the site",
                ),
                Some(url),
            )
        }
        None => {
            if !walk.failures.is_empty() {
                warn!("llms.txt probe degraded: {}", walk.failures.join("; "));
            }
            ProbeFinding::new(
                Signal::new(
                    ID,
                    LABEL,
                    0,
                    THRESHOLDS,
                    format!("No llms.txt found (checked {})", LLMS_VARIANTS.join(", ")),
                    "Publish an llms.txt file describing the site for AI agents",
                ),
                None,
            )
        }
    }
}

/// A body counts as a real llms.txt only if it is more than trivially
/// short, is not an HTML document, and carries no not-found phrasing.
fn is_valid_llms_body(body: &str) -> bool {
    if body.chars().count() <= 10 {
        return false;
    }
    let lower = body.to_lowercase();
    if lower.contains("<!doctype") || lower.contains("<html") {
        return false;
    }
    !NOT_FOUND_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
