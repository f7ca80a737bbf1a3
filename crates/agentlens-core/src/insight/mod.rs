//! Generative insight integration
//!
//! One prompt covering eight fixed dimensions, strict JSON parsing of
//! the reply, and a canonical fallback bundle substituted on any
//! failure. Callers can never observe an error from this path, only
//! degraded-but-valid data.

pub mod fallback;
pub mod provider;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tracing::warn;

use crate::extract::{MAX_HTML_CHARS, truncate_chars};
use crate::types::{EnrichRequest, InsightBundle};

/// The dimensions every enrichment pass is asked to cover.
pub const INSIGHT_DIMENSIONS: &[&str] = &[
    "content quality",
    "information architecture",
    "semantic structure",
    "discovery value",
    "knowledge extraction",
    "context completeness",
    "content uniqueness",
    "machine interpretability",
];

/// Signals worth repeating back to the model as heuristic context.
const CONTEXT_SIGNAL_IDS: &[&str] = &["readability", "heading-structure", "meta-tags"];

const ACTION_ITEMS_PER_INSIGHT: usize = 5;

/// Generative-model collaborator contract.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Runs the enrichment pass. Any failure is logged and absorbed
/// into the fallback bundle so callers always get a usable result.
pub async fn enrich(provider: &dyn CompletionProvider, request: &EnrichRequest) -> InsightBundle {
    match generate(provider, request).await {
        Ok(bundle) => bundle,
        Err(error) => {
            warn!("insight generation substituted the fallback bundle: {error:#}");
            fallback::fallback_bundle()
        }
    }
}

async fn generate(
    provider: &dyn CompletionProvider,
    request: &EnrichRequest,
) -> Result<InsightBundle> {
    let prompt = build_prompt(request);
    let raw = provider.complete(&prompt).await?;
    let cleaned = strip_code_fences(&raw);
    let mut bundle: InsightBundle =
        serde_json::from_str(cleaned).context("completion output is not the expected JSON")?;

    for insight in &mut bundle.insights {
        if insight.action_items.len() != ACTION_ITEMS_PER_INSIGHT {
            bail!(
                "insight '{}' carries {} action items, expected {ACTION_ITEMS_PER_INSIGHT}",
                insight.category,
                insight.action_items.len(),
            );
        }
        insight.score = insight.score.min(100);
    }

    Ok(bundle)
}

fn build_prompt(request: &EnrichRequest) -> String {
    let mut context_lines = String::new();
    for signal in &request.current_checks {
        if CONTEXT_SIGNAL_IDS.contains(&signal.id.as_str()) {
            context_lines.push_str(&format!(
                "- {}: {}/100 ({})\n",
                signal.label, signal.score, signal.details
            ));
        }
    }
    if context_lines.is_empty() {
        context_lines.push_str("- no prior heuristic context\n");
    }

    let excerpt = truncate_chars(&request.html_content, MAX_HTML_CHARS);

    format!(
        "Analyze how ready the page at {url} is for consumption by AI systems.\n\n\
         Prior heuristic findings:\n{context_lines}\n\
         Page HTML (may be truncated):\n{excerpt}\n\n\
         Assess these dimensions: {dimensions}.\n\n\
         Respond with exactly one JSON object shaped like\n\
         {{\"insights\": [{{\"category\": \"...\", \"score\": 0, \"analysis\": \"...\", \
         \"actionItems\": [\"...\"]}}], \"overallAIReadiness\": \"...\", \
         \"topPriorities\": [\"...\"]}}\n\
         Every insight must contain exactly {action_items} actionItems. \
         Do not wrap the JSON in markdown code fences.",
        url = request.url,
        dimensions = INSIGHT_DIMENSIONS.join(", "),
        action_items = ACTION_ITEMS_PER_INSIGHT,
    )
}

/// Models ignore the no-fences instruction often enough that residual
/// markers have to be stripped before parsing.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}
