//! Sitemap discovery across robots-declared and conventional locations
//!
//! Candidates are walked sequentially and the walk stops at the first
//! body that looks like sitemap XML, so a site with a robots-declared
//! sitemap costs exactly one request here.

use tracing::warn;

use super::{ProbeClient, ProbeMode};
use crate::types::{ProbeFinding, Signal, Thresholds};

const ID: &str = "sitemap";
const LABEL: &str = "Sitemap";
const THRESHOLDS: Thresholds = Thresholds::new(80, 40);

pub const SITEMAP_PATHS: &[&str] = &[
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemap-index.xml",
    "/sitemaps/sitemap.xml",
    "/sitemap/sitemap.xml",
];

const SITEMAP_MARKERS: &[&str] = &["<?xml", "<urlset", "<sitemapindex", "<url>", "<sitemap>"];

pub async fn probe(client: &ProbeClient, origin: &str, declared: &[String]) -> ProbeFinding {
    let candidates = candidate_urls(origin, declared);

    let walk = client
        .first_valid(&candidates, ProbeMode::Sequential, looks_like_sitemap)
        .await;

    match walk.hit {
        Some((url, _body)) => {
            let source = if declared.contains(&url) {
                "declared in robots.txt"
            } else {
                "conventional path"
            };
            ProbeFinding::new(
                Signal::new(
                    ID,
                    LABEL,
                    100,
                    THRESHOLDS,
                    format!("Sitemap found at {url} ({source})"),
                    "Keep the sitemap fresh and referenced from robots.txt",
                ),
                Some(url),
            )
        }
        None => {
            if !walk.failures.is_empty() {
                warn!("sitemap probe degraded: {}", walk.failures.join("; "));
            }
            ProbeFinding::new(
                Signal::new(
                    ID,
                    LABEL,
                    0,
                    THRESHOLDS,
                    String::from("No sitemap found at robots-declared or conventional locations"),
                    "Publish a sitemap.xml and reference it from robots.txt",
                ),
                None,
            )
        }
    }
}

/// Robots-declared URLs first in discovery order, then the
/// conventional paths, duplicates skipped.
fn candidate_urls(origin: &str, declared: &[String]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::with_capacity(declared.len() + SITEMAP_PATHS.len());
    for url in declared {
        if !candidates.contains(url) {
            candidates.push(url.clone());
        }
    }
    for path in SITEMAP_PATHS {
        let url = format!("{origin}{path}");
        if !candidates.contains(&url) {
            candidates.push(url);
        }
    }
    candidates
}

fn looks_like_sitemap(body: &str) -> bool {
    let lower = body.to_lowercase();
    if lower.contains("<!doctype html") {
        return false;
    }
    SITEMAP_MARKERS.iter().any(|marker| lower.contains(marker))
}
