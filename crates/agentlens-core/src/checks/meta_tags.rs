//! Metadata presence and quality scoring
//!
//! Works over a lowercased copy of the document plus whatever title and
//! description the page fetch already captured, so pages served with
//! unusual casing still get credit.

use crate::types::{PageMetadata, Signal, Thresholds};

const ID: &str = "meta-tags";
const LABEL: &str = "Meta Tags";
const THRESHOLDS: Thresholds = Thresholds::new(70, 40);

const IDEAL_DESCRIPTION_RANGE: std::ops::RangeInclusive<usize> = 70..=160;

pub fn check(html: &str, metadata: &PageMetadata) -> Signal {
    let lower = html.to_lowercase();

    let mut score: i32 = 30;
    let mut findings: Vec<String> = Vec::with_capacity(4);

    let known_title = metadata
        .title
        .as_deref()
        .is_some_and(|title| !title.trim().is_empty());
    if known_title || lower.contains("<title>") || lower.contains("og:title") {
        score += 30;
        findings.push("title ✓".into());
    } else if lower.contains("<title") {
        // Unclosed or attribute-laden title fragment: partial credit.
        score += 20;
        findings.push("title ✓ (fragment)".into());
    } else {
        findings.push("title ✗".into());
    }

    let known_description = metadata
        .description
        .as_deref()
        .filter(|description| !description.trim().is_empty());
    let description_marker =
        lower.contains("og:description") || lower.contains(r#"name="description""#);
    if known_description.is_some() || description_marker {
        score += 25;
        let mut note = String::from("description ✓");
        if let Some(description) = known_description {
            // Length bonus only applies to a description we actually
            // captured, not to a marker sighting.
            if IDEAL_DESCRIPTION_RANGE.contains(&description.chars().count()) {
                score += 10;
                note.push_str(" (ideal length)");
            }
        }
        findings.push(note);
    } else {
        findings.push("description ✗".into());
    }

    let has_author = lower.contains(r#"name="author""#) || lower.contains("article:author");
    findings.push(if has_author {
        score += 10;
        "author ✓".into()
    } else {
        "author ✗".into()
    });

    let has_date = lower.contains("article:published_time")
        || lower.contains("article:modified_time")
        || lower.contains("datetime=");
    findings.push(if has_date {
        score += 10;
        "date ✓".into()
    } else {
        "date ✗".into()
    });

    let details = findings.join(", ");
    let recommendation = if score >= 70 {
        "Keep the title and meta description current"
    } else {
        "Add a descriptive title, meta description, author and publish date"
    };

    Signal::new(ID, LABEL, score, THRESHOLDS, details, recommendation)
}
