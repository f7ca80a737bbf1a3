//! Heading hierarchy scoring
//!
//! Walks every `<h1>`–`<h6>` in document order and penalizes missing
//! or duplicated H1 elements and skipped levels (e.g. an H2 followed
//! directly by an H4).

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::types::{Signal, Thresholds};

const ID: &str = "heading-structure";
const LABEL: &str = "Heading Structure";
const THRESHOLDS: Thresholds = Thresholds::new(80, 50);

pub fn check(html: &str) -> Signal {
    let document = Html::parse_document(html);
    let levels = heading_levels(&document);
    let h1_count = levels.iter().filter(|&&level| level == 1).count();

    let mut score: i32 = 100;
    let mut violations: Vec<String> = Vec::new();

    if h1_count == 0 {
        score -= 40;
        violations.push("No H1 found".to_string());
    } else if h1_count > 1 {
        score -= 30;
        violations.push(format!("{h1_count} H1 elements found, expected exactly one"));
    }

    for pair in levels.windows(2) {
        if pair[1] > pair[0] + 1 {
            score -= 15;
            violations.push(format!(
                "Heading level skips from <h{}> to <h{}>",
                pair[0], pair[1]
            ));
        }
    }

    let details = if violations.is_empty() {
        format!("{h1_count} H1 element(s), logical structure")
    } else {
        violations.join("; ")
    };

    let recommendation = if violations.is_empty() {
        "Keep the existing heading outline"
    } else {
        "Use exactly one H1 and keep heading levels sequential"
    };

    Signal::new(ID, LABEL, score, THRESHOLDS, details, recommendation)
}

/// Heading levels in document order.
fn heading_levels(document: &Html) -> Vec<u8> {
    static HEADINGS: Lazy<Selector> =
        Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("invalid heading selector"));

    document
        .select(&HEADINGS)
        .filter_map(|element| element.value().name().strip_prefix('h')?.parse().ok())
        .collect()
}
