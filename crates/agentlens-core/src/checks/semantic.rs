//! Semantic-tag coverage scoring
//!
//! Counts distinct canonical semantic elements plus ARIA and
//! framework markers. Tag detection requires `<tag>` or `<tag ` so
//! `<head>` never counts for `<header>` and `<navigation>` never
//! counts for `<nav>`.

use crate::types::{Signal, Thresholds};

const ID: &str = "semantic-html";
const LABEL: &str = "Semantic HTML";
const THRESHOLDS: Thresholds = Thresholds::new(80, 40);

const SEMANTIC_TAGS: &[&str] = &[
    "article", "nav", "main", "section", "header", "footer", "aside",
];

const FRAMEWORK_MARKERS: &[&str] = &["data-react", "data-v-", "ng-version", "__next", "svelte"];

pub fn check(html: &str) -> Signal {
    let lower = html.to_lowercase();

    let found: Vec<&str> = SEMANTIC_TAGS
        .iter()
        .copied()
        .filter(|tag| {
            lower.contains(&format!("<{tag}>")) || lower.contains(&format!("<{tag} "))
        })
        .collect();

    let has_aria = lower.contains("role=") || lower.contains("aria-");
    let has_framework = FRAMEWORK_MARKERS
        .iter()
        .any(|marker| lower.contains(marker));

    let mut score = (found.len() as f64 / 5.0 * 60.0).round() as i32;
    if has_aria {
        score += 20;
    }
    if has_framework {
        score += 20;
    }
    score = score.min(100);

    let tag_summary = if found.is_empty() {
        format!("0/{} semantic tags", SEMANTIC_TAGS.len())
    } else {
        format!(
            "{}/{} semantic tags ({})",
            found.len(),
            SEMANTIC_TAGS.len(),
            found.join(", ")
        )
    };
    let details = format!(
        "{tag_summary}, ARIA {}, framework markers {}",
        if has_aria { "✓" } else { "✗" },
        if has_framework { "✓" } else { "✗" },
    );
    let recommendation = if score >= 80 {
        "Semantic structure is well established"
    } else {
        "Wrap page regions in semantic elements such as <main>, <article> and <nav>"
    };

    Signal::new(ID, LABEL, score, THRESHOLDS, details, recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    #[test]
    fn test_plain_divs_score_zero() {
        let signal = check("<div><span>hi</span></div>");
        assert_eq!(signal.score, 0);
        assert_eq!(signal.status, Status::Fail);
        assert!(signal.details.contains("0/7 semantic tags"));
    }

    #[test]
    fn test_three_tags_without_aria() {
        let signal = check("<article><main><nav></nav></main></article>");
        assert_eq!(signal.score, 36);
        assert_eq!(signal.status, Status::Fail);
        assert!(signal.details.contains("article, nav, main"));
    }

    #[test]
    fn test_aria_marker_adds_20() {
        let html = r#"<article><main><nav><section role="region"></section></nav></main></article>"#;
        let signal = check(html);
        // round(4/5*60) + 20
        assert_eq!(signal.score, 68);
        assert_eq!(signal.status, Status::Warning);
    }

    #[test]
    fn test_full_coverage_clamps_at_100() {
        let html = r#"<header ng-version="17"><nav aria-label="n"></nav></header>
            <main><article><section></section><aside></aside></article></main>
            <footer></footer>"#;
        let signal = check(html);
        assert_eq!(signal.score, 100);
        assert_eq!(signal.status, Status::Pass);
    }

    #[test]
    fn test_lookalike_tags_do_not_count() {
        let signal = check("<head><navigation><mainframe>");
        assert_eq!(signal.score, 0);
    }

    #[test]
    fn test_framework_marker_detected() {
        let signal = check(r#"<div data-v-4f2a></div>"#);
        assert_eq!(signal.score, 20);
    }
}
