//! Canonical fallback insight bundle
//!
//! Substituted whenever generation fails. The content is generic on
//! purpose: it has to be useful without any knowledge of the page, and
//! it must satisfy the same shape rules as a generated bundle.

use crate::types::{Insight, InsightBundle};

pub fn fallback_bundle() -> InsightBundle {
    InsightBundle {
        insights: vec![
            insight(
                "Content Quality",
                50,
                "Automated qualitative analysis was unavailable for this page. \
                 Well-structured prose with clear headings and short sentences \
                 is the strongest general predictor of machine readability.",
                [
                    "Use one H1 that states the page topic directly",
                    "Keep sentences under 25 words where possible",
                    "Front-load each section with its key statement",
                    "Break long paragraphs into focused blocks",
                    "Prefer concrete wording over marketing phrasing",
                ],
            ),
            insight(
                "Semantic Structure",
                50,
                "Without a generated assessment, semantic markup remains the \
                 most reliable way to expose page structure to machines.",
                [
                    "Wrap primary content in a <main> element",
                    "Use <article> and <section> for self-contained blocks",
                    "Mark navigation with <nav> and supplementary content with <aside>",
                    "Add descriptive alt text to informative images",
                    "Declare the document language on the <html> element",
                ],
            ),
            insight(
                "Discovery Value",
                50,
                "Auxiliary files tell crawlers and agents what the site offers \
                 before any page is parsed.",
                [
                    "Publish a robots.txt with explicit user-agent rules",
                    "Reference the sitemap from robots.txt",
                    "Keep the sitemap limited to canonical URLs",
                    "Add an llms.txt summarizing the site for AI agents",
                    "Review crawl rules whenever sections move",
                ],
            ),
            insight(
                "Machine Interpretability",
                50,
                "Complete metadata lets machines summarize the page without \
                 guessing.",
                [
                    "Provide a unique title under 60 characters",
                    "Write a meta description between 70 and 160 characters",
                    "Add Open Graph title and description tags",
                    "Declare author and publish date metadata",
                    "Keep metadata synchronized with visible content",
                ],
            ),
        ],
        overall_ai_readiness: String::from(
            "A detailed AI assessment could not be generated for this page. \
             The guidance below covers the practices that most improve how \
             reliably AI systems can read, summarize and cite a page.",
        ),
        top_priorities: vec![
            String::from("Fix heading hierarchy and use a single H1"),
            String::from("Complete title and meta description coverage"),
            String::from("Publish robots.txt, sitemap.xml and llms.txt"),
        ],
    }
}

fn insight(category: &str, score: u8, analysis: &str, action_items: [&str; 5]) -> Insight {
    Insight {
        category: category.to_string(),
        score,
        analysis: analysis.to_string(),
        action_items: action_items.iter().map(|item| item.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_satisfies_the_bundle_shape() {
        let bundle = fallback_bundle();
        assert!(!bundle.insights.is_empty());
        for insight in &bundle.insights {
            assert_eq!(insight.action_items.len(), 5, "{}", insight.category);
            assert!(insight.score <= 100);
            assert!(!insight.analysis.is_empty());
        }
        assert!(!bundle.overall_ai_readiness.is_empty());
        assert_eq!(bundle.top_priorities.len(), 3);
    }

    #[test]
    fn test_fallback_is_stable_across_calls() {
        let a = serde_json::to_value(fallback_bundle()).unwrap();
        let b = serde_json::to_value(fallback_bundle()).unwrap();
        assert_eq!(a, b);
    }
}
