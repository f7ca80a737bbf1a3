//! robots.txt probing and directive extraction
//!
//! Besides its own signal, the robots probe feeds the sitemap walk:
//! every `Sitemap:` directive becomes a high-priority candidate URL.

use tracing::warn;

use super::ProbeClient;
use crate::types::{ProbeFinding, Signal, Thresholds};

const ID: &str = "robots-txt";
const LABEL: &str = "Robots.txt";
const THRESHOLDS: Thresholds = Thresholds::new(80, 40);

/// Robots signal plus the sitemap URLs the file declared.
pub struct RobotsProbe {
    pub finding: ProbeFinding,
    pub sitemap_urls: Vec<String>,
}

pub async fn probe(client: &ProbeClient, origin: &str) -> RobotsProbe {
    let url = format!("{origin}/robots.txt");
    match client.fetch_body(&url).await {
        Ok(body) => evaluate(&url, &body),
        Err(error) => {
            warn!("robots.txt probe degraded: {error:#}");
            RobotsProbe {
                finding: ProbeFinding::new(
                    Signal::new(
                        ID,
                        LABEL,
                        0,
                        THRESHOLDS,
                        String::from("No robots.txt found at the site origin"),
                        "Publish a robots.txt with user-agent rules and a Sitemap: directive",
                    ),
                    None,
                ),
                sitemap_urls: Vec::new(),
            }
        }
    }
}

/// Scores a fetched robots.txt body.
fn evaluate(url: &str, body: &str) -> RobotsProbe {
    let mut has_user_agent = false;
    let mut sitemap_urls: Vec<String> = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Sitemap values are URLs with their own colons, so split on
        // the first one only.
        let Some((directive, value)) = line.split_once(':') else {
            continue;
        };
        match directive.trim().to_lowercase().as_str() {
            "user-agent" => has_user_agent = true,
            "sitemap" => {
                let value = value.trim();
                if !value.is_empty() {
                    sitemap_urls.push(value.to_string());
                }
            }
            _ => {}
        }
    }

    let mut score = 0;
    if has_user_agent {
        score += 60;
    }
    if !sitemap_urls.is_empty() {
        score += 40;
    }

    let (details, recommendation) = match (has_user_agent, sitemap_urls.len()) {
        (true, 0) => (
            String::from("robots.txt found with user-agent rules but no sitemap reference"),
            "Add a Sitemap: directive to robots.txt",
        ),
        (true, n) => (
            format!("robots.txt found with user-agent rules and {n} sitemap reference(s)"),
            "Keep robots.txt current as the site evolves",
        ),
        (false, 0) => (
            String::from("robots.txt found but contains no recognized directives"),
            "Declare user-agent rules and a Sitemap: directive in robots.txt",
        ),
        (false, n) => (
            format!("robots.txt lists {n} sitemap reference(s) but no user-agent rules"),
            "Declare user-agent rules in robots.txt",
        ),
    };

    RobotsProbe {
        finding: ProbeFinding::new(
            Signal::new(ID, LABEL, score, THRESHOLDS, details, recommendation),
            Some(url.to_string()),
        ),
        sitemap_urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    #[test]
    fn test_full_robots_scores_100() {
        let body = "User-agent: *\nDisallow: /private\nSitemap: https://example.com/sitemap.xml\n";
        let probe = evaluate("https://example.com/robots.txt", body);
        assert_eq!(probe.finding.signal.score, 100);
        assert_eq!(probe.finding.signal.status, Status::Pass);
        assert_eq!(
            probe.sitemap_urls,
            vec!["https://example.com/sitemap.xml".to_string()]
        );
    }

    #[test]
    fn test_directive_matching_is_case_insensitive() {
        let body = "USER-AGENT: GPTBot\nSITEMAP: https://example.com/s.xml\n";
        let probe = evaluate("https://example.com/robots.txt", body);
        assert_eq!(probe.finding.signal.score, 100);
        assert_eq!(probe.sitemap_urls.len(), 1);
    }

    #[test]
    fn test_user_agent_without_sitemap_scores_60() {
        let probe = evaluate("https://example.com/robots.txt", "User-agent: *\nAllow: /\n");
        assert_eq!(probe.finding.signal.score, 60);
        assert_eq!(probe.finding.signal.status, Status::Warning);
        assert!(probe.finding.signal.details.contains("no sitemap reference"));
    }

    #[test]
    fn test_sitemap_without_user_agent_scores_40() {
        let probe = evaluate(
            "https://example.com/robots.txt",
            "Sitemap: https://example.com/a.xml\nSitemap: https://example.com/b.xml\n",
        );
        assert_eq!(probe.finding.signal.score, 40);
        assert_eq!(
            probe.sitemap_urls,
            vec![
                "https://example.com/a.xml".to_string(),
                "https://example.com/b.xml".to_string(),
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_are_ignored() {
        let body = "# Sitemap: https://example.com/fake.xml\n\n# User-agent: *\n";
        let probe = evaluate("https://example.com/robots.txt", body);
        assert_eq!(probe.finding.signal.score, 0);
        assert!(probe.sitemap_urls.is_empty());
        assert!(
            probe
                .finding
                .signal
                .details
                .contains("no recognized directives")
        );
    }

    #[test]
    fn test_fetched_file_records_matched_url() {
        let probe = evaluate("https://example.com/robots.txt", "User-agent: *\n");
        assert_eq!(
            probe.finding.matched_url.as_deref(),
            Some("https://example.com/robots.txt")
        );
    }
}
