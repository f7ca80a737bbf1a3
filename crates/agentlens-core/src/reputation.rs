//! Domain reputation bonus
//!
//! A small, static boost applied after aggregation. Documentation-style
//! hosts outrank the fixed tier lists; only one rule ever applies.

const DOC_HOST_MARKERS: &[&str] = &["docs.", "developer.", "api."];

const TOP_TIER_DOMAINS: &[&str] = &[
    "github.com",
    "stackoverflow.com",
    "wikipedia.org",
    "mozilla.org",
    "w3.org",
    "google.com",
    "microsoft.com",
    "apple.com",
    "amazon.com",
];

const SECOND_TIER_DOMAINS: &[&str] = &[
    "medium.com",
    "dev.to",
    "hashnode.com",
    "substack.com",
    "notion.site",
    "readthedocs.io",
    "gitbook.io",
    "vercel.app",
    "netlify.app",
];

/// Bonus points for a hostname, leading `www.` ignored.
pub fn reputation_bonus(host: &str) -> u8 {
    let host = host.strip_prefix("www.").unwrap_or(host);

    if DOC_HOST_MARKERS.iter().any(|marker| host.contains(marker)) {
        return 20;
    }
    if matches_any_domain(host, TOP_TIER_DOMAINS) {
        return 18;
    }
    if matches_any_domain(host, SECOND_TIER_DOMAINS) {
        return 12;
    }
    0
}

/// True when `host` equals one of `domains` or is a subdomain of one.
fn matches_any_domain(host: &str, domains: &[&str]) -> bool {
    domains
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_hosts_get_20() {
        assert_eq!(reputation_bonus("docs.example.com"), 20);
        assert_eq!(reputation_bonus("developer.example.com"), 20);
        assert_eq!(reputation_bonus("api.example.com"), 20);
    }

    #[test]
    fn test_doc_marker_outranks_tier_lists() {
        assert_eq!(reputation_bonus("docs.github.com"), 20);
    }

    #[test]
    fn test_top_tier_exact_and_subdomain() {
        assert_eq!(reputation_bonus("github.com"), 18);
        assert_eq!(reputation_bonus("gist.github.com"), 18);
        assert_eq!(reputation_bonus("en.wikipedia.org"), 18);
    }

    #[test]
    fn test_second_tier() {
        assert_eq!(reputation_bonus("medium.com"), 12);
        assert_eq!(reputation_bonus("project.readthedocs.io"), 12);
    }

    #[test]
    fn test_www_prefix_is_stripped() {
        assert_eq!(reputation_bonus("www.github.com"), 18);
        assert_eq!(reputation_bonus("www.example.com"), 0);
    }

    #[test]
    fn test_unknown_hosts_get_nothing() {
        assert_eq!(reputation_bonus("example.com"), 0);
        assert_eq!(reputation_bonus("blog.example.org"), 0);
    }

    #[test]
    fn test_lookalike_suffix_does_not_match() {
        // A domain merely starting with a tier name is not a subdomain
        // of it.
        assert_eq!(reputation_bonus("github.com.evil.example"), 0);
        assert_eq!(reputation_bonus("notgithub.com"), 0);
    }
}
