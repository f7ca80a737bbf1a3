//! Request-URL validation and origin normalization

use url::Url;

use crate::error::AnalyzeError;

/// Validate a caller-supplied URL, defaulting a missing scheme to
/// `https://`. Only `http` and `https` URLs are accepted.
pub fn parse_request_url(raw: &str) -> Result<Url, AnalyzeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::invalid_url(raw, "URL is required"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| AnalyzeError::invalid_url(raw, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AnalyzeError::invalid_url(
            raw,
            format!("unsupported scheme `{}`", url.scheme()),
        ));
    }

    Ok(url)
}

/// Normalize a URL to its origin (scheme + host + optional port).
///
/// Falls back to trimming trailing slashes if the input cannot be parsed.
pub fn normalize_origin(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => parsed
            .origin()
            .ascii_serialization()
            .trim_end_matches('/')
            .to_string(),
        Err(_) => input.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_standard_url() {
        let url = "https://example.com/path/page?query=true";
        assert_eq!(normalize_origin(url), "https://example.com");
    }

    #[test]
    fn keeps_port_information() {
        let url = "https://example.com:8443/path";
        assert_eq!(normalize_origin(url), "https://example.com:8443");
    }

    #[test]
    fn trims_trailing_slash_when_parse_fails() {
        let url = "example.com/";
        assert_eq!(normalize_origin(url), "example.com");
    }

    #[test]
    fn defaults_missing_scheme_to_https() {
        let url = parse_request_url("example.com/docs").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn keeps_explicit_http_scheme() {
        let url = parse_request_url("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn rejects_empty_url() {
        let err = parse_request_url("   ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_unparsable_url() {
        let err = parse_request_url("http://[not-a-host").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn rejects_non_http_schemes() {
        for url in ["ftp://example.com", "file:///etc/passwd", "javascript:alert(1)"] {
            let err = parse_request_url(url).unwrap_err();
            assert!(err.is_validation(), "{url} should be rejected");
        }
    }
}
