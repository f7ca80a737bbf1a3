//! Boundary errors for the analysis entry points
//!
//! Only two failure modes are ever caller-visible: a request URL that
//! does not validate, and a page fetch that fails upstream. Probe and
//! enrichment failures are recovered internally and never reach here.

use std::fmt;

use thiserror::Error;

/// Error returned by the analysis and enrichment entry points.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The request URL was missing or did not parse.
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The page-fetch collaborator failed or returned empty content.
    #[error("failed to fetch page content")]
    UpstreamFetch {
        #[source]
        source: anyhow::Error,
    },
}

impl AnalyzeError {
    pub fn invalid_url(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn upstream(source: impl Into<anyhow::Error>) -> Self {
        Self::UpstreamFetch {
            source: source.into(),
        }
    }

    /// True for request-shape problems the caller can fix.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }

    /// True when the upstream page fetch failed.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamFetch { .. })
    }

    /// HTTP-equivalent status for embedding callers.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidUrl { .. } => 400,
            Self::UpstreamFetch { .. } => 502,
        }
    }
}
