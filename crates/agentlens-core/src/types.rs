//! Common types shared across the scoring and enrichment pipeline

use serde::{Deserialize, Serialize};

/// Tri-state outcome of a single signal, derived from its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Signal cleared its pass threshold
    Pass,

    /// Signal is below pass but above its warning threshold
    Warning,

    /// Signal is below both thresholds
    Fail,
}

/// Per-signal score thresholds. `status_of` is the only place a status
/// is ever derived, so a status never disagrees with its score.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub pass: u8,
    pub warning: u8,
}

impl Thresholds {
    pub const fn new(pass: u8, warning: u8) -> Self {
        Self { pass, warning }
    }

    pub fn status_of(self, score: u8) -> Status {
        if score >= self.pass {
            Status::Pass
        } else if score >= self.warning {
            Status::Warning
        } else {
            Status::Fail
        }
    }
}

/// One labeled sub-score produced by an analyzer or probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Stable short identifier, e.g. `readability`
    pub id: String,

    /// Human-readable name
    pub label: String,

    /// Score in 0..=100
    pub score: u8,

    /// Derived from `score` and the signal's own thresholds
    pub status: Status,

    /// Explanation of the score (always non-empty)
    pub details: String,

    /// Actionable guidance
    pub recommendation: String,
}

impl Signal {
    /// Build a signal, clamping the raw score into 0..=100 and deriving
    /// the status from it. All signal construction goes through here.
    pub fn new(
        id: &str,
        label: &str,
        score: i32,
        thresholds: Thresholds,
        details: String,
        recommendation: &str,
    ) -> Self {
        let score = score.clamp(0, 100) as u8;
        Self {
            id: id.to_string(),
            label: label.to_string(),
            score,
            status: thresholds.status_of(score),
            details,
            recommendation: recommendation.to_string(),
        }
    }
}

/// A probe's signal plus the candidate URL that satisfied it, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeFinding {
    pub signal: Signal,

    /// Which candidate filename/URL answered the probe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_url: Option<String>,
}

impl ProbeFinding {
    pub fn new(signal: Signal, matched_url: Option<String>) -> Self {
        Self {
            signal,
            matched_url,
        }
    }

    pub fn into_signal(self) -> Signal {
        self.signal
    }
}

/// Title/description captured by the page-fetch collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw HTML and metadata returned by the page-fetch collaborator.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub html: String,
    pub metadata: PageMetadata,
}

/// Metadata echoed back with a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub title: String,
    pub description: String,

    /// RFC 3339 UTC timestamp of the analysis
    pub analyzed_at: String,
}

/// The final heuristic artifact: one overall score plus the ordered
/// signal sequence that explains it. Auxiliary-file signals come first,
/// then content signals; the order is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub overall_score: u8,
    pub signals: Vec<Signal>,
    pub source_url: String,
    pub captured_metadata: ReportMetadata,
}

/// Wire shape of the heuristic analysis entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub url: String,
    pub overall_score: u8,
    pub checks: Vec<Signal>,

    /// Raw HTML, truncated to the capture limit
    pub html_content: String,

    pub metadata: ReportMetadata,
}

impl AnalyzeResponse {
    pub fn from_report(report: AggregateReport, html_content: String) -> Self {
        Self {
            success: true,
            url: report.source_url,
            overall_score: report.overall_score,
            checks: report.signals,
            html_content,
            metadata: report.captured_metadata,
        }
    }
}

/// Wire shape of the enrichment entry point's request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichRequest {
    pub url: String,
    pub html_content: String,

    /// Signals from a prior analysis, used as generation context
    #[serde(default)]
    pub current_checks: Vec<Signal>,
}

/// One qualitative insight produced by the generative pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub category: String,
    pub score: u8,
    pub analysis: String,

    /// Exactly 5 entries, enforced at the generation boundary
    pub action_items: Vec<String>,
}

/// The full enrichment payload: insights plus an overall narrative and
/// a short priority list. Always structurally valid; when generation
/// fails the canonical fallback bundle is substituted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    pub insights: Vec<Insight>,

    #[serde(rename = "overallAIReadiness")]
    pub overall_ai_readiness: String,

    pub top_priorities: Vec<String>,
}

/// Wire shape of the enrichment entry point. `success` is true even
/// when the fallback bundle was substituted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichResponse {
    pub success: bool,
    pub insights: Vec<Insight>,

    #[serde(rename = "overallAIReadiness")]
    pub overall_ai_readiness: String,

    pub top_priorities: Vec<String>,
}

impl EnrichResponse {
    pub fn from_bundle(bundle: InsightBundle) -> Self {
        Self {
            success: true,
            insights: bundle.insights,
            overall_ai_readiness: bundle.overall_ai_readiness,
            top_priorities: bundle.top_priorities,
        }
    }
}
