//! agentlens-core: AI-readiness scoring for web pages
//!
//! Fetches a page, runs independent heuristic checks over its HTML and
//! extracted text, probes the origin's auxiliary files (robots.txt,
//! sitemap, llms.txt), and aggregates everything into one 0-100
//! report. A separate optional pass asks a generative model for
//! qualitative insights and degrades to a canonical fallback bundle
//! when generation fails.
//!
//! ```no_run
//! use agentlens_core::{Analyzer, AnalyzerOptions};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let analyzer = Analyzer::new(AnalyzerOptions::default())?;
//! let report = analyzer.analyze("https://example.com").await?;
//! println!("{} scores {}/100", report.url, report.overall_score);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod analyze;
pub mod checks;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod insight;
pub mod probe;
pub mod reputation;
pub mod types;
pub mod url_utils;

pub use analyze::{Analyzer, AnalyzerOptions, AnalyzerOptionsBuilder};
pub use error::AnalyzeError;
pub use extract::extract_text;
pub use fetch::{HttpPageFetcher, PageFetcher};
pub use insight::{CompletionProvider, provider::HttpCompletionProvider};
pub use types::{
    AggregateReport, AnalyzeResponse, EnrichRequest, EnrichResponse, FetchedPage, Insight,
    InsightBundle, PageMetadata, ReportMetadata, Signal, Status, Thresholds,
};
