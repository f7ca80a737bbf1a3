//! Analyzer entry points
//!
//! `Analyzer` owns one HTTP client plus the two collaborators (page
//! fetch, completions) and exposes the two operations: the heuristic
//! `analyze` pass and the optional generative `enrich` pass. Default
//! construction wires in the HTTP-backed collaborators; embedders can
//! substitute their own through `with_providers`.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use url::Url;

use crate::aggregate::overall_score;
use crate::checks::run_content_checks;
use crate::error::AnalyzeError;
use crate::extract::{MAX_HTML_CHARS, extract_text, truncate_chars};
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::insight::{self, CompletionProvider, provider::HttpCompletionProvider};
use crate::probe::{DEFAULT_PROBE_TIMEOUT, probe_auxiliary_files};
use crate::reputation::reputation_bonus;
use crate::types::{
    AggregateReport, AnalyzeResponse, EnrichRequest, EnrichResponse, FetchedPage, ReportMetadata,
    Signal,
};
use crate::url_utils::{normalize_origin, parse_request_url};

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";

/// Analyzer configuration. `Default` gives working settings for
/// everything except the completion API key, which has no default.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    pub probe_timeout: Duration,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub completion_endpoint: String,
    pub completion_model: String,
    pub api_key: Option<String>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: format!("agentlens/{}", env!("CARGO_PKG_VERSION")),
            completion_endpoint: DEFAULT_COMPLETION_ENDPOINT.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl AnalyzerOptions {
    pub fn builder() -> AnalyzerOptionsBuilder {
        AnalyzerOptionsBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct AnalyzerOptionsBuilder {
    options: AnalyzerOptions,
}

impl AnalyzerOptionsBuilder {
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.options.probe_timeout = timeout;
        self
    }

    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.options.fetch_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    pub fn completion_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.options.completion_endpoint = endpoint.into();
        self
    }

    pub fn completion_model(mut self, model: impl Into<String>) -> Self {
        self.options.completion_model = model.into();
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.options.api_key = Some(api_key.into());
        self
    }

    pub fn build(self) -> AnalyzerOptions {
        self.options
    }
}

/// The analysis handle: one HTTP client, options, and the two
/// collaborator implementations.
pub struct Analyzer<F = HttpPageFetcher, C = HttpCompletionProvider> {
    options: AnalyzerOptions,
    http: reqwest::Client,
    fetcher: F,
    completions: C,
}

impl Analyzer {
    /// Analyzer with the default HTTP-backed collaborators.
    pub fn new(options: AnalyzerOptions) -> Result<Self> {
        let http = build_http_client(&options)?;
        let fetcher = HttpPageFetcher::new(http.clone());
        let completions = HttpCompletionProvider::new(
            http.clone(),
            options.completion_endpoint.clone(),
            options.completion_model.clone(),
            options.api_key.clone(),
        );

        Ok(Self {
            options,
            http,
            fetcher,
            completions,
        })
    }
}

impl<F, C> Analyzer<F, C>
where
    F: PageFetcher,
    C: CompletionProvider,
{
    /// Analyzer with custom collaborators; the internal client still
    /// serves the auxiliary-file probes.
    pub fn with_providers(options: AnalyzerOptions, fetcher: F, completions: C) -> Result<Self> {
        let http = build_http_client(&options)?;
        Ok(Self {
            options,
            http,
            fetcher,
            completions,
        })
    }

    /// The heuristic pass: fetch the page, score it, probe the origin's
    /// auxiliary files, aggregate.
    pub async fn analyze(&self, raw_url: &str) -> Result<AnalyzeResponse, AnalyzeError> {
        let url = parse_request_url(raw_url)?;
        info!("analyzing {url}");

        let page = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(AnalyzeError::upstream)?;

        let report = self.run_pipeline(&url, &page).await;
        let html_content = truncate_chars(&page.html, MAX_HTML_CHARS).to_string();
        Ok(AnalyzeResponse::from_report(report, html_content))
    }

    /// The optional generative pass. Generation failures degrade to
    /// the fallback bundle; only a malformed URL is an error.
    pub async fn enrich(&self, request: &EnrichRequest) -> Result<EnrichResponse, AnalyzeError> {
        parse_request_url(&request.url)?;
        info!("enriching analysis of {}", request.url);

        let bundle = insight::enrich(&self.completions, request).await;
        Ok(EnrichResponse::from_bundle(bundle))
    }

    async fn run_pipeline(&self, url: &Url, page: &FetchedPage) -> AggregateReport {
        let text = extract_text(&page.html);
        let origin = normalize_origin(url.as_str());

        let (probes, content) = tokio::join!(
            probe_auxiliary_files(&self.http, &origin, self.options.probe_timeout),
            async { run_content_checks(&page.html, &text, &page.metadata) },
        );

        // Auxiliary-file signals first, then content signals; the
        // order is part of the response contract.
        let mut signals: Vec<Signal> = vec![
            probes.robots.into_signal(),
            probes.sitemap.into_signal(),
            probes.llms.into_signal(),
        ];
        signals.extend(content);

        let bonus = url.host_str().map(reputation_bonus).unwrap_or(0);

        AggregateReport {
            overall_score: overall_score(&signals, bonus),
            signals,
            source_url: url.to_string(),
            captured_metadata: ReportMetadata {
                title: page.metadata.title.clone().unwrap_or_default(),
                description: page.metadata.description.clone().unwrap_or_default(),
                analyzed_at: Utc::now().to_rfc3339(),
            },
        }
    }
}

fn build_http_client(options: &AnalyzerOptions) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(options.fetch_timeout)
        .user_agent(options.user_agent.clone())
        .build()
        .context("could not build the HTTP client")
}
