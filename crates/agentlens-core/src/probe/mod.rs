//! Auxiliary-file probing for robots.txt, sitemaps and llms.txt
//!
//! Each network operation runs under its own timeout. A failed or
//! timed-out probe degrades to that resource's "not found" signal
//! instead of aborting the pipeline, so a page is always scorable.

pub mod llms;
pub mod robots;
pub mod sitemap;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::types::ProbeFinding;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(3000);

/// How a candidate list is walked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeMode {
    /// Fetch every candidate at once; the first valid body in list
    /// order wins regardless of arrival order.
    Parallel,
    /// Fetch one candidate at a time, stopping at the first valid body.
    Sequential,
}

/// Outcome of one candidate walk: the winning `(url, body)` pair if
/// any body validated, plus the fetch errors met along the way.
/// Served-but-rejected bodies are ordinary misses, not failures.
pub struct CandidateWalk {
    pub hit: Option<(String, String)>,
    pub failures: Vec<String>,
}

/// Shared fetch plumbing for the three probers.
pub struct ProbeClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl ProbeClient {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetches one body with the probe timeout covering the whole
    /// operation, response read included.
    pub async fn fetch_body(&self, url: &str) -> Result<String> {
        let body = tokio::time::timeout(self.timeout, async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .with_context(|| format!("request to {url} failed"))?;
            if !response.status().is_success() {
                bail!("{url} returned status {}", response.status());
            }
            response
                .text()
                .await
                .with_context(|| format!("could not read body from {url}"))
        })
        .await
        .with_context(|| format!("probe of {url} timed out"))??;
        Ok(body)
    }

    /// Walks `candidates` in the given mode, stopping at the first
    /// body that satisfies `validate`. List order is the priority
    /// order in both modes. Fetch errors are collected into the walk
    /// so the probe boundary can report why it degraded.
    pub async fn first_valid<F>(
        &self,
        candidates: &[String],
        mode: ProbeMode,
        validate: F,
    ) -> CandidateWalk
    where
        F: Fn(&str) -> bool,
    {
        let mut failures: Vec<String> = Vec::new();
        match mode {
            ProbeMode::Parallel => {
                let fetches = candidates.iter().map(|url| self.fetch_body(url));
                let outcomes = futures::future::join_all(fetches).await;
                for (url, outcome) in candidates.iter().zip(outcomes) {
                    if let Some(body) = Self::accept(url, outcome, &validate, &mut failures) {
                        return CandidateWalk {
                            hit: Some((url.clone(), body)),
                            failures,
                        };
                    }
                }
            }
            ProbeMode::Sequential => {
                for url in candidates {
                    let outcome = self.fetch_body(url).await;
                    if let Some(body) = Self::accept(url, outcome, &validate, &mut failures) {
                        return CandidateWalk {
                            hit: Some((url.clone(), body)),
                            failures,
                        };
                    }
                }
            }
        }
        CandidateWalk {
            hit: None,
            failures,
        }
    }

    fn accept<F>(
        url: &str,
        outcome: Result<String>,
        validate: &F,
        failures: &mut Vec<String>,
    ) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        match outcome {
            Ok(body) if validate(&body) => Some(body),
            Ok(_) => {
                debug!("probe candidate {url} responded but did not validate");
                None
            }
            Err(error) => {
                debug!("probe candidate {url} failed: {error:#}");
                failures.push(format!("{error:#}"));
                None
            }
        }
    }
}

/// Findings for the three auxiliary resources of one origin.
pub struct ProbeOutcomes {
    pub robots: ProbeFinding,
    pub sitemap: ProbeFinding,
    pub llms: ProbeFinding,
}

/// Probes all auxiliary files for `origin`.
///
/// The llms.txt variant family runs in parallel with the robots fetch
/// and the sitemap walk that consumes the robots-declared sitemap
/// URLs. The sitemap walk itself is sequential and short-circuits.
pub async fn probe_auxiliary_files(
    client: &reqwest::Client,
    origin: &str,
    timeout: Duration,
) -> ProbeOutcomes {
    let probe = ProbeClient::new(client.clone(), timeout);

    let ((robots, sitemap), llms) = tokio::join!(
        async {
            let robots = robots::probe(&probe, origin).await;
            let sitemap = sitemap::probe(&probe, origin, &robots.sitemap_urls).await;
            (robots, sitemap)
        },
        llms::probe(&probe, origin),
    );

    ProbeOutcomes {
        robots: robots.finding,
        sitemap,
        llms,
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;
    use std::sync::{Arc, Mutex};

    use httpmock::prelude::*;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata};

    use super::*;
    use crate::types::Status;

    /// Minimal subscriber recording warning-or-worse messages so the
    /// degradation logging can be asserted on.
    #[derive(Default)]
    struct WarningSink {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl tracing::Subscriber for WarningSink {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() <= Level::WARN
        }

        fn new_span(&self, _attributes: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, event: &Event<'_>) {
            struct MessageVisitor<'a>(&'a mut String);

            impl Visit for MessageVisitor<'_> {
                fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                    if field.name() == "message" {
                        let _ = write!(self.0, "{value:?}");
                    }
                }
            }

            let mut message = String::new();
            event.record(&mut MessageVisitor(&mut message));
            self.messages.lock().unwrap().push(message);
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    #[tokio::test]
    async fn test_unserved_origin_degrades_every_probe() {
        let server = MockServer::start();

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            DEFAULT_PROBE_TIMEOUT,
        )
        .await;

        assert_eq!(outcomes.robots.signal.score, 0);
        assert_eq!(outcomes.sitemap.signal.score, 0);
        assert_eq!(outcomes.llms.signal.score, 0);
        assert_eq!(outcomes.robots.signal.status, Status::Fail);
        assert!(outcomes.sitemap.matched_url.is_none());
        assert!(outcomes.llms.matched_url.is_none());
    }

    #[tokio::test]
    async fn test_robots_declared_sitemap_wins_over_conventional_paths() {
        let server = MockServer::start();
        let robots_mock = server.mock(|when, then| {
            when.method(GET).path("/robots.txt");
            then.status(200).body(format!(
                "User-agent: *\nSitemap: {}\n",
                server.url("/custom/map.xml")
            ));
        });
        let declared_mock = server.mock(|when, then| {
            when.method(GET).path("/custom/map.xml");
            then.status(200)
                .body(r#"<?xml version="1.0"?><urlset></urlset>"#);
        });
        let conventional_mock = server.mock(|when, then| {
            when.method(GET).path("/sitemap.xml");
            then.status(200)
                .body(r#"<?xml version="1.0"?><urlset></urlset>"#);
        });

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            DEFAULT_PROBE_TIMEOUT,
        )
        .await;

        robots_mock.assert();
        declared_mock.assert();
        // Short-circuit: the conventional path is never requested.
        conventional_mock.assert_hits(0);

        assert_eq!(outcomes.robots.signal.score, 100);
        assert_eq!(outcomes.sitemap.signal.score, 100);
        assert_eq!(
            outcomes.sitemap.matched_url.as_deref(),
            Some(server.url("/custom/map.xml").as_str())
        );
        assert!(
            outcomes
                .sitemap
                .signal
                .details
                .contains("declared in robots.txt")
        );
    }

    #[tokio::test]
    async fn test_conventional_sitemap_found_without_robots() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/sitemap.xml");
            then.status(200).body("<urlset><url></url></urlset>");
        });

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            DEFAULT_PROBE_TIMEOUT,
        )
        .await;

        assert_eq!(outcomes.robots.signal.score, 0);
        assert_eq!(outcomes.sitemap.signal.score, 100);
        assert!(outcomes.sitemap.signal.details.contains("conventional path"));
    }

    #[tokio::test]
    async fn test_soft_404_llms_page_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/llms.txt");
            then.status(200)
                .body("404 Not Found - the requested file does not exist");
        });

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            DEFAULT_PROBE_TIMEOUT,
        )
        .await;

        assert_eq!(outcomes.llms.signal.score, 0);
        assert_eq!(outcomes.llms.signal.status, Status::Fail);
    }

    #[tokio::test]
    async fn test_llms_full_variant_satisfies_the_probe() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/llms-full.txt");
            then.status(200)
                .body("# Example\n\nLong-form description for agents.");
        });

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            DEFAULT_PROBE_TIMEOUT,
        )
        .await;

        assert_eq!(outcomes.llms.signal.score, 100);
        assert_eq!(outcomes.llms.signal.status, Status::Pass);
        assert_eq!(
            outcomes.llms.matched_url.as_deref(),
            Some(server.url("/llms-full.txt").as_str())
        );
    }

    #[tokio::test]
    async fn test_first_listed_llms_variant_wins_when_several_validate() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/llms.txt");
            then.status(200).body("# Site summary for agents");
        });
        server.mock(|when, then| {
            when.method(GET).path("/llms-full.txt");
            then.status(200).body("# Full site description for agents");
        });

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            DEFAULT_PROBE_TIMEOUT,
        )
        .await;

        assert_eq!(
            outcomes.llms.matched_url.as_deref(),
            Some(server.url("/llms.txt").as_str())
        );
    }

    #[tokio::test]
    async fn test_slow_robots_response_times_out_and_degrades() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/robots.txt");
            then.status(200)
                .body("User-agent: *\n")
                .delay(Duration::from_millis(400));
        });

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            Duration::from_millis(50),
        )
        .await;

        assert_eq!(outcomes.robots.signal.score, 0);
        assert!(outcomes.robots.signal.details.contains("No robots.txt"));
    }

    #[tokio::test]
    async fn test_fetch_body_rejects_error_statuses() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(410).body("gone");
        });

        let probe = ProbeClient::new(reqwest::Client::new(), DEFAULT_PROBE_TIMEOUT);
        let result = probe.fetch_body(&server.url("/gone")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_candidate_walk_counts_fetch_errors_but_not_rejected_bodies() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/a.txt");
            then.status(503).body("upstream error");
        });
        server.mock(|when, then| {
            when.method(GET).path("/b.txt");
            then.status(200).body("served but rejected");
        });

        let probe = ProbeClient::new(reqwest::Client::new(), DEFAULT_PROBE_TIMEOUT);
        let candidates = vec![server.url("/a.txt"), server.url("/b.txt")];
        let walk = probe
            .first_valid(&candidates, ProbeMode::Sequential, |_| false)
            .await;

        assert!(walk.hit.is_none());
        // Only the 503 is a failure; the served body that merely did
        // not validate is a miss.
        assert_eq!(walk.failures.len(), 1);
        assert!(walk.failures[0].contains("503"));
    }

    #[tokio::test]
    async fn test_degraded_probes_warn_with_probe_name_and_cause() {
        let server = MockServer::start();
        // No mocks mounted: every candidate request is answered 404.

        let sink = WarningSink::default();
        let messages = sink.messages.clone();
        let _guard = tracing::subscriber::set_default(sink);

        let outcomes = probe_auxiliary_files(
            &reqwest::Client::new(),
            &server.base_url(),
            DEFAULT_PROBE_TIMEOUT,
        )
        .await;

        assert_eq!(outcomes.robots.signal.score, 0);
        assert_eq!(outcomes.sitemap.signal.score, 0);
        assert_eq!(outcomes.llms.signal.score, 0);

        let warnings = messages.lock().unwrap();
        for name in ["robots.txt", "sitemap", "llms.txt"] {
            assert!(
                warnings
                    .iter()
                    .any(|message| message.contains(&format!("{name} probe degraded"))),
                "no degradation warning for {name} in {warnings:?}"
            );
        }
        assert!(
            warnings.iter().any(|message| message.contains("404")),
            "warnings carry no cause: {warnings:?}"
        );
    }
}
