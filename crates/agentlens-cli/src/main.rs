//! agentlens: AI-readiness analysis from the terminal
//!
//! One-shot driver around `agentlens-core`: analyze a URL, render the
//! report as sectioned text or JSON, optionally request generative
//! enrichment, optionally save the output to a file derived from the
//! URL.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use agentlens_core::{
    AnalyzeResponse, Analyzer, AnalyzerOptions, EnrichRequest, EnrichResponse, Status,
};
use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;
use url::Url;

const APP_NAME: &str = "agentlens";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

#[derive(Debug, PartialEq)]
struct CliOptions {
    url: String,
    json_output: bool,
    enrich: bool,
    probe_timeout_ms: Option<u64>,
    /// `None` = no save; `Some(None)` = derive the filename;
    /// `Some(Some(path))` = explicit target (file or directory).
    save_target: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    match parse_arguments(&args)? {
        CliCommand::Help => {
            print_help();
            Ok(())
        }
        CliCommand::Version => {
            print_version();
            Ok(())
        }
        CliCommand::Run(options) => run(options).await,
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    let mut url: Option<String> = None;
    let mut json_output = false;
    let mut enrich = false;
    let mut probe_timeout_ms: Option<u64> = None;
    let mut save_target: Option<Option<PathBuf>> = None;

    let mut index = 1;
    while index < args.len() {
        let arg = &args[index];
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-v" | "--version" => return Ok(CliCommand::Version),
            "-j" | "--json" => json_output = true,
            "-e" | "--enrich" => enrich = true,
            "-s" | "--save" => {
                // A following bare token is the save path only once
                // the URL positional is already bound; before that it
                // must stay available as the URL.
                let next_is_path = url.is_some()
                    && args
                        .get(index + 1)
                        .is_some_and(|next| !next.starts_with('-'));
                if next_is_path {
                    index += 1;
                    save_target = Some(Some(PathBuf::from(args[index].clone())));
                } else {
                    save_target = Some(None);
                }
            }
            "-t" | "--probe-timeout" => {
                index += 1;
                let value = args
                    .get(index)
                    .with_context(|| format!("{arg} requires a value in milliseconds"))?;
                probe_timeout_ms = Some(parse_timeout(value)?);
            }
            other => {
                if let Some(value) = other
                    .strip_prefix("--probe-timeout=")
                    .or_else(|| other.strip_prefix("-t="))
                {
                    probe_timeout_ms = Some(parse_timeout(value)?);
                } else if let Some(value) = other
                    .strip_prefix("--save=")
                    .or_else(|| other.strip_prefix("-s="))
                {
                    if value.is_empty() {
                        bail!("--save= requires a path");
                    }
                    save_target = Some(Some(PathBuf::from(value)));
                } else if other.starts_with('-') {
                    bail!("unknown option: {other}\nRun `{APP_NAME} --help` for usage.");
                } else if url.is_some() {
                    bail!("unexpected extra argument: {other}");
                } else {
                    url = Some(other.to_string());
                }
            }
        }
        index += 1;
    }

    let url = url.with_context(|| {
        format!("missing required <URL> argument\nRun `{APP_NAME} --help` for usage.")
    })?;

    Ok(CliCommand::Run(CliOptions {
        url,
        json_output,
        enrich,
        probe_timeout_ms,
        save_target,
    }))
}

fn parse_timeout(value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .with_context(|| format!("invalid probe timeout `{value}` (expected milliseconds)"))
}

async fn run(options: CliOptions) -> Result<()> {
    let mut builder = AnalyzerOptions::builder();
    if let Some(ms) = options.probe_timeout_ms {
        builder = builder.probe_timeout(Duration::from_millis(ms));
    }
    if let Ok(endpoint) = env::var("AGENTLENS_COMPLETION_URL") {
        builder = builder.completion_endpoint(endpoint);
    }
    if let Ok(model) = env::var("AGENTLENS_MODEL") {
        builder = builder.completion_model(model);
    }
    if let Ok(key) = env::var("AGENTLENS_API_KEY") {
        builder = builder.api_key(key);
    }

    let analyzer = Analyzer::new(builder.build())?;
    let analysis = analyzer.analyze(&options.url).await?;

    let enrichment = if options.enrich {
        let request = EnrichRequest {
            url: analysis.url.clone(),
            html_content: analysis.html_content.clone(),
            current_checks: analysis.checks.clone(),
        };
        Some(analyzer.enrich(&request).await?)
    } else {
        None
    };

    let rendered = if options.json_output {
        render_json(&analysis, enrichment.as_ref())?
    } else {
        render_report(&analysis, enrichment.as_ref())
    };

    println!("{rendered}");

    if let Some(target) = &options.save_target {
        let path = build_output_path(target.as_deref(), &analysis.url, options.json_output);
        std::fs::write(&path, &rendered)
            .with_context(|| format!("could not write {}", path.display()))?;
        eprintln!("Saved report to {}", path.display());
    }

    Ok(())
}

fn render_json(analysis: &AnalyzeResponse, enrichment: Option<&EnrichResponse>) -> Result<String> {
    let value = match enrichment {
        Some(enriched) => serde_json::json!({
            "analysis": analysis,
            "enrichment": enriched,
        }),
        None => serde_json::to_value(analysis).context("could not serialize the report")?,
    };
    serde_json::to_string_pretty(&value).context("could not serialize the report")
}

fn render_report(analysis: &AnalyzeResponse, enrichment: Option<&EnrichResponse>) -> String {
    let mut out = String::new();

    out.push_str(&format!("🔍 AI-Readiness Report for {}\n", analysis.url));
    out.push_str(&format!(
        "   Overall score: {}/100\n",
        analysis.overall_score
    ));
    if !analysis.metadata.title.is_empty() {
        out.push_str(&format!("   Title:         {}\n", analysis.metadata.title));
    }
    if !analysis.metadata.description.is_empty() {
        out.push_str(&format!(
            "   Description:   {}\n",
            analysis.metadata.description
        ));
    }
    out.push_str(&format!(
        "   Analyzed at:   {}\n",
        analysis.metadata.analyzed_at
    ));

    out.push_str("\n📋 Checks\n");
    for check in &analysis.checks {
        out.push_str(&format!(
            "   {} {:<18} {:>3}/100  {}\n",
            status_icon(check.status),
            check.label,
            check.score,
            check.details
        ));
        if check.status != Status::Pass {
            out.push_str(&format!("      ↳ {}\n", check.recommendation));
        }
    }

    if let Some(enriched) = enrichment {
        out.push_str("\n🤖 AI Insights\n");
        out.push_str(&format!("   {}\n", enriched.overall_ai_readiness));
        for insight in &enriched.insights {
            out.push_str(&format!(
                "\n   {}: {}/100\n   {}\n",
                insight.category, insight.score, insight.analysis
            ));
            for item in &insight.action_items {
                out.push_str(&format!("     • {item}\n"));
            }
        }
        if !enriched.top_priorities.is_empty() {
            out.push_str("\n🎯 Top Priorities\n");
            for (position, priority) in enriched.top_priorities.iter().enumerate() {
                out.push_str(&format!("   {}. {priority}\n", position + 1));
            }
        }
    }

    out
}

fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Pass => "✅",
        Status::Warning => "⚠️",
        Status::Fail => "❌",
    }
}

fn build_output_path(target: Option<&Path>, url: &str, json_output: bool) -> PathBuf {
    let extension = if json_output { "json" } else { "txt" };
    match target {
        Some(path) if path.is_dir() => path.join(derive_output_filename(url, extension)),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(derive_output_filename(url, extension)),
    }
}

/// `https://example.com/docs/guide` becomes `example.com__docs_guide.txt`.
fn derive_output_filename(url: &str, extension: &str) -> String {
    let (host, path) = match Url::parse(url) {
        Ok(parsed) => (
            parsed.host_str().unwrap_or("page").to_string(),
            parsed.path().trim_matches('/').to_string(),
        ),
        Err(_) => (url.to_string(), String::new()),
    };

    if path.is_empty() {
        format!("{}.{extension}", sanitize_for_filename(&host))
    } else {
        format!(
            "{}__{}.{extension}",
            sanitize_for_filename(&host),
            sanitize_for_filename(&path)
        )
    }
}

fn sanitize_for_filename(input: &str) -> String {
    let mut sanitized: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    sanitized.truncate(100);
    if sanitized.is_empty() {
        sanitized.push_str("page");
    }
    sanitized
}

fn print_help() {
    println!(
        "{APP_NAME} {VERSION}
Analyze how ready a web page is for AI consumption.

USAGE:
    {APP_NAME} [OPTIONS] <URL>

ARGS:
    <URL>    Page to analyze (scheme defaults to https://)

OPTIONS:
    -j, --json                 Emit the raw JSON response
    -e, --enrich               Request generative insights after the heuristic report
    -t, --probe-timeout <MS>   Timeout per auxiliary-file probe (default 3000)
    -s, --save [PATH]          Save the rendered output (PATH may be a directory)
    -v, --version              Print version information
    -h, --help                 Print this help

ENVIRONMENT:
    AGENTLENS_API_KEY          API key for the completion endpoint (enables --enrich)
    AGENTLENS_COMPLETION_URL   OpenAI-compatible chat-completions endpoint
    AGENTLENS_MODEL            Completion model name

Developed by Pon Datalab"
    );
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}
