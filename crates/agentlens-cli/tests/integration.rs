//! End-to-end checks against the built binary.
//!
//! Only paths that fail before any network request, plus the
//! help/version surfaces, so the suite runs offline.

use std::process::Command;

fn agentlens() -> Command {
    Command::new(env!("CARGO_BIN_EXE_agentlens"))
}

#[test]
fn help_prints_usage_and_exits_zero() {
    let output = agentlens().arg("--help").output().expect("binary runs");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE:"));
    assert!(stdout.contains("--enrich"));
    assert!(stdout.contains("--probe-timeout"));
    assert!(stdout.contains("Developed by Pon Datalab"));
}

#[test]
fn version_prints_the_package_version() {
    let output = agentlens().arg("--version").output().expect("binary runs");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_url_fails_with_usage_hint() {
    let output = agentlens().output().expect("binary runs");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required <URL>"));
}

#[test]
fn unknown_flags_are_rejected() {
    let output = agentlens()
        .args(["--frobnicate", "https://example.com"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown option"));
}

#[test]
fn unsupported_scheme_exits_with_code_1() {
    let output = agentlens()
        .arg("ftp://example.com/file")
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported scheme"));
}

#[test]
fn invalid_probe_timeout_is_reported() {
    let output = agentlens()
        .args(["-t", "soon", "https://example.com"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid probe timeout"));
}
