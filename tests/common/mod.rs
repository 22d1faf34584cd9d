// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_app-profile-override"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs `apply --url <url>` with the given extra args.
pub fn run_apply_url(url: &str, extra_args: &[&str]) -> (String, String, i32) {
    let mut args = vec!["--url", url];
    args.extend_from_slice(extra_args);
    run_apply_args("", &args)
}

pub fn run_apply_with_config(url: &str, config_content: &str) -> (String, String, i32) {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp config");
    tmpfile
        .write_all(config_content.as_bytes())
        .expect("failed to write config");
    let config_path = tmpfile.path().to_str().unwrap().to_string();
    run_apply_url(url, &["--config", &config_path])
}

/// Runs the binary's `apply` subcommand with the given stdin and extra args.
/// Returns (stdout, stderr, exit_code).
pub fn run_apply_args(stdin_input: &str, extra_args: &[&str]) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.arg("apply");
    for arg in extra_args {
        cmd.arg(arg);
    }
    let output = cmd
        .env_remove("APP_PROFILE_LOG")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Parses the JSON report printed by `apply`.
pub fn parse_report(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}

pub const STANDALONE_FLAGS: [&str; 6] = [
    "bb.feature.embedded-in-iframe",
    "bb.feature.hide-help",
    "bb.feature.hide-quick-start",
    "bb.feature.hide-release-remind",
    "bb.feature.disallow-share-worksheet",
    "bb.feature.disallow-navigate-to-console",
];
