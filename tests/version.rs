//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn missing_content_file_fails_before_touching_terminal() {
    let log_dir = std::env::temp_dir().join("folio_test_cli_logs");
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(["--content", "/nonexistent/folio/portfolio.toml"])
        .env("FOLIO_CONFIG", "/nonexistent/folio/config.toml")
        .env("XDG_STATE_HOME", &log_dir)
        .output()
        .expect("Failed to execute binary");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("/nonexistent/folio/portfolio.toml"),
        "unexpected stderr: {}",
        stderr
    );
}
