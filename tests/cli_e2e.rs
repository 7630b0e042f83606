use std::process::{Command, Output};
use tempfile::TempDir;

fn run_toolbox(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    Command::new(env!("CARGO_BIN_EXE_rn-toolbox"))
        .args(args)
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run rn-toolbox")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_global_help() {
    for args in [&["--help"][..], &["-h"][..], &[][..]] {
        let output = run_toolbox(args);
        assert_eq!(output.status.code(), Some(0));

        let out = stdout(&output);
        assert!(out.contains("USAGE"));
        assert!(out.contains("COMMANDS"));
        assert!(out.contains("dotenv"));
        assert!(out.contains("icons"));
        assert!(out.contains("splash"));
    }
}

#[test]
fn test_version() {
    for flag in ["--version", "-V"] {
        let output = run_toolbox(&[flag]);
        assert_eq!(output.status.code(), Some(0));

        let out = stdout(&output);
        let line = out.trim();
        assert!(
            line.starts_with(&format!("rn-toolbox/{} rust-", env!("CARGO_PKG_VERSION"))),
            "{line}"
        );
        assert!(line.ends_with(&format!(
            "{}-{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        )));
    }
}

#[test]
fn test_version_wins_over_command() {
    let output = run_toolbox(&["dotenv", "--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("rn-toolbox/"));
}

#[test]
fn test_unknown_command() {
    let output = run_toolbox(&["unknown-command"]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Unknown command: unknown-command"));
    assert!(err.contains("Available commands: dotenv, icons, splash"));
    assert!(err.contains("Run 'rn-toolbox --help' for usage information."));
}

#[test]
fn test_command_help() {
    let output = run_toolbox(&["icons", "--help"]);
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Generate app icons"));
    assert!(out.contains("$ rn-toolbox icons [file] [FLAGS]"));
    assert!(out.contains("FILE [default: ./assets/icon.png]"));
    assert!(out.contains("-a, --appName=<value>"));
    assert!(out.contains("-v, --verbose"));
    assert!(out.contains("rn-toolbox icons ./assets/my-icon.png --appName MyApp"));
}

#[test]
fn test_command_help_without_required_argument() {
    let output = run_toolbox(&["dotenv", "-h"]);
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("ENVIRONMENTNAME"));
    assert!(out.contains("$ rn-toolbox dotenv <environmentName> [FLAGS]"));
}

#[test]
fn test_help_wins_over_invalid_arguments() {
    for args in [
        &["icons", "--bogus", "-h"][..],
        &["splash", "-h", "--appName"][..],
        &["dotenv", "--unknown", "--help"][..],
    ] {
        let output = run_toolbox(args);
        assert_eq!(output.status.code(), Some(0), "{args:?}: {}", stderr(&output));
        assert!(stdout(&output).contains("USAGE"), "{args:?}");
    }
}

#[test]
fn test_global_help_lists_command_summaries() {
    let output = run_toolbox(&["--help"]);
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines.contains(&"  dotenv     Manage .env files for react-native-dotenv"));
    assert!(lines.contains(&"  icons      Generate app icons"));
    assert!(lines.contains(&"  splash     Generate app splashscreen for react-native-splash-screen"));
}

#[test]
fn test_unknown_flag() {
    let output = run_toolbox(&["splash", "--bogus"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--bogus"));
}

#[test]
fn test_string_flag_without_value() {
    let output = run_toolbox(&["icons", "--appName"]);
    assert_eq!(output.status.code(), Some(2));
}
