use std::path::PathBuf;
use std::process::{Command, Output};

fn get_presence_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_presence"))
}

fn run(args: &[&str]) -> Output {
    Command::new(get_presence_binary())
        .args(args)
        .env_remove("PRESENCE_LOG")
        .env_remove("PRESENCE_FORMAT")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_status_lookup() {
    let output = run(&["status", "404"]);
    assert!(
        output.status.success(),
        "Failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "404 Not Found\n");
}

#[test]
fn test_status_long_format() {
    let output = run(&["--format", "long", "status", "500"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "500 Internal Server Error (5xx Server Error)\n"
    );
}

#[test]
fn test_format_from_environment() {
    let output = Command::new(get_presence_binary())
        .args(["status", "418"])
        .env("PRESENCE_FORMAT", "long")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "418 I'm a teapot (4xx Client Error)\n");
}

#[test]
fn test_flag_overrides_environment() {
    let output = Command::new(get_presence_binary())
        .args(["--format", "plain", "status", "418"])
        .env("PRESENCE_FORMAT", "long")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "418 I'm a teapot\n");
}

#[test]
fn test_unknown_status_fails() {
    let output = run(&["status", "1000"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Status code 1000 is unknown"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_list_by_class() {
    let output = run(&["list", "--class", "redirection"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "300 Multiple Choices");
    assert_eq!(lines[8], "308 Permanent Redirect");
}

#[test]
fn test_classify_unregistered_code() {
    let output = run(&["classify", "299"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2xx Successful\n");

    let output = run(&["classify", "42"]);
    assert!(!output.status.success());
}

#[test]
fn test_completion_script() {
    let output = run(&["completion", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("presence"));
}
