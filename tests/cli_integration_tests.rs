//! Integration tests for the `simpleargs` binary
//!
//! These run the real binary, so they cover the async entry point and piped
//! stdin capture end to end.

use assert_cmd::Command;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::process::{self, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn simpleargs() -> Command {
    let mut cmd = Command::cargo_bin("simpleargs").unwrap();
    cmd.env_remove("SIMPLEARGS_LOG");
    cmd
}

fn jsonl(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_inspect_no_arguments() {
    simpleargs()
        .args(["inspect", "--no-stdin", "--color", "never"])
        .assert()
        .success()
        .stdout("No arguments\n");
}

#[test]
fn test_inspect_human_output() {
    simpleargs()
        .args([
            "inspect", "--no-stdin", "--color", "never", "--", "-lvk", "x", "--name", "value", "--",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments: 5\n"))
        .stdout(predicate::str::contains("Single flags:\n  -k\n  -l\n  -v\n"))
        .stdout(predicate::str::contains("Long flags:\n  --name = value\n"))
        .stdout(predicate::str::contains("Other:\n    2 x\n"))
        .stdout(predicate::str::contains("Separators: 5\n"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_inspect_forced_color() {
    simpleargs()
        .args(["inspect", "--no-stdin", "--color", "always", "--", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[32m--help\x1b[0m"));
}

#[test]
fn test_inspect_piped_input() {
    let output = simpleargs()
        .args(["inspect", "--format", "jsonl", "--", "-o", "out.txt"])
        .write_stdin("first line\nsecond line\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let records = jsonl(&output.stdout);
    let status = records.last().unwrap();
    assert_eq!(status["type"], "status");
    assert_eq!(status["piped_input"], "first line\nsecond line");
    assert_eq!(status["argument_count"], 2);
    assert_eq!(records[0]["name"], "o");
    assert_eq!(records[0]["value"], "out.txt");
}

#[test]
fn test_inspect_closed_empty_stdin_is_present() {
    let output = simpleargs()
        .args(["inspect", "--format", "jsonl"])
        .write_stdin("")
        .output()
        .unwrap();

    let records = jsonl(&output.stdout);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["piped_input"], "");
    assert_eq!(records[0]["no_arguments"], false);
}

#[test]
fn test_inspect_no_stdin_ignores_piped_data() {
    let output = simpleargs()
        .args(["inspect", "--no-stdin", "--format", "jsonl"])
        .write_stdin("ignored\n")
        .output()
        .unwrap();

    let records = jsonl(&output.stdout);
    assert_eq!(records[0]["piped_input"], Value::Null);
    assert_eq!(records[0]["no_arguments"], true);
}

#[test]
fn test_inspect_piped_invalid_utf8_is_still_input() {
    let output = simpleargs()
        .args(["inspect", "--format", "jsonl"])
        .write_stdin(&b"caf\xe9\n"[..])
        .output()
        .unwrap();

    assert!(output.status.success());
    let records = jsonl(&output.stdout);
    assert_eq!(records[0]["piped_input"], "caf\u{fffd}");
    assert_eq!(records[0]["no_arguments"], false);
}

#[test]
fn test_stdin_timeout_exits_while_pipe_stays_open() {
    let mut child = process::Command::cargo_bin("simpleargs")
        .unwrap()
        .args(["inspect", "--format", "jsonl", "--stdin-timeout-ms", "200"])
        .env_remove("SIMPLEARGS_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Keep the write end open for the whole wait
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"hi\n").unwrap();
    stdin.flush().unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break Some(status);
        }
        if Instant::now() >= deadline {
            break None;
        }
        thread::sleep(Duration::from_millis(20));
    };

    let Some(status) = status else {
        child.kill().unwrap();
        panic!("simpleargs kept running while stdin stayed open");
    };
    drop(stdin);

    assert!(status.success());
    let mut stdout = Vec::new();
    child.stdout.take().unwrap().read_to_end(&mut stdout).unwrap();
    let records = jsonl(&stdout);
    assert_eq!(records[0]["type"], "status");
    assert_eq!(records[0]["piped_input"], Value::Null);
    assert_eq!(records[0]["no_arguments"], true);
}

#[test]
fn test_inspect_verbose_jsonl_lists_tokens() {
    let output = simpleargs()
        .args([
            "inspect", "--no-stdin", "--format", "jsonl", "--verbose", "--", "-3", "a",
        ])
        .output()
        .unwrap();

    let records = jsonl(&output.stdout);
    assert_eq!(records[0]["type"], "token");
    assert_eq!(records[0]["class"], "dropped");
    assert_eq!(records[1]["class"], "other");
}

#[test]
fn test_inspect_keep_malformed() {
    let output = simpleargs()
        .args([
            "inspect", "--no-stdin", "--format", "jsonl", "--keep-malformed", "--", "-3",
        ])
        .output()
        .unwrap();

    let records = jsonl(&output.stdout);
    assert_eq!(records[0]["type"], "other");
    assert_eq!(records[0]["text"], "-3");
}

#[test]
fn test_inspect_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("simpleargs.toml"),
        r#"
[parser]
malformed_short_flags = "other"

[output]
format = "jsonl"
"#,
    )
    .unwrap();

    let output = simpleargs()
        .current_dir(temp_dir.path())
        .args(["inspect", "--no-stdin", "--", "-!"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let records = jsonl(&output.stdout);
    assert_eq!(records[0]["type"], "other");
    assert_eq!(records[0]["text"], "-!");
}

#[test]
fn test_inspect_cli_flags_override_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"jsonl\"\n").unwrap();

    simpleargs()
        .args(["inspect", "--no-stdin", "--color", "never", "--format", "human", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("No arguments\n");
}

#[test]
fn test_inspect_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "[output]\nformat = \"xml\"\n").unwrap();

    simpleargs()
        .args(["inspect", "--no-stdin", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: invalid config file"));
}

#[test]
fn test_inspect_missing_config_fails() {
    simpleargs()
        .args(["inspect", "--no-stdin", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

#[test]
fn test_showcase_plain() {
    simpleargs()
        .args(["showcase", "--section", "combinations", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("STYLE COMBINATIONS\n"))
        .stdout(predicate::str::contains("Bold Red - style.bold.red\n"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn test_showcase_colored() {
    simpleargs()
        .args(["showcase", "--section", "bright", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\x1b[91mBright Red text\x1b[0m - style.brightRed\n",
        ));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    simpleargs()
        .env("SIMPLEARGS_LOG", "debug")
        .args(["inspect", "--no-stdin", "--format", "jsonl", "--", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("classified command line"))
        .stdout(predicate::str::contains("classified command line").not());
}
