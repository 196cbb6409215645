//! CLI behavior tests for `readtime estimate`

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_path, readtime_cmd, write_config};

#[test]
fn estimate_file_prints_report() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .arg("estimate")
        .arg(fixture_path("article.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading time:  1 minute"))
        .stdout(predicate::str::contains("Code blocks:   2 blocks"));
}

#[test]
fn estimate_reads_stdin_when_no_file() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .arg("estimate")
        .write_stdin("word ".repeat(201))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 minutes"))
        .stdout(predicate::str::contains("Total words:   201"));
}

#[test]
fn estimate_reads_stdin_for_dash() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "-"])
        .write_stdin("just a few words")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total words:   4"));
}

#[test]
fn empty_input_fails_with_message() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .arg("estimate")
        .write_stdin("   \n  ")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please paste some content to estimate reading time.",
        ));
}

#[test]
fn images_flag_is_lenient() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "--json", "--images", "4 photos"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"imageCount\": 4"));

    readtime_cmd(&home)
        .args(["estimate", "--json", "--images", "none"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"imageCount\": 0"));
}

#[test]
fn negative_images_clamp_to_zero() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "--json", "-i", "-5"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"imageCount\": 0"));
}

#[test]
fn missing_file_fails() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "/definitely/not/here.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn config_rates_are_used() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[rates]\nregular_words_per_minute = 100\n");
    readtime_cmd(&home)
        .args(["estimate", "--json"])
        .write_stdin("word ".repeat(150))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalMinutes\": 2"));
}

#[test]
fn flags_override_config_rates() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[rates]\nregular_words_per_minute = 100\n");
    readtime_cmd(&home)
        .args(["estimate", "--json", "--regular-wpm", "300"])
        .write_stdin("word ".repeat(150))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalMinutes\": 1"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[rates]\ncode_words_per_minute = 0\n");
    readtime_cmd(&home)
        .arg("estimate")
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn zero_wpm_flag_is_rejected_by_parser() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "--code-wpm", "0"])
        .write_stdin("hello")
        .assert()
        .failure();
}

#[test]
fn verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "--json", "-v"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("Estimated reading time"));
}

#[test]
fn log_env_filter_enables_trace_output() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "--json"])
        .env("READTIME_LOG", "readtime=trace")
        .write_stdin("intro\n```\nlet a = 1;\n```\noutro\n```\nb\n```")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("Extracted fenced block").count(2));
}

#[test]
fn errors_are_prefixed_with_cause_chain() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["estimate", "/nonexistent/post.md"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "Error: Failed to read input file: /nonexistent/post.md: ",
        ));
}

#[test]
fn byte_order_mark_only_input_is_empty() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .arg("estimate")
        .write_stdin("\u{FEFF}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please paste some content to estimate reading time.",
        ));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    readtime_cmd(&home)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readtime"));
}
