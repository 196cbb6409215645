//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A readtime command with `$HOME` pointed at `home` and colors disabled
pub fn readtime_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_readtime"));
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .env_remove("READTIME_LOG");
    cmd
}

/// Run readtime with optional stdin and capture (stdout, stderr, exit code)
pub fn run_readtime(home: &TempDir, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_readtime"))
        .args(args)
        .env("HOME", home.path())
        .env("NO_COLOR", "1") // Disable colors for consistent snapshots
        .env_remove("FORCE_COLOR")
        .env_remove("READTIME_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute readtime");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for readtime");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write a config file under `home/.config/readtime/config.toml`
pub fn write_config(home: &TempDir, contents: &str) -> PathBuf {
    let dir = home.path().join(".config").join("readtime");
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}
