//! CLI integration tests for web-encoder
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

const MESSAGE: &str = "Test message.";
const MESSAGE_TOKEN: &str = "VGVzdCBtZXNzYWdlLg";
const REPEATED: &str = "aaaaaaaaaaaaaaaaaaaaaaaaa";
const REPEATED_PLAIN_TOKEN: &str = "YWFhYWFhYWFhYWFhYWFhYWFhYWFhYWFhYQ";
const REPEATED_COMPRESSED_TOKEN: &str = ".eJxLTMQBAHs-CXo";

fn web_encoder() -> Command {
    web_encoder_in(&scratch_dir("home"))
}

/// Runs the binary with `home` as its home, config home and working
/// directory, so no config file outside the test is picked up.
fn web_encoder_in(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("web-encoder").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("WEB_ENCODER_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(home);
    cmd
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "web-encoder-{}-{}",
        name,
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "web-encoder-{}-{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    web_encoder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("URL-safe tokens"));
}

#[test]
fn test_version() {
    web_encoder()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("web-encoder"));
}

#[test]
fn test_missing_command() {
    web_encoder().assert().failure();
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_data() {
    web_encoder()
        .args(["e", MESSAGE])
        .assert()
        .success()
        .stdout(format!("{MESSAGE_TOKEN}\n"));
}

#[test]
fn test_decode_data() {
    web_encoder()
        .args(["d", MESSAGE_TOKEN])
        .assert()
        .success()
        .stdout(format!("{MESSAGE}\n"));
}

#[test]
fn test_encode_with_compression() {
    web_encoder()
        .args(["e", REPEATED])
        .assert()
        .success()
        .stdout(format!("{REPEATED_COMPRESSED_TOKEN}\n"));
}

#[test]
fn test_encode_without_compression() {
    web_encoder()
        .args(["e", REPEATED, "--no-compress"])
        .assert()
        .success()
        .stdout(format!("{REPEATED_PLAIN_TOKEN}\n"));
}

#[test]
fn test_decode_compressed() {
    web_encoder()
        .args(["d", REPEATED_COMPRESSED_TOKEN])
        .assert()
        .success()
        .stdout(format!("{REPEATED}\n"));
}

#[test]
fn test_decode_ignores_no_compress() {
    web_encoder()
        .args(["d", REPEATED_COMPRESSED_TOKEN, "--no-compress"])
        .assert()
        .success()
        .stdout(format!("{REPEATED}\n"));
}

#[test]
fn test_long_command_aliases() {
    web_encoder()
        .args(["encode", MESSAGE])
        .assert()
        .success()
        .stdout(format!("{MESSAGE_TOKEN}\n"));

    web_encoder()
        .args(["decode", MESSAGE_TOKEN])
        .assert()
        .success()
        .stdout(format!("{MESSAGE}\n"));
}

#[test]
fn test_encode_from_stdin() {
    web_encoder()
        .arg("e")
        .write_stdin(format!("{MESSAGE}\n"))
        .assert()
        .success()
        .stdout(format!("{MESSAGE_TOKEN}\n"));
}

#[test]
fn test_decode_from_stdin_dash() {
    web_encoder()
        .args(["d", "-"])
        .write_stdin(REPEATED_COMPRESSED_TOKEN)
        .assert()
        .success()
        .stdout(format!("{REPEATED}\n"));
}

#[test]
fn test_roundtrip_unicode() {
    let text = "não, 日本語, 🦀 ".repeat(4);
    let encoded = web_encoder()
        .args(["e", text.as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let token = String::from_utf8(encoded).unwrap();

    web_encoder()
        .args(["d", token.trim_end()])
        .assert()
        .success()
        .stdout(format!("{text}\n"));
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_encoding_flag() {
    // "é" in Latin-1 is the single byte 0xE9.
    web_encoder()
        .args(["--encoding", "latin-1", "e", "é"])
        .assert()
        .success()
        .stdout("6Q\n");
}

#[test]
fn test_errors_flag_on_decode() {
    // 0xFF is never valid UTF-8.
    web_encoder()
        .args(["d", "_w", "--errors", "ignore"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_config_file() {
    let path = write_config("latin1", "[codec]\nencoding = \"latin-1\"\ncompress = false\n");
    web_encoder()
        .args(["--config", path.to_str().unwrap(), "e", REPEATED])
        .assert()
        .success()
        .stdout(format!("{REPEATED_PLAIN_TOKEN}\n"));

    web_encoder()
        .args(["--config", path.to_str().unwrap(), "e", REPEATED, "--compress"])
        .assert()
        .success()
        .stdout(format!("{REPEATED_COMPRESSED_TOKEN}\n"));
    std::fs::remove_file(path).ok();
}

#[test]
#[cfg(target_os = "linux")]
fn test_user_config_is_loaded() {
    let home = scratch_dir("user-config");
    let config_dir = home.join(".config").join("web-encoder");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[codec]\ncompress = false\n").unwrap();

    web_encoder_in(&home)
        .args(["e", REPEATED])
        .assert()
        .success()
        .stdout(format!("{REPEATED_PLAIN_TOKEN}\n"));

    // The default home used by every other test has no config file.
    web_encoder()
        .args(["e", REPEATED])
        .assert()
        .success()
        .stdout(format!("{REPEATED_COMPRESSED_TOKEN}\n"));
    std::fs::remove_dir_all(home).ok();
}

#[test]
fn test_local_config_is_loaded() {
    let home = scratch_dir("local-config");
    std::fs::write(home.join("web-encoder.toml"), "[codec]\nencoding = \"latin-1\"\n").unwrap();

    web_encoder_in(&home)
        .args(["e", "é"])
        .assert()
        .success()
        .stdout("6Q\n");
    std::fs::remove_dir_all(home).ok();
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_malformed_compressed_token() {
    web_encoder()
        .args(["d", ".jdkfmcvalleifna"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: cannot decompress"));
}

#[test]
fn test_decode_bad_length() {
    web_encoder()
        .args(["d", "VGVzd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("malformed token"));
}

#[test]
fn test_decode_rejects_surrounding_whitespace() {
    for token in [" VGVzdCBtZXNzYWdlLg", "VGVzdCBtZXNzYWdlLg\t"] {
        web_encoder()
            .args(["d", token])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("malformed token"));
    }
}

#[test]
fn test_decode_from_stdin_strips_newline() {
    web_encoder()
        .arg("d")
        .write_stdin(format!("{MESSAGE_TOKEN}\n"))
        .assert()
        .success()
        .stdout(format!("{MESSAGE}\n"));
}

#[test]
fn test_decode_invalid_utf8_payload() {
    web_encoder()
        .args(["d", "_w"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid utf-8 byte sequence"));
}

#[test]
fn test_unknown_error_policy() {
    web_encoder()
        .args(["--errors", "OK", "e", MESSAGE])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_level_out_of_range() {
    web_encoder()
        .args(["--level", "11", "e", MESSAGE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_unencodable_character() {
    web_encoder()
        .args(["--encoding", "ascii", "e", "naïve"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot encode"));
}

#[test]
fn test_missing_config_file() {
    web_encoder()
        .args(["--config", "/nonexistent/web-encoder.toml", "e", MESSAGE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load config"));
}
