//! End-to-end tests for the trimly binary that do not need FFmpeg installed

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MISSING_BINARY: &str = "trimly-test-no-such-binary";

/// Command running in `dir` with no inherited Trimly settings
fn trimly(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trimly").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TRIMLY_CONFIG")
        .env_remove("TRIMLY_TEMP_DIRECTORY")
        .env_remove("TRIMLY_SILENCE_THRESHOLD_DB")
        .env_remove("TRIMLY_FFMPEG_PATH");
    cmd
}

#[test]
fn test_config_json_shows_defaults() {
    let dir = TempDir::new().unwrap();
    trimly(&dir)
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"default_silence_threshold_db\": -45.0"))
        .stdout(predicate::str::contains("\"processed_file_prefix\": \"trimmed_\""));

    // the temp directory is created when configuration is first built
    assert!(dir.path().join("storage").join("tmp").is_dir());
}

#[test]
fn test_config_toml_reflects_environment() {
    let dir = TempDir::new().unwrap();
    trimly(&dir)
        .env("TRIMLY_SILENCE_THRESHOLD_DB", "-30")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[trimly]"))
        .stdout(predicate::str::contains("default_silence_threshold_db = -30.0"));
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("trimly.toml"),
        "[trimly]\nprocessed_file_prefix = \"clean_\"\n",
    )
    .unwrap();

    trimly(&dir)
        .args(["config", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"processed_file_prefix\": \"clean_\""));
}

#[test]
fn test_invalid_environment_fails() {
    let dir = TempDir::new().unwrap();
    trimly(&dir)
        .env("TRIMLY_SILENCE_THRESHOLD_DB", "5")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed:"));
}

#[test]
fn test_info_on_missing_file() {
    let dir = TempDir::new().unwrap();
    trimly(&dir)
        .args(["info", "absent.mp3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("File not found: absent.mp3"));
}

#[test]
fn test_info_json_on_supported_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("voice.mp3"), b"ID3").unwrap();

    trimly(&dir)
        .args(["info", "voice.mp3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"voice.mp3\""))
        .stdout(predicate::str::contains("\"is_supported\": true"));
}

#[test]
fn test_trim_reports_missing_tool() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("voice.mp3"), b"ID3").unwrap();

    trimly(&dir)
        .args(["trim", "voice.mp3", "--ffmpeg", MISSING_BINARY])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "FFmpeg is not installed or not found in system PATH.",
        ));
}

#[test]
fn test_trim_json_failure_outcome() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("voice.mp3"), b"ID3").unwrap();

    trimly(&dir)
        .args(["trim", "voice.mp3", "--json", "--ffmpeg", MISSING_BINARY])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"output_path\": null"))
        .stdout(predicate::str::contains("\"error_kind\": \"tool_unavailable\""));
}

#[test]
fn test_check_reports_missing_tool() {
    let dir = TempDir::new().unwrap();
    trimly(&dir)
        .args(["check", "--ffmpeg", MISSING_BINARY])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FFmpeg is not installed"));
}

#[test]
fn test_clean_empties_temp_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    std::fs::write(out.join("a.wav"), b"1234").unwrap();
    std::fs::write(out.join("b.wav"), b"5678").unwrap();

    trimly(&dir)
        .args(["clean", "--temp-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 file(s), 8 B"));

    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}
