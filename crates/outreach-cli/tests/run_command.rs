use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_outreach_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("outreach")
}

/// Build a `run` command that cannot pick credentials up from the
/// surrounding environment.
fn run_cmd() -> Command {
    let mut cmd = Command::new(get_outreach_bin());
    cmd.arg("run")
        .env_remove("LINKEDIN_USERNAME")
        .env_remove("LINKEDIN_PASSWORD");
    cmd
}

fn write_env_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_run_command_help() {
    let mut cmd = Command::new(get_outreach_bin());
    cmd.arg("run").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("log in, search people"))
        .stdout(predicate::str::contains("--note"))
        .stdout(predicate::str::contains("--env-file"))
        .stdout(predicate::str::contains("--chrome-path"))
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--search-timeout"));
}

#[test]
fn test_run_requires_query() {
    let mut cmd = run_cmd();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("QUERY"));
}

#[test]
fn test_run_fails_without_credentials_before_any_browser_work() {
    let env_file = write_env_file("# empty\n");

    let mut cmd = run_cmd();
    cmd.arg("technical recruiter")
        .arg("--env-file")
        .arg(env_file.path());

    // Credential loading happens first, so this must fail with a
    // configuration error and never get as far as locating Chrome.
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing or empty credential"))
        .stdout(predicate::str::contains("Locating Chrome").not());
}

#[test]
fn test_run_reports_which_credential_is_missing() {
    let env_file = write_env_file("LINKEDIN_USERNAME=alice@example.com\n");

    let mut cmd = run_cmd();
    cmd.arg("technical recruiter")
        .arg("--env-file")
        .arg(env_file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("LINKEDIN_PASSWORD"));
}

#[test]
fn test_run_fails_when_env_file_missing_and_no_env_vars() {
    let mut cmd = run_cmd();
    cmd.arg("technical recruiter")
        .arg("--env-file")
        .arg("/nonexistent/.env");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing or empty credential"));
}

#[test]
fn test_run_optional_flags_parse() {
    // All flags present; still fails fast on the empty credentials file, which
    // proves the flags themselves were accepted.
    let env_file = write_env_file("");

    let mut cmd = run_cmd();
    cmd.arg("technical recruiter")
        .arg("--note")
        .arg("Hi there!")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome")
        .arg("--profile")
        .arg("test-profile")
        .arg("--search-timeout")
        .arg("30")
        .arg("--env-file")
        .arg(env_file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing or empty credential"));
}
