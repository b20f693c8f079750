//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("seoscope").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd().arg(get_fixture_path("known_page.html")).assert().success();
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("known_page.html")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("seo_score"));
}

#[test]
fn test_cli_report_values() {
    let output = cmd()
        .args(["--url", "https://example.com/coffee", &get_fixture_path("known_page.html")])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["word_count"], 18);
    assert_eq!(report["keywords"][0]["word"], "coffee");
    assert_eq!(report["seo_score"], 80);
    // no --evaluate: the report carries no evaluation at all
    assert!(report.get("content_evaluation").is_none());
}

#[test]
fn test_cli_url_override_suppresses_https_issue() {
    cmd()
        .args(["--url", "https://example.com/garden", &get_fixture_path("wordy_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not using HTTPS").not());
}

#[test]
fn test_cli_file_path_url_flags_https_issue() {
    cmd()
        .arg(get_fixture_path("wordy_page.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Not using HTTPS"));
}

#[test]
fn test_cli_pretty_output() {
    cmd()
        .args(["--pretty", &get_fixture_path("known_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("  \"word_count\": 18"));
}

#[test]
fn test_cli_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.json");

    cmd()
        .args([
            get_fixture_path("known_page.html"),
            "-o".to_string(),
            out.display().to_string(),
        ])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["word_count"], 18);
}

#[test]
fn test_cli_missing_file_fails() {
    cmd()
        .arg("/nonexistent/page.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_verbose_summary_on_stderr() {
    cmd()
        .args(["-v", &get_fixture_path("problem_page.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Analysis Summary"));
}
