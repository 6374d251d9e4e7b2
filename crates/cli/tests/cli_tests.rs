//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("densito")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(" HEADINGS DENSITY ANALYSIS"))
        .stdout(predicate::str::contains(" BODY DENSITY ANALYSIS"))
        .stdout(predicate::str::contains("SEO DENSITY REPORT FOR: ../../tests/fixtures/article.html"));
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("repeated_headings.html")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world               | 2      | 100.00"))
        .stdout(predicate::str::contains("SEO DENSITY REPORT FOR").not());
}

#[test]
fn test_cli_prompts_for_input() {
    cmd()
        .write_stdin(format!("{}\n", get_fixture_path("repeated_headings.html")))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter URL to analyze: "))
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("repeated_headings.html")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["headings"]["2-word"][0]["phrase"], "hello world");
    assert_eq!(value["headings"]["2-word"][0]["count"], 2);
    assert_eq!(value["images"]["1-word"].as_array().unwrap().len(), 0);
}

#[test]
fn test_cli_top_limits_rows() {
    let output = cmd()
        .args(["-f", "json", "--top", "2", &get_fixture_path("article.html")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["body"]["1-word"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.txt");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains(" LINKS DENSITY ANALYSIS"));
}

#[test]
fn test_cli_no_images_section_empty() {
    cmd()
        .arg(get_fixture_path("no_images.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(" IMAGES DENSITY ANALYSIS"));
}

#[test]
fn test_cli_unicode_content() {
    cmd()
        .arg(get_fixture_path("unicode_heavy.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("größte straßenbahn"));
}

#[test]
fn test_cli_invalid_url() {
    cmd()
        .arg("definitely-not-a-file-or-url")
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Error: Invalid URL"))
        .stdout(predicate::str::contains("DENSITY ANALYSIS").not());
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Densito"))
        .stderr(predicate::str::contains("Timing Summary"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("densito"));
}

#[tokio::test]
async fn test_cli_http_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    cmd()
        .arg(format!("{}/missing", server.uri()))
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Error: HTTP status 404 Not Found"))
        .stdout(predicate::str::contains("DENSITY ANALYSIS").not());
}

#[tokio::test]
async fn test_cli_http_success() {
    let server = MockServer::start().await;
    let html = std::fs::read_to_string(get_fixture_path("repeated_headings.html")).unwrap();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    cmd()
        .arg(&url)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("SEO DENSITY REPORT FOR: {}", url)))
        .stdout(predicate::str::contains("hello world"));
}
