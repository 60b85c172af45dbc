use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse_json(stdout: &[u8]) -> Value {
    let s = String::from_utf8_lossy(stdout);
    serde_json::from_str::<Value>(s.trim()).expect("valid json result")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn docpick() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("docpick"))
}

#[test]
fn get_returns_best_match_md_file() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/intro.md"), "# Intro\nHello Sarvam");

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("get")
        .arg("hello sarvam")
        .arg("--area")
        .arg("docs");

    let assert = cmd.assert().success();
    let result = parse_json(&assert.get_output().stdout);

    let path = result["retrieved_file_path"].as_str().unwrap();
    assert!(path.ends_with("intro.md"));
    assert!(result["file_content"]
        .as_str()
        .unwrap()
        .contains("Hello Sarvam"));
    assert!(result["error_message"].is_null());
}

#[test]
fn get_prefers_compound_core_term_match() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("api-ref/text-to-speech.md"),
        "# Text to Speech\nVoices and pricing.",
    );
    write_file(
        &temp.path().join("api-ref/transliterate.md"),
        "# Transliterate\nScript conversion.",
    );

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("get")
        .arg("text to speech pricing");

    let assert = cmd.assert().success();
    let result = parse_json(&assert.get_output().stdout);

    assert_eq!(
        result["retrieved_file_path"].as_str().unwrap(),
        "api-ref/text-to-speech.md"
    );
}

#[test]
fn get_exact_filename_wins_over_content() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("docs/translate.md"),
        "# A different topic entirely",
    );
    write_file(
        &temp.path().join("docs/guide.md"),
        "translate translate translate translate",
    );

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("get")
        .arg("translate.md")
        .arg("--area")
        .arg("docs");

    let assert = cmd.assert().success();
    let result = parse_json(&assert.get_output().stdout);

    assert_eq!(
        result["retrieved_file_path"].as_str().unwrap(),
        "docs/translate.md"
    );
}

#[test]
fn get_reports_empty_corpus_without_error() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("docs")).unwrap();

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("get")
        .arg("anything")
        .arg("--area")
        .arg("docs");

    let assert = cmd.assert().success();
    let result = parse_json(&assert.get_output().stdout);

    assert!(result["retrieved_file_path"].is_null());
    assert!(result["error_message"].is_null());
    let status = result["status_message"].as_str().unwrap();
    assert!(status.contains("No .md files found"));
    assert!(status.contains("docs"));
}

#[test]
fn get_blocks_directory_traversal_in_area() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/intro.md"), "# Intro");

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("get")
        .arg("intro")
        .arg("--area")
        .arg("../");

    let assert = cmd
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?i)invalid doc_area").unwrap());
    let result = parse_json(&assert.get_output().stdout);
    assert!(result["retrieved_file_path"].is_null());
    assert!(!result["error_message"].is_null());
}

#[test]
fn get_raw_format_prints_content_only() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/intro.md"), "# Intro\nplain body\n");

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("--format")
        .arg("raw")
        .arg("get")
        .arg("intro")
        .arg("--area")
        .arg("docs");

    cmd.assert()
        .success()
        .stdout(predicate::eq("# Intro\nplain body\n\n"));
}

#[test]
fn get_honors_custom_vocabulary() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("docs/release-cadence.md"),
        "# Release Cadence\nShipping schedule.",
    );
    write_file(
        &temp.path().join("docs/cadence.md"),
        "# Cadence\nMusic theory.",
    );
    let vocab = temp.path().join("vocab.json");
    write_file(&vocab, r#"["release cadence"]"#);

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("--vocab")
        .arg(&vocab)
        .arg("get")
        .arg("release cadence details")
        .arg("--area")
        .arg("docs");

    let assert = cmd.assert().success();
    let result = parse_json(&assert.get_output().stdout);
    assert_eq!(
        result["retrieved_file_path"].as_str().unwrap(),
        "docs/release-cadence.md"
    );
}

#[test]
fn list_enumerates_candidates_in_stable_order() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("api-ref/zeta.md"), "z");
    write_file(&temp.path().join("api-ref/alpha.md"), "a");
    write_file(&temp.path().join("api-ref/skip.txt"), "x");

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("--format")
        .arg("raw")
        .arg("list")
        .arg("--area")
        .arg("api-ref");

    cmd.assert()
        .success()
        .stdout(predicate::eq("api-ref/alpha.md\napi-ref/zeta.md\n"));
}

#[test]
fn list_json_format_emits_array() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/one.md"), "1");

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("list")
        .arg("--area")
        .arg("docs");

    let assert = cmd.assert().success();
    let value = parse_json(&assert.get_output().stdout);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0].as_str().unwrap(), "docs/one.md");
}

#[test]
fn tool_dispatch_runs_retriever() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/intro.md"), "# Intro\nHello Sarvam");

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("tool")
        .arg("get_documentation_file")
        .arg("--args")
        .arg(r#"{"search_term": "hello sarvam", "doc_area": "docs"}"#);

    let assert = cmd.assert().success();
    let result = parse_json(&assert.get_output().stdout);
    assert!(result["retrieved_file_path"]
        .as_str()
        .unwrap()
        .ends_with("intro.md"));
}

#[test]
fn tool_dispatch_rejects_unknown_tool() {
    let temp = tempdir().unwrap();

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("tool")
        .arg("not_a_tool")
        .arg("--args")
        .arg("{}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool"));
}

#[test]
fn tool_dispatch_rejects_malformed_args() {
    let temp = tempdir().unwrap();

    let mut cmd = docpick();
    cmd.arg("--root")
        .arg(temp.path())
        .arg("tool")
        .arg("get_documentation_file")
        .arg("--args")
        .arg("not json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn get_is_idempotent_for_unchanged_corpus() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("docs/intro.md"), "# Intro\nHello Sarvam");

    let run = || {
        let mut cmd = docpick();
        cmd.arg("--root")
            .arg(temp.path())
            .arg("get")
            .arg("hello sarvam")
            .arg("--area")
            .arg("docs");
        let assert = cmd.assert().success();
        parse_json(&assert.get_output().stdout)
    };

    assert_eq!(run(), run());
}
