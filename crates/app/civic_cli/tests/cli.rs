use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn civic() -> Command {
    Command::cargo_bin("civic").expect("civic binary")
}

#[test]
fn version_prints_package_version() {
    civic()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn structure_reads_file_and_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reply.txt");
    fs::write(
        &path,
        "**Eligibility**\nMust be 18+\n- valid ID\n- proof of address\n",
    )
    .unwrap();

    let output = civic().arg("structure").arg(&path).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"], "Must be 18+");
    assert_eq!(json["sections"][0]["title"], "Eligibility");
    assert_eq!(json["sections"][0]["content"][2]["text"], "- proof of address");
}

#[test]
fn structure_reads_stdin() {
    civic()
        .arg("structure")
        .write_stdin("Documents required:\n- Aadhaar card\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Documents required\""))
        .stdout(predicate::str::contains("- Aadhaar card"));
}

#[test]
fn structure_of_empty_input_is_sentinel() {
    civic()
        .arg("structure")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No response generated."));
}

#[test]
fn structure_of_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    civic()
        .arg("structure")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure();
}

#[test]
fn translate_chat_requires_language() {
    civic()
        .args(["chat", "--persona", "translate", "--server", "http://127.0.0.1:9"])
        .write_stdin("hello\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--language is required"));
}

#[test]
fn unknown_persona_is_rejected() {
    civic()
        .args(["chat", "--persona", "weather"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown persona"));
}

#[test]
fn chat_reports_unreachable_server_in_transcript() {
    civic()
        .args(["chat", "--persona", "lawbot", "--server", "http://127.0.0.1:9"])
        .write_stdin("What is RTI?\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! I'm LawBot"))
        .stdout(predicate::str::contains("❌ Error connecting to LawBot server."));
}
