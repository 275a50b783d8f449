//! End-to-end tests for the `adm` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// `adm` isolated from any user configuration file.
fn adm() -> Command {
    let mut cmd = Command::cargo_bin("adm").unwrap();
    cmd.env("ADM_CONFIG", "/nonexistent/adm/config.toml")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn classify_single_turn_as_json() {
    adm()
        .args(["--output", "json", "classify"])
        .arg(fixture("single_turn.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""code": "A1""#))
        .stdout(predicate::str::contains(r#""rawScore": 12"#))
        .stdout(predicate::str::contains(r#""riskTier": "LOW""#));
}

#[test]
fn classify_table_shows_resolved_primary() {
    adm()
        .arg("classify")
        .arg(fixture("rag_enterprise.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A11"))
        .stdout(predicate::str::contains("Enterprise-Integrated"))
        .stdout(predicate::str::contains("RAG, ENT"))
        .stdout(predicate::str::contains("Controls"));
}

#[test]
fn classify_yaml_profile_with_trace() {
    adm()
        .args(["classify", "--trace"])
        .arg(fixture("autonomous_agent.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("A9"))
        .stdout(predicate::str::contains("Decision trace"))
        .stdout(predicate::str::contains("conflict rule agent-autonomy"));
}

#[test]
fn classify_reads_stdin() {
    adm()
        .args(["-o", "yaml", "classify", "-"])
        .write_stdin(
            r#"{"impactContext": "safety_critical", "hitlMandatory": true, "regulatorScope": ["FDA"]}"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("primaryArchetype:\n  code: A12"));
}

#[test]
fn risk_reports_score_and_tier() {
    adm()
        .arg("risk")
        .arg(fixture("safety_critical.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk score: 7"))
        .stdout(predicate::str::contains("HIGH"))
        .stdout(predicate::str::contains("regulator scope HIPAA, GDPR"));
}

#[test]
fn risk_as_yaml() {
    adm()
        .args(["--output", "yaml", "risk"])
        .arg(fixture("safety_critical.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("score: 7"))
        .stdout(predicate::str::contains("tier: HIGH"));
}

#[test]
fn archetypes_lists_catalog() {
    adm()
        .arg("archetypes")
        .assert()
        .success()
        .stdout(predicate::str::contains("A1"))
        .stdout(predicate::str::contains("RAG Knowledge Assistant"))
        .stdout(predicate::str::contains("Safety-Critical / Regulated"));
}

#[test]
fn config_file_changes_threshold_and_format() {
    adm()
        .args(["--config", &fixture("strict.toml"), "classify"])
        .arg(fixture("rag_enterprise.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""code": "U0""#))
        .stdout(predicate::str::contains("Manual archetype review"));
}

#[test]
fn config_command_shows_effective_values() {
    adm()
        .args(["--config", &fixture("strict.toml"), "--output", "table", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict.toml"))
        .stdout(predicate::str::contains("Survival threshold: 0.5"));

    adm()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config: defaults"))
        .stdout(predicate::str::contains("Survival threshold: 0.15"));
}

#[test]
fn missing_profile_fails() {
    adm()
        .args(["classify", "/nonexistent/profile.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn malformed_profile_fails() {
    adm()
        .args(["classify", "-"])
        .write_stdin("interactionPattern: [unclosed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML error"));
}
