//! Integration tests for the faqkb CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn faqkb(kb_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("faqkb").expect("binary builds");
    cmd.arg("--kb").arg(kb_path);
    cmd
}

fn write_batch(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).expect("write batch file");
    path
}

const MOTTO_AND_TRAVEL: &str = r#"[
    {
        "keyword": "What is Bugema University motto",
        "answer": "Excellence in Service",
        "synonyms": ["motto", "university motto"],
        "category": "general",
        "tags": ["motto"],
        "priority": 1,
        "source": "Bulletin 2024-2029"
    },
    {
        "keyword": "How to travel to Bugema University from Kampala",
        "answer": "Take a taxi from Old Taxi Park, Kampala (approx. UGX 5,000)",
        "category": "general",
        "tags": ["transport"],
        "priority": 1,
        "source": "Bulletin 2024-2029"
    }
]"#;

#[test]
fn merge_adds_new_entries_and_reports_counts() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    let batch = write_batch(&dir, "batch.json", MOTTO_AND_TRAVEL);

    faqkb(&kb).arg("init").assert().success();

    faqkb(&kb)
        .arg("merge")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added: What is Bugema University motto"))
        .stdout(predicate::str::contains("Added 2 new entries"))
        .stdout(predicate::str::contains("Total KB size: 2 entries"));
}

#[test]
fn second_merge_with_same_batch_adds_nothing() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    let batch = write_batch(&dir, "batch.json", MOTTO_AND_TRAVEL);

    faqkb(&kb).arg("init").assert().success();
    faqkb(&kb).arg("merge").arg(&batch).assert().success();

    faqkb(&kb)
        .arg("merge")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "⚠ Skipped (exists): What is Bugema University motto",
        ))
        .stdout(predicate::str::contains("Added 0 new entries"))
        .stdout(predicate::str::contains("Total KB size: 2 entries"));
}

#[test]
fn keyword_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    let first = write_batch(&dir, "first.json", MOTTO_AND_TRAVEL);
    let second = write_batch(
        &dir,
        "second.json",
        r#"[{"keyword": "WHAT IS BUGEMA UNIVERSITY MOTTO", "answer": "dup"}]"#,
    );

    faqkb(&kb).arg("init").assert().success();
    faqkb(&kb).arg("merge").arg(&first).assert().success();

    faqkb(&kb)
        .arg("merge")
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped (exists)"))
        .stdout(predicate::str::contains("Total KB size: 2 entries"));
}

#[test]
fn merge_fails_when_store_is_missing() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("absent.json");
    let batch = write_batch(&dir, "batch.json", MOTTO_AND_TRAVEL);

    faqkb(&kb)
        .arg("merge")
        .arg(&batch)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Knowledge store not found"));
}

#[test]
fn merge_fails_when_store_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    fs::write(&kb, "{ not json").unwrap();
    let batch = write_batch(&dir, "batch.json", MOTTO_AND_TRAVEL);

    faqkb(&kb)
        .arg("merge")
        .arg(&batch)
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn invalid_candidate_aborts_without_touching_the_store() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    let batch = write_batch(
        &dir,
        "batch.json",
        r#"[
            {"keyword": "A valid entry", "answer": "fine"},
            {"keyword": "   ", "answer": "blank keyword"}
        ]"#,
    );

    faqkb(&kb).arg("init").assert().success();
    let before = fs::read_to_string(&kb).unwrap();

    faqkb(&kb)
        .arg("merge")
        .arg(&batch)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid entry"));

    // No partial write: store content is byte-identical
    let after = fs::read_to_string(&kb).unwrap();
    assert_eq!(before, after);
}

#[test]
fn dry_run_reports_outcomes_without_saving() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    let batch = write_batch(&dir, "batch.json", MOTTO_AND_TRAVEL);

    faqkb(&kb).arg("init").assert().success();
    let before = fs::read_to_string(&kb).unwrap();

    faqkb(&kb)
        .arg("merge")
        .arg("--dry-run")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added:"))
        .stdout(predicate::str::contains("store not modified"));

    let after = fs::read_to_string(&kb).unwrap();
    assert_eq!(before, after);
}

#[test]
fn merging_the_shipped_curriculum_fixture_succeeds() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/curriculum.json");

    faqkb(&kb).arg("init").assert().success();

    faqkb(&kb)
        .arg("merge")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 10 new entries"))
        .stdout(predicate::str::contains("Total KB size: 10 entries"));
}

#[test]
fn init_refuses_to_overwrite_an_existing_store() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");

    faqkb(&kb).arg("init").assert().success();
    faqkb(&kb)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn list_and_stats_reflect_the_merged_store() {
    let dir = TempDir::new().unwrap();
    let kb = dir.path().join("knowledge.json");
    let batch = write_batch(&dir, "batch.json", MOTTO_AND_TRAVEL);

    faqkb(&kb).arg("init").assert().success();
    faqkb(&kb).arg("merge").arg(&batch).assert().success();

    faqkb(&kb)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("• What is Bugema University motto [general]"))
        .stdout(predicate::str::contains("Excellence in Service"));

    faqkb(&kb)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 2"))
        .stdout(predicate::str::contains("general: 2"));
}
