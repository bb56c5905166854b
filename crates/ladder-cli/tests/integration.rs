use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ladder(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ladder").unwrap();
    cmd.current_dir(dir.path()).env("LADDER_HOME", dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// first run / seeding
// ---------------------------------------------------------------------------

#[test]
fn first_status_seeds_history() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("中羽 0 级"))
        .stdout(predicate::str::contains("羽外高人"));

    assert!(dir.path().join("history.yaml").exists());
}

#[test]
fn status_is_idempotent() {
    let dir = TempDir::new().unwrap();
    ladder(&dir).arg("status").assert().success();
    ladder(&dir).arg("status").assert().success();
}

#[test]
fn malformed_state_recovers_silently() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("progress.yaml"), "{{{ not yaml").unwrap();
    std::fs::write(dir.path().join("history.yaml"), "]] nope").unwrap();

    ladder(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("score: 0/1510"));
}

// ---------------------------------------------------------------------------
// ladder skills / show
// ---------------------------------------------------------------------------

#[test]
fn skills_lists_the_catalog() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("正、反手握拍"))
        .stdout(predicate::str::contains("鱼跃救球"));
}

#[test]
fn skills_filters_by_tier() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["skills", "--tier", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("场地中心站位"))
        .stdout(predicate::str::contains("鱼跃救球").not());
}

#[test]
fn skills_filters_by_category() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["skills", "--category", "发球技术"])
        .assert()
        .success()
        .stdout(predicate::str::contains("正手发高远球"))
        .stdout(predicate::str::contains("握拍技术").not());
}

#[test]
fn show_displays_checkpoints() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("正手发高远球"))
        .stdout(predicate::str::contains("侧身引拍"));
}

#[test]
fn show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill id"));
}

// ---------------------------------------------------------------------------
// ladder mark
// ---------------------------------------------------------------------------

#[test]
fn mark_updates_score() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["mark", "1", "mastered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("score: 10"));

    assert!(dir.path().join("progress.yaml").exists());
}

#[test]
fn mark_rejects_bad_mastery() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["mark", "1", "guru"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mastery"));
}

#[test]
fn mark_rejects_unknown_id() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .args(["mark", "999", "basic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill id"));
}

#[test]
fn mastering_tier_one_reaches_level_one_strong() {
    let dir = TempDir::new().unwrap();
    for id in ["1", "2", "3", "5"] {
        ladder(&dir).args(["mark", id, "mastered"]).assert().success();
    }
    ladder(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("中羽 1+ 级"))
        .stdout(predicate::str::contains("羽焉不详"));
}

// ---------------------------------------------------------------------------
// ladder history / share
// ---------------------------------------------------------------------------

#[test]
fn history_projects_a_growth_line() {
    let dir = TempDir::new().unwrap();
    ladder(&dir).args(["mark", "42", "mastered"]).assert().success();

    // The seed and the mark land on the same day and coalesce; the
    // projection pads a zero point so two rows always show.
    ladder(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("60"))
        .stdout(predicate::str::contains("0"));

    let full = ladder(&dir)
        .args(["history", "--full", "--json"])
        .output()
        .unwrap();
    let samples: serde_json::Value = serde_json::from_slice(&full.stdout).unwrap();
    assert_eq!(samples.as_array().unwrap().len(), 1);
}

#[test]
fn share_renders_a_card() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .arg("share")
        .assert()
        .success()
        .stdout(predicate::str::contains("我的天梯"))
        .stdout(predicate::str::contains("Keep Practicing"));
}

// ---------------------------------------------------------------------------
// --json
// ---------------------------------------------------------------------------

#[test]
fn status_json_is_well_formed() {
    let dir = TempDir::new().unwrap();
    ladder(&dir).args(["mark", "19", "basic"]).assert().success();

    let out = ladder(&dir).args(["status", "--json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["score"], 10);
    assert_eq!(value["max_score"], 1510);
    assert_eq!(value["level"]["tier"], 0);
    assert_eq!(value["tiers"].as_array().unwrap().len(), 6);
}

#[test]
fn skills_json_includes_mastery() {
    let dir = TempDir::new().unwrap();
    ladder(&dir).args(["mark", "1", "basic"]).assert().success();

    let out = ladder(&dir)
        .args(["skills", "--tier", "1", "--json"])
        .output()
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let first = &rows.as_array().unwrap()[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["mastery"], "basic");
}

// ---------------------------------------------------------------------------
// ladder plan
// ---------------------------------------------------------------------------

#[test]
fn plan_without_api_key_degrades_gracefully() {
    let dir = TempDir::new().unwrap();
    ladder(&dir)
        .arg("plan")
        .env_remove("GEMINI_API_KEY")
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus skills:"))
        .stdout(predicate::str::contains("couldn't be generated"));
}
