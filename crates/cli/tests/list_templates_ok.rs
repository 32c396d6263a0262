use assert_cmd::prelude::*;
use predicates::prelude::*; // needed for `.not()`
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn setup(root: &Path) -> PathBuf {
    let cfg = root.join("config.toml");
    write(&cfg, &format!("version = 1\n[profiles.default]\ndata_root = \"{}\"\n", root.display()));

    Command::new(assert_cmd::cargo::cargo_bin!("lexv"))
        .args(["--config", cfg.to_str().unwrap(), "seed"])
        .assert()
        .success();

    write(
        &root.join("templates").join("old_notice.md"),
        "---\ncategory: notice\ndescription: Retired notice\nis_active: false\n---\nOld\n",
    );
    cfg
}

#[test]
fn list_templates_shows_active_only() {
    let tmp = tempdir().unwrap();
    let cfg = setup(tmp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lexv"));
    cmd.env("NO_COLOR", "1");
    cmd.args(["--config", cfg.to_str().unwrap(), "list-templates"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rental_agreement"))
        .stdout(predicate::str::contains("affidavit"))
        .stdout(predicate::str::contains("Standard residential rental agreement"))
        .stdout(predicate::str::contains("-- 2 templates --"))
        .stdout(predicate::str::contains("old_notice").not());
}

#[test]
fn list_templates_all_includes_inactive() {
    let tmp = tempdir().unwrap();
    let cfg = setup(tmp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lexv"));
    cmd.args(["--config", cfg.to_str().unwrap(), "list-templates", "--all"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("old_notice"))
        .stdout(predicate::str::contains("-- 3 templates --"));
}

#[test]
fn list_templates_json() {
    let tmp = tempdir().unwrap();
    let cfg = setup(tmp.path());

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("lexv"))
        .args(["--config", cfg.to_str().unwrap(), "list-templates", "--json"])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let list = parsed.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "affidavit");
    assert_eq!(list[0]["category"], "affidavit");
    assert_eq!(list[1]["variables"], 15);
}

#[test]
fn list_templates_fails_without_store() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write(&cfg, &format!("version = 1\n[profiles.default]\ndata_root = \"{}\"\n", tmp.path().display()));

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lexv"));
    cmd.args(["--config", cfg.to_str().unwrap(), "list-templates"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL lexv list-templates"))
        .stdout(predicate::str::contains("templates directory does not exist"));
}
