use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lexv"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL lexv doctor"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_fails_on_broken_template() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::write(root.join("templates").join("bad.md"), "no frontmatter here").unwrap();

    let cfg = root.join("config.toml");
    fs::write(
        &cfg,
        format!("version = 1\n[profiles.default]\ndata_root = \"{}\"\n", root.display()),
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lexv"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL lexv doctor"))
        .stdout(predicate::str::contains("bad.md"))
        .stdout(predicate::str::contains("OK   lexv doctor").not());
}
