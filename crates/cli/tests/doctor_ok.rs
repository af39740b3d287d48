use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/v"
daily_folder = "Journal"

[comparator]
heading_keyword = "Highlights"
column_width = 300
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ydc"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   ydc doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("vault_root: /tmp/v"))
        .stdout(predicate::str::contains("daily_folder: Journal"))
        .stdout(predicate::str::contains("heading_keyword: Highlights"))
        .stdout(predicate::str::contains("column_width: 300"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("yearly-diary").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
vault_root = "/tmp/v"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ydc"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   ydc doctor"))
        .stdout(predicate::str::contains("daily_folder: (vault root)"))
        .stdout(predicate::str::contains("heading_keyword: [DAILY_SUMMARY]"))
        .stdout(predicate::str::contains("column_width: 480"));
}
