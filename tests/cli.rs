use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

/// The binary with a scratch home, English messages and no tracing.
fn pt(home: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pt").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("PT_LANG", "en")
        .env_remove("PT_TRACE")
        .env_remove("PT_GIT_HOST")
        .env_remove("PT_GIT_OWNER")
        .env_remove("PT_GIT_BRANCH");
    cmd
}

fn is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[test]
fn empty_command() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    pt(home.path(), cwd.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("command cannot be empty"));

    assert!(is_empty(cwd.path()));
}

#[test]
fn empty_command_in_chinese() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    pt(home.path(), cwd.path())
        .env("PT_LANG", "zh_CN.UTF-8")
        .assert()
        .failure()
        .stderr(predicate::str::contains("指令不能为空"));
}

#[test]
fn unrecognized_command() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    pt(home.path(), cwd.path())
        .args(["init", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized command: init demo"));

    assert!(is_empty(cwd.path()));
}

#[test]
fn create_without_name() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    pt(home.path(), cwd.path())
        .arg("--create")
        .assert()
        .failure()
        .stderr(predicate::str::contains("please enter a project name"));

    assert!(is_empty(cwd.path()));
}

#[test]
fn non_empty_target() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    std::fs::create_dir(cwd.path().join("demo")).unwrap();
    std::fs::write(cwd.path().join("demo/index.js"), "").unwrap();

    pt(home.path(), cwd.path())
        .args(["-c", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists and is not empty"));

    assert_eq!(std::fs::read_dir(cwd.path().join("demo")).unwrap().count(), 1);
}

#[test]
fn file_target() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    std::fs::write(cwd.path().join("demo"), "").unwrap();

    pt(home.path(), cwd.path())
        .args(["-c", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists and is not a directory"));
}

#[test]
fn unknown_template() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    pt(home.path(), cwd.path())
        .args(["-c", "demo", "-t", "angular"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown template 'angular'"))
        .stderr(predicate::str::contains("koa-mongo"));

    assert!(is_empty(cwd.path()));
}

#[test]
fn clone_failure_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    let remote = tempfile::tempdir().unwrap();

    pt(home.path(), cwd.path())
        .args(["-c", "demo", "--template", "koa-mongo"])
        .env("PT_GIT_HOST", format!("file://{}", remote.path().display()))
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("pt-koa-mongo")
                .or(predicate::str::contains("failed to run `git`")),
        );

    assert!(is_empty(&cwd.path().join("demo")));
}

#[test]
fn list_templates() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();

    pt(home.path(), cwd.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("react-antd "))
        .stdout(predicate::str::contains("gitee.com:Thyiad/react-ssr#master"))
        .stdout(predicate::str::contains("gitee.com:Thyiad/pt-net-core-webapi#master"));
}

#[test]
fn config_file_is_honoured() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    let config = home.path().join(".config").join("pt");
    std::fs::create_dir_all(&config).unwrap();
    std::fs::write(
        config.join("config.json"),
        r#"{ "host": "github.com", "owner": "someone", "branch": "main" }"#,
    )
    .unwrap();

    pt(home.path(), cwd.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com:someone/pt-koa-mongo#main"));
}

#[test]
fn malformed_config_file() {
    let home = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    let config = home.path().join(".config").join("pt");
    std::fs::create_dir_all(&config).unwrap();
    std::fs::write(config.join("config.json"), "{ host: ").unwrap();

    pt(home.path(), cwd.path())
        .arg("-l")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}
