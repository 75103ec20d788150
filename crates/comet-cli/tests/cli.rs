use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn comet(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("comet").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_add_service_into_module() {
    let temp_dir = tempfile::tempdir().unwrap();
    let location = temp_dir.path().join("modules/user/services");
    std::fs::create_dir_all(&location).unwrap();

    comet(temp_dir.path())
        .args(["add", "service", "UserAccount", "modules/user/services"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user_account_service.go"))
        .stdout(predicate::str::contains("services"));

    let content = std::fs::read_to_string(location.join("user_account_service.go")).unwrap();
    assert!(content.starts_with("package services"));
    assert!(content.contains("userAccount"));
    assert!(temp_dir.path().join(".comet/templates/service.go.tmpl").is_file());
}

#[test]
fn test_add_defaults_to_current_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let controllers = temp_dir.path().join("controllers");
    std::fs::create_dir_all(&controllers).unwrap();

    comet(&controllers)
        .args(["add", "controller", "Order"])
        .assert()
        .success();

    let content = std::fs::read_to_string(controllers.join("order_controller.go")).unwrap();
    assert!(content.starts_with("package controllers"));
}

#[test]
fn test_add_invalid_kind_fails_without_writing() {
    let temp_dir = tempfile::tempdir().unwrap();

    comet(temp_dir.path())
        .args(["add", "widget", "Thing", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid component: widget"));

    assert!(std::fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_wrong_arity_exits_with_one() {
    let temp_dir = tempfile::tempdir().unwrap();

    comet(temp_dir.path()).args(["new", "myapp"]).assert().code(1);
    comet(temp_dir.path()).args(["add", "service"]).assert().code(1);
    comet(temp_dir.path()).args(["run", "extra"]).assert().code(1);
    comet(temp_dir.path()).assert().code(1);
}

#[test]
fn test_version_exits_with_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    comet(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("comet"));
}

#[test]
fn test_new_into_existing_dir_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let existing = temp_dir.path().join("myapp");
    std::fs::create_dir_all(&existing).unwrap();
    std::fs::write(existing.join("keep.txt"), "mine").unwrap();

    comet(temp_dir.path())
        .args(["new", "myapp", "module"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_to_string(existing.join("keep.txt")).unwrap(), "mine");
    assert!(!existing.join("main.go").exists());
}

#[test]
fn test_new_rejects_invalid_module() {
    let temp_dir = tempfile::tempdir().unwrap();

    comet(temp_dir.path())
        .args(["new", "myapp", "not a module"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid module path"));

    assert!(!temp_dir.path().join("myapp").exists());
}

#[test]
fn test_config_templates_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("comet.config.json"),
        r#"{ "templates_dir": "tpl" }"#,
    )
    .unwrap();

    comet(temp_dir.path())
        .args(["add", "middleware", "Auth", "."])
        .assert()
        .success();

    assert!(temp_dir.path().join("tpl/middleware.go.tmpl").is_file());
    assert!(temp_dir.path().join("auth_middleware.go").is_file());
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("comet.config.json"), "{").unwrap();

    comet(temp_dir.path())
        .args(["add", "controller", "Foo", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_run_without_toolchain_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("comet.config.json"),
        r#"{ "toolchain": "definitely-missing-go" }"#,
    )
    .unwrap();

    comet(temp_dir.path())
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error running project"))
        .stderr(predicate::str::contains("not found"));
}
