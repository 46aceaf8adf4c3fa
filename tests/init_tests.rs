//! Integration tests for the init command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tagtype_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    tagtype_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tagtype.toml"));

    let content = fs::read_to_string(temp.path().join("tagtype.toml")).unwrap();
    assert!(content.contains("unterminated = \"error\""));
    assert!(content.contains("[[tag]]"));
    assert!(content.contains("name = \"param\""));
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    tagtype_cmd().arg("init").arg(temp.path()).assert().success();

    tagtype_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_in_current_directory() {
    let temp = TempDir::new().unwrap();

    tagtype_cmd()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    assert!(temp.path().join("tagtype.toml").exists());
}

#[test]
fn test_initialized_config_is_used_by_extract() {
    let temp = TempDir::new().unwrap();

    tagtype_cmd().arg("init").arg(temp.path()).assert().success();

    tagtype_cmd()
        .current_dir(temp.path())
        .args(["extract", "param", "{string} name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("error:").not());
}
