//! Integration tests for the content validation command.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VALID_PAGE: &str = "---\n\
title: Spec-Kit Overview\n\
description: An overview of spec-kit.\n\
tags: [spec-kit]\n\
---\n\
This page introduces speckit and walks through the spec-kit workflow in \
enough detail to pass the short-content check comfortably.\n";

fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn doclint(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("doclint"));
    cmd.current_dir(root);
    cmd.arg("content");
    cmd
}

#[test]
fn valid_tree_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "docs/intro.mdx", VALID_PAGE);
    write(
        temp.path(),
        "docs/navigation.json",
        r#"{ "sections": [{ "title": "Docs", "items": [{ "title": "Intro", "path": "/intro" }] }] }"#,
    );
    write(
        temp.path(),
        "docs/i18n/en.json",
        r#"{ "locale": "en", "messages": { "hello": "Hello" } }"#,
    );

    doclint(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Schemas loaded successfully"))
        .stdout(predicate::str::contains("Files validated: 1"))
        .stdout(predicate::str::contains("Errors: 0"))
        .stdout(predicate::str::contains("All validations passed!"));
    Ok(())
}

#[test]
fn schema_violation_fails_with_exit_code_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    // No description: the DocumentationPage schema requires it.
    write(
        temp.path(),
        "docs/bad.md",
        "---\ntitle: Spec-Kit\ntags: [spec-kit]\n---\nAbout speckit and spec-kit, written at enough length that the short-content warning stays quiet.\n",
    );

    doclint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Errors: 1"))
        .stdout(predicate::str::contains("description"));
    Ok(())
}

#[test]
fn invalid_navigation_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "docs/navigation.json", r#"{ "sections": [] }"#);

    doclint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("navigation.json"));
    Ok(())
}

#[test]
fn invalid_i18n_locale_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(
        temp.path(),
        "i18n/english.json",
        r#"{ "locale": "english", "messages": {} }"#,
    );

    doclint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("locale"));
    Ok(())
}

#[test]
fn json_outside_i18n_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "docs/data.json", "not even json");

    doclint(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors: 0"));
    Ok(())
}

#[test]
fn broken_relative_link_warns_but_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let page = format!("{VALID_PAGE}\nSee [details](./missing-page) for more.\n");
    write(temp.path(), "docs/intro.md", &page);

    doclint(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings: 1"))
        .stdout(predicate::str::contains(
            "Potential broken link: ./missing-page",
        ));
    Ok(())
}

#[test]
fn missing_root_warns_and_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("doclint"));
    cmd.current_dir(temp.path());
    cmd.args(["content", "no-such-dir"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Directory not found"))
        .stdout(predicate::str::contains("Warnings: 1"));
    Ok(())
}

#[test]
fn schemas_flag_loads_from_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    // A permissive local schema set accepts a page the built-in set rejects.
    write(
        temp.path(),
        "contracts/content-api.json",
        r#"{ "DocumentationPage": { "type": "object" } }"#,
    );
    write(
        temp.path(),
        "contracts/navigation.json",
        r#"{ "NavigationStructure": { "type": "object" } }"#,
    );
    write(
        temp.path(),
        "contracts/i18n.json",
        r#"{ "TranslationStructure": { "type": "object" } }"#,
    );
    write(
        temp.path(),
        "docs/bare.md",
        "---\ntags: [spec-kit]\n---\nAll about speckit and spec-kit, padded out far enough that the length rule does not complain about it.\n",
    );

    let mut cmd = Command::new(cargo_bin("doclint"));
    cmd.current_dir(temp.path());
    cmd.args(["content", "docs", "--schemas", "contracts"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Errors: 0"));
    Ok(())
}

#[test]
fn missing_schema_directory_aborts_before_validation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write(temp.path(), "docs/intro.md", VALID_PAGE);

    let mut cmd = Command::new(cargo_bin("doclint"));
    cmd.current_dir(temp.path());
    cmd.args(["content", "docs", "--schemas", "no-such-contracts"]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Error loading schemas"))
        .stdout(predicate::str::contains("Starting content validation").not());
    Ok(())
}
