mod common;
use common::cli::{IdbWorkspace, added_hash, run_idb};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_empty_store() {
    let workspace = IdbWorkspace::new();
    let output = run_idb(&workspace, ["init"], "init");
    assert!(output.status.success(), "init failed: {}", output.stderr);
    assert!(output.stdout.contains("Initialized idea store"));

    let raw = fs::read_to_string(workspace.store_file()).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn test_add_then_read_back() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");

    let output = run_idb(
        &workspace,
        ["add", "Build a better lamp", "-d", "uses LEDs"],
        "add",
    );
    assert!(output.status.success(), "add failed: {}", output.stderr);
    assert_eq!(added_hash(&output), "54caac1");

    let raw = fs::read_to_string(workspace.store_file()).unwrap();
    let ideas: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let ideas = ideas.as_array().unwrap();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0]["idea"], "Build a better lamp");
    assert_eq!(ideas[0]["description"], "uses LEDs");
    assert_eq!(ideas[0]["marked"], false);
    assert_eq!(
        ideas[0]["hash"],
        "54caac13addf3a939d2cc3025c798a46a38a81bb042d0f8c7a97ed06b76191d5"
    );
}

#[test]
fn test_commands_before_init_fail() {
    let workspace = IdbWorkspace::new();

    for args in [
        vec!["add", "idea"],
        vec!["list"],
        vec!["mark", "abcdef0"],
        vec!["rm", "abcdef0"],
    ] {
        let output = run_idb(&workspace, &args, "before_init");
        assert!(!output.status.success(), "{args:?} should fail");
        assert!(
            output.stderr.contains("idb init"),
            "{args:?} stderr: {}",
            output.stderr
        );
    }
    assert!(!workspace.store_file().exists());
}

#[test]
fn test_add_empty_title_fails() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");

    workspace
        .command()
        .args(["add", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title cannot be empty"));
}

#[test]
fn test_edit_keeps_hash() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");
    let hash = added_hash(&run_idb(&workspace, ["add", "Old title"], "add"));

    let output = run_idb(
        &workspace,
        ["edit", hash.as_str(), "-t", "New title", "-d", "now described"],
        "edit",
    );
    assert!(output.status.success(), "edit failed: {}", output.stderr);
    assert!(output.stdout.contains(&format!("Updated {hash}: New title")));

    let list = run_idb(&workspace, ["list", "--hash"], "list");
    assert_eq!(list.stdout, format!("{hash}  New title\n"));
}

#[test]
fn test_edit_without_fields_fails() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");
    let hash = added_hash(&run_idb(&workspace, ["add", "idea"], "add"));

    workspace
        .command()
        .args(["edit", hash.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to do"));
}

#[test]
fn test_invalid_hash_is_rejected() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");
    run_idb(&workspace, ["add", "idea"], "add");
    let before = fs::read_to_string(workspace.store_file()).unwrap();

    for cmd in ["mark", "unmark", "rm", "delete"] {
        workspace
            .command()
            .args([cmd, "abc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid hash provided"));
    }
    assert_eq!(fs::read_to_string(workspace.store_file()).unwrap(), before);
}

#[test]
fn test_remove_and_delete_alias() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");
    let first = added_hash(&run_idb(&workspace, ["add", "first"], "add1"));
    let second = added_hash(&run_idb(&workspace, ["add", "second"], "add2"));

    let output = run_idb(&workspace, ["rm", first.as_str()], "rm");
    assert!(output.status.success());
    assert_eq!(output.stdout, format!("Removed idea hashed {first}\n"));

    let output = run_idb(&workspace, ["delete", second.as_str()], "delete");
    assert!(output.status.success());

    let output = run_idb(&workspace, ["rm", second.as_str()], "rm_again");
    assert!(output.status.success());
    assert!(output.stdout.contains("No ideas matched"));

    let list = run_idb(&workspace, ["list"], "list");
    assert!(!list.status.success());
    assert!(list.stderr.contains("No ideas available"));
}

#[test]
fn test_init_discards_existing_ideas() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");
    run_idb(&workspace, ["add", "doomed"], "add");

    run_idb(&workspace, ["init"], "reinit");
    let raw = fs::read_to_string(workspace.store_file()).unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[test]
fn test_dir_flag_overrides_env() {
    let workspace = IdbWorkspace::new();
    let other = workspace.root.join("elsewhere");

    workspace
        .command()
        .args(["--dir", other.to_str().unwrap(), "init"])
        .assert()
        .success();

    assert!(other.join("ideas.json").exists());
    assert!(!workspace.store_file().exists());
}

#[test]
fn test_remove_by_full_hash_echoes_full_hash() {
    let workspace = IdbWorkspace::new();
    run_idb(&workspace, ["init"], "init");
    run_idb(&workspace, ["add", "Build a better lamp", "-d", "uses LEDs"], "add");
    let full = "54caac13addf3a939d2cc3025c798a46a38a81bb042d0f8c7a97ed06b76191d5";

    let output = run_idb(&workspace, ["rm", full], "rm_full");
    assert!(output.status.success(), "rm failed: {}", output.stderr);
    assert_eq!(output.stdout, format!("Removed idea hashed {full}\n"));
}

#[test]
fn test_bare_invocation_prints_help() {
    let workspace = IdbWorkspace::new();
    workspace
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: idb"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("mark"));
}
