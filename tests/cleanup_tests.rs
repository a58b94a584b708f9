//! Cleanup command tests using the REAL docs-authoring binary

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_cleanup_rewrites_yaml_and_front_matter() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "docs/index.yml",
        "title: Index\nms.topic:\n  - landing-page\ntags: [a, b]\n",
    );
    workspace.write_file(
        "docs/intro.md",
        "---\nauthor: [writer]\nms.service: [\"docs\"]\n---\n# Intro\n\nlist: [x]\n",
    );

    workspace
        .docs_cmd()
        .arg("cleanup")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s) rewritten"));

    assert_eq!(
        workspace.read_file("docs/index.yml"),
        "title: Index\nms.topic: landing-page\ntags: [a, b]\n"
    );
    assert_eq!(
        workspace.read_file("docs/intro.md"),
        "---\nauthor: writer\nms.service: \"docs\"\n---\n# Intro\n\nlist: [x]\n"
    );
}

#[test]
fn test_cleanup_second_run_changes_nothing() {
    let workspace = TestWorkspace::new();
    workspace.write_file("toc.yml", "- name: A\n  tags:\n  - one\n");

    workspace.docs_cmd().arg("cleanup").assert().success();
    let first = workspace.read_file("toc.yml");

    workspace
        .docs_cmd()
        .arg("cleanup")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s) rewritten, 1 unchanged"));
    assert_eq!(workspace.read_file("toc.yml"), first);
}

#[test]
fn test_cleanup_leaves_markdown_without_front_matter() {
    let workspace = TestWorkspace::new();
    let content = "# Title\n\nauthor: [me]\n";
    workspace.write_file("page.md", content);

    workspace.docs_cmd().args(["cleanup", "page.md"]).assert().success();

    assert_eq!(workspace.read_file("page.md"), content);
}

#[test]
fn test_cleanup_preserves_crlf() {
    let workspace = TestWorkspace::new();
    workspace.write_file("a.yml", "title: A\r\nauthor:\r\n- me\r\n");

    workspace.docs_cmd().arg("cleanup").assert().success();

    assert_eq!(workspace.read_file("a.yml"), "title: A\r\nauthor: me\r\n");
}

#[test]
fn test_cleanup_dry_run_prints_diff_only() {
    let workspace = TestWorkspace::new();
    workspace.write_file("a.yml", "author: [me]\n");

    workspace
        .docs_cmd()
        .args(["cleanup", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-author: [me]"))
        .stdout(predicate::str::contains("+author: me"))
        .stdout(predicate::str::contains("1 file(s) would be rewritten"));

    assert_eq!(workspace.read_file("a.yml"), "author: [me]\n");
}

#[test]
fn test_cleanup_continues_after_failure() {
    let workspace = TestWorkspace::new();
    workspace.write_file("a.yml", "author: [me]\n");
    workspace.write_file("z.yml", "owner: [you]\n");

    workspace
        .docs_cmd()
        .args(["cleanup", "a.yml", "missing.yml", "z.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.yml"))
        .stderr(predicate::str::contains("Cleanup failed for 1 file(s)"));

    assert_eq!(workspace.read_file("a.yml"), "author: me\n");
    assert_eq!(workspace.read_file("z.yml"), "owner: you\n");
}

#[test]
fn test_cleanup_skips_excluded_directories() {
    let workspace = TestWorkspace::new();
    workspace.write_file("docs-authoring.yaml", "exclude: [vendor]\n");
    workspace.write_file("vendor/toc.yml", "author: [me]\n");
    workspace.write_file("docs/toc.yml", "author: [me]\n");

    workspace.docs_cmd().arg("cleanup").assert().success();

    assert_eq!(workspace.read_file("vendor/toc.yml"), "author: [me]\n");
    assert_eq!(workspace.read_file("docs/toc.yml"), "author: me\n");
}

#[test]
fn test_cleanup_invalid_config_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file("docs-authoring.yaml", "unknown_key: 1\n");

    workspace
        .docs_cmd()
        .arg("cleanup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("docs-authoring.yaml"));
}
