//! End-to-end CLI behavior. Every command path exits 0; failures surface
//! as printed guidance or per-item summary lines.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn schemagen_cmd(metadir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("schemagen"));
    cmd.arg("--metadir").arg(metadir);
    cmd
}

fn write_schema(api: &Path, rel: &str) {
    let path = api.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, b"syntax = \"proto3\";\n").expect("write schema");
}

#[test]
fn generate_without_metadir_prints_guidance_and_exits_zero() {
    let tmp = TempDir::new().expect("tmp");
    let missing = tmp.path().join("no-metadir");
    let parent = TempDir::new().expect("parent");

    schemagen_cmd(&missing)
        .args(["generate", "--parent"])
        .arg(parent.path())
        .assert()
        .success()
        .stdout(contains("missing metadir"))
        .stdout(contains("schemagen update"));
}

#[test]
fn generate_with_absent_api_tree_is_a_noop() {
    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");

    schemagen_cmd(metadir.path())
        .args(["generate", "--parent"])
        .arg(parent.path())
        .assert()
        .success()
        .stdout(contains("no schema files"));
}

#[test]
fn generate_print_emits_one_batch_command() {
    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");
    let api = parent.path().join("api");
    write_schema(&api, "a.proto");
    write_schema(&api, "sub/b.proto");

    let assert = schemagen_cmd(metadir.path())
        .args(["generate", "--print", "--ipaths", "vendor", "--parent"])
        .arg(parent.path())
        .assert()
        .success()
        .stdout(contains("--plugin=protoc-gen-api="))
        .stdout(contains("--proto_path=vendor"))
        .stdout(contains("a.proto sub/b.proto"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout.lines().count(), 1, "print mode emits a single command line");
}

#[cfg(unix)]
#[test]
fn generate_execute_reports_per_file_outcomes() {
    use std::os::unix::fs::PermissionsExt;

    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");
    write_schema(&parent.path().join("api"), "a.proto");

    let compiler = metadir.path().join("protoc");
    fs::write(&compiler, "#!/bin/sh\nexit 0\n").expect("write compiler");
    fs::set_permissions(&compiler, fs::Permissions::from_mode(0o755)).expect("chmod");

    schemagen_cmd(metadir.path())
        .args(["generate", "--parent"])
        .arg(parent.path())
        .assert()
        .success()
        .stdout(contains("1 generated, 0 failed"))
        .stdout(contains("a.proto"));
}

#[test]
fn version_prints_marker_verbatim() {
    let metadir = TempDir::new().expect("metadir");
    fs::write(metadir.path().join("version"), "20260115-rel").expect("write marker");

    schemagen_cmd(metadir.path())
        .arg("version")
        .assert()
        .success()
        .stdout("20260115-rel\n");
}

#[test]
fn version_without_marker_prints_guidance() {
    let metadir = TempDir::new().expect("metadir");

    schemagen_cmd(metadir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(contains("no version marker"))
        .stdout(contains("schemagen update"));
}

#[test]
fn update_with_unreachable_origin_still_exits_zero() {
    let metadir = TempDir::new().expect("metadir");

    let assert = schemagen_cmd(metadir.path())
        .args(["update", "--origin", "http://127.0.0.1:9", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let reports: serde_json::Value = serde_json::from_str(&stdout).expect("json reports");
    let reports = reports.as_array().expect("array");
    assert!(!reports.is_empty());
    assert!(reports
        .iter()
        .all(|r| r["status"] == "failed"), "every resource fails against a dead origin");
}

#[test]
fn md5sum_writes_sidecars_under_the_current_directory() {
    let metadir = TempDir::new().expect("metadir");
    let tree = TempDir::new().expect("tree");
    fs::write(tree.path().join("protoc"), b"binary").expect("write");
    fs::create_dir_all(tree.path().join("sub")).expect("mkdir");
    fs::write(tree.path().join("sub/version"), b"v1").expect("write");

    schemagen_cmd(metadir.path())
        .arg("md5sum")
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(contains("wrote 2 checksum file(s)"));

    assert!(tree.path().join("protoc.md5sum").exists());
    assert!(tree.path().join("sub/version.md5sum").exists());
}
