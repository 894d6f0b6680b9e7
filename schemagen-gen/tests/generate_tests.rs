//! Execute-mode behavior, driven through a fake compiler.
//!
//! The fake is a shell script dropped into a temp metadir under the
//! compiler's name; it appends its argument list to a log file so tests
//! can assert invocation counts and argument stability.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use schemagen_gen::{generate, FileStatus, GenMode};

fn write_fake_compiler(metadir: &Path, log: &Path, fail_on: Option<&str>) {
    let body = match fail_on {
        Some(pattern) => format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> {log}\ncase \"$*\" in *{pattern}) exit 1;; esac\nexit 0\n",
            log = log.display(),
        ),
        None => format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> {log}\nexit 0\n",
            log = log.display(),
        ),
    };
    let path = metadir.join("protoc");
    fs::write(&path, body).expect("write fake compiler");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
}

fn schema(api: &Path, rel: &str) {
    let path = api.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, b"syntax = \"proto3\";\n").expect("write schema");
}

fn logged_invocations(log: &Path) -> Vec<Vec<String>> {
    let Ok(contents) = fs::read_to_string(log) else {
        return Vec::new();
    };
    contents
        .lines()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

#[test]
fn invokes_compiler_once_per_schema_with_stable_prefix() {
    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");
    let log = metadir.path().join("calls.log");
    write_fake_compiler(metadir.path(), &log, None);
    schema(&parent.path().join("api"), "a.proto");
    schema(&parent.path().join("api"), "sub/b.proto");

    let summary = generate(metadir.path(), parent.path(), "", GenMode::Execute);

    assert_eq!(summary.files.len(), 2);
    assert!(summary
        .files
        .iter()
        .all(|f| f.status == FileStatus::Generated));

    let calls = logged_invocations(&log);
    assert_eq!(calls.len(), 2);
    let (first_fixed, first_schema) = calls[0].split_at(calls[0].len() - 1);
    let (second_fixed, second_schema) = calls[1].split_at(calls[1].len() - 1);
    assert_eq!(first_fixed, second_fixed, "only the trailing argument may differ");
    assert_eq!(first_schema[0], "a.proto");
    assert_eq!(second_schema[0], "sub/b.proto");
}

#[test]
fn stale_output_is_removed_even_when_the_compiler_fails() {
    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");
    let log = metadir.path().join("calls.log");
    write_fake_compiler(metadir.path(), &log, Some(".proto"));

    let api = parent.path().join("api");
    schema(&api, "sub/foo.proto");
    let stale = api.join("sub/foo.pb.go");
    fs::write(&stale, b"old generated code").expect("write stale");

    let summary = generate(metadir.path(), parent.path(), "", GenMode::Execute);

    assert!(!stale.exists(), "stale output must be deleted before the compiler runs");
    assert!(matches!(summary.files[0].status, FileStatus::Failed { .. }));
}

#[test]
fn one_bad_schema_does_not_block_siblings() {
    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");
    let log = metadir.path().join("calls.log");
    write_fake_compiler(metadir.path(), &log, Some("bad.proto"));

    let api = parent.path().join("api");
    schema(&api, "a.proto");
    schema(&api, "bad.proto");
    schema(&api, "c.proto");

    let summary = generate(metadir.path(), parent.path(), "", GenMode::Execute);

    let statuses: Vec<_> = summary
        .files
        .iter()
        .map(|f| (f.schema.as_str(), matches!(f.status, FileStatus::Generated)))
        .collect();
    assert_eq!(
        statuses,
        vec![("a.proto", true), ("bad.proto", false), ("c.proto", true)]
    );
    assert_eq!(logged_invocations(&log).len(), 3, "every schema must be attempted");
}

#[test]
fn unlaunchable_compiler_is_a_per_file_failure() {
    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");
    schema(&parent.path().join("api"), "a.proto");

    // No compiler in the metadir at all.
    let summary = generate(metadir.path(), parent.path(), "", GenMode::Execute);

    match &summary.files[0].status {
        FileStatus::Failed { reason } => assert!(reason.contains("failed to launch")),
        other => panic!("expected launch failure, got {other:?}"),
    }
}

#[test]
fn extra_include_paths_appear_before_the_builtin_ones() {
    let metadir = TempDir::new().expect("metadir");
    let parent = TempDir::new().expect("parent");
    let log = metadir.path().join("calls.log");
    write_fake_compiler(metadir.path(), &log, None);
    schema(&parent.path().join("api"), "a.proto");

    generate(metadir.path(), parent.path(), "vendor,shared", GenMode::Execute);

    let calls = logged_invocations(&log);
    let args = &calls[0];
    let vendor = args.iter().position(|a| a == "--proto_path=vendor").expect("vendor");
    let shared = args.iter().position(|a| a == "--proto_path=shared").expect("shared");
    let metadir_arg = args
        .iter()
        .position(|a| *a == format!("--proto_path={}", metadir.path().display()))
        .expect("metadir include");
    assert!(vendor < shared && shared < metadir_arg);
    let api_arg = args
        .iter()
        .position(|a| *a == format!("--proto_path={}", parent.path().join("api").display()))
        .expect("api include");
    assert!(metadir_arg < api_arg);
}
