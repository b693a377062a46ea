#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use serde_json::Value;
use tempfile::TempDir;

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}

pub fn stdout_of(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

pub fn stderr_of(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr")
}

/// Tempdir with an `out/` cache root (not pre-created; the tool owns it) and
/// a real `pkg/` directory standing in for pre-fetched package contents.
pub fn seed_fixture(prefix: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let out = temp.path().join("out");
    let pkg = temp.path().join("pkg");
    fs::create_dir_all(&pkg).expect("package dir");
    (temp, out, pkg)
}

pub fn read_link(path: &Path) -> PathBuf {
    fs::read_link(path).expect("read link")
}
