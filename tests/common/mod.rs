#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};
use dirpick::Entry;

/// Builds a fixture tree:
/// root/
///   a.txt      "hello"
///   sub/b.txt  "world"
///   empty/
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("a.txt").write_str("hello").unwrap();
    td.child("sub/b.txt").write_str("world").unwrap();
    td.child("empty").create_dir_all().unwrap();
    td
}

/// A selected entry for `name` under `td`.
pub fn selected(
    td: &TempDir,
    name: &str,
) -> Entry {
    let mut entry = Entry::new(name, td.path().join(name));
    entry.selected = true;
    entry
}

pub fn rule() -> String {
    "-".repeat(80)
}

pub fn ok_block(
    rel: &str,
    content: &str,
) -> String {
    format!("File: {rel}\n\n{content}\n{}\n", rule())
}

pub fn failed_block(rel: &str) -> String {
    format!("File: {rel} could not be read.\n{}\n", rule())
}
