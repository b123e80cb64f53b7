//! Test utilities for cursor-rules integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// File names of the built-in rules, in write order
pub const BUILTIN_FILE_NAMES: &[&str] = &[
    "always.mdc",
    "testing.mdc",
    "git-rules.mdc",
    "build-planning.mdc",
    "context-passing.mdc",
    "manual.mdc",
    "agent-requested.mdc",
];

/// Read every regular file in `dir`, sorted by name
pub fn snapshot_dir(dir: &Path) -> TestResult<Vec<(PathBuf, Vec<u8>)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            let bytes = fs::read(&path)?;
            entries.push((path, bytes));
        }
    }
    entries.sort();
    Ok(entries)
}
