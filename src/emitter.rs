#![forbid(unsafe_code)]

//! Write a rule table to disk
//!
//! Emission is a single sequential pass: make sure the target directory
//! exists, then write one file per record, replacing whatever is there.
//! The first failure stops the pass and is returned to the caller; files
//! written before it are left in place.

use crate::error::EmitError;
use crate::rules::RuleTable;
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Rules directory used when no target is given, relative to the working directory
pub const DEFAULT_RULES_DIR: &str = ".cursor/rules";

/// Whether a file was new or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Created,
    Overwritten,
}

/// One file written during emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Full path of the written file
    pub path: PathBuf,
    /// Whether the path existed beforehand
    pub status: WriteStatus,
}

/// Result of an emit pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitResult {
    /// Directory the files were written into
    pub target_dir: PathBuf,
    /// Files in the order they were written
    pub files: Vec<WrittenFile>,
}

impl EmitResult {
    fn new(target_dir: &Path) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            files: Vec::new(),
        }
    }

    /// Number of files written
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// Paths that did not exist before this pass
    pub fn created(&self) -> impl Iterator<Item = &Path> {
        self.with_status(WriteStatus::Created)
    }

    /// Paths that were replaced
    pub fn overwritten(&self) -> impl Iterator<Item = &Path> {
        self.with_status(WriteStatus::Overwritten)
    }

    fn with_status(&self, status: WriteStatus) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(move |f| f.status == status)
            .map(|f| f.path.as_path())
    }
}

/// Write every record of `table` into `target_dir`
///
/// `target_dir` and any missing parents are created first. Each record is
/// written to `target_dir/<file_name>` using [`RuleRecord::render`],
/// overwriting existing files. An empty table only creates the directory.
///
/// File names are checked before anything touches the filesystem, so a bad
/// name never leaves a partially written directory behind.
///
/// # Errors
///
/// Returns `EmitError::InvalidFileName` if a record's file name is not a
/// single plain path component, `EmitError::NotADirectory` or
/// `EmitError::CreateDir` if the directory cannot be prepared, and
/// `EmitError::Write` for the first file that cannot be written.
///
/// [`RuleRecord::render`]: crate::rules::RuleRecord::render
pub fn emit(table: &RuleTable, target_dir: &Path) -> Result<EmitResult, EmitError> {
    for record in table {
        validate_file_name(&record.file_name)?;
    }

    ensure_directory(target_dir)?;

    let mut result = EmitResult::new(target_dir);
    for record in table {
        let path = target_dir.join(&record.file_name);
        let status = if path.exists() {
            WriteStatus::Overwritten
        } else {
            WriteStatus::Created
        };

        fs::write(&path, record.render()).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), ?status, "wrote rule file");

        result.files.push(WrittenFile { path, status });
    }

    info!(
        count = result.count(),
        dir = %target_dir.display(),
        "rule files written"
    );
    Ok(result)
}

/// Create the directory (and parents) unless it already exists
fn ensure_directory(dir: &Path) -> Result<(), EmitError> {
    if dir.exists() {
        if dir.is_dir() {
            return Ok(());
        }
        return Err(EmitError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    fs::create_dir_all(dir).map_err(|source| EmitError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), "created rules directory");
    Ok(())
}

/// A file name must resolve to exactly itself as one normal path component
fn validate_file_name(file_name: &str) -> Result<(), EmitError> {
    let invalid = || EmitError::InvalidFileName {
        file_name: file_name.to_string(),
    };

    if file_name.is_empty() || file_name.contains(['/', '\\']) {
        return Err(invalid());
    }

    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == file_name => Ok(()),
        _ => Err(invalid()),
    }
}
