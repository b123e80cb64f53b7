#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Emit output is one `file` record per written file, in write order,
//! followed by one `summary` record. Table listings are one `rule` record
//! per table entry.
//!
//! Paths are written with `Path::display`, so a directory name that is not
//! valid UTF-8 is shown lossily instead of failing serialization.

use crate::emitter::{EmitResult, WriteStatus};
use crate::rules::RuleTable;
use crate::types::{GlobPattern, RuleType};
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format an emit result as JSONL
    pub fn format_emit(&self, result: &EmitResult) -> String {
        let mut output = String::new();

        for file in &result.files {
            push_line(
                &mut output,
                &FileRecord {
                    record_type: "file",
                    path: file.path.display().to_string(),
                    status: file.status,
                },
            );
        }

        push_line(
            &mut output,
            &SummaryRecord {
                record_type: "summary",
                dir: result.target_dir.display().to_string(),
                files_written: result.count(),
                created: result.created().count(),
                overwritten: result.overwritten().count(),
            },
        );

        output
    }

    /// Format the rule table as JSONL
    pub fn format_table(&self, table: &RuleTable) -> String {
        let mut output = String::new();

        for record in table {
            push_line(
                &mut output,
                &RuleLine {
                    record_type: "rule",
                    file_name: &record.file_name,
                    rule_type: &record.rule_type,
                    file_patterns: record.file_patterns.as_deref(),
                    description: record.description.as_deref(),
                },
            );
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Written-file record for JSONL output
#[derive(Debug, Serialize)]
struct FileRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: String,
    status: WriteStatus,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    dir: String,
    files_written: usize,
    created: usize,
    overwritten: usize,
}

/// Table entry record for JSONL output
#[derive(Debug, Serialize)]
struct RuleLine<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file_name: &'a str,
    rule_type: &'a RuleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_patterns: Option<&'a [GlobPattern]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::WrittenFile;
    use crate::rules::RuleRecord;
    use serde_json::Value;
    use std::path::PathBuf;

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_format_emit_records_then_summary() {
        let result = EmitResult {
            target_dir: PathBuf::from("rules"),
            files: vec![
                WrittenFile {
                    path: PathBuf::from("rules/a.mdc"),
                    status: WriteStatus::Created,
                },
                WrittenFile {
                    path: PathBuf::from("rules/b.mdc"),
                    status: WriteStatus::Overwritten,
                },
            ],
        };

        let lines = parse_lines(&JsonlFormatter::new().format_emit(&result));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "file");
        assert_eq!(lines[0]["path"], "rules/a.mdc");
        assert_eq!(lines[0]["status"], "created");
        assert_eq!(lines[1]["status"], "overwritten");
        assert_eq!(lines[2]["type"], "summary");
        assert_eq!(lines[2]["dir"], "rules");
        assert_eq!(lines[2]["files_written"], 2);
        assert_eq!(lines[2]["created"], 1);
        assert_eq!(lines[2]["overwritten"], 1);
    }

    #[test]
    fn test_format_emit_empty_has_summary_only() {
        let result = EmitResult {
            target_dir: PathBuf::from("rules"),
            files: vec![],
        };

        let lines = parse_lines(&JsonlFormatter::new().format_emit(&result));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["files_written"], 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_format_emit_non_utf8_directory() {
        use crate::emit;
        use crate::rules::builtin_table;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join(OsStr::from_bytes(b"rules\xff"));
        let result = emit(&builtin_table(), &target).unwrap();

        let lines = parse_lines(&JsonlFormatter::new().format_emit(&result));

        assert_eq!(lines.len(), result.count() + 1);
        assert!(lines[0]["path"].as_str().unwrap().contains("rules\u{FFFD}"));
        let summary = &lines[result.count()];
        assert_eq!(summary["type"], "summary");
        assert_eq!(summary["files_written"], 7);
        assert!(summary["dir"].as_str().unwrap().ends_with("rules\u{FFFD}"));
    }

    #[test]
    fn test_format_table_omits_absent_fields() {
        let table: RuleTable = [
            RuleRecord::new("always.mdc", RuleType::Always, "a\n"),
            RuleRecord::new("git.mdc", RuleType::AutoAttached, "g\n").with_file_patterns(["*.sh"]),
        ]
        .into_iter()
        .collect();

        let lines = parse_lines(&JsonlFormatter::new().format_table(&table));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "rule");
        assert_eq!(lines[0]["file_name"], "always.mdc");
        assert_eq!(lines[0]["rule_type"], "Always");
        assert!(lines[0].get("file_patterns").is_none());
        assert!(lines[0].get("description").is_none());
        assert_eq!(lines[1]["rule_type"], "Auto Attached");
        assert_eq!(lines[1]["file_patterns"][0], "*.sh");
    }
}
