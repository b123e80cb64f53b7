#![forbid(unsafe_code)]

//! Human-readable output formatter

use crate::emitter::EmitResult;
use crate::rules::RuleTable;
use crate::types::GlobPattern;

/// Human-readable formatter
///
/// The emit summary is the single confirmation line printed on success.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the confirmation for a finished emit pass
    pub fn format_emit(&self, result: &EmitResult) -> String {
        let count = result.count();
        format!(
            "Wrote {} rule {} to {} ({} created, {} overwritten)\n",
            count,
            if count == 1 { "file" } else { "files" },
            result.target_dir.display(),
            result.created().count(),
            result.overwritten().count()
        )
    }

    /// Format the rule table as an indented listing
    pub fn format_table(&self, table: &RuleTable) -> String {
        if table.is_empty() {
            return "No rules defined.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("Rules ({}):\n", table.len()));
        output.push('\n');

        for record in table {
            output.push_str(&format!("{}\n", record.file_name));
            output.push_str(&format!("  Rule Type: {}\n", record.rule_type));
            if let Some(patterns) = &record.file_patterns {
                let joined: Vec<&str> = patterns.iter().map(GlobPattern::as_str).collect();
                output.push_str(&format!("  File Patterns: {}\n", joined.join(", ")));
            }
            if let Some(description) = &record.description {
                output.push_str(&format!("  Description: {}\n", description));
            }
            output.push('\n');
        }

        output
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
