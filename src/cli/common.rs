//! Common helpers shared across CLI commands

use crate::cli::args::OutputFormat;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::RuleTable;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Render a rule table listing in the requested format
pub(crate) fn format_table(table: &RuleTable, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => HumanFormatter::new().format_table(table),
        OutputFormat::Jsonl => JsonlFormatter::new().format_table(table),
    }
}
