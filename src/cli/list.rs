//! List command implementation
//!
//! Prints the built-in rules (file name, type, patterns, description)
//! without touching the filesystem.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_SUCCESS, format_table};
use crate::rules::builtin_table;

/// Run the list command
///
/// Listing cannot fail, so this always returns 0.
pub fn run_list(format: OutputFormat) -> i32 {
    let table = builtin_table();
    print!("{}", format_table(&table, format));
    EXIT_SUCCESS
}
