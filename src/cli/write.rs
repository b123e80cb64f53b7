//! Write command implementation
//!
//! Writes the built-in rule table into the target directory and prints the
//! confirmation (or JSONL records) to stdout.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::emitter::{self, EmitResult};
use crate::error::EmitError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::builtin_table;
use std::path::Path;

/// Run the write command
///
/// # Returns
///
/// Exit code:
/// - 0: All files written
/// - 2: Error (the first failure is printed to stderr)
pub fn run_write(dir: &Path, format: OutputFormat) -> i32 {
    match run_write_inner(dir) {
        Ok(result) => {
            print!("{}", format_result(&result, format));
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_write_inner(dir: &Path) -> Result<EmitResult, EmitError> {
    let table = builtin_table();
    emitter::emit(&table, dir)
}

fn format_result(result: &EmitResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => HumanFormatter::new().format_emit(result),
        OutputFormat::Jsonl => JsonlFormatter::new().format_emit(result),
    }
}
