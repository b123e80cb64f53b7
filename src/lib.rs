#![forbid(unsafe_code)]

//! cursor-rules: scaffold Cursor editor rule files
//!
//! Writes a built-in table of rule records into a project's rules directory
//! (`.cursor/rules` by default), one `.mdc` file per record, each rendered as
//! a rule-type header, optional pattern and description lines, and a
//! Markdown body.

pub mod cli;
pub mod emitter;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::EmitError;

// Re-export core domain types for convenient access
pub use emitter::{DEFAULT_RULES_DIR, EmitResult, WriteStatus, WrittenFile, emit};
pub use rules::{RuleRecord, RuleTable, builtin_table};
pub use types::{GlobPattern, RuleType};
