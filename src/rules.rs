#![forbid(unsafe_code)]

//! Rule records, the rule table, and the built-in rule set

mod builtin;
mod record;
mod table;

// Re-export core types
pub use builtin::builtin_table;
pub use record::RuleRecord;
pub use table::RuleTable;
