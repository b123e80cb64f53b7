#![forbid(unsafe_code)]

//! Built-in rules embedded at compile time
//!
//! The rule bodies live as Markdown under `builtin-rules/` and are compiled
//! into the binary with `include_str!`, so the executable is self-contained.

use crate::rules::{RuleRecord, RuleTable};

/// Static description of one built-in rule
struct BuiltinRule {
    file_name: &'static str,
    rule_type: &'static str,
    file_patterns: &'static [&'static str],
    description: Option<&'static str>,
    content: &'static str,
}

/// Built-in rules, in write order
const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        file_name: "always.mdc",
        rule_type: "Always",
        file_patterns: &[],
        description: None,
        content: include_str!("../../builtin-rules/always.md"),
    },
    BuiltinRule {
        file_name: "testing.mdc",
        rule_type: "Always",
        file_patterns: &["*_test.py", "tests/**", "*.spec.tsx"],
        description: None,
        content: include_str!("../../builtin-rules/testing.md"),
    },
    BuiltinRule {
        file_name: "git-rules.mdc",
        rule_type: "Auto Attached",
        file_patterns: &["*.sh", "*.gitignore", ".cursor/config.json"],
        description: None,
        content: include_str!("../../builtin-rules/git-rules.md"),
    },
    BuiltinRule {
        file_name: "build-planning.mdc",
        rule_type: "Auto Attached",
        file_patterns: &["docs/*.md", "plans/*.json"],
        description: None,
        content: include_str!("../../builtin-rules/build-planning.md"),
    },
    BuiltinRule {
        file_name: "context-passing.mdc",
        rule_type: "Auto Attached",
        file_patterns: &["*.md", "context/*.json"],
        description: None,
        content: include_str!("../../builtin-rules/context-passing.md"),
    },
    BuiltinRule {
        file_name: "manual.mdc",
        rule_type: "Manual",
        file_patterns: &[],
        description: None,
        content: include_str!("../../builtin-rules/manual.md"),
    },
    BuiltinRule {
        file_name: "agent-requested.mdc",
        rule_type: "Agent Requested",
        file_patterns: &[],
        description: Some(
            "Use when a task requires alternative approaches, deep optimizations, or refactoring guidance.",
        ),
        content: include_str!("../../builtin-rules/agent-requested.md"),
    },
];

impl BuiltinRule {
    fn to_record(&self) -> RuleRecord {
        let mut record = RuleRecord::new(self.file_name, self.rule_type, self.content);
        // An empty slice means "no patterns line", not an empty one.
        if !self.file_patterns.is_empty() {
            record = record.with_file_patterns(self.file_patterns.iter().copied());
        }
        if let Some(description) = self.description {
            record = record.with_description(description);
        }
        record
    }
}

/// Build the table of built-in rules
pub fn builtin_table() -> RuleTable {
    BUILTIN_RULES.iter().map(BuiltinRule::to_record).collect()
}
