#![forbid(unsafe_code)]

//! A single rule file and its rendering

use crate::types::{GlobPattern, RuleType};

/// One named rule file: metadata headers plus a Markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRecord {
    /// File name under the rules directory (the table key)
    pub file_name: String,
    /// When the editor applies this rule
    pub rule_type: RuleType,
    /// Files the rule is attached to, in display order
    pub file_patterns: Option<Vec<GlobPattern>>,
    /// Hint shown to the agent for requested rules
    pub description: Option<String>,
    /// Body written verbatim after the headers
    pub content: String,
}

impl RuleRecord {
    /// Creates a record with no file patterns and no description
    pub fn new(
        file_name: impl Into<String>,
        rule_type: impl Into<RuleType>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            rule_type: rule_type.into(),
            file_patterns: None,
            description: None,
            content: content.into(),
        }
    }

    /// Sets the file patterns line
    pub fn with_file_patterns<I, P>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<GlobPattern>,
    {
        self.file_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the description line
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render the full file text
    ///
    /// Layout, each header followed by a blank line:
    /// - `Rule Type: <type>`
    /// - `File Pattern Matches: <p1>, <p2>, ...` (only when patterns are set)
    /// - `Description: <text>` (only when a description is set)
    ///
    /// then the content exactly as stored.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.content.len() + 128);

        out.push_str("Rule Type: ");
        out.push_str(self.rule_type.as_str());
        out.push_str("\n\n");

        if let Some(patterns) = &self.file_patterns {
            let joined = patterns
                .iter()
                .map(GlobPattern::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str("File Pattern Matches: ");
            out.push_str(&joined);
            out.push_str("\n\n");
        }

        if let Some(description) = &self.description {
            out.push_str("Description: ");
            out.push_str(description);
            out.push_str("\n\n");
        }

        out.push_str(&self.content);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_type_and_content_only() {
        let record = RuleRecord::new("x.mdc", RuleType::Always, "hello\n");
        assert_eq!(record.render(), "Rule Type: Always\n\nhello\n");
    }

    #[test]
    fn test_render_with_file_patterns() {
        let record = RuleRecord::new("x.mdc", RuleType::Always, "hello\n")
            .with_file_patterns(["*.py", "tests/**"]);
        assert_eq!(
            record.render(),
            "Rule Type: Always\n\nFile Pattern Matches: *.py, tests/**\n\nhello\n"
        );
    }

    #[test]
    fn test_render_with_description() {
        let record = RuleRecord::new("x.mdc", RuleType::AgentRequested, "body\n")
            .with_description("Use when refactoring");
        assert_eq!(
            record.render(),
            "Rule Type: Agent Requested\n\nDescription: Use when refactoring\n\nbody\n"
        );
    }

    #[test]
    fn test_render_patterns_before_description() {
        let record = RuleRecord::new("x.mdc", RuleType::AutoAttached, "body\n")
            .with_description("desc")
            .with_file_patterns(["*.sh"]);
        assert_eq!(
            record.render(),
            "Rule Type: Auto Attached\n\nFile Pattern Matches: *.sh\n\nDescription: desc\n\nbody\n"
        );
    }

    #[test]
    fn test_render_empty_pattern_list_keeps_header() {
        let patterns: [&str; 0] = [];
        let record = RuleRecord::new("x.mdc", RuleType::Manual, "").with_file_patterns(patterns);
        assert_eq!(
            record.render(),
            "Rule Type: Manual\n\nFile Pattern Matches: \n\n"
        );
    }

    #[test]
    fn test_render_content_is_verbatim() {
        let content = "# Title\n\n- item\n  - nested `code`\n";
        let record = RuleRecord::new("x.mdc", "Custom Kind", content);
        let rendered = record.render();
        assert!(rendered.starts_with("Rule Type: Custom Kind\n\n"));
        assert!(rendered.ends_with(content));
    }

    #[test]
    fn test_render_is_deterministic() {
        let record = RuleRecord::new("x.mdc", RuleType::Always, "hello\n")
            .with_file_patterns(["a", "b"]);
        assert_eq!(record.render(), record.render());
    }
}
