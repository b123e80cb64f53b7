#![forbid(unsafe_code)]

//! Core domain types for cursor-rules
//!
//! This module defines the small value types that make up a rule record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// When the consuming editor activates a rule
///
/// The four well-known kinds render with their display names; anything else
/// is carried through verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    /// Applies to every request
    Always,
    /// Attached when a matching file is in context
    AutoAttached,
    /// Applies only when referenced explicitly
    Manual,
    /// Offered to the agent, which decides from the description
    AgentRequested,
    /// Any other classification, rendered as-is
    Other(String),
}

impl RuleType {
    /// Returns the header text for this rule type
    pub fn as_str(&self) -> &str {
        match self {
            RuleType::Always => "Always",
            RuleType::AutoAttached => "Auto Attached",
            RuleType::Manual => "Manual",
            RuleType::AgentRequested => "Agent Requested",
            RuleType::Other(name) => name,
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for RuleType {
    fn from(value: &str) -> Self {
        match value {
            "Always" => RuleType::Always,
            "Auto Attached" => RuleType::AutoAttached,
            "Manual" => RuleType::Manual,
            "Agent Requested" => RuleType::AgentRequested,
            other => RuleType::Other(other.to_string()),
        }
    }
}

impl From<String> for RuleType {
    fn from(value: String) -> Self {
        RuleType::from(value.as_str())
    }
}

impl From<RuleType> for String {
    fn from(rule_type: RuleType) -> Self {
        rule_type.as_str().to_string()
    }
}

/// A glob pattern naming the files a rule is relevant to
///
/// Patterns are written out as given; they are never compiled or matched here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GlobPattern {
    fn from(pattern: String) -> Self {
        GlobPattern(pattern)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}
