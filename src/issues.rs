//! Issue types for rewrite results.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users
//! - Fix command: to apply the attached edits
//!
//! Emitting an issue never mutates source text; the edits it carries are
//! observations for the host to apply.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::rules::ArgKind;
use crate::rules::synthesize::EditPair;

// ============================================================
// Severity
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================
// Source context
// ============================================================

/// Where an issue points in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based display column.
    pub col: usize,
    /// The full text of the line, for caret display.
    pub source_line: Option<String>,
}

// ============================================================
// Issue types
// ============================================================

/// One constructor argument that can move into a builder call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteIssue {
    pub context: SourceContext,
    pub kind: ArgKind,
    /// Verbatim text of the matched argument.
    pub argument: String,
    /// The builder call the argument becomes.
    pub builder_call: String,
    /// The deletion/insertion pair that performs the rewrite.
    pub edits: EditPair,
}

impl RewriteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }
}

// ============================================================
// Issue enum
// ============================================================

/// An issue found during a migration pass.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Rewrite(RewriteIssue),
    ParseError(ParseErrorIssue),
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // File, then position, then message: keeps report output stable
        // when several arguments match on the same line.
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.line().cmp(&other.line()))
            .then_with(|| self.col().cmp(&other.col()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Report trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI. Uses `enum_dispatch`
/// for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// The file this issue points at.
    fn file_path(&self) -> &str;

    /// 1-based line, when the issue has a position.
    fn line(&self) -> Option<usize>;

    /// 1-based column, when the issue has a position.
    fn col(&self) -> Option<usize>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier shown next to the message.
    fn rule_name(&self) -> String;

    /// The source line under the issue, for caret display.
    fn source_line(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for RewriteIssue {
    fn file_path(&self) -> &str {
        &self.context.file_path
    }

    fn line(&self) -> Option<usize> {
        Some(self.context.line)
    }

    fn col(&self) -> Option<usize> {
        Some(self.context.col)
    }

    fn message(&self) -> String {
        self.argument.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn rule_name(&self) -> String {
        self.kind.to_string()
    }

    fn source_line(&self) -> Option<&str> {
        self.context.source_line.as_deref()
    }

    fn details(&self) -> Option<String> {
        Some(format!("moves to `{}`", self.builder_call))
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn line(&self) -> Option<usize> {
        None
    }

    fn col(&self) -> Option<usize> {
        None
    }

    fn message(&self) -> String {
        format!("Failed to parse: {}", self.error)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn rule_name(&self) -> String {
        "parse-error".to_string()
    }
}
