//! Issue types for template diagnostics.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it: severity, rule, location and source context.

use enum_dispatch::enum_dispatch;

use crate::core::{
    SourcePosition,
    template::{MalformedReason, TemplateSyntaxError},
};

// ============================================================
// Severity and Rule
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

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnterminatedTag,
    UnparsableExpression,
    MalformedI18nTag,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnterminatedTag => write!(f, "unterminated-tag"),
            Rule::UnparsableExpression => write!(f, "unparsable-expression"),
            Rule::MalformedI18nTag => write!(f, "malformed-i18n-tag"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Source Context
// ============================================================

/// A position in a template file together with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    /// The template line content for display.
    pub source_line: String,
}

impl SourceContext {
    /// Resolve a byte offset in `source` into a context.
    pub fn locate(file_path: impl Into<String>, source: &str, offset: usize) -> Self {
        let SourcePosition {
            line,
            col,
            source_line,
        } = SourcePosition::locate(source, offset);
        Self {
            file_path: file_path.into(),
            line,
            col,
            source_line,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A template that could not be tokenized or whose filter expression
/// could not be parsed. Extraction of the file stopped here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorIssue {
    pub context: SourceContext,
    pub error: TemplateSyntaxError,
}

impl SyntaxErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule(&self) -> Rule {
        match self.error {
            TemplateSyntaxError::UnterminatedTag { .. } => Rule::UnterminatedTag,
            TemplateSyntaxError::UnparsableFilterExpression { .. } => Rule::UnparsableExpression,
        }
    }
}

/// An i18n tag skipped because its literals were malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTagIssue {
    pub context: SourceContext,
    pub tag_name: String,
    pub reason: MalformedReason,
}

impl MalformedTagIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MalformedI18nTag
    }
}

/// File could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A template issue found during extraction.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    SyntaxError(SyntaxErrorIssue),
    MalformedTag(MalformedTagIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::SyntaxError(_) => SyntaxErrorIssue::severity(),
            Issue::MalformedTag(_) => MalformedTagIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::SyntaxError(issue) => issue.rule(),
            Issue::MalformedTag(_) => MalformedTagIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Template location with a source line for context display.
    Source(&'a SourceContext),
    /// File-level only, no line context.
    File { path: &'a str },
}

/// Everything the cargo-style reporter needs from an issue.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for SyntaxErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.error.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule()
    }

    fn hint(&self) -> Option<&str> {
        match self.error {
            TemplateSyntaxError::UnterminatedTag { .. } => {
                Some("close the tag on this or a later line")
            }
            TemplateSyntaxError::UnparsableFilterExpression { .. } => {
                Some("translatable text is written as _(\"text\") with matching quotes")
            }
        }
    }

    fn details(&self) -> Option<String> {
        Some("no strings were extracted from this file".to_string())
    }
}

impl Report for MalformedTagIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("`{}` tag skipped: {}", self.tag_name, self.reason)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
