use thiserror::Error;

use super::lexer::TagKind;

/// Why a filter expression could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseReason {
    #[error("quoted literal is never closed")]
    UnclosedLiteral,
    #[error("translation call `_(` must wrap a quoted literal")]
    TranslationWithoutLiteral,
    #[error("translation call is missing its closing `)`")]
    UnclosedTranslation,
    #[error("expected a filter name after `|`")]
    MissingFilterName,
    #[error("expected an argument after `:`")]
    MissingFilterArgument,
    #[error("unexpected `{0}`")]
    UnexpectedInput(String),
}

/// Failure of the standalone filter-expression parser.
///
/// `position` is the byte offset inside the parsed fragment where parsing
/// stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at byte {position}")]
pub struct FilterParseError {
    pub position: usize,
    pub reason: FilterParseReason,
}

/// Fatal error for one template. Extraction of that template stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateSyntaxError {
    #[error("unterminated {kind} tag: no `{}` before end of template", .kind.close_delimiter())]
    UnterminatedTag { kind: TagKind, offset: usize },

    #[error("cannot parse filter expression `{fragment}`: {reason}")]
    UnparsableFilterExpression {
        fragment: String,
        /// Byte offset in the template where parsing stopped.
        offset: usize,
        reason: FilterParseReason,
    },
}

impl TemplateSyntaxError {
    /// Absolute byte offset of the error in the template text.
    pub fn offset(&self) -> usize {
        match self {
            TemplateSyntaxError::UnterminatedTag { offset, .. }
            | TemplateSyntaxError::UnparsableFilterExpression { offset, .. } => *offset,
        }
    }
}
