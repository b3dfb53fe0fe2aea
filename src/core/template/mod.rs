//! Template syntax: tokenizer, smart splitter, filter expressions and the
//! i18n tag grammar.
//!
//! ## Module Structure
//!
//! - `lexer`: Text / Variable / Block / Comment tokens
//! - `smart_split`: quote-aware whitespace splitting of tag contents
//! - `filter`: filter-expression parser (`value|name:arg`)
//! - `i18n_tags`: `i18n`, `i18nc`, `i18np`, `i18ncp` and their `_var` forms
//! - `error`: syntax errors

pub mod error;
pub mod filter;
pub mod i18n_tags;
pub mod lexer;
pub mod smart_split;

pub use error::{FilterParseError, FilterParseReason, TemplateSyntaxError};
pub use filter::{FilterCall, FilterExpression, Operand, QuotedLiteral};
pub use i18n_tags::{I18nFamily, I18nTag, MalformedReason, MalformedTag, Slot, TagMatch, recognize_tag};
pub use lexer::{Lexer, TagKind, Token, TokenKind, tokenize};
pub use smart_split::{SmartSplit, smart_split};
