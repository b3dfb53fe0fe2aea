//! Template tokenizer.
//!
//! Splits a template into Text, Variable (`{{ }}`), Block (`{% %}`) and
//! Comment (`{# #}`) tokens. Tags close at the nearest matching end
//! delimiter and never nest. Every byte of the input belongs to exactly one
//! token span, so joining the spans gives back the original text.

use std::fmt;
use std::ops::Range;

use super::error::TemplateSyntaxError;

pub const VARIABLE_TAG_START: &str = "{{";
pub const VARIABLE_TAG_END: &str = "}}";
pub const BLOCK_TAG_START: &str = "{%";
pub const BLOCK_TAG_END: &str = "%}";
pub const COMMENT_TAG_START: &str = "{#";
pub const COMMENT_TAG_END: &str = "#}";

const DELIMITER_LEN: usize = 2;

/// The three delimiter pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Variable,
    Block,
    Comment,
}

impl TagKind {
    pub fn open_delimiter(self) -> &'static str {
        match self {
            TagKind::Variable => VARIABLE_TAG_START,
            TagKind::Block => BLOCK_TAG_START,
            TagKind::Comment => COMMENT_TAG_START,
        }
    }

    pub fn close_delimiter(self) -> &'static str {
        match self {
            TagKind::Variable => VARIABLE_TAG_END,
            TagKind::Block => BLOCK_TAG_END,
            TagKind::Comment => COMMENT_TAG_END,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Variable => write!(f, "variable"),
            TagKind::Block => write!(f, "block"),
            TagKind::Comment => write!(f, "comment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Variable,
    Block,
    Comment,
}

impl From<TagKind> for TokenKind {
    fn from(kind: TagKind) -> Self {
        match kind {
            TagKind::Variable => TokenKind::Variable,
            TagKind::Block => TokenKind::Block,
            TagKind::Comment => TokenKind::Comment,
        }
    }
}

/// One token borrowed from the template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    pub kind: TokenKind,
    /// Text tokens hold their text verbatim. Variable and Block tokens hold
    /// the trimmed text between the delimiters. Comment tokens are empty.
    pub contents: &'t str,
    /// Byte range of the whole token in the template, delimiters included.
    pub span: Range<usize>,
}

impl<'t> Token<'t> {
    /// The exact template text this token was cut from.
    pub fn source_text<'a>(&self, template: &'a str) -> &'a str {
        &template[self.span.clone()]
    }

    /// Byte offset of `contents` in the template.
    pub fn contents_offset(&self, template: &str) -> usize {
        if self.contents.is_empty() {
            return self.span.start;
        }
        self.contents.as_ptr() as usize - template.as_ptr() as usize
    }
}

/// Tokenize a whole template.
///
/// Fails with [`TemplateSyntaxError::UnterminatedTag`] when a `{{` or `{%`
/// never closes. An unclosed `{#` is kept as plain text.
pub fn tokenize(template: &str) -> Result<Vec<Token<'_>>, TemplateSyntaxError> {
    Lexer::new(template).collect()
}

/// Streaming tokenizer. Yields at most one error, then stops.
pub struct Lexer<'t> {
    template: &'t str,
    pos: usize,
    /// Last `#}` lookup: `Some(None)` once no closer is left.
    comment_close: Option<Option<usize>>,
}

impl<'t> Lexer<'t> {
    pub fn new(template: &'t str) -> Self {
        Self {
            template,
            pos: 0,
            comment_close: None,
        }
    }

    /// Earliest tag opener at or after `from`. Comment openers without a
    /// closer are skipped and stay part of the surrounding text.
    fn find_next_tag(&mut self, from: usize) -> Option<(usize, TagKind)> {
        let template = self.template;
        let mut search = from;
        while let Some(offset) = template[search..].find('{') {
            let start = search + offset;
            let opener = [TagKind::Variable, TagKind::Block, TagKind::Comment]
                .into_iter()
                .find(|kind| template[start..].starts_with(kind.open_delimiter()));
            let Some(kind) = opener else {
                search = start + 1;
                continue;
            };

            if kind == TagKind::Comment && self.find_close(start, kind).is_none() {
                search = start + DELIMITER_LEN;
                continue;
            }
            return Some((start, kind));
        }
        None
    }

    /// Byte index of the closing delimiter for a tag opened at `start`.
    fn find_close(&mut self, start: usize, kind: TagKind) -> Option<usize> {
        let body_start = start + DELIMITER_LEN;
        if kind == TagKind::Comment {
            return self.comment_close_after(body_start);
        }
        self.template[body_start..]
            .find(kind.close_delimiter())
            .map(|i| body_start + i)
    }

    /// Nearest `#}` at or after `body_start`. Lookups only move forward, so a
    /// cached closer past `body_start` is still the nearest one.
    fn comment_close_after(&mut self, body_start: usize) -> Option<usize> {
        match self.comment_close {
            Some(None) => None,
            Some(Some(close)) if close >= body_start => Some(close),
            _ => {
                let close = self.template[body_start..]
                    .find(COMMENT_TAG_END)
                    .map(|i| body_start + i);
                self.comment_close = Some(close);
                close
            }
        }
    }

    fn lex_tag(&mut self, start: usize, kind: TagKind) -> Result<Token<'t>, TemplateSyntaxError> {
        let Some(close) = self.find_close(start, kind) else {
            self.pos = self.template.len();
            return Err(TemplateSyntaxError::UnterminatedTag {
                kind,
                offset: start,
            });
        };

        let end = close + DELIMITER_LEN;
        self.pos = end;

        let contents = match kind {
            TagKind::Comment => "",
            TagKind::Variable | TagKind::Block => self.template[start + DELIMITER_LEN..close].trim(),
        };

        Ok(Token {
            kind: kind.into(),
            contents,
            span: start..end,
        })
    }

    fn lex_text(&mut self, end: usize) -> Token<'t> {
        let span = self.pos..end;
        self.pos = end;
        Token {
            kind: TokenKind::Text,
            contents: &self.template[span.clone()],
            span,
        }
    }
}

impl<'t> Iterator for Lexer<'t> {
    type Item = Result<Token<'t>, TemplateSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.template.len() {
            return None;
        }

        Some(match self.find_next_tag(self.pos) {
            Some((start, kind)) if start == self.pos => self.lex_tag(start, kind),
            Some((start, _)) => Ok(self.lex_text(start)),
            None => Ok(self.lex_text(self.template.len())),
        })
    }
}
