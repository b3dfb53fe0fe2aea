//! Per-template string extraction.
//!
//! Runs the tokenizer, then scans every Variable token as one filter
//! expression and every Block token through the i18n tag recognizer or,
//! for other tags, fragment by fragment. Each call owns its own
//! accumulator; nothing is shared between templates.

use tracing::debug;

use crate::core::entries::ExtractedStrings;
use crate::core::template::{
    FilterExpression, Lexer, MalformedTag, TagMatch, TemplateSyntaxError, Token, TokenKind,
    filter::TRANSLATION_OPEN, i18n_tags::offset_in, recognize_tag, smart_split,
};


/// An i18n tag that was skipped because its literals were malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTag {
    pub tag: MalformedTag,
    /// Byte offset in the template.
    pub offset: usize,
}

/// Result of extracting one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub strings: ExtractedStrings,
    pub skipped_tags: Vec<SkippedTag>,
}

/// Extract every translatable string from `template`.
///
/// Malformed i18n tags are recorded in [`Extraction::skipped_tags`] and
/// scanning continues. Unterminated tags and unparsable filter expressions
/// abort extraction of this template.
pub fn extract_strings(template: &str) -> Result<Extraction, TemplateSyntaxError> {
    let mut extractor = Extractor {
        template,
        extraction: Extraction::default(),
    };

    for token in Lexer::new(template) {
        extractor.visit(&token?)?;
    }

    Ok(extractor.extraction)
}

struct Extractor<'t> {
    template: &'t str,
    extraction: Extraction,
}

impl<'t> Extractor<'t> {
    fn visit(&mut self, token: &Token<'t>) -> Result<(), TemplateSyntaxError> {
        let base = token.contents_offset(self.template);
        match token.kind {
            TokenKind::Variable => self.scan_expression(token.contents, base),
            TokenKind::Block => self.visit_block(token.contents, base),
            TokenKind::Text | TokenKind::Comment => Ok(()),
        }
    }

    fn visit_block(&mut self, contents: &'t str, base: usize) -> Result<(), TemplateSyntaxError> {
        match recognize_tag(contents) {
            TagMatch::I18n(tag) => {
                self.extraction.strings.contextual.push(tag.entry);
                for argument in tag.arguments {
                    self.scan_tag_fragment(contents, argument, base)?;
                }
                Ok(())
            }
            TagMatch::Malformed(tag) => {
                let offset = base + tag.offset;
                debug!(tag = %tag.tag_name, offset, reason = %tag.reason, "skipping malformed i18n tag");
                self.extraction.skipped_tags.push(SkippedTag { tag, offset });
                self.scan_tag_arguments(contents, base)
            }
            TagMatch::NotI18n => self.scan_tag_arguments(contents, base),
        }
    }

    /// Scan every fragment after the tag name.
    fn scan_tag_arguments(&mut self, contents: &'t str, base: usize) -> Result<(), TemplateSyntaxError> {
        for fragment in smart_split(contents).skip(1) {
            self.scan_tag_fragment(contents, fragment, base)?;
        }
        Ok(())
    }

    /// Block fragments without a translation opener are tag syntax
    /// (`==`, `not`, `total=1`) rather than filter expressions. A keyword
    /// prefix such as `greeting=` is dropped before parsing.
    fn scan_tag_fragment(
        &mut self,
        contents: &'t str,
        fragment: &'t str,
        base: usize,
    ) -> Result<(), TemplateSyntaxError> {
        if !fragment.contains(TRANSLATION_OPEN) {
            return Ok(());
        }
        let expression = strip_keyword(fragment);
        self.scan_expression(expression, base + offset_in(contents, expression))
    }

    fn scan_expression(&mut self, fragment: &'t str, offset: usize) -> Result<(), TemplateSyntaxError> {
        let expression = FilterExpression::parse(fragment).map_err(|err| {
            TemplateSyntaxError::UnparsableFilterExpression {
                fragment: fragment.to_string(),
                offset: offset + err.position,
                reason: err.reason,
            }
        })?;

        self.extraction
            .strings
            .plain
            .extend(expression.translations().map(|literal| literal.inner().to_string()));
        Ok(())
    }
}

/// `name=value` -> `value`. Anything else is returned unchanged.
fn strip_keyword(fragment: &str) -> &str {
    let name_len = fragment
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(fragment.len(), |(i, _)| i);
    match fragment[name_len..].strip_prefix('=') {
        Some(value) if name_len > 0 && !value.starts_with('=') => value,
        _ => fragment,
    }
}
