//! Recognizer for the `i18n` tag families.
//!
//! | tag                      | literals                  |
//! |--------------------------|---------------------------|
//! | `i18n`, `i18n_var`       | message                   |
//! | `i18nc`, `i18nc_var`     | context, message          |
//! | `i18np`, `i18np_var`     | message, plural           |
//! | `i18ncp`, `i18ncp_var`   | context, message, plural  |
//!
//! Remaining fragments are substitution arguments up to an `as` keyword,
//! which starts the variable binding of the `_var` forms.

use std::fmt;

use thiserror::Error;

use super::filter::QuotedLiteral;
use super::smart_split::smart_split;
use crate::core::entries::ContextualEntry;

pub const BINDING_KEYWORD: &str = "as";
const VAR_SUFFIX: &str = "_var";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum I18nFamily {
    I18n,
    I18nc,
    I18np,
    I18ncp,
}

impl I18nFamily {
    /// Map a tag name, plain or `_var` form, to its family.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name.strip_suffix(VAR_SUFFIX).unwrap_or(name) {
            "i18n" => Some(I18nFamily::I18n),
            "i18nc" => Some(I18nFamily::I18nc),
            "i18np" => Some(I18nFamily::I18np),
            "i18ncp" => Some(I18nFamily::I18ncp),
            _ => None,
        }
    }

    /// Positional literal arguments, in order.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            I18nFamily::I18n => &[Slot::Message],
            I18nFamily::I18nc => &[Slot::Context, Slot::Message],
            I18nFamily::I18np => &[Slot::Message, Slot::Plural],
            I18nFamily::I18ncp => &[Slot::Context, Slot::Message, Slot::Plural],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Context,
    Message,
    Plural,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Context => write!(f, "context"),
            Slot::Message => write!(f, "message"),
            Slot::Plural => write!(f, "plural"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("missing {0} argument")]
    MissingArgument(Slot),
    #[error("{slot} argument `{fragment}` is not a quoted literal")]
    NotQuoted { slot: Slot, fragment: String },
}

/// An i18n-named tag whose literals could not be read. Not fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTag {
    pub tag_name: String,
    pub reason: MalformedReason,
    /// Byte offset of the offending fragment inside the tag contents.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nTag<'a> {
    pub entry: ContextualEntry,
    /// Substitution arguments, `as` and the binding after it excluded.
    pub arguments: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch<'a> {
    NotI18n,
    I18n(I18nTag<'a>),
    Malformed(MalformedTag),
}

/// Recognize an i18n tag from the contents of a Block token.
pub fn recognize_tag(contents: &str) -> TagMatch<'_> {
    let mut bits = smart_split(contents);
    let Some(tag_name) = bits.next() else {
        return TagMatch::NotI18n;
    };
    let Some(family) = I18nFamily::from_tag_name(tag_name) else {
        return TagMatch::NotI18n;
    };

    let malformed = |reason, offset| {
        TagMatch::Malformed(MalformedTag {
            tag_name: tag_name.to_string(),
            reason,
            offset,
        })
    };

    let mut entry = ContextualEntry::default();
    for &slot in family.slots() {
        let Some(bit) = bits.next() else {
            return malformed(MalformedReason::MissingArgument(slot), contents.len());
        };
        let Some(literal) = QuotedLiteral::parse(bit) else {
            return malformed(
                MalformedReason::NotQuoted {
                    slot,
                    fragment: bit.to_string(),
                },
                offset_in(contents, bit),
            );
        };
        let text = literal.inner().to_string();
        match slot {
            Slot::Context => entry.context = text,
            Slot::Message => entry.message = text,
            Slot::Plural => entry.plural = text,
        }
    }

    let arguments = bits.take_while(|bit| *bit != BINDING_KEYWORD).collect();

    TagMatch::I18n(I18nTag { entry, arguments })
}

/// Byte offset of `part` inside `whole`. `part` must be a subslice of `whole`.
pub(crate) fn offset_in(whole: &str, part: &str) -> usize {
    part.as_ptr() as usize - whole.as_ptr() as usize
}
