//! Catalog renderers.
//!
//! A renderer turns one template's [`ExtractedStrings`] into source-code
//! calls that a catalog toolchain (xgettext, lupdate) can pick up.
//! Output keeps source order and never deduplicates.

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::core::ExtractedStrings;

mod gettext;
mod linguist;

pub use gettext::GettextRenderer;
pub use linguist::LinguistRenderer;

/// Capability shared by all catalog renderers.
#[enum_dispatch]
pub trait CatalogRenderer {
    /// Render all strings of one template. `origin` identifies the template.
    fn render(&self, strings: &ExtractedStrings, origin: &str) -> String;
}

#[enum_dispatch(CatalogRenderer)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer {
    Gettext(GettextRenderer),
    Linguist(LinguistRenderer),
}

/// Output convention selectable from config and CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Gettext,
    Linguist,
}

impl OutputFormat {
    pub fn renderer(self, origin_comments: bool) -> Renderer {
        match self {
            OutputFormat::Gettext => GettextRenderer { origin_comments }.into(),
            OutputFormat::Linguist => LinguistRenderer.into(),
        }
    }
}

/// Quote `text` as a C string literal.
///
/// Backslash escapes from the template are copied as they are. Bare double
/// quotes (possible inside single-quoted template literals) are escaped, and
/// raw line breaks become `\n`.
pub fn c_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
