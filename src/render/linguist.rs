use std::fmt::Write;

use super::{CatalogRenderer, c_string_literal};
use crate::core::{ContextualEntry, ExtractedStrings};

/// Placeholder passed as the plural count; lupdate only needs its presence.
pub const PLURAL_COUNT_PLACEHOLDER: &str = "count";

/// Emits `QCoreApplication::translate(origin, text, disambiguation, n)` calls.
///
/// The origin becomes the Linguist source context. Plural text is not
/// passed: Qt derives plural forms from the `%n` message and the count
/// argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinguistRenderer;

impl LinguistRenderer {
    fn call(origin: &str, entry: &ContextualEntry) -> String {
        let mut args = vec![c_string_literal(origin), c_string_literal(&entry.message)];
        if entry.has_context() || entry.has_plural() {
            args.push(c_string_literal(&entry.context));
        }
        if entry.has_plural() {
            args.push(PLURAL_COUNT_PLACEHOLDER.to_string());
        }
        format!("QCoreApplication::translate({});", args.join(", "))
    }
}

impl CatalogRenderer for LinguistRenderer {
    fn render(&self, strings: &ExtractedStrings, origin: &str) -> String {
        let mut out = String::new();
        for plain in &strings.plain {
            let _ = writeln!(out, "{}", Self::call(origin, &ContextualEntry::new(plain.as_str())));
        }
        for entry in &strings.contextual {
            let _ = writeln!(out, "{}", Self::call(origin, entry));
        }
        out
    }
}
