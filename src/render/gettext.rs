use std::fmt::Write;

use super::{CatalogRenderer, c_string_literal};
use crate::core::{ContextualEntry, ExtractedStrings};

/// Emits `gettext`, `pgettext`, `ngettext` and `npgettext` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GettextRenderer {
    /// Precede every call with `// i18n: file: <origin>`.
    pub origin_comments: bool,
}

impl GettextRenderer {
    fn call(entry: &ContextualEntry) -> String {
        let message = c_string_literal(&entry.message);
        match (entry.has_context(), entry.has_plural()) {
            (false, false) => format!("gettext({message});"),
            (true, false) => format!("pgettext({}, {message});", c_string_literal(&entry.context)),
            (false, true) => format!("ngettext({message}, {});", c_string_literal(&entry.plural)),
            (true, true) => format!(
                "npgettext({}, {message}, {});",
                c_string_literal(&entry.context),
                c_string_literal(&entry.plural)
            ),
        }
    }
}

impl CatalogRenderer for GettextRenderer {
    fn render(&self, strings: &ExtractedStrings, origin: &str) -> String {
        let plain = strings.plain.iter().map(|s| format!("gettext({});", c_string_literal(s)));
        let contextual = strings.contextual.iter().map(Self::call);

        let mut out = String::new();
        for call in plain.chain(contextual) {
            if self.origin_comments {
                let _ = writeln!(out, "// i18n: file: {origin}");
            }
            let _ = writeln!(out, "{call}");
        }
        out
    }
}
