//! Extracted string records.

/// A string from one of the i18n tag families, with optional context and
/// plural form. Empty `context`/`plural` mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextualEntry {
    pub message: String,
    pub context: String,
    pub plural: String,
}

impl ContextualEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = plural.into();
        self
    }

    pub fn has_context(&self) -> bool {
        !self.context.is_empty()
    }

    pub fn has_plural(&self) -> bool {
        !self.plural.is_empty()
    }
}

/// Everything extracted from one template, in order of appearance.
///
/// `plain` holds `_("...")` strings, `contextual` holds i18n tag entries.
/// Nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedStrings {
    pub plain: Vec<String>,
    pub contextual: Vec<ContextualEntry>,
}

impl ExtractedStrings {
    pub fn len(&self) -> usize {
        self.plain.len() + self.contextual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.contextual.is_empty()
    }
}
