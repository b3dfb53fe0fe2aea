//! Malformed i18n tag rule.
//!
//! An i18n tag whose literals cannot be read is skipped during extraction.
//! Each skipped tag becomes a warning pointing at the offending argument.

use crate::{
    core::FileExtraction,
    issues::{Issue, MalformedTagIssue, SourceContext},
};

pub fn check_malformed_tag_issues(extractions: &[FileExtraction]) -> Vec<Issue> {
    extractions
        .iter()
        .filter_map(|file| file.outcome.as_ref().ok().map(|e| (file, e)))
        .flat_map(|(file, extraction)| {
            extraction.skipped_tags.iter().map(|skipped| {
                Issue::MalformedTag(MalformedTagIssue {
                    context: SourceContext::locate(&file.origin, &file.source, skipped.offset),
                    tag_name: skipped.tag.tag_name.clone(),
                    reason: skipped.tag.reason.clone(),
                })
            })
        })
        .collect()
}
