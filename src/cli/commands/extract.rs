use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, helper::finish};
use crate::{
    core::{ExtractContext, FileExtraction},
    render::CatalogRenderer,
    rules::{check_malformed_tag_issues, check_syntax_issues},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ExtractContext::new(&args.common)?;

    let format = args.format.unwrap_or(ctx.config.format);
    let origin_comments = ctx.config.origin_comments && !args.no_origin_comments;
    let renderer = format.renderer(origin_comments);
    let output = args.output.clone().or_else(|| {
        ctx.config
            .output
            .as_ref()
            .map(|path| ctx.root_dir.join(path))
    });

    let extractions = ctx.extract_all();
    let (processed, stopped_early) = if args.fail_fast {
        fail_fast_prefix(&extractions)
    } else {
        (&extractions[..], false)
    };

    let mut catalog = String::new();
    let mut string_count = 0;
    let mut extracted_file_count = 0;
    for file in processed {
        if let Ok(extraction) = &file.outcome {
            catalog.push_str(&renderer.render(&extraction.strings, &file.origin));
            string_count += extraction.strings.len();
            extracted_file_count += 1;
        }
    }

    if let Some(path) = &output {
        fs::write(path, &catalog)
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        info!(path = %path.display(), strings = string_count, "catalog written");
    }

    let mut issues = check_syntax_issues(processed);
    issues.extend(check_malformed_tag_issues(processed));

    Ok(finish(
        CommandSummary::Extract(ExtractSummary {
            catalog,
            output,
            string_count,
            extracted_file_count,
            stopped_early,
        }),
        issues,
        processed.len(),
        ctx.skipped_count,
    ))
}

/// Files up to and including the first failure, and whether any were cut.
fn fail_fast_prefix(extractions: &[FileExtraction]) -> (&[FileExtraction], bool) {
    match extractions.iter().position(|file| !file.is_ok()) {
        Some(index) => (&extractions[..=index], index + 1 < extractions.len()),
        None => (extractions, false),
    }
}
