use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    core::ExtractContext,
    rules::{check_malformed_tag_issues, check_syntax_issues},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.args.common)?;
    let extractions = ctx.extract_all();

    let mut issues = check_syntax_issues(&extractions);
    issues.extend(check_malformed_tag_issues(&extractions));

    Ok(finish(
        CommandSummary::Check,
        issues,
        extractions.len(),
        ctx.skipped_count,
    ))
}
