//! Filter command implementation
//!
//! Loads a case list, resolves the criteria and prints the matching cases
//! in the case API's list envelope.

use anyhow::Result;
use tracing::info;

use super::{render, CommandContext};
use crate::cases::{filter_cases, CaseList};
use crate::cli::args::{CriteriaArgs, InputArgs};
use crate::cli::input::{load_cases, resolve_criteria, resolve_path};

/// Render the filter result for `cases` under `criteria`
pub async fn run_filter_command(
    ctx: &CommandContext,
    input: InputArgs,
    criteria: CriteriaArgs,
) -> Result<String> {
    let source = resolve_path(&ctx.working_dir, &input.cases);
    let cases = load_cases(&source).await?;
    let criteria = resolve_criteria(ctx.config.defaults.clone(), &criteria, &ctx.working_dir).await?;

    let filtered = filter_cases(cases.as_deref(), &criteria);
    info!(
        "{} of {} cases match",
        filtered.len(),
        cases.as_ref().map_or(0, Vec::len)
    );

    render(&CaseList::new(filtered), ctx.format(input.format))
}
