//! Stats command implementation

use anyhow::Result;
use chrono::Utc;

use super::{render, CommandContext};
use crate::cases::timestamp::parse_timestamp;
use crate::cases::{compute_stats, filter_cases};
use crate::cli::args::{CriteriaArgs, InputArgs};
use crate::cli::input::{load_cases, resolve_criteria, resolve_path};
use crate::error::common;

/// Render statistics over the cases matching the criteria
pub async fn run_stats_command(
    ctx: &CommandContext,
    input: InputArgs,
    criteria: CriteriaArgs,
    as_of: Option<String>,
) -> Result<String> {
    let now = match as_of.as_deref() {
        Some(raw) => parse_timestamp(raw).ok_or_else(|| common::invalid_timestamp("--as-of", raw))?,
        None => Utc::now(),
    };

    let source = resolve_path(&ctx.working_dir, &input.cases);
    let cases = load_cases(&source).await?;
    let criteria = resolve_criteria(ctx.config.defaults.clone(), &criteria, &ctx.working_dir).await?;

    let filtered = filter_cases(cases.as_deref(), &criteria);
    let stats = compute_stats(&filtered, now);

    render(&stats, ctx.format(input.format))
}
