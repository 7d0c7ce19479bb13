//! Reading case lists and criteria for the command-line front end

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::cases::timestamp::parse_timestamp;
use crate::cases::{Case, CaseList, FilterCriteria};
use crate::cli::args::CriteriaArgs;
use crate::error::{common, Result};

/// Accepted shapes for a case list file
#[derive(Deserialize)]
#[serde(untagged)]
enum CaseInput {
    Array(Vec<Case>),
    List(CaseList),
}

/// Parse case list text; `None` means the list envelope carried no data
pub fn parse_cases(content: &str, source: &Path) -> Result<Option<Vec<Case>>> {
    let input: CaseInput =
        serde_json::from_str(content).map_err(|e| common::invalid_cases(source).with_source(e))?;

    Ok(match input {
        CaseInput::Array(cases) => Some(cases),
        CaseInput::List(list) => list.data,
    })
}

async fn read_source(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut content = String::new();
        tokio::io::stdin()
            .read_to_string(&mut content)
            .await
            .map_err(|e| common::input_io_error(source).with_source(e))?;
        return Ok(content);
    }

    tokio::fs::read_to_string(source)
        .await
        .map_err(|e| common::input_io_error(source).with_source(e))
}

/// Load a case list from a file, or stdin when `source` is `-`
pub async fn load_cases(source: &Path) -> Result<Option<Vec<Case>>> {
    let content = read_source(source).await?;
    let cases = parse_cases(&content, source)?;
    debug!(
        "Loaded {} cases from {}",
        cases.as_ref().map_or(0, Vec::len),
        source.display()
    );
    Ok(cases)
}

/// Load a criteria object from a JSON file
pub async fn load_criteria(path: &Path) -> Result<FilterCriteria> {
    let content = read_source(path).await?;
    serde_json::from_str(&content).map_err(|e| common::invalid_criteria(path).with_source(e))
}

fn parse_bound(field: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    raw.map(|value| parse_timestamp(value).ok_or_else(|| common::invalid_timestamp(field, value)))
        .transpose()
}

/// Build criteria from flags alone; unset flags stay empty
pub fn criteria_from_flags(args: &CriteriaArgs) -> Result<FilterCriteria> {
    Ok(FilterCriteria {
        search_term: args.search.clone().unwrap_or_default(),
        status: args.status.iter().map(|s| s.as_str().into()).collect(),
        priority: args.priority.iter().map(|p| p.as_str().into()).collect(),
        case_type: args.case_type.iter().cloned().collect(),
        assigned_to: args.assigned_to.iter().cloned().collect(),
        urgency_level: args.urgency.iter().map(|u| u.as_str().into()).collect(),
        date_from: parse_bound("--from", args.from.as_deref())?,
        date_to: parse_bound("--to", args.to.as_deref())?,
    })
}

/// Resolve the effective criteria
///
/// Configured defaults are replaced wholesale by a criteria file, then any
/// flag that was given overrides its field.
pub async fn resolve_criteria(
    defaults: FilterCriteria,
    args: &CriteriaArgs,
    working_dir: &Path,
) -> Result<FilterCriteria> {
    let base = match &args.criteria {
        Some(path) => load_criteria(&resolve_path(working_dir, path)).await?,
        None => defaults,
    };

    Ok(base.merge(criteria_from_flags(args)?))
}

/// Join relative paths onto the working directory; `-` is left alone
pub fn resolve_path(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || path == Path::new("-") {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}
