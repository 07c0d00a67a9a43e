//! Line-delimited puzzle input files.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::debug;

/// Parse one record per non-blank line, in file order.
///
/// Lines that are empty after trimming are skipped. The first malformed line
/// aborts parsing; the error names its 1-based line number.
pub fn parse_records<T>(contents: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| {
            line.parse::<T>()
                .map_err(Into::<anyhow::Error>::into)
                .with_context(|| format!("line {line_number}: '{line}'"))
        })
        .collect()
}

/// Read and parse an input file.
pub fn load_records<T>(path: &Path) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    let records = parse_records(&contents)
        .with_context(|| format!("parse input {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "input loaded");
    Ok(records)
}
