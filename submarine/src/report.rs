//! Rendering of command reports to stdout.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// A finished command result that can be printed as text or JSON.
pub trait Report: Serialize {
    /// One line per processed record, in input order.
    fn progress_lines(&self) -> Vec<String>;

    /// Final line carrying the computed result.
    fn summary(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub progress: bool,
    /// Print the report as a single JSON object; progress lines are dropped.
    pub json: bool,
}

pub fn emit<R: Report, W: Write>(report: &R, options: OutputOptions, out: &mut W) -> Result<()> {
    if options.json {
        let payload = serde_json::to_string(report).context("serialize report")?;
        writeln!(out, "{payload}").context("write report")?;
        return Ok(());
    }
    if options.progress {
        for line in report.progress_lines() {
            writeln!(out, "{line}").context("write progress")?;
        }
    }
    writeln!(out, "{}", report.summary()).context("write summary")?;
    Ok(())
}
