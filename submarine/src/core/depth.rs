//! Depth trend counting over raw or windowed sonar measurements.

use std::cmp::Ordering;

use anyhow::{Result, anyhow, bail};

/// Window size that compares raw measurements directly.
pub const RAW_WINDOW: usize = 1;
/// Default sliding window size used to smooth out sonar noise.
pub const DEFAULT_WINDOW: usize = 3;

/// Classification of one value against its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increased,
    Decreased,
    NoChange,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Increased => "increased",
            Trend::Decreased => "decreased",
            Trend::NoChange => "no change",
        }
    }
}

/// One compared value with the running increase count after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendStep {
    pub value: i64,
    /// `None` for the first value, which has no predecessor.
    pub trend: Option<Trend>,
    pub increases: usize,
}

/// Sum every contiguous run of `window` values, in order.
///
/// Fewer than `window` values yields no sums. A sum outside `i64` is an error
/// naming the first measurement of its window.
pub fn window_sums(values: &[i64], window: usize) -> Result<Vec<i64>> {
    if window == 0 {
        bail!("window size must be > 0");
    }
    values
        .windows(window)
        .enumerate()
        .map(|(start, run)| {
            run.iter()
                .try_fold(0i64, |sum, &value| sum.checked_add(value))
                .ok_or_else(|| {
                    anyhow!("window sum starting at measurement {} overflows i64", start + 1)
                })
        })
        .collect()
}

pub fn classify(previous: i64, current: i64) -> Trend {
    match current.cmp(&previous) {
        Ordering::Greater => Trend::Increased,
        Ordering::Less => Trend::Decreased,
        Ordering::Equal => Trend::NoChange,
    }
}

/// Classify each value against the one before it, tracking strict increases.
pub fn trend_steps(values: &[i64]) -> Vec<TrendStep> {
    let mut increases = 0;
    let mut previous = None;
    values
        .iter()
        .map(|&value| {
            let trend = previous.map(|prev| classify(prev, value));
            if trend == Some(Trend::Increased) {
                increases += 1;
            }
            previous = Some(value);
            TrendStep {
                value,
                trend,
                increases,
            }
        })
        .collect()
}

/// Count strict increases between consecutive window sums.
///
/// `window == 1` compares raw measurements. Equal sums are never counted.
pub fn count_increases(values: &[i64], window: usize) -> Result<usize> {
    let sums = window_sums(values, window)?;
    Ok(sums.windows(2).filter(|pair| pair[1] > pair[0]).count())
}
