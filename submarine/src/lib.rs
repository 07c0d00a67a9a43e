//! Sonar sweep and dive navigation over line-delimited puzzle input.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (trend counting, instruction
//!   parsing, navigation). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (input files, `submarine.toml`).
//!
//! Orchestration modules ([`sweep`], [`dive`]) coordinate core logic with I/O
//! to implement CLI commands, and [`report`] renders their results.

pub mod core;
pub mod dive;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
pub mod sweep;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
