//! I/O helpers for submarine commands.

pub mod config;
pub mod input;
