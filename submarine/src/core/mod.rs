//! Deterministic, pure logic shared by the submarine commands.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod depth;
pub mod instruction;
pub mod navigator;
