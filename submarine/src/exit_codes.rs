//! Stable exit codes for submarine CLI commands.

/// Command succeeded and the summary was printed.
pub const OK: i32 = 0;
/// Command failed: missing or malformed input, invalid config, or other I/O errors.
pub const INVALID: i32 = 1;
