//! Test-only helpers: canonical sample inputs and temp working directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::instruction::{Direction, Instruction};
use crate::io::config::{CONFIG_FILE, SubmarineConfig, write_config};

/// Sample sonar report: 7 raw increases, 5 windowed increases.
pub const SAMPLE_MEASUREMENTS: [i64; 10] = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];

/// Sample course: product 150 with direct steering, 900 with aim.
pub const SAMPLE_INSTRUCTIONS: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

/// Sample sonar report rendered one measurement per line.
pub fn sample_report() -> String {
    SAMPLE_MEASUREMENTS
        .iter()
        .map(|value| format!("{value}\n"))
        .collect()
}

pub fn sample_instructions() -> Vec<Instruction> {
    vec![
        Instruction::new(Direction::Forward, 5),
        Instruction::new(Direction::Down, 5),
        Instruction::new(Direction::Forward, 8),
        Instruction::new(Direction::Up, 3),
        Instruction::new(Direction::Down, 8),
        Instruction::new(Direction::Forward, 2),
    ]
}

/// Temporary working directory for input and config files.
pub struct TestDir {
    temp: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write an input file and return its absolute path.
    pub fn write_input(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Write `submarine.toml` into the directory.
    pub fn write_config(&self, cfg: &SubmarineConfig) -> Result<PathBuf> {
        let path = self.path().join(CONFIG_FILE);
        write_config(&path, cfg)?;
        Ok(path)
    }
}
