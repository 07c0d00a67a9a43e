//! Submarine configuration stored in `submarine.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::depth::DEFAULT_WINDOW;
use crate::core::navigator::Steering;

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "submarine.toml";

/// Default puzzle input file name.
pub const DEFAULT_INPUT: &str = "Input.txt";

/// Submarine configuration (TOML).
///
/// Intended to be edited by humans. Missing fields fall back to defaults, and
/// command-line flags override whatever is loaded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SubmarineConfig {
    /// Puzzle input used when no path is given on the command line.
    pub input: PathBuf,

    /// Print one progress line per record before the summary.
    pub progress: bool,

    pub sweep: SweepConfig,

    pub dive: DiveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SweepConfig {
    /// Number of consecutive measurements summed before comparing.
    pub window: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiveConfig {
    pub steering: Steering,
}

impl Default for SubmarineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            progress: true,
            sweep: SweepConfig::default(),
            dive: DiveConfig::default(),
        }
    }
}

impl SubmarineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(anyhow!("input must be a non-empty path"));
        }
        if self.sweep.window == 0 {
            return Err(anyhow!("sweep.window must be > 0"));
        }
        Ok(())
    }
}

/// Whether `init_config` wrote a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    Kept,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SubmarineConfig::default()`.
pub fn load_config(path: &Path) -> Result<SubmarineConfig> {
    if !path.exists() {
        let cfg = SubmarineConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SubmarineConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SubmarineConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config unless one exists and `force` is false.
pub fn init_config(path: &Path, force: bool) -> Result<InitOutcome> {
    if !force && path.exists() {
        return Ok(InitOutcome::Kept);
    }
    write_config(path, &SubmarineConfig::default())?;
    Ok(InitOutcome::Written)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
