//! Sonar sweep and dive navigation CLI.
//!
//! Reads a line-delimited puzzle input (`Input.txt` unless told otherwise),
//! prints one progress line per record and a final summary line.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use submarine::core::navigator::Steering;
use submarine::dive::dive_from_path;
use submarine::exit_codes;
use submarine::io::config::{CONFIG_FILE, InitOutcome, SubmarineConfig, init_config, load_config};
use submarine::logging;
use submarine::report::{OutputOptions, Report, emit};
use submarine::sweep::sweep_from_path;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "submarine",
    version,
    about = "Sonar sweep and dive navigation over puzzle input files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count how often the (windowed) sea floor depth increases.
    Sweep {
        /// Input file, one measurement per line.
        input: Option<PathBuf>,
        /// Measurements summed per window; 1 compares raw measurements.
        #[arg(short, long)]
        window: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Follow a course of `forward`/`up`/`down` instructions.
    Dive {
        /// Input file, one `<direction> <magnitude>` instruction per line.
        input: Option<PathBuf>,
        /// Steering rules; defaults to `dive.steering` from the config.
        #[arg(short, long, value_enum)]
        steering: Option<Steering>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write a default `submarine.toml` if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print only the summary line.
    #[arg(short, long)]
    quiet: bool,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn options(&self, config: &SubmarineConfig) -> OutputOptions {
        OutputOptions {
            progress: config.progress && !self.quiet,
            json: self.json,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Path::new(CONFIG_FILE);
    match cli.command {
        Command::Init { force } => cmd_init(config_path, force),
        Command::Sweep {
            input,
            window,
            output,
        } => {
            let config = load_config(config_path)?;
            cmd_sweep(&config, input, window, &output)
        }
        Command::Dive {
            input,
            steering,
            output,
        } => {
            let config = load_config(config_path)?;
            cmd_dive(&config, input, steering, &output)
        }
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    match init_config(config_path, force)? {
        InitOutcome::Written => println!("init: wrote {}", config_path.display()),
        InitOutcome::Kept => println!("init: kept existing {}", config_path.display()),
    }
    Ok(())
}

fn cmd_sweep(
    config: &SubmarineConfig,
    input: Option<PathBuf>,
    window: Option<usize>,
    output: &OutputArgs,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.input.clone());
    let window = window.unwrap_or(config.sweep.window);
    debug!(input = %input.display(), window, "sweep resolved");
    let report = sweep_from_path(&input, window)?;
    info!(increases = report.increases, "sweep complete");
    print_report(&report, output.options(config))
}

fn cmd_dive(
    config: &SubmarineConfig,
    input: Option<PathBuf>,
    steering: Option<Steering>,
    output: &OutputArgs,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.input.clone());
    let steering = steering.unwrap_or(config.dive.steering);
    debug!(input = %input.display(), %steering, "dive resolved");
    let report = dive_from_path(&input, steering)?;
    info!(product = report.product, "dive complete");
    print_report(&report, output.options(config))
}

fn print_report<R: Report>(report: &R, options: OutputOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(report, options, &mut out)
}
