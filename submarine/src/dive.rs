//! Dive navigation for `submarine dive`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::core::instruction::Instruction;
use crate::core::navigator::{Steering, VehicleState};
use crate::io::input::load_records;
use crate::report::Report;

/// Vehicle state right after one instruction was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiveStep {
    pub instruction: Instruction,
    pub state: VehicleState,
}

/// Result of steering through an instruction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiveReport {
    pub steering: Steering,
    pub instructions: usize,
    pub final_state: VehicleState,
    pub product: i64,
    #[serde(skip)]
    pub steps: Vec<DiveStep>,
}

/// Apply `instructions` in order, recording the state after each one.
///
/// Arithmetic overflow aborts the dive with the offending instruction named.
pub fn run_dive(instructions: &[Instruction], steering: Steering) -> Result<DiveReport> {
    let mut state = VehicleState::default();
    let mut steps = Vec::with_capacity(instructions.len());
    for (index, &instruction) in instructions.iter().enumerate() {
        state.apply(instruction, steering).with_context(|| {
            format!(
                "instruction {}: '{} {}'",
                index + 1,
                instruction.direction,
                instruction.magnitude
            )
        })?;
        steps.push(DiveStep { instruction, state });
    }
    let product = state.product()?;
    debug!(%steering, instructions = instructions.len(), product, "dive finished");
    Ok(DiveReport {
        steering,
        instructions: instructions.len(),
        final_state: state,
        product,
        steps,
    })
}

/// Load instructions from `path` and steer through them.
pub fn dive_from_path(path: &Path, steering: Steering) -> Result<DiveReport> {
    let instructions: Vec<Instruction> = load_records(path)?;
    run_dive(&instructions, steering)
}

impl Report for DiveReport {
    fn progress_lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| progress_line(step, self.steering))
            .collect()
    }

    fn summary(&self) -> String {
        format!(
            "Horizontal Position: {} * Depth: {} = {}",
            self.final_state.horizontal, self.final_state.depth, self.product
        )
    }
}

fn progress_line(step: &DiveStep, steering: Steering) -> String {
    let DiveStep { instruction, state } = step;
    let aim = match steering {
        Steering::Direct => String::new(),
        Steering::Aim => format!("Aim: {}, ", state.aim),
    };
    format!(
        "Move: {}, Units: {}, {}HorizontalPosition: {}, Depth: {}",
        instruction.direction, instruction.magnitude, aim, state.horizontal, state.depth
    )
}
