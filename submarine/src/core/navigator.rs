//! Instruction-driven vehicle state machine.

use std::fmt;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::instruction::{Direction, Instruction};

/// Rule set applied to each instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Steering {
    /// `up`/`down` change depth directly.
    Direct,
    /// `up`/`down` change aim; `forward` dives by `aim * n`.
    #[default]
    Aim,
}

impl Steering {
    pub fn as_str(self) -> &'static str {
        match self {
            Steering::Direct => "direct",
            Steering::Aim => "aim",
        }
    }
}

impl fmt::Display for Steering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of the vehicle. All fields start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VehicleState {
    pub horizontal: i64,
    pub depth: i64,
    /// Only changed under [`Steering::Aim`].
    pub aim: i64,
}

impl VehicleState {
    /// Apply one instruction. On overflow the state is left unchanged.
    pub fn apply(&mut self, instruction: Instruction, steering: Steering) -> Result<()> {
        let units = i64::from(instruction.magnitude);
        let mut next = *self;
        match (steering, instruction.direction) {
            (Steering::Direct, Direction::Forward) => {
                let horizontal = self.horizontal.checked_add(units);
                next.horizontal = checked(horizontal, "horizontal position")?;
            }
            (Steering::Direct, Direction::Up) => {
                next.depth = checked(self.depth.checked_sub(units), "depth")?;
            }
            (Steering::Direct, Direction::Down) => {
                next.depth = checked(self.depth.checked_add(units), "depth")?;
            }
            (Steering::Aim, Direction::Forward) => {
                let horizontal = self.horizontal.checked_add(units);
                next.horizontal = checked(horizontal, "horizontal position")?;
                let dive = self.aim.checked_mul(units);
                next.depth = checked(dive.and_then(|dive| self.depth.checked_add(dive)), "depth")?;
            }
            (Steering::Aim, Direction::Up) => {
                next.aim = checked(self.aim.checked_sub(units), "aim")?;
            }
            (Steering::Aim, Direction::Down) => {
                next.aim = checked(self.aim.checked_add(units), "aim")?;
            }
        }
        *self = next;
        Ok(())
    }

    /// Horizontal position multiplied by depth.
    pub fn product(&self) -> Result<i64> {
        self.horizontal
            .checked_mul(self.depth)
            .ok_or_else(|| anyhow!("product of horizontal position and depth overflows i64"))
    }
}

fn checked(value: Option<i64>, field: &str) -> Result<i64> {
    value.ok_or_else(|| anyhow!("{field} overflows i64"))
}

/// Apply `instructions` in order to a fresh state and return the final state.
pub fn navigate(instructions: &[Instruction], steering: Steering) -> Result<VehicleState> {
    let mut state = VehicleState::default();
    for (index, &instruction) in instructions.iter().enumerate() {
        state
            .apply(instruction, steering)
            .with_context(|| format!("instruction {}", index + 1))?;
    }
    Ok(state)
}
