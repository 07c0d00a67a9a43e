//! Parsing of dive instructions (`"<direction> <magnitude>"`).

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Error, Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "forward" => Ok(Direction::Forward),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => bail!("unknown direction '{other}'"),
        }
    }
}

/// One movement command read from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub direction: Direction,
    pub magnitude: u32,
}

impl Instruction {
    pub fn new(direction: Direction, magnitude: u32) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
}

impl FromStr for Instruction {
    type Err = Error;

    /// Parse exactly two whitespace-separated tokens: a direction and a
    /// non-negative magnitude.
    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [direction, magnitude] = tokens.as_slice() else {
            bail!("expected '<direction> <magnitude>', got '{line}'");
        };
        let direction = direction.parse::<Direction>()?;
        let magnitude = magnitude
            .parse::<u32>()
            .with_context(|| format!("invalid magnitude '{magnitude}'"))?;
        Ok(Self::new(direction, magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_direction() {
        assert_eq!(
            "forward 5".parse::<Instruction>().expect("parse"),
            Instruction::new(Direction::Forward, 5)
        );
        assert_eq!(
            "up 3".parse::<Instruction>().expect("parse"),
            Instruction::new(Direction::Up, 3)
        );
        assert_eq!(
            "down 8".parse::<Instruction>().expect("parse"),
            Instruction::new(Direction::Down, 8)
        );
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let err = "backward 2".parse::<Instruction>().unwrap_err();
        assert_eq!(err.to_string(), "unknown direction 'backward'");
    }

    #[test]
    fn direction_tokens_are_case_sensitive() {
        assert!("Forward".parse::<Direction>().is_err());
    }

    #[test]
    fn negative_or_non_numeric_magnitude_is_rejected() {
        let err = "down -1".parse::<Instruction>().unwrap_err();
        assert!(err.to_string().contains("invalid magnitude '-1'"));
        assert!("up five".parse::<Instruction>().is_err());
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        assert!("forward".parse::<Instruction>().is_err());
        assert!("forward 1 2".parse::<Instruction>().is_err());
    }

    #[test]
    fn display_round_trips_direction_token() {
        for direction in [Direction::Forward, Direction::Up, Direction::Down] {
            let parsed: Direction = direction.to_string().parse().expect("parse");
            assert_eq!(parsed, direction);
        }
    }
}
