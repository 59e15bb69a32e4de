//! Core domain types for the destiny predictor.
//!
//! This module defines:
//! - The collected inputs of one prediction session and their bounds
//! - The mystic choice and prophecy tier enums
//! - The derived reading and the per-iteration session entity

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

// ============================================================================
// Input Bounds
// ============================================================================

pub const BIRTH_DAY_RANGE: RangeInclusive<i64> = 1..=31;
pub const LUCKY_NUMBER_RANGE: RangeInclusive<i64> = 1..=99;
pub const MYSTIC_CHOICE_RANGE: RangeInclusive<i64> = 1..=2;
pub const ENERGY_LEVEL_RANGE: RangeInclusive<i64> = 1..=10;
pub const BIRTH_MONTH_RANGE: RangeInclusive<i64> = 1..=12;

// ============================================================================
// Mystic Choice
// ============================================================================

/// Path picked at prompt 5: 1 for Wisdom, 2 for Strength
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MysticChoice {
    Wisdom,
    Strength,
}

impl TryFrom<i64> for MysticChoice {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(MysticChoice::Wisdom),
            2 => Ok(MysticChoice::Strength),
            other => Err(Error::InvalidInput(format!(
                "mystic choice must be 1 or 2, got {}",
                other
            ))),
        }
    }
}

// ============================================================================
// Prophecy Tier
// ============================================================================

/// Score bucket that selects the prophecy message
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProphecyTier {
    Low,
    Medium,
    High,
    Critical,
}

impl ProphecyTier {
    pub const ALL: [ProphecyTier; 4] = [
        ProphecyTier::Low,
        ProphecyTier::Medium,
        ProphecyTier::High,
        ProphecyTier::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProphecyTier::Low => "LOW",
            ProphecyTier::Medium => "MEDIUM",
            ProphecyTier::High => "HIGH",
            ProphecyTier::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for ProphecyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Session Types
// ============================================================================

/// Everything collected from the user in one pass through the prompts.
///
/// `energy_level` and `birth_month` are collected but play no part in the
/// reading.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionInputs {
    pub name: String,
    pub favorite_color: String,
    pub birth_day: i64,
    pub lucky_number: i64,
    pub mystic_choice: MysticChoice,
    pub energy_level: i64,
    pub birth_month: i64,
    pub cosmic_factor: f64,
    pub luck_multiplier: f64,
    pub has_amulet: bool,
}

impl PredictionInputs {
    /// Check every range-constrained field against its declared bounds
    pub fn validate(&self) -> Result<()> {
        check_range("birth day", self.birth_day, &BIRTH_DAY_RANGE)?;
        check_range("lucky number", self.lucky_number, &LUCKY_NUMBER_RANGE)?;
        check_range("energy level", self.energy_level, &ENERGY_LEVEL_RANGE)?;
        check_range("birth month", self.birth_month, &BIRTH_MONTH_RANGE)?;
        Ok(())
    }
}

fn check_range(field: &str, value: i64, range: &RangeInclusive<i64>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            field,
            range.start(),
            range.end(),
            value
        )))
    }
}

/// Values derived from a session's inputs
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DestinyReading {
    pub final_score: f64,
    pub lucky_year: i64,
    pub tier: ProphecyTier,
}

impl DestinyReading {
    pub fn message(&self) -> &'static str {
        crate::prophecy::message_for(self.tier)
    }
}

/// One iteration of the session loop: inputs plus the reading derived from them.
///
/// Built fresh every iteration and dropped once printed.
#[derive(Clone, Debug)]
pub struct PredictionSession {
    pub inputs: PredictionInputs,
    pub reading: DestinyReading,
}

impl PredictionSession {
    pub fn from_inputs(inputs: PredictionInputs) -> Result<Self> {
        inputs.validate()?;
        let reading = crate::calculator::calculate(&inputs);
        Ok(Self { inputs, reading })
    }
}
