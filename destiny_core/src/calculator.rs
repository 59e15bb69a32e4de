//! Destiny calculation.
//!
//! The reading is a pure function of the session inputs:
//! - base  = birth_day * cosmic_factor + lucky_number / 10
//! - bonus = 15 with an amulet, else 8 for Wisdom, else 3
//! - score = (base + bonus) * luck_multiplier
//! - lucky year = 2025 + (birth_day + lucky_number) mod 10

use crate::{DestinyReading, MysticChoice, PredictionInputs, ProphecyTier};

pub const AMULET_BONUS: f64 = 15.0;
pub const WISDOM_BONUS: f64 = 8.0;
pub const STRENGTH_BONUS: f64 = 3.0;

pub const BASE_YEAR: i64 = 2025;

pub const CRITICAL_THRESHOLD: f64 = 60.0;
pub const HIGH_THRESHOLD: f64 = 40.0;
pub const MEDIUM_THRESHOLD: f64 = 20.0;

/// Compute score, lucky year and tier for a set of inputs
///
/// Energy level and birth month are ignored.
pub fn calculate(inputs: &PredictionInputs) -> DestinyReading {
    let base = base_score(inputs.birth_day, inputs.cosmic_factor, inputs.lucky_number);
    let bonus = bonus(inputs.has_amulet, inputs.mystic_choice);
    let final_score = (base + bonus) * inputs.luck_multiplier;
    let lucky_year = lucky_year(inputs.birth_day, inputs.lucky_number);
    let tier = tier_for(final_score);

    tracing::debug!(
        base,
        bonus,
        final_score,
        lucky_year,
        %tier,
        "Calculated destiny reading"
    );

    DestinyReading {
        final_score,
        lucky_year,
        tier,
    }
}

pub fn base_score(birth_day: i64, cosmic_factor: f64, lucky_number: i64) -> f64 {
    birth_day as f64 * cosmic_factor + lucky_number as f64 / 10.0
}

/// The amulet outranks the mystic choice
pub fn bonus(has_amulet: bool, mystic_choice: MysticChoice) -> f64 {
    if has_amulet {
        AMULET_BONUS
    } else {
        match mystic_choice {
            MysticChoice::Wisdom => WISDOM_BONUS,
            MysticChoice::Strength => STRENGTH_BONUS,
        }
    }
}

pub fn lucky_year(birth_day: i64, lucky_number: i64) -> i64 {
    BASE_YEAR + (birth_day + lucky_number).rem_euclid(10)
}

/// Thresholds are exclusive: a score of exactly 60 is HIGH, not CRITICAL.
/// NaN compares false everywhere and lands in LOW.
pub fn tier_for(score: f64) -> ProphecyTier {
    if score > CRITICAL_THRESHOLD {
        ProphecyTier::Critical
    } else if score > HIGH_THRESHOLD {
        ProphecyTier::High
    } else if score > MEDIUM_THRESHOLD {
        ProphecyTier::Medium
    } else {
        ProphecyTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        birth_day: i64,
        lucky_number: i64,
        cosmic_factor: f64,
        luck_multiplier: f64,
        has_amulet: bool,
        mystic_choice: MysticChoice,
    ) -> PredictionInputs {
        PredictionInputs {
            name: "tester".into(),
            favorite_color: "blue".into(),
            birth_day,
            lucky_number,
            mystic_choice,
            energy_level: 5,
            birth_month: 6,
            cosmic_factor,
            luck_multiplier,
            has_amulet,
        }
    }

    #[test]
    fn test_amulet_scenario() {
        crate::logging::init_test();
        let reading = calculate(&inputs(10, 5, 2.0, 1.0, true, MysticChoice::Wisdom));

        assert!((reading.final_score - 35.5).abs() < 1e-9);
        assert_eq!(reading.tier, ProphecyTier::Medium);
        assert_eq!(reading.lucky_year, 2030);
        assert_eq!(
            reading.message(),
            "Your destiny is guided by your own inner strength. Opportunities await."
        );
    }

    #[test]
    fn test_strength_scenario() {
        let reading = calculate(&inputs(1, 1, 1.0, 1.0, false, MysticChoice::Strength));

        assert!((reading.final_score - 4.1).abs() < 1e-9);
        assert_eq!(reading.tier, ProphecyTier::Low);
        assert_eq!(reading.lucky_year, 2027);
    }

    #[test]
    fn test_wisdom_bonus_without_amulet() {
        assert_eq!(bonus(false, MysticChoice::Wisdom), 8.0);
        assert_eq!(bonus(false, MysticChoice::Strength), 3.0);
        assert_eq!(bonus(true, MysticChoice::Strength), 15.0);
    }

    #[test]
    fn test_tier_boundaries_are_exclusive() {
        assert_eq!(tier_for(60.0), ProphecyTier::High);
        assert_eq!(tier_for(60.01), ProphecyTier::Critical);
        assert_eq!(tier_for(40.0), ProphecyTier::Medium);
        assert_eq!(tier_for(40.01), ProphecyTier::High);
        assert_eq!(tier_for(20.0), ProphecyTier::Low);
        assert_eq!(tier_for(20.01), ProphecyTier::Medium);
        assert_eq!(tier_for(-5.0), ProphecyTier::Low);
        assert_eq!(tier_for(f64::NAN), ProphecyTier::Low);
    }

    #[test]
    fn test_exact_sixty_from_inputs() {
        // base = 20 * 2.0 + 50 / 10 = 45, plus the amulet bonus
        let reading = calculate(&inputs(20, 50, 2.0, 1.0, true, MysticChoice::Strength));
        assert_eq!(reading.final_score, 60.0);
        assert_eq!(reading.tier, ProphecyTier::High);
    }

    #[test]
    fn test_unused_fields_do_not_change_reading() {
        let mut a = inputs(12, 34, 1.5, 1.2, false, MysticChoice::Wisdom);
        let mut b = a.clone();
        a.energy_level = 1;
        a.birth_month = 1;
        b.energy_level = 10;
        b.birth_month = 12;
        assert_eq!(calculate(&a), calculate(&b));
    }

    #[test]
    fn test_negative_multiplier() {
        let reading = calculate(&inputs(31, 99, 3.0, -1.0, true, MysticChoice::Wisdom));
        assert!(reading.final_score < 0.0);
        assert_eq!(reading.tier, ProphecyTier::Low);
        assert_eq!(reading.lucky_year, 2025);
    }
}
