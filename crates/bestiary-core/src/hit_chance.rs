//! Chance to hit with a single d20 roll.
//!
//! A roll succeeds when the die shows at least `threshold - modifier`.
//! A natural 20 always hits and a natural 1 always misses, so the result
//! never leaves `[0.05, 0.95]`.

use crate::error::{BestiaryError, BestiaryResult};
use crate::table::{Numeric, Table};

/// Faces on the die being rolled.
pub const D20_FACES: i64 = 20;

/// Lowest possible hit chance: only a natural 20 hits.
pub const MIN_HIT_CHANCE: f64 = 0.05;

/// Highest possible hit chance: only a natural 1 misses.
pub const MAX_HIT_CHANCE: f64 = 0.95;

/// Probability that `d20 + modifier >= threshold`.
pub fn hit_probability(threshold: i32, modifier: i32) -> f64 {
    let effective = i64::from(threshold) - i64::from(modifier);
    if effective > D20_FACES {
        MIN_HIT_CHANCE
    } else if effective <= 1 {
        MAX_HIT_CHANCE
    } else {
        (D20_FACES + 1 - effective) as f64 / D20_FACES as f64
    }
}

/// Like [`hit_probability`], for inputs that arrive as floats.
///
/// Fails with [`BestiaryError::InvalidArgument`] unless both inputs are
/// finite whole numbers within `i32` range.
pub fn hit_probability_checked(threshold: f64, modifier: f64) -> BestiaryResult<f64> {
    Ok(hit_probability(
        whole("threshold", threshold)?,
        whole("modifier", modifier)?,
    ))
}

fn whole(name: &str, value: f64) -> BestiaryResult<i32> {
    if !value.is_finite()
        || value.fract() != 0.0
        || value < f64::from(i32::MIN)
        || value > f64::from(i32::MAX)
    {
        return Err(BestiaryError::InvalidArgument(format!(
            "{name} must be a whole number, got {value}"
        )));
    }
    Ok(value as i32)
}

/// Hit chance against every row's `threshold_column` (for example `ac`).
///
/// Rows with a missing threshold yield `None`.
pub fn hit_chances(
    table: &Table,
    threshold_column: &str,
    modifier: i32,
) -> BestiaryResult<Vec<Option<f64>>> {
    let mut chances = Vec::with_capacity(table.len());
    for (row, cell) in table.column(threshold_column)?.enumerate() {
        let chance = match cell.as_numeric() {
            Numeric::Present(threshold) => Some(hit_probability_checked(
                threshold,
                f64::from(modifier),
            )?),
            Numeric::Missing => None,
            Numeric::Malformed(value) => {
                return Err(BestiaryError::TypeConversion {
                    column: threshold_column.to_string(),
                    row,
                    value: value.to_string(),
                });
            }
        };
        chances.push(chance);
    }
    Ok(chances)
}
