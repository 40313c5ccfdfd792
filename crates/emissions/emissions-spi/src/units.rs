//! Unit conversion and rounding.
//!
//! Every kg-to-tonne conversion and every displayed rounding goes through
//! this module so that all figures agree to the last decimal.

use crate::model::UnitClass;

pub const KG_PER_TONNE: f64 = 1000.0;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // normalize -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// One decimal place, the precision of every tCO2e figure.
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Kilograms to tonnes, unrounded.
pub fn kg_to_tonnes(kg: f64) -> f64 {
    kg / KG_PER_TONNE
}

/// Kilograms to tonnes, rounded to one decimal.
pub fn tonnes_rounded(kg: f64) -> f64 {
    round1(kg_to_tonnes(kg))
}

/// Round a native-unit value with the precision of its unit class.
pub fn round_for_unit(value: f64, unit: &str) -> f64 {
    round_to(value, UnitClass::of(unit).decimals())
}

/// `part / total` as a percentage with one decimal; zero when `total` is not positive.
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        round1(part / total * 100.0)
    } else {
        0.0
    }
}
