//! Unit-of-measure classes and their display precision.

use serde::{Deserialize, Serialize};

/// Precision class of a unit tag.
///
/// Each class has its own meaningful number of decimals, so raw sums are
/// rounded per class rather than with one global policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitClass {
    /// kWh, MWh, GWh, GJ: one decimal
    Energy,
    /// Distance, volume and mass: whole units
    Quantity,
    /// Monetary amounts: two decimals
    Currency,
    /// Anything unrecognized: one decimal
    Other,
}

const ENERGY_UNITS: &[&str] = &["wh", "kwh", "mwh", "gwh", "mj", "gj", "therm", "therms"];

const QUANTITY_UNITS: &[&str] = &[
    // distance
    "m", "km", "mi", "mile", "miles", "pkm", "tkm", "passenger-km",
    // volume
    "l", "liter", "liters", "litre", "litres", "m3", "gal", "gallon", "gallons",
    // mass
    "g", "kg", "t", "ton", "tons", "tonne", "tonnes", "lb", "lbs",
];

const CURRENCY_UNITS: &[&str] = &[
    "usd", "eur", "gbp", "chf", "jpy", "cad", "aud", "brl", "$", "€", "£",
];

impl UnitClass {
    /// Classify a free-form unit tag (`"kWh"`, `"m³"`, `"EUR"`, ...).
    pub fn of(unit: &str) -> UnitClass {
        let tag = unit.trim().to_lowercase().replace('³', "3");
        let tag = tag.as_str();
        if ENERGY_UNITS.contains(&tag) {
            UnitClass::Energy
        } else if QUANTITY_UNITS.contains(&tag) {
            UnitClass::Quantity
        } else if CURRENCY_UNITS.contains(&tag) {
            UnitClass::Currency
        } else {
            UnitClass::Other
        }
    }

    /// Decimal places kept when presenting a value of this class.
    pub fn decimals(&self) -> u32 {
        match self {
            UnitClass::Energy => 1,
            UnitClass::Quantity => 0,
            UnitClass::Currency => 2,
            UnitClass::Other => 1,
        }
    }
}
