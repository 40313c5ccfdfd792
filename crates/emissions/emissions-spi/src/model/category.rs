//! GHG Protocol emission categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmissionsError;
use crate::model::Scope;

/// One of the 21 fixed reporting categories: 4 in Scope 1, 2 in Scope 2 and
/// the 15 GHG Protocol Scope 3 categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Scope 1
    StationaryCombustion,
    MobileCombustion,
    ProcessEmissions,
    FugitiveEmissions,
    // Scope 2
    PurchasedElectricity,
    PurchasedHeatSteamAndCooling,
    // Scope 3, categories 1-15
    PurchasedGoodsAndServices,
    CapitalGoods,
    FuelAndEnergyRelatedActivities,
    UpstreamTransportationAndDistribution,
    WasteGeneratedInOperations,
    BusinessTravel,
    EmployeeCommuting,
    UpstreamLeasedAssets,
    DownstreamTransportationAndDistribution,
    ProcessingOfSoldProducts,
    UseOfSoldProducts,
    EndOfLifeTreatmentOfSoldProducts,
    DownstreamLeasedAssets,
    Franchises,
    Investments,
}

const SCOPE_1: [Category; 4] = [
    Category::StationaryCombustion,
    Category::MobileCombustion,
    Category::ProcessEmissions,
    Category::FugitiveEmissions,
];

const SCOPE_2: [Category; 2] = [
    Category::PurchasedElectricity,
    Category::PurchasedHeatSteamAndCooling,
];

const SCOPE_3: [Category; 15] = [
    Category::PurchasedGoodsAndServices,
    Category::CapitalGoods,
    Category::FuelAndEnergyRelatedActivities,
    Category::UpstreamTransportationAndDistribution,
    Category::WasteGeneratedInOperations,
    Category::BusinessTravel,
    Category::EmployeeCommuting,
    Category::UpstreamLeasedAssets,
    Category::DownstreamTransportationAndDistribution,
    Category::ProcessingOfSoldProducts,
    Category::UseOfSoldProducts,
    Category::EndOfLifeTreatmentOfSoldProducts,
    Category::DownstreamLeasedAssets,
    Category::Franchises,
    Category::Investments,
];

impl Category {
    /// All categories, Scope 1 first.
    pub fn all() -> impl Iterator<Item = Category> {
        SCOPE_1.iter().chain(SCOPE_2.iter()).chain(SCOPE_3.iter()).copied()
    }

    /// The fixed category list of a scope.
    pub fn for_scope(scope: Scope) -> &'static [Category] {
        match scope {
            Scope::Scope1 => &SCOPE_1,
            Scope::Scope2 => &SCOPE_2,
            Scope::Scope3 => &SCOPE_3,
        }
    }

    pub fn scope(&self) -> Scope {
        use Category::*;
        match self {
            StationaryCombustion | MobileCombustion | ProcessEmissions | FugitiveEmissions => {
                Scope::Scope1
            }
            PurchasedElectricity | PurchasedHeatSteamAndCooling => Scope::Scope2,
            _ => Scope::Scope3,
        }
    }

    /// GHG Protocol Scope 3 category number (1-15), `None` for Scope 1/2.
    pub fn scope3_number(&self) -> Option<u8> {
        SCOPE_3
            .iter()
            .position(|c| c == self)
            .map(|i| i as u8 + 1)
    }

    /// Look up a Scope 3 category by its GHG Protocol number.
    pub fn from_scope3_number(n: u8) -> Option<Category> {
        if n == 0 {
            return None;
        }
        SCOPE_3.get(n as usize - 1).copied()
    }

    /// Human readable label as shown on dashboards.
    pub fn label(&self) -> &'static str {
        use Category::*;
        match self {
            StationaryCombustion => "Stationary Combustion",
            MobileCombustion => "Mobile Combustion",
            ProcessEmissions => "Process Emissions",
            FugitiveEmissions => "Fugitive Emissions",
            PurchasedElectricity => "Purchased Electricity",
            PurchasedHeatSteamAndCooling => "Purchased Heat, Steam & Cooling",
            PurchasedGoodsAndServices => "Purchased Goods & Services",
            CapitalGoods => "Capital Goods",
            FuelAndEnergyRelatedActivities => "Fuel & Energy Related Activities",
            UpstreamTransportationAndDistribution => "Upstream Transportation & Distribution",
            WasteGeneratedInOperations => "Waste Generated in Operations",
            BusinessTravel => "Business Travel",
            EmployeeCommuting => "Employee Commuting",
            UpstreamLeasedAssets => "Upstream Leased Assets",
            DownstreamTransportationAndDistribution => "Downstream Transportation & Distribution",
            ProcessingOfSoldProducts => "Processing of Sold Products",
            UseOfSoldProducts => "Use of Sold Products",
            EndOfLifeTreatmentOfSoldProducts => "End-of-Life Treatment of Sold Products",
            DownstreamLeasedAssets => "Downstream Leased Assets",
            Franchises => "Franchises",
            Investments => "Investments",
        }
    }

    /// Snake-case key, identical to the serde name.
    pub fn key(&self) -> String {
        normalize(self.label())
    }
}

/// Lowercase, `&` spelled out, every other separator collapsed to `_`.
fn normalize(s: &str) -> String {
    let spelled = s.trim().to_lowercase().replace('&', " and ");
    spelled
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = EmissionsError;

    /// Accepts the snake-case key or the dashboard label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return Err(EmissionsError::UnknownCategory(s.to_string()));
        }
        Category::all()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| EmissionsError::UnknownCategory(s.to_string()))
    }
}
