//! Canned reduction suggestions per category.

use emissions_spi::{Category, Recommender};

/// Fixed lookup table of reduction suggestions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecommendations;

impl Recommender for StaticRecommendations {
    fn recommendation(&self, category: Category) -> &str {
        use Category::*;
        match category {
            StationaryCombustion => {
                "Electrify heating with heat pumps and tune boilers for efficiency"
            }
            MobileCombustion => "Transition fleet vehicles to electric or hybrid models",
            ProcessEmissions => "Review process chemistry and capture emissions at the source",
            FugitiveEmissions => {
                "Run leak detection on refrigeration and switch to low-GWP refrigerants"
            }
            PurchasedElectricity => {
                "Procure renewable electricity through PPAs or green tariffs, add on-site solar"
            }
            PurchasedHeatSteamAndCooling => {
                "Connect to low-carbon district heating or recover waste heat on site"
            }
            PurchasedGoodsAndServices => {
                "Engage top suppliers on emissions targets and prefer low-carbon materials"
            }
            CapitalGoods => "Extend asset lifetimes and favour refurbished or low-carbon equipment",
            FuelAndEnergyRelatedActivities => {
                "Cut energy demand and choose suppliers with lower upstream losses"
            }
            UpstreamTransportationAndDistribution => {
                "Consolidate shipments and shift freight from air and road to rail or sea"
            }
            WasteGeneratedInOperations => {
                "Reduce waste at source and divert more to recycling and composting"
            }
            BusinessTravel => "Replace short-haul flights with rail and favour virtual meetings",
            EmployeeCommuting => "Support remote work, public transit passes and cycling schemes",
            UpstreamLeasedAssets => "Negotiate green lease clauses and metered energy data",
            DownstreamTransportationAndDistribution => {
                "Work with distributors on route optimization and cleaner vehicles"
            }
            ProcessingOfSoldProducts => {
                "Design products that need less energy-intensive processing downstream"
            }
            UseOfSoldProducts => "Improve the energy efficiency of products in use",
            EndOfLifeTreatmentOfSoldProducts => {
                "Design for recyclability and offer take-back programmes"
            }
            DownstreamLeasedAssets => "Share efficiency upgrades and energy data with tenants",
            Franchises => "Set energy and sourcing standards across franchise operations",
            Investments => "Align the portfolio with science-based targets and engage investees",
        }
    }
}
