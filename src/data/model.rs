//! Record types for the oil dataset.
//!
//! Two record shapes share the country name as a join key: export records
//! carry the export/economic profile of a country, producer records carry
//! its production/reserves profile. Numeric fields are plain `f64` — any
//! defaulting of missing values happens once at ingestion, never here.

use serde::{Deserialize, Serialize};

/// Days per year used when normalizing reserves-over-production to years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Income-tier tag attached to each country, used as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GdpCategory {
    High,
    UpperMiddle,
    LowerMiddle,
    Low,
}

impl GdpCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GdpCategory::High => "High income",
            GdpCategory::UpperMiddle => "Upper-middle income",
            GdpCategory::LowerMiddle => "Lower-middle income",
            GdpCategory::Low => "Low income",
        }
    }

    pub fn all() -> &'static [GdpCategory] {
        &[
            GdpCategory::High,
            GdpCategory::UpperMiddle,
            GdpCategory::LowerMiddle,
            GdpCategory::Low,
        ]
    }
}

/// Geographic grouping attached to each country, used as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    MiddleEast,
    Africa,
    Asia,
    Eurasia,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Europe => "Europe",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Eurasia => "Eurasia",
        }
    }

    pub fn all() -> &'static [Region] {
        &[
            Region::NorthAmerica,
            Region::SouthAmerica,
            Region::Europe,
            Region::MiddleEast,
            Region::Africa,
            Region::Asia,
            Region::Eurasia,
        ]
    }
}

/// One country's export/economic profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    /// Display name, unique within the dataset.
    pub country: String,
    /// Crude production rate in barrels per day.
    pub production_bbl_day: f64,
    /// Crude export volume in barrels per day.
    pub exports_bbl_day: f64,
    /// 2024 population in millions.
    pub population_2024_millions: f64,
    /// Oil sector share of GDP, percent.
    pub gdp_oil_percent: f64,
    pub gdp_category: GdpCategory,
    pub region: Region,
}

/// One country's production/reserves profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerRecord {
    /// Display name, unique within the dataset.
    pub country: String,
    /// Crude production rate in barrels per day.
    pub production_bbl_day: f64,
    /// Proven reserves in billions of barrels.
    pub reserves_bn_bbl: f64,
    /// Derived: how long proven reserves last at the current production
    /// rate, in years. Zero when the production rate is zero.
    pub years_remaining: f64,
    /// Share of production from hydraulic fracturing, percent.
    pub fracking_share_percent: f64,
    pub gdp_category: GdpCategory,
    pub region: Region,
}

/// Years of production remaining: proven reserves divided by the daily
/// production rate, normalized to years. Returns 0.0 (never Inf/NaN) when
/// the production rate is zero or negative.
pub fn years_remaining(reserves_bn_bbl: f64, production_bbl_day: f64) -> f64 {
    if production_bbl_day > 0.0 {
        reserves_bn_bbl * 1e9 / (production_bbl_day * DAYS_PER_YEAR)
    } else {
        0.0
    }
}
