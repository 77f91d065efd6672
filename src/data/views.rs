//! Filtered, sorted, size-limited views over the dataset.
//!
//! Every chart consumes one view: the full record list narrowed by the
//! current [`FilterState`], sorted descending by a per-chart metric, and
//! truncated to the selected top-N. Filtering is pure — the source dataset
//! is never mutated, and repeated calls with the same inputs yield the same
//! output.

use crate::data::ingest::OilDataset;
use crate::data::model::{ExportRecord, GdpCategory, ProducerRecord, Region};
use crate::state::{FilterState, TopRange};

/// Sort keys available for export-record views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMetric {
    Production,
    Population,
    /// Ordering by export volume itself.
    #[allow(dead_code)] // Available for additional export chart variants
    Exports,
}

impl ExportMetric {
    fn value(&self, record: &ExportRecord) -> f64 {
        match self {
            ExportMetric::Production => record.production_bbl_day,
            ExportMetric::Population => record.population_2024_millions,
            ExportMetric::Exports => record.exports_bbl_day,
        }
    }
}

/// Sort keys available for producer-record views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerMetric {
    Production,
    Reserves,
    /// Ordering by the derived years-of-production metric.
    #[allow(dead_code)] // Available for additional producer chart variants
    YearsRemaining,
}

impl ProducerMetric {
    fn value(&self, record: &ProducerRecord) -> f64 {
        match self {
            ProducerMetric::Production => record.production_bbl_day,
            ProducerMetric::Reserves => record.reserves_bn_bbl,
            ProducerMetric::YearsRemaining => record.years_remaining,
        }
    }
}

/// Common filter dimensions shared by both record shapes.
trait CountryRecord {
    fn country(&self) -> &str;
    fn gdp_category(&self) -> GdpCategory;
    fn region(&self) -> Region;
}

impl CountryRecord for ExportRecord {
    fn country(&self) -> &str {
        &self.country
    }
    fn gdp_category(&self) -> GdpCategory {
        self.gdp_category
    }
    fn region(&self) -> Region {
        self.region
    }
}

impl CountryRecord for ProducerRecord {
    fn country(&self) -> &str {
        &self.country
    }
    fn gdp_category(&self) -> GdpCategory {
        self.gdp_category
    }
    fn region(&self) -> Region {
        self.region
    }
}

/// Filter export records by the current selection, sorted descending by
/// `metric`, truncated to the selected top-N.
pub fn filter_exports(
    records: &[ExportRecord],
    filters: &FilterState,
    metric: ExportMetric,
) -> Vec<ExportRecord> {
    filter_records(records, filters, |r| metric.value(r))
}

/// Filter producer records by the current selection, sorted descending by
/// `metric`, truncated to the selected top-N.
pub fn filter_producers(
    records: &[ProducerRecord],
    filters: &FilterState,
    metric: ProducerMetric,
) -> Vec<ProducerRecord> {
    filter_records(records, filters, |r| metric.value(r))
}

/// Restriction order is fixed: GDP category, then country, then region,
/// then sort, then top-N. An empty selection set leaves that dimension
/// unrestricted.
fn filter_records<R, F>(records: &[R], filters: &FilterState, key: F) -> Vec<R>
where
    R: CountryRecord + Clone,
    F: Fn(&R) -> f64,
{
    let mut kept: Vec<R> = records
        .iter()
        .filter(|r| {
            filters.gdp_categories.is_empty() || filters.gdp_categories.contains(&r.gdp_category())
        })
        .filter(|r| filters.countries.is_empty() || filters.countries.contains(r.country()))
        .filter(|r| filters.regions.is_empty() || filters.regions.contains(&r.region()))
        .cloned()
        .collect();

    // Stable descending sort; ties keep their original relative order.
    kept.sort_by(|a, b| sort_value(key(b)).total_cmp(&sort_value(key(a))));

    if let TopRange::Top(n) = filters.top_range {
        kept.truncate(n);
    }

    kept
}

/// Non-finite sort keys (should not occur after ingestion) rank as 0.
fn sort_value(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// The four filtered views the chart panels consume, recomputed in full on
/// every filter change.
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    pub exports_by_production: Vec<ExportRecord>,
    pub exports_by_population: Vec<ExportRecord>,
    pub producers_by_production: Vec<ProducerRecord>,
    pub producers_by_reserves: Vec<ProducerRecord>,
}

impl DerivedViews {
    pub fn compute(dataset: &OilDataset, filters: &FilterState) -> Self {
        Self {
            exports_by_production: filter_exports(
                &dataset.exports,
                filters,
                ExportMetric::Production,
            ),
            exports_by_population: filter_exports(
                &dataset.exports,
                filters,
                ExportMetric::Population,
            ),
            producers_by_production: filter_producers(
                &dataset.producers,
                filters,
                ProducerMetric::Production,
            ),
            producers_by_reserves: filter_producers(
                &dataset.producers,
                filters,
                ProducerMetric::Reserves,
            ),
        }
    }
}
