//! Dataset ingestion: embedded JSON asset and normalization to model records.
//!
//! The dataset ships as a compile-time asset. Raw rows are deserialized with
//! optional numeric fields, then a single normalization pass defaults missing
//! numbers to 0.0 and computes derived fields. Downstream code only ever sees
//! fully-populated model records.

use serde::Deserialize;

use crate::data::model::{years_remaining, ExportRecord, GdpCategory, ProducerRecord, Region};

// Embed the dataset at compile time
static OIL_DATA_JSON: &str = include_str!("../../assets/oil_data.json");

/// The full dataset: both record shapes, loaded once at session start.
#[derive(Debug, Clone, Default)]
pub struct OilDataset {
    pub exports: Vec<ExportRecord>,
    pub producers: Vec<ProducerRecord>,
}

impl OilDataset {
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty() && self.producers.is_empty()
    }

    /// Unique country names across both record shapes, sorted.
    pub fn country_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .exports
            .iter()
            .map(|r| r.country.clone())
            .chain(self.producers.iter().map(|r| r.country.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default)]
    exports: Vec<RawExportRow>,
    #[serde(default)]
    producers: Vec<RawProducerRow>,
}

#[derive(Deserialize)]
struct RawExportRow {
    country: String,
    production_bbl_day: Option<f64>,
    exports_bbl_day: Option<f64>,
    population_2024_millions: Option<f64>,
    gdp_oil_percent: Option<f64>,
    gdp_category: GdpCategory,
    region: Region,
}

#[derive(Deserialize)]
struct RawProducerRow {
    country: String,
    production_bbl_day: Option<f64>,
    reserves_bn_bbl: Option<f64>,
    fracking_share_percent: Option<f64>,
    gdp_category: GdpCategory,
    region: Region,
}

/// Load the embedded dataset.
pub fn load_dataset() -> Result<OilDataset, serde_json::Error> {
    parse_dataset(OIL_DATA_JSON)
}

fn parse_dataset(json: &str) -> Result<OilDataset, serde_json::Error> {
    let raw: RawDataset = serde_json::from_str(json)?;
    Ok(OilDataset {
        exports: raw.exports.into_iter().map(normalize_export).collect(),
        producers: raw.producers.into_iter().map(normalize_producer).collect(),
    })
}

fn normalize_export(row: RawExportRow) -> ExportRecord {
    ExportRecord {
        country: row.country,
        production_bbl_day: row.production_bbl_day.unwrap_or(0.0),
        exports_bbl_day: row.exports_bbl_day.unwrap_or(0.0),
        population_2024_millions: row.population_2024_millions.unwrap_or(0.0),
        gdp_oil_percent: row.gdp_oil_percent.unwrap_or(0.0),
        gdp_category: row.gdp_category,
        region: row.region,
    }
}

fn normalize_producer(row: RawProducerRow) -> ProducerRecord {
    let production = row.production_bbl_day.unwrap_or(0.0);
    let reserves = row.reserves_bn_bbl.unwrap_or(0.0);
    ProducerRecord {
        country: row.country,
        production_bbl_day: production,
        reserves_bn_bbl: reserves,
        years_remaining: years_remaining(reserves, production),
        fracking_share_percent: row.fracking_share_percent.unwrap_or(0.0),
        gdp_category: row.gdp_category,
        region: row.region,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let dataset = load_dataset().unwrap();
        assert!(!dataset.exports.is_empty());
        assert!(!dataset.producers.is_empty());
    }

    #[test]
    fn test_embedded_dataset_consistent_join_key() {
        // Every producer country also appears as an exporter, so charts can
        // cross-reference the two shapes by name.
        let dataset = load_dataset().unwrap();
        for producer in &dataset.producers {
            assert!(
                dataset.exports.iter().any(|e| e.country == producer.country),
                "producer {} missing from exports",
                producer.country
            );
        }
    }

    #[test]
    fn test_embedded_dataset_derived_fields_finite() {
        let dataset = load_dataset().unwrap();
        for producer in &dataset.producers {
            assert!(producer.years_remaining.is_finite());
            assert!(producer.years_remaining >= 0.0);
        }
    }

    #[test]
    fn test_missing_numerics_default_to_zero() {
        let json = r#"{
            "exports": [
                { "country": "Atlantis", "gdp_category": "low", "region": "europe" }
            ],
            "producers": [
                { "country": "Atlantis", "reserves_bn_bbl": 5.0, "gdp_category": "low", "region": "europe" }
            ]
        }"#;
        let dataset = parse_dataset(json).unwrap();

        let export = &dataset.exports[0];
        assert_eq!(export.production_bbl_day, 0.0);
        assert_eq!(export.exports_bbl_day, 0.0);
        assert_eq!(export.population_2024_millions, 0.0);
        assert_eq!(export.gdp_oil_percent, 0.0);

        // Zero production rate resolves years-remaining to 0, never Inf/NaN
        let producer = &dataset.producers[0];
        assert_eq!(producer.production_bbl_day, 0.0);
        assert_eq!(producer.years_remaining, 0.0);
    }

    #[test]
    fn test_empty_document_yields_empty_dataset() {
        let dataset = parse_dataset("{}").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.country_names().is_empty());
    }

    #[test]
    fn test_country_names_sorted_and_deduplicated() {
        let dataset = load_dataset().unwrap();
        let names = dataset.country_names();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }
}
