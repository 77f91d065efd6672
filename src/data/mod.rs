//! Data modules: the static oil dataset and the filtered views over it.
//!
//! - `model`: record types and the years-of-production derivation
//! - `ingest`: embedded JSON asset, normalization of raw rows
//! - `views`: pure filter/sort/top-N functions feeding the chart panels

pub mod ingest;
pub mod model;
pub mod views;

pub use ingest::{load_dataset, OilDataset};
pub use model::{ExportRecord, GdpCategory, ProducerRecord, Region};
pub use views::{filter_exports, filter_producers, DerivedViews, ExportMetric, ProducerMetric};
