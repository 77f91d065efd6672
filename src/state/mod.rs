//! Application state management.
//!
//! The root [`AppState`] owns the loaded dataset and the single current
//! filter selection. Filter updates are whole-value replacements; dependent
//! views are recomputed by the app loop when `views_dirty` is set.

mod filters;

pub use filters::{FilterState, TopRange};

use crate::data::{load_dataset, OilDataset};

/// Root application state.
pub struct AppState {
    /// The full dataset, loaded once at startup and never mutated.
    pub dataset: OilDataset,

    /// Current filter selection.
    pub filters: FilterState,

    /// Set when `filters` changed and the derived views must be recomputed.
    pub views_dirty: bool,

    /// Application status message displayed in the top bar.
    pub status_message: String,
}

impl AppState {
    pub fn new() -> Self {
        let dataset = match load_dataset() {
            Ok(dataset) => {
                log::info!(
                    "Loaded oil dataset: {} export rows, {} producer rows",
                    dataset.exports.len(),
                    dataset.producers.len()
                );
                dataset
            }
            Err(e) => {
                // Degrade to empty charts rather than failing to start
                log::error!("Failed to parse embedded oil dataset: {e}");
                OilDataset::default()
            }
        };

        if dataset.is_empty() {
            log::warn!("Dataset is empty; charts will have nothing to draw");
        }

        Self {
            dataset,
            filters: FilterState::default(),
            views_dirty: true,
            status_message: "Ready".to_string(),
        }
    }

    /// Replace the current filter selection. Last write wins; the derived
    /// views are rebuilt on the next app update.
    pub fn apply_filters(&mut self, new_filters: FilterState) {
        if new_filters == self.filters {
            return;
        }
        log::info!("Filters updated: {}", new_filters.summary());
        self.filters = new_filters;
        self.views_dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_dataset_and_needs_derivation() {
        let state = AppState::new();
        assert!(!state.dataset.is_empty());
        assert!(state.views_dirty);
        assert!(state.filters.is_unrestricted());
    }

    #[test]
    fn test_apply_filters_marks_views_dirty() {
        let mut state = AppState::new();
        state.views_dirty = false;

        let new_filters = FilterState {
            top_range: TopRange::Top(5),
            ..Default::default()
        };
        state.apply_filters(new_filters.clone());

        assert!(state.views_dirty);
        assert_eq!(state.filters, new_filters);
    }

    #[test]
    fn test_apply_identical_filters_is_a_no_op() {
        let mut state = AppState::new();
        state.views_dirty = false;

        state.apply_filters(state.filters.clone());
        assert!(!state.views_dirty);
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = AppState::new();

        state.apply_filters(FilterState {
            top_range: TopRange::Top(5),
            ..Default::default()
        });
        state.apply_filters(FilterState {
            top_range: TopRange::Top(10),
            ..Default::default()
        });

        assert_eq!(state.filters.top_range, TopRange::Top(10));
    }
}
