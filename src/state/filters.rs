//! Filter selection state.
//!
//! One value per dashboard session, replaced wholesale when the user changes
//! a control. Empty selection sets mean "no restriction" for that dimension.

use std::collections::BTreeSet;

use crate::data::{GdpCategory, Region};

/// Result-count limit applied after sorting.
///
/// `Top(usize)` makes negative limits unrepresentable; `Top(0)` is legal and
/// yields an empty view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopRange {
    #[default]
    All,
    Top(usize),
}

impl TopRange {
    pub fn label(&self) -> String {
        match self {
            TopRange::All => "All".to_string(),
            TopRange::Top(n) => format!("Top {n}"),
        }
    }
}

/// The current filter selection across all dimensions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub top_range: TopRange,
    /// Empty = every income tier matches.
    pub gdp_categories: BTreeSet<GdpCategory>,
    /// Empty = every country matches.
    pub countries: BTreeSet<String>,
    /// Empty = every region matches.
    pub regions: BTreeSet<Region>,
}

impl FilterState {
    pub fn is_unrestricted(&self) -> bool {
        self.top_range == TopRange::All
            && self.gdp_categories.is_empty()
            && self.countries.is_empty()
            && self.regions.is_empty()
    }

    /// Short human-readable summary for the status bar.
    pub fn summary(&self) -> String {
        if self.is_unrestricted() {
            return "no filters".to_string();
        }

        let mut parts = Vec::new();
        if self.top_range != TopRange::All {
            parts.push(self.top_range.label());
        }
        if !self.gdp_categories.is_empty() {
            parts.push(format!("{} income tiers", self.gdp_categories.len()));
        }
        if !self.regions.is_empty() {
            parts.push(format!("{} regions", self.regions.len()));
        }
        if !self.countries.is_empty() {
            parts.push(format!("{} countries", self.countries.len()));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unrestricted() {
        let filters = FilterState::default();
        assert!(filters.is_unrestricted());
        assert_eq!(filters.summary(), "no filters");
    }

    #[test]
    fn test_summary_lists_active_dimensions() {
        let mut filters = FilterState {
            top_range: TopRange::Top(10),
            ..Default::default()
        };
        filters.regions.insert(Region::Africa);
        filters.countries.insert("Norway".to_string());

        assert!(!filters.is_unrestricted());
        assert_eq!(filters.summary(), "Top 10, 1 regions, 1 countries");
    }

    #[test]
    fn test_top_range_labels() {
        assert_eq!(TopRange::All.label(), "All");
        assert_eq!(TopRange::Top(5).label(), "Top 5");
    }
}
