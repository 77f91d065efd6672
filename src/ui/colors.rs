//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for stat labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for stat values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
    /// Dim text for placeholders and axis labels.
    pub const DIM: Color32 = Color32::from_rgb(120, 120, 130);
}

/// Colors for the chart panels.
pub mod chart {
    use super::Color32;

    /// Background of chart plot areas.
    pub const BACKGROUND: Color32 = Color32::from_rgb(24, 26, 34);
    /// Plot area border.
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    /// Horizontal grid lines.
    pub const GRID: Color32 = Color32::from_rgb(44, 48, 60);

    /// Amber - crude export bars.
    pub const EXPORTS: Color32 = Color32::from_rgb(245, 158, 11);
    /// Blue - production bars.
    pub const PRODUCTION: Color32 = Color32::from_rgb(59, 130, 246);
    /// Emerald - reserves bars.
    pub const RESERVES: Color32 = Color32::from_rgb(16, 185, 129);
    /// Cyan - population bars.
    pub const POPULATION: Color32 = Color32::from_rgb(6, 182, 212);
    /// Orange - fracking share bars.
    pub const FRACKING: Color32 = Color32::from_rgb(249, 115, 22);
    /// Red - overlay line series (oil share of GDP, years remaining).
    pub const LINE: Color32 = Color32::from_rgb(239, 68, 68);
}
