#![warn(clippy::all)]

//! Oil Dashboard - an interactive visualization of global oil production,
//! proven reserves, exports, and related economic indicators.
//!
//! The application loads a pre-shaped static dataset at startup, narrows it
//! by user-selected filters (top-N by metric, income tier, country, region),
//! and feeds the filtered views to the chart panels.

mod data;
mod format;
mod state;
mod ui;

use data::DerivedViews;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Oil Dashboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}

/// Main application state and logic.
struct DashboardApp {
    /// Application state containing the dataset and filter selection
    state: AppState,

    /// The four filtered views consumed by the chart panels
    views: DerivedViews,
}

impl DashboardApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: AppState::new(),
            views: DerivedViews::default(),
        }
    }

    /// Recompute all derived views from the current filter selection.
    /// Re-derivation is eager and full; the dataset is small enough that
    /// caching across updates is not worth it.
    fn refresh_views(&mut self) {
        self.views = DerivedViews::compute(&self.state.dataset, &self.state.filters);
        self.state.views_dirty = false;

        self.state.status_message = if self.state.filters.is_unrestricted() {
            "Ready".to_string()
        } else {
            format!(
                "Filters: {} ({} countries shown)",
                self.state.filters.summary(),
                self.views.exports_by_production.len()
            )
        };
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.views_dirty {
            self.refresh_views();
        }

        ui::render_top_bar(ctx, &mut self.state);
        ui::render_filter_panel(ctx, &mut self.state);
        ui::render_charts(ctx, &self.views);

        // Filter edits from this frame take effect on the next pass
        if self.state.views_dirty {
            ctx.request_repaint();
        }
    }
}
