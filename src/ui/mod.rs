//! UI modules for the oil dashboard.
//!
//! The UI is split into distinct panels:
//! - Top bar: title, status message, dataset summary
//! - Left panel: filter controls
//! - Central panel: scrollable chart stack

mod charts;
mod colors;
mod filter_panel;
mod top_bar;

pub use charts::render_charts;
pub use filter_panel::render_filter_panel;
pub use top_bar::render_top_bar;
