// Core modules
pub mod app;
pub mod catalog;
pub mod data;
pub mod error;
pub mod table;
mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use catalog::{SERIES_CATALOG, SeriesDescriptor};
pub use error::DashboardError;
pub use table::{Observation, ResultTable, build_table};

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>) -> App {
    App::new(cc)
}
