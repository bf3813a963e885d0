//! Page components for the three dashboard views.

pub mod database;
pub mod overview;
pub mod trigger_demo;

pub use database::DatabasePage;
pub use overview::OverviewPage;
pub use trigger_demo::TriggerDemoPage;

/// Table cells render a dash for fields the backend left empty.
pub(crate) fn text_or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
