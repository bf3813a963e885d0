//! QSLRM Config - Dashboard Configuration
//!
//! Tunables for polling, display truncation, and the scripted trigger
//! demo. The browser has no filesystem, so there is no config-file loader;
//! the one runtime knob (the API base URL) is resolved by the dashboard
//! from the document root attribute or the page origin, and `dev_api_base`
//! is the development fallback.
//!
//! @version 0.1.0
//! @author QSLRM Platform Team

use crate::types::LIST_DISPLAY_LIMIT;
use serde::{Deserialize, Serialize};

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Poll period for the auto-refresh timer, in milliseconds.
    pub refresh_interval_ms: u32,
    /// Maximum rows kept per list slot for display.
    pub list_display_limit: usize,
    /// Researcher targeted by the trigger demo.
    pub demo_researcher_id: i64,
    /// Pacing delay after the before-state read, in milliseconds.
    pub demo_pause_after_read_ms: u32,
    /// Pacing delay after the email update, in milliseconds.
    pub demo_pause_after_write_ms: u32,
    /// Pacing delay before the before/after comparison, in milliseconds.
    pub demo_pause_before_verdict_ms: u32,
    /// API base URL used when neither a document attribute nor a page
    /// origin is available.
    pub dev_api_base: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 5_000,
            list_display_limit: LIST_DISPLAY_LIMIT,
            demo_researcher_id: 1,
            demo_pause_after_read_ms: 1_500,
            demo_pause_after_write_ms: 1_500,
            demo_pause_before_verdict_ms: 1_000,
            dev_api_base: "http://localhost:5000/api".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_interval_ms, 5_000);
        assert_eq!(config.list_display_limit, 10);
        assert_eq!(config.demo_researcher_id, 1);
        assert_eq!(config.demo_pause_after_read_ms, 1_500);
        assert_eq!(config.demo_pause_after_write_ms, 1_500);
        assert_eq!(config.demo_pause_before_verdict_ms, 1_000);
        assert_eq!(config.dev_api_base, "http://localhost:5000/api");
    }
}
