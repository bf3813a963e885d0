//! QSLRM Error - Unified Error Types
//!
//! Error handling for the dashboard's interactions with the lab manager
//! API. The three ways a fetch can go wrong (transport failure, non-success
//! status, body decode failure) are distinct variants but are classified
//! together: callers treat them all as one "fetch failed" condition.
//!
//! @version 0.1.0
//! @author QSLRM Platform Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for dashboard operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QslabError {
    // Fetch errors
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("decode error: {0}")]
    Decode(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

// =============================================================================
// Type Aliases
// =============================================================================

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, QslabError>;

// =============================================================================
// Error Classification
// =============================================================================

impl QslabError {
    /// Returns true if this error is one of the three fetch-failure
    /// conditions, which the dashboard surfaces identically.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            QslabError::Network(_) | QslabError::Status(_) | QslabError::Decode(_)
        )
    }

    /// Returns true if this is a configuration problem rather than a
    /// runtime fetch failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, QslabError::Configuration(_))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_classification() {
        assert!(QslabError::Network("connection refused".to_string()).is_fetch_failure());
        assert!(QslabError::Status(500).is_fetch_failure());
        assert!(QslabError::Decode("expected object".to_string()).is_fetch_failure());
        assert!(!QslabError::Configuration("bad base url".to_string()).is_fetch_failure());
        assert!(!QslabError::Internal("oops".to_string()).is_fetch_failure());
    }

    #[test]
    fn test_configuration_classification() {
        assert!(QslabError::Configuration("bad base url".to_string()).is_configuration_error());
        assert!(!QslabError::Status(500).is_configuration_error());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            QslabError::Status(404).to_string(),
            "server returned status 404"
        );
        assert_eq!(
            QslabError::Network("timed out".to_string()).to_string(),
            "network error: timed out"
        );
    }
}
