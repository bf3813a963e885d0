//! QSLRM Common - Shared Types and Utilities
//!
//! Foundational types, error handling, and configuration used across the
//! Quantum Simulation Lab Manager dashboard. Everything here is independent
//! of the rendering layer so the fetch and demo logic stays testable.
//!
//! Key Features:
//! - Data model mirroring the lab manager REST API payloads
//! - Unified error type with fetch-failure classification
//! - Demo-run state machine (before/after snapshots and execution log)
//! - Dashboard configuration with development defaults
//!
//! @version 0.1.0
//! @author QSLRM Platform Team

pub mod config;
pub mod demo;
pub mod error;
pub mod types;
pub mod utils;

pub use config::DashboardConfig;
pub use error::{QslabError, Result};
pub use types::*;
