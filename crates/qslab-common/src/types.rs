//! Type definitions for the QSLRM dashboard
//!
//! These structs mirror the JSON payloads of the lab manager REST API. The
//! dashboard never defines or enforces entity schemas of its own; it reads
//! the fields it displays and ignores everything else. Fields the backend
//! may omit or null out are `Option`s.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of rows a list slot keeps for display.
pub const LIST_DISPLAY_LIMIT: usize = 10;

// =============================================================================
// Analytics Types
// =============================================================================

/// Aggregate counts returned inside the enhanced dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_researchers: u64,
    pub total_projects: u64,
    pub total_simulations: u64,
    /// Simulations executed in the last seven days.
    #[serde(default)]
    pub recent_activity: u64,
}

/// Derived quality metrics across all recorded simulation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub avg_fidelity: f64,
    #[serde(default)]
    pub avg_reproducibility: f64,
}

/// Full dashboard snapshot from `GET /analytics/dashboard/enhanced`.
/// Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub overview: Overview,
    pub status_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub framework_breakdown: BTreeMap<String, u64>,
    pub quality_metrics: QualityMetrics,
}

/// One row of the framework usage comparison from `GET /analytics/frameworks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkUsage {
    pub framework: String,
    pub total_simulations: u64,
    #[serde(default)]
    pub avg_fidelity: f64,
    #[serde(default)]
    pub avg_execution_time: f64,
    #[serde(default)]
    pub avg_reproducibility: f64,
    #[serde(default)]
    pub avg_qubits: f64,
}

// =============================================================================
// Health
// =============================================================================

/// Service health from `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: Option<String>,
    pub version: Option<String>,
}

impl HealthStatus {
    /// True when the backend reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

// =============================================================================
// Entity Records
// =============================================================================

/// A researcher record. `updated_at` is maintained server-side by a
/// database trigger; the demo sequencer compares it before and after a
/// write to make the trigger visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Researcher {
    pub researcher_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub orcid_id: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A simulation project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub field_of_study: Option<String>,
    pub owner_id: i64,
    pub owner_name: Option<String>,
    pub status: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: Option<String>,
}

/// A quantum simulation run record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub run_id: i64,
    pub project_id: i64,
    pub simulation_id: Option<String>,
    pub researcher_id: i64,
    pub researcher_name: Option<String>,
    pub framework: String,
    pub num_qubits: Option<i64>,
    pub circuit_depth: Option<i64>,
    pub algorithm_type: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub execution_date: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================
