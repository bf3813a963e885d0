//! Dashboard state management using Leptos signals and context
//!
//! All display data lives in one context struct of signals: six slots
//! populated by the data fetcher, the busy flag, the auto-refresh toggle,
//! the active tab, and the transient demo run. Slots are only written
//! through the `apply_*` reducers, which replace wholesale and truncate
//! list slots for display.

use leptos::*;
use qslab_common::demo::DemoRun;
use qslab_common::types::{
    DashboardSnapshot, FrameworkUsage, HealthStatus, Project, Researcher, Simulation,
    LIST_DISPLAY_LIMIT,
};

/// Handle to the shared refresh action, provided by the app shell so any
/// page can trigger a manual fetch.
#[derive(Clone, Copy)]
pub struct RefreshAction(pub Action<(), ()>);

/// The three mutually exclusive dashboard views.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum ActiveTab {
    #[default]
    Overview,
    Demo,
    Database,
}

/// Dashboard context containing all shared state
#[derive(Clone, Copy)]
pub struct DashboardContext {
    // Navigation
    pub active_tab: RwSignal<ActiveTab>,

    // Fetch state
    pub busy: RwSignal<bool>,
    pub auto_refresh: RwSignal<bool>,

    // Display slots
    pub dashboard: RwSignal<Option<DashboardSnapshot>>,
    pub frameworks: RwSignal<Vec<FrameworkUsage>>,
    pub health: RwSignal<Option<HealthStatus>>,
    pub researchers: RwSignal<Vec<Researcher>>,
    pub projects: RwSignal<Vec<Project>>,
    pub simulations: RwSignal<Vec<Simulation>>,

    // Trigger demo state
    pub demo: RwSignal<DemoRun>,
}

impl DashboardContext {
    /// Create a new dashboard context with default values
    pub fn new() -> Self {
        Self {
            active_tab: create_rw_signal(ActiveTab::Overview),
            busy: create_rw_signal(false),
            auto_refresh: create_rw_signal(true),
            dashboard: create_rw_signal(None),
            frameworks: create_rw_signal(vec![]),
            health: create_rw_signal(None),
            researchers: create_rw_signal(vec![]),
            projects: create_rw_signal(vec![]),
            simulations: create_rw_signal(vec![]),
            demo: create_rw_signal(DemoRun::default()),
        }
    }

    /// True once the first snapshot has arrived; the initial splash shows
    /// until then.
    pub fn has_initial_data(&self) -> bool {
        self.dashboard.with(|snapshot| snapshot.is_some())
    }

    pub fn apply_dashboard(&self, snapshot: DashboardSnapshot) {
        self.dashboard.set(Some(snapshot));
    }

    pub fn apply_frameworks(&self, rows: Vec<FrameworkUsage>) {
        self.frameworks.set(rows);
    }

    pub fn apply_health(&self, health: HealthStatus) {
        self.health.set(Some(health));
    }

    pub fn apply_researchers(&self, mut rows: Vec<Researcher>) {
        rows.truncate(LIST_DISPLAY_LIMIT);
        self.researchers.set(rows);
    }

    pub fn apply_projects(&self, mut rows: Vec<Project>) {
        rows.truncate(LIST_DISPLAY_LIMIT);
        self.projects.set(rows);
    }

    pub fn apply_simulations(&self, mut rows: Vec<Simulation>) {
        rows.truncate(LIST_DISPLAY_LIMIT);
        self.simulations.set(rows);
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the dashboard context to child components
pub fn provide_dashboard_context() -> DashboardContext {
    let ctx = DashboardContext::new();
    provide_context(ctx);
    ctx
}

/// Get the dashboard context from the component tree
pub fn use_dashboard_context() -> DashboardContext {
    expect_context::<DashboardContext>()
}

// =============================================================================
// Tests
// =============================================================================
