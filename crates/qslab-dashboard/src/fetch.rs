//! Data fetcher: one invocation refreshes all six display slots.
//!
//! The six requests are issued sequentially in a fixed order, so a failure
//! partway through leaves the slots it never reached untouched. There is
//! no retry and no backoff; the failure is logged to the console and the
//! previous values keep rendering.

use crate::api::LabApi;
use crate::state::DashboardContext;
use leptos::SignalSet;
use qslab_common::Result;

/// Fetch all six slots. Already-applied slots keep their new values if a
/// later request fails. The busy flag is cleared whatever the outcome.
pub async fn refresh_all<A: LabApi>(api: &A, ctx: &DashboardContext) -> Result<()> {
    ctx.busy.set(true);
    let outcome = fetch_slots(api, ctx).await;
    ctx.busy.set(false);

    if let Err(err) = &outcome {
        log::error!("data refresh failed: {err}");
    }
    outcome
}

async fn fetch_slots<A: LabApi>(api: &A, ctx: &DashboardContext) -> Result<()> {
    ctx.apply_dashboard(api.dashboard().await?);
    ctx.apply_frameworks(api.frameworks().await?);
    ctx.apply_health(api.health().await?);
    ctx.apply_researchers(api.researchers().await?);
    ctx.apply_projects(api.projects().await?);
    ctx.apply_simulations(api.simulations().await?);
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
