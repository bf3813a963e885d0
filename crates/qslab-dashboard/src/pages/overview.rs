//! Overview page: health banner, stat cards, and breakdown charts.

use leptos::*;
use qslab_common::utils::{format_count, format_percent, format_seconds};

use crate::state::{use_dashboard_context, RefreshAction};

/// Overview page showing lab-wide stats and activity breakdowns.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <HealthBanner />

        // Stats Grid
        <div class="stats-grid">
            <StatCard
                icon="R"
                icon_class="teal"
                label="Total Researchers"
                value=Signal::derive(move || {
                    ctx.dashboard.get()
                        .map(|d| format_count(d.overview.total_researchers))
                        .unwrap_or_else(|| "-".to_string())
                })
            />
            <StatCard
                icon="P"
                icon_class="success"
                label="Active Projects"
                value=Signal::derive(move || {
                    ctx.dashboard.get()
                        .map(|d| format_count(d.overview.total_projects))
                        .unwrap_or_else(|| "-".to_string())
                })
            />
            <StatCard
                icon="S"
                icon_class="terracotta"
                label="Simulations"
                value=Signal::derive(move || {
                    ctx.dashboard.get()
                        .map(|d| format_count(d.overview.total_simulations))
                        .unwrap_or_else(|| "-".to_string())
                })
            />
            <StatCard
                icon="F"
                icon_class="info"
                label="Avg Fidelity"
                value=Signal::derive(move || {
                    ctx.dashboard.get()
                        .map(|d| format_percent(d.quality_metrics.avg_fidelity))
                        .unwrap_or_else(|| "-".to_string())
                })
            />
            <StatCard
                icon="A"
                icon_class="teal"
                label="Recent Activity (7d)"
                value=Signal::derive(move || {
                    ctx.dashboard.get()
                        .map(|d| format_count(d.overview.recent_activity))
                        .unwrap_or_else(|| "-".to_string())
                })
            />
            <StatCard
                icon="Q"
                icon_class="info"
                label="Avg Reproducibility"
                value=Signal::derive(move || {
                    ctx.dashboard.get()
                        .map(|d| format_percent(d.quality_metrics.avg_reproducibility))
                        .unwrap_or_else(|| "-".to_string())
                })
            />
        </div>

        // Charts Grid
        <div class="dashboard-grid">
            <FrameworksCard />
            <StatusCard />
        </div>
    }
}

/// Health banner with the refresh controls.
#[component]
fn HealthBanner() -> impl IntoView {
    let ctx = use_dashboard_context();
    let refresh = expect_context::<RefreshAction>().0;

    let healthy = move || ctx.health.get().map(|h| h.is_ok()).unwrap_or(false);
    let status_text = move || {
        ctx.health
            .get()
            .map(|h| h.status.to_uppercase())
            .unwrap_or_else(|| "UNKNOWN".to_string())
    };
    let detail = move || {
        let health = ctx.health.get();
        let database = health
            .as_ref()
            .and_then(|h| h.database.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let version = health
            .as_ref()
            .and_then(|h| h.version.clone())
            .unwrap_or_else(|| "N/A".to_string());
        format!("Database: {database} | Version: {version}")
    };

    view! {
        <div class="health-banner" class:ok=healthy class:down=move || !healthy()>
            <div class="health-summary">
                <h3>"System Status: " {status_text}</h3>
                <p>{detail}</p>
            </div>
            <div class="header-actions">
                <button
                    class="toggle-btn"
                    class:active=move || ctx.auto_refresh.get()
                    on:click=move |_| ctx.auto_refresh.update(|on| *on = !*on)
                >
                    {move || if ctx.auto_refresh.get() { "Auto-Refresh ON" } else { "Auto-Refresh OFF" }}
                </button>
                <button
                    class="refresh-btn"
                    on:click=move |_| refresh.dispatch(())
                    disabled=move || ctx.busy.get()
                >
                    {move || if ctx.busy.get() { "Refreshing..." } else { "Refresh Now" }}
                </button>
            </div>
        </div>
    }
}

/// Stat card component
#[component]
fn StatCard(
    icon: &'static str,
    icon_class: &'static str,
    label: &'static str,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-header">
                <div class=format!("stat-icon {icon_class}")>{icon}</div>
            </div>
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Framework distribution as a proportional breakdown.
#[component]
fn FrameworksCard() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Framework Distribution"</span>
            </div>
            <div class="card-body">
                {move || {
                    let rows = ctx.frameworks.get();
                    if rows.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"No framework data"</p>
                            </div>
                        }.into_view();
                    }

                    let total: u64 = rows.iter().map(|f| f.total_simulations).sum();
                    view! {
                        <div class="framework-list">
                            {rows.into_iter().map(|f| {
                                let share = if total > 0 {
                                    f.total_simulations as f64 / total as f64
                                } else {
                                    0.0
                                };
                                let meta = format!(
                                    "fidelity {} | avg run {}",
                                    format_percent(f.avg_fidelity),
                                    format_seconds(f.avg_execution_time),
                                );
                                view! {
                                    <div class="framework-row" title=meta>
                                        <span class="framework-name">{f.framework.clone()}</span>
                                        <div class="framework-bar-track">
                                            <div
                                                class="framework-bar"
                                                style=format!("width: {:.1}%", share * 100.0)
                                            ></div>
                                        </div>
                                        <span class="framework-share">{format_percent(share)}</span>
                                        <span class="framework-count">
                                            {format_count(f.total_simulations)}
                                        </span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

/// Simulation status breakdown rendered as a bar histogram.
#[component]
fn StatusCard() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Simulation Status"</span>
            </div>
            <div class="card-body">
                {move || {
                    let breakdown = ctx.dashboard.get()
                        .map(|d| d.status_breakdown)
                        .unwrap_or_default();
                    if breakdown.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"No simulation data"</p>
                            </div>
                        }.into_view();
                    }

                    let max = breakdown.values().copied().max().unwrap_or(1).max(1);
                    view! {
                        <div class="status-histogram">
                            {breakdown.into_iter().map(|(status, count)| {
                                let height = count as f64 / max as f64 * 100.0;
                                view! {
                                    <div
                                        class="histogram-bar"
                                        style=format!("height: {height:.0}%")
                                    >
                                        <span class="bar-value">{format_count(count)}</span>
                                        <span class="bar-label">{status}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </div>
        </div>
    }
}
