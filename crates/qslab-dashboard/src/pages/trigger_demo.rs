//! Trigger demo page: run control, live execution log, before/after cards.

use leptos::*;
use qslab_common::demo::DemoLogKind;
use qslab_common::types::Researcher;

use crate::api::{BrowserPacer, HttpLabApi};
use crate::demo::run_trigger_demo;
use crate::state::use_dashboard_context;

/// The scripted trigger demonstration view. The run control is disabled
/// while a run is in flight; the sequencer itself has no internal lock.
#[component]
pub fn TriggerDemoPage() -> impl IntoView {
    let ctx = use_dashboard_context();

    let run_demo = create_action(move |_: &()| async move {
        let api = HttpLabApi::new();
        run_trigger_demo(&api, &BrowserPacer, ctx.demo).await;
    });

    let running = move || ctx.demo.with(|run| run.running);

    view! {
        <div class="demo-page">
            <div class="card demo-intro">
                <div class="card-header">
                    <span class="card-title">"Live Trigger Demonstration"</span>
                </div>
                <div class="card-body">
                    <p>
                        "Update a researcher's email and watch the database trigger "
                        "refresh the updated_at timestamp on its own."
                    </p>
                    <button
                        class="demo-run-btn"
                        disabled=running
                        on:click=move |_| run_demo.dispatch(())
                    >
                        {move || if running() {
                            "Running demo..."
                        } else {
                            "Run Researcher Trigger Demo"
                        }}
                    </button>
                </div>
            </div>

            <DemoLogCard />

            <div class="demo-compare">
                <SnapshotCard
                    title="BEFORE UPDATE"
                    accent="before"
                    record=Signal::derive(move || ctx.demo.with(|run| run.before.clone()))
                />
                <SnapshotCard
                    title="AFTER UPDATE"
                    accent="after"
                    record=Signal::derive(move || ctx.demo.with(|run| run.after.clone()))
                />
            </div>
        </div>
    }
}

/// Live execution log, styled by entry kind.
#[component]
fn DemoLogCard() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <Show when=move || ctx.demo.with(|run| !run.log.is_empty())>
            <div class="card">
                <div class="card-header">
                    <span class="card-title">"Live Execution Log"</span>
                </div>
                <div class="card-body">
                    <div class="demo-log">
                        {move || ctx.demo.with(|run| run.log.clone()).into_iter().map(|entry| {
                            let kind_class = match entry.kind {
                                DemoLogKind::Info => "info",
                                DemoLogKind::Success => "success",
                                DemoLogKind::Warning => "warning",
                                DemoLogKind::Error => "error",
                                DemoLogKind::Trigger => "trigger",
                            };
                            view! {
                                <div class=format!("log-entry {kind_class}")>
                                    <span class="log-message">{entry.message}</span>
                                    <span class="log-time">{entry.time}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Before or after researcher snapshot with the timestamp highlighted.
#[component]
fn SnapshotCard(
    title: &'static str,
    accent: &'static str,
    record: Signal<Option<Researcher>>,
) -> impl IntoView {
    view! {
        <Show when=move || record.get().is_some()>
            <div class=format!("card snapshot-card {accent}")>
                <div class="card-header">
                    <span class="card-title">{title}</span>
                </div>
                <div class="card-body">
                    {move || record.get().map(|r| view! {
                        <div class="info-row">
                            <span class="info-label">"ID"</span>
                            <span class="info-value">{r.researcher_id}</span>
                        </div>
                        <div class="info-row">
                            <span class="info-label">"Name"</span>
                            <span class="info-value">{r.full_name.clone()}</span>
                        </div>
                        <div class="info-row">
                            <span class="info-label">"Email"</span>
                            <span class="info-value">{r.email.clone()}</span>
                        </div>
                        <div class="info-row highlight">
                            <span class="info-label">"updated_at"</span>
                            <span class="info-value">
                                {r.updated_at.clone().unwrap_or_else(|| "null".to_string())}
                            </span>
                        </div>
                    })}
                </div>
            </div>
        </Show>
    }
}
