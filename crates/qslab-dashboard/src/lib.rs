//! QSLRM Admin Dashboard - Leptos Web Interface
//!
//! A single-page Rust dashboard for the Quantum Simulation Lab Manager
//! backend: polls the REST API on a timer, renders summary statistics and
//! table views, and hosts the scripted database-trigger demonstration.

pub mod api;
pub mod demo;
pub mod fetch;
pub mod pages;
pub mod scheduler;
pub mod state;

use leptos::*;

use api::HttpLabApi;
use pages::{DatabasePage, OverviewPage, TriggerDemoPage};
use qslab_common::DashboardConfig;
use scheduler::PollHandle;
use state::{provide_dashboard_context, ActiveTab, RefreshAction};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_dashboard_context();
    let config = DashboardConfig::default();

    // Shared fetch action: dispatched once at startup/toggle-on, by every
    // poll tick, and by the manual refresh button.
    let refresh = create_action(move |_: &()| async move {
        let client = HttpLabApi::new();
        let _ = fetch::refresh_all(&client, &ctx).await;
    });
    provide_context(RefreshAction(refresh));

    // Poll timer: single owner. Toggle-on runs one immediate fetch and
    // installs a fresh interval (replacing any previous one); toggle-off
    // and unmount cancel it.
    let poll = store_value(PollHandle::empty());
    create_effect(move |_| {
        if ctx.auto_refresh.get() {
            refresh.dispatch(());
            let interval =
                scheduler::spawn_poll_interval(config.refresh_interval_ms, move || {
                    // A slow fetch can outlive the poll period; skip the
                    // tick rather than stack a second scheduled fetch.
                    if !ctx.busy.get_untracked() {
                        refresh.dispatch(());
                    }
                });
            poll.update_value(|handle| handle.replace(interval));
        } else {
            poll.update_value(|handle| handle.cancel());
        }
    });
    on_cleanup(move || poll.update_value(|handle| handle.cancel()));

    let show_splash = move || ctx.busy.get() && !ctx.has_initial_data();

    view! {
        <div class="app-shell">
            // Top bar
            <header class="top-bar">
                <div class="brand">
                    <div class="brand-mark">"Q"</div>
                    <div>
                        <h1>"QSLRM Admin"</h1>
                        <p class="subtitle">"Quantum Simulation Lab Manager"</p>
                    </div>
                </div>
                <div class="live-indicator">
                    <span class="live-dot"></span>
                    <span>"Live"</span>
                </div>
            </header>

            // Tab bar
            <nav class="tab-bar">
                {[
                    (ActiveTab::Overview, "Overview"),
                    (ActiveTab::Demo, "Live Trigger Demo"),
                    (ActiveTab::Database, "Database"),
                ].into_iter().map(|(tab, label)| view! {
                    <button
                        class="tab-btn"
                        class:active=move || ctx.active_tab.get() == tab
                        on:click=move |_| ctx.active_tab.set(tab)
                    >
                        {label}
                    </button>
                }).collect_view()}
            </nav>

            // Page content
            <main class="page-content">
                <Show
                    when=move || !show_splash()
                    fallback=|| view! {
                        <div class="loading-splash">
                            <div class="spinner"></div>
                            <p>"Loading QSLRM Dashboard..."</p>
                        </div>
                    }
                >
                    <Show when=move || ctx.active_tab.get() == ActiveTab::Overview>
                        <OverviewPage />
                    </Show>

                    <Show when=move || ctx.active_tab.get() == ActiveTab::Demo>
                        <TriggerDemoPage />
                    </Show>

                    <Show when=move || ctx.active_tab.get() == ActiveTab::Database>
                        <DatabasePage />
                    </Show>
                </Show>
            </main>
        </div>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");

    mount_to_body(App);
}
