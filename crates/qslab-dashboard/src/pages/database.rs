//! Database page: raw table views of the three entity listings.
//!
//! Each listing shows at most the first ten rows; truncation happens in
//! the state reducers, not here.

use leptos::*;

use super::text_or_dash;
use crate::state::use_dashboard_context;

/// Raw table listing for researchers, projects, and simulations.
#[component]
pub fn DatabasePage() -> impl IntoView {
    view! {
        <div class="database-page">
            <div class="page-intro">
                <h2>"Database Explorer"</h2>
                <p>"Latest rows as returned by the lab manager API"</p>
            </div>
            <ResearchersTable />
            <ProjectsTable />
            <SimulationsTable />
        </div>
    }
}

#[component]
fn ResearchersTable() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <div class="card table-card">
            <div class="card-header">
                <span class="card-title">
                    {move || format!("Researchers ({})", ctx.researchers.with(|rows| rows.len()))}
                </span>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Institution"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || ctx.researchers.get().into_iter().map(|r| view! {
                        <tr>
                            <td>{r.researcher_id}</td>
                            <td class="primary">{r.full_name.clone()}</td>
                            <td>{r.email.clone()}</td>
                            <td>{text_or_dash(r.institution.clone())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProjectsTable() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <div class="card table-card">
            <div class="card-header">
                <span class="card-title">
                    {move || format!("Projects ({})", ctx.projects.with(|rows| rows.len()))}
                </span>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Status"</th>
                        <th>"Owner"</th>
                        <th>"Field of Study"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || ctx.projects.get().into_iter().map(|p| view! {
                        <tr>
                            <td>{p.project_id}</td>
                            <td class="primary">{p.title.clone()}</td>
                            <td>{p.status.clone()}</td>
                            <td>{text_or_dash(p.owner_name.clone())}</td>
                            <td>{text_or_dash(p.field_of_study.clone())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SimulationsTable() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <div class="card table-card">
            <div class="card-header">
                <span class="card-title">
                    {move || format!("Simulations ({})", ctx.simulations.with(|rows| rows.len()))}
                </span>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Run"</th>
                        <th>"Framework"</th>
                        <th>"Algorithm"</th>
                        <th>"Qubits"</th>
                        <th>"Status"</th>
                        <th>"Researcher"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || ctx.simulations.get().into_iter().map(|s| view! {
                        <tr>
                            <td>{s.run_id}</td>
                            <td class="primary">{s.framework.clone()}</td>
                            <td>{text_or_dash(s.algorithm_type.clone())}</td>
                            <td>{s.num_qubits.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                            <td>{s.status.clone()}</td>
                            <td>{text_or_dash(s.researcher_name.clone())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
