//! API client for the QSLRM dashboard
//!
//! Makes real HTTP calls to the lab manager REST endpoints. The endpoint
//! surface is a trait so the fetch driver and demo sequencer can run
//! against a mock in tests.

use async_trait::async_trait;
use gloo_net::http::Request;
use qslab_common::types::{
    DashboardSnapshot, FrameworkUsage, HealthStatus, Project, Researcher, Simulation,
};
use qslab_common::{DashboardConfig, QslabError, Result};
use serde::de::DeserializeOwned;
use web_sys::window;

/// Get the API base URL.
/// Reads the `data-api-url` attribute on the document root when present
/// (explicit configuration), otherwise uses the page origin with an `/api`
/// suffix, otherwise the development fallback.
pub fn get_api_base_url() -> String {
    if let Some(win) = window() {
        if let Some(doc) = win.document() {
            if let Some(root) = doc.document_element() {
                if let Some(url) = root.get_attribute("data-api-url") {
                    if !url.is_empty() {
                        return url;
                    }
                }
            }
        }
        if let Ok(origin) = win.location().origin() {
            return format!("{origin}/api");
        }
    }
    DashboardConfig::default().dev_api_base
}

fn transport_error(err: gloo_net::Error) -> QslabError {
    match err {
        gloo_net::Error::SerdeError(err) => QslabError::Decode(err.to_string()),
        other => QslabError::Network(other.to_string()),
    }
}

// =============================================================================
// API Surface
// =============================================================================

/// The lab manager endpoints the dashboard consumes. Futures are not
/// `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait LabApi {
    async fn dashboard(&self) -> Result<DashboardSnapshot>;
    async fn frameworks(&self) -> Result<Vec<FrameworkUsage>>;
    async fn health(&self) -> Result<HealthStatus>;
    async fn researchers(&self) -> Result<Vec<Researcher>>;
    async fn projects(&self) -> Result<Vec<Project>>;
    async fn simulations(&self) -> Result<Vec<Simulation>>;
    async fn researcher(&self, id: i64) -> Result<Researcher>;
    /// Update a researcher's email. The response body is not relied upon
    /// beyond success or failure.
    async fn update_researcher_email(&self, id: i64, email: &str) -> Result<()>;
}

/// HTTP client for the lab manager API.
pub struct HttpLabApi {
    base_url: String,
}

impl HttpLabApi {
    /// Create a client against the configured base URL.
    pub fn new() -> Self {
        Self {
            base_url: get_api_base_url(),
        }
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            return Err(QslabError::Status(response.status()));
        }

        response.json().await.map_err(transport_error)
    }
}

impl Default for HttpLabApi {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct EmailUpdate<'a> {
    email: &'a str,
}

#[async_trait(?Send)]
impl LabApi for HttpLabApi {
    async fn dashboard(&self) -> Result<DashboardSnapshot> {
        self.get_json("/analytics/dashboard/enhanced").await
    }

    async fn frameworks(&self) -> Result<Vec<FrameworkUsage>> {
        self.get_json("/analytics/frameworks").await
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health").await
    }

    async fn researchers(&self) -> Result<Vec<Researcher>> {
        self.get_json("/researchers").await
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.get_json("/projects").await
    }

    async fn simulations(&self) -> Result<Vec<Simulation>> {
        self.get_json("/simulations").await
    }

    async fn researcher(&self, id: i64) -> Result<Researcher> {
        self.get_json(&format!("/researchers/{id}")).await
    }

    async fn update_researcher_email(&self, id: i64, email: &str) -> Result<()> {
        let url = format!("{}/researchers/{id}", self.base_url);
        let response = Request::put(&url)
            .json(&EmailUpdate { email })
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            return Err(QslabError::Status(response.status()));
        }

        Ok(())
    }
}

// =============================================================================
// Pacing
// =============================================================================

/// Pacing delays for the demo sequencer. These are for human
/// observability, not timeouts or backoff.
#[async_trait(?Send)]
pub trait Pacer {
    async fn pause(&self, ms: u32);
}

/// Pacer backed by the browser's timer.
pub struct BrowserPacer;

#[async_trait(?Send)]
impl Pacer for BrowserPacer {
    async fn pause(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
