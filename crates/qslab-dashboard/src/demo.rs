//! Scripted trigger demo sequencer.
//!
//! Drives the linear before/update/after script against the researcher
//! endpoints, appending a log entry around every step so the view can
//! replay the run live. The pacing pauses exist purely so a human can
//! follow along; they are not timeouts. A failure at any step appends one
//! error entry and abandons the rest of the script.

use crate::api::{LabApi, Pacer};
use chrono::Utc;
use leptos::{RwSignal, SignalUpdate};
use qslab_common::demo::{DemoLogKind, DemoRun};
use qslab_common::{DashboardConfig, Result};

fn timestamp_label(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

/// Demo email for the PUT, made unique by embedding the current time so
/// the backend always sees a real change.
fn unique_demo_email() -> String {
    format!(
        "alice.trigger-{}@quantumlab.edu",
        Utc::now().timestamp_millis()
    )
}

/// Run the whole demo script. Terminal state is always reached: either
/// `Completed` with a verdict entry or `Errored` with one error entry,
/// and the running flag is cleared in both cases.
pub async fn run_trigger_demo<A: LabApi, P: Pacer>(api: &A, pacer: &P, demo: RwSignal<DemoRun>) {
    let config = DashboardConfig::default();
    demo.update(|run| run.begin());

    if let Err(err) = drive(api, pacer, &config, demo).await {
        demo.update(|run| run.fail(&err.to_string()));
    }
}

async fn drive<A: LabApi, P: Pacer>(
    api: &A,
    pacer: &P,
    config: &DashboardConfig,
    demo: RwSignal<DemoRun>,
) -> Result<()> {
    demo.update(|run| run.push(DemoLogKind::Info, "Fetching current researcher state..."));
    let before = api.researcher(config.demo_researcher_id).await?;
    let message = format!("BEFORE: updated_at = {}", timestamp_label(&before.updated_at));
    demo.update(|run| {
        run.push(DemoLogKind::Success, message);
        run.record_before(before);
    });
    pacer.pause(config.demo_pause_after_read_ms).await;

    demo.update(|run| run.push(DemoLogKind::Warning, "Triggering update (email change)..."));
    api.update_researcher_email(config.demo_researcher_id, &unique_demo_email())
        .await?;
    pacer.pause(config.demo_pause_after_write_ms).await;

    demo.update(|run| run.push(DemoLogKind::Info, "Fetching updated researcher state..."));
    let after = api.researcher(config.demo_researcher_id).await?;
    let message = format!("AFTER: updated_at = {}", timestamp_label(&after.updated_at));
    demo.update(|run| {
        run.push(DemoLogKind::Success, message);
        run.record_after(after);
    });
    pacer.pause(config.demo_pause_before_verdict_ms).await;

    demo.update(|run| run.settle());
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use leptos::{create_runtime, create_rw_signal, SignalGetUntracked};
    use qslab_common::demo::DemoPhase;
    use qslab_common::types::*;
    use qslab_common::QslabError;
    use std::cell::{Cell, RefCell};

    fn researcher(updated_at: &str) -> Researcher {
        Researcher {
            researcher_id: 1,
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            full_name: "Alice Nguyen".to_string(),
            email: "alice@quantumlab.edu".to_string(),
            orcid_id: None,
            institution: Some("Quantum Lab".to_string()),
            department: None,
            role: None,
            created_at: None,
            updated_at: Some(updated_at.to_string()),
        }
    }

    /// Researcher endpoints only; the reads return `before_ts` first and
    /// `after_ts` on every later read.
    struct DemoApi {
        before_ts: &'static str,
        after_ts: &'static str,
        fail_update: bool,
        reads: Cell<u32>,
        updates: RefCell<Vec<String>>,
    }

    impl DemoApi {
        fn new(before_ts: &'static str, after_ts: &'static str) -> Self {
            Self {
                before_ts,
                after_ts,
                fail_update: false,
                reads: Cell::new(0),
                updates: RefCell::new(vec![]),
            }
        }

        fn failing_update(mut self) -> Self {
            self.fail_update = true;
            self
        }
    }

    #[async_trait(?Send)]
    impl LabApi for DemoApi {
        async fn dashboard(&self) -> Result<DashboardSnapshot> {
            unreachable!("demo never fetches the dashboard slot")
        }

        async fn frameworks(&self) -> Result<Vec<FrameworkUsage>> {
            unreachable!("demo never fetches frameworks")
        }

        async fn health(&self) -> Result<HealthStatus> {
            unreachable!("demo never fetches health")
        }

        async fn researchers(&self) -> Result<Vec<Researcher>> {
            unreachable!("demo never fetches listings")
        }

        async fn projects(&self) -> Result<Vec<Project>> {
            unreachable!("demo never fetches listings")
        }

        async fn simulations(&self) -> Result<Vec<Simulation>> {
            unreachable!("demo never fetches listings")
        }

        async fn researcher(&self, _id: i64) -> Result<Researcher> {
            let reads = self.reads.get();
            self.reads.set(reads + 1);
            if reads == 0 {
                Ok(researcher(self.before_ts))
            } else {
                Ok(researcher(self.after_ts))
            }
        }

        async fn update_researcher_email(&self, _id: i64, email: &str) -> Result<()> {
            if self.fail_update {
                return Err(QslabError::Network("connection refused".to_string()));
            }
            self.updates.borrow_mut().push(email.to_string());
            Ok(())
        }
    }

    /// Pacer that records requested pauses instead of sleeping.
    struct RecordingPacer {
        pauses: RefCell<Vec<u32>>,
    }

    impl RecordingPacer {
        fn new() -> Self {
            Self {
                pauses: RefCell::new(vec![]),
            }
        }
    }

    #[async_trait(?Send)]
    impl Pacer for RecordingPacer {
        async fn pause(&self, ms: u32) {
            self.pauses.borrow_mut().push(ms);
        }
    }

    #[tokio::test]
    async fn test_trigger_fired_when_timestamp_changes() {
        let runtime = create_runtime();
        let demo = create_rw_signal(DemoRun::default());
        let api = DemoApi::new("2024-01-01T00:00:00Z", "2024-01-01T00:05:00Z");
        let pacer = RecordingPacer::new();

        run_trigger_demo(&api, &pacer, demo).await;

        let run = demo.get_untracked();
        assert_eq!(run.phase, DemoPhase::Completed);
        assert!(!run.running);
        assert_eq!(run.log.last().unwrap().kind, DemoLogKind::Trigger);
        assert_ne!(
            run.before.as_ref().unwrap().updated_at,
            run.after.as_ref().unwrap().updated_at
        );

        // One PUT carrying a unique demo address.
        let updates = api.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert!(updates[0].starts_with("alice.trigger-"));
        assert!(updates[0].ends_with("@quantumlab.edu"));

        // Fixed pacing: after read, after write, before verdict.
        assert_eq!(*pacer.pauses.borrow(), vec![1_500, 1_500, 1_000]);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_no_change_warning_when_timestamp_is_stable() {
        let runtime = create_runtime();
        let demo = create_rw_signal(DemoRun::default());
        let api = DemoApi::new("2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z");
        let pacer = RecordingPacer::new();

        run_trigger_demo(&api, &pacer, demo).await;

        let run = demo.get_untracked();
        assert_eq!(run.phase, DemoPhase::Completed);
        let last = run.log.last().unwrap();
        assert_eq!(last.kind, DemoLogKind::Warning);
        assert!(last.message.starts_with("No change detected"));
        assert_eq!(
            run.before.as_ref().unwrap().updated_at,
            run.after.as_ref().unwrap().updated_at
        );

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_failed_update_halts_with_single_error_entry() {
        let runtime = create_runtime();
        let demo = create_rw_signal(DemoRun::default());
        let api = DemoApi::new("2024-01-01T00:00:00Z", "2024-01-01T00:05:00Z").failing_update();
        let pacer = RecordingPacer::new();

        run_trigger_demo(&api, &pacer, demo).await;

        let run = demo.get_untracked();
        assert_eq!(run.phase, DemoPhase::Errored);
        assert!(!run.running);
        assert!(run.before.is_some());
        assert!(run.after.is_none());

        let errors: Vec<_> = run
            .log
            .iter()
            .filter(|entry| entry.kind == DemoLogKind::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("connection refused"));

        // Only the read pause ran; the script stopped at the PUT.
        assert_eq!(*pacer.pauses.borrow(), vec![1_500]);
        // The second read never happened.
        assert_eq!(api.reads.get(), 1);

        runtime.dispose();
    }
}
