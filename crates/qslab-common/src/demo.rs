//! Demo-run state machine for the live trigger demonstration.
//!
//! The demo walks a strictly linear script: read a researcher, update its
//! email, read it again, and compare the trigger-maintained `updated_at`
//! field. This module holds the state and transitions only; the async
//! driver that issues the HTTP calls and pacing delays lives in the
//! dashboard crate.

use crate::types::Researcher;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// =============================================================================
// Log Entries
// =============================================================================

/// Kind of a demo log entry, used by the view to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoLogKind {
    Info,
    Success,
    Warning,
    Error,
    /// The before/after comparison found the server-side trigger effect.
    Trigger,
}

/// One timestamped entry in the demo's append-only execution log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoLogEntry {
    pub kind: DemoLogKind,
    pub message: String,
    pub time: String,
}

// =============================================================================
// Run State
// =============================================================================

/// Lifecycle of a demo run. Re-entry is only expected from a terminal
/// state; the view disables its trigger control while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoPhase {
    #[default]
    Idle,
    Running,
    Completed,
    Errored,
}

/// Outcome of the before/after timestamp comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoVerdict {
    TriggerFired,
    NoChange,
}

/// Transient state of one trigger demo run. Created at demo start, mutated
/// by each sequencer step, and reset wholesale by the next run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoRun {
    pub before: Option<Researcher>,
    pub after: Option<Researcher>,
    pub running: bool,
    pub phase: DemoPhase,
    pub log: Vec<DemoLogEntry>,
}

impl DemoRun {
    /// True when a new run may start (any state except `Running`).
    pub fn can_start(&self) -> bool {
        !self.running
    }

    /// Reset to a fresh running state, discarding any previous run.
    pub fn begin(&mut self) {
        *self = DemoRun {
            running: true,
            phase: DemoPhase::Running,
            ..DemoRun::default()
        };
    }

    /// Append a log entry stamped with the current wall-clock time.
    pub fn push(&mut self, kind: DemoLogKind, message: impl Into<String>) {
        self.log.push(DemoLogEntry {
            kind,
            message: message.into(),
            time: Utc::now().format("%H:%M:%S").to_string(),
        });
    }

    pub fn record_before(&mut self, researcher: Researcher) {
        self.before = Some(researcher);
    }

    pub fn record_after(&mut self, researcher: Researcher) {
        self.after = Some(researcher);
    }

    /// Compare the before/after `updated_at` fields by value. `None`
    /// requires both records to be present.
    pub fn verdict(&self) -> Option<DemoVerdict> {
        match (&self.before, &self.after) {
            (Some(before), Some(after)) => {
                if before.updated_at != after.updated_at {
                    Some(DemoVerdict::TriggerFired)
                } else {
                    Some(DemoVerdict::NoChange)
                }
            }
            _ => None,
        }
    }

    /// Final transition of a run that reached the comparison step: append
    /// the verdict entry and move to `Completed`.
    pub fn settle(&mut self) {
        match self.verdict() {
            Some(DemoVerdict::TriggerFired) => self.push(
                DemoLogKind::Trigger,
                "Trigger fired: updated_at changed automatically",
            ),
            Some(DemoVerdict::NoChange) | None => self.push(
                DemoLogKind::Warning,
                "No change detected: timestamps are identical",
            ),
        }
        self.phase = DemoPhase::Completed;
        self.running = false;
    }

    /// Abort the run with one visible error entry.
    pub fn fail(&mut self, message: &str) {
        self.push(DemoLogKind::Error, format!("Error: {message}"));
        self.phase = DemoPhase::Errored;
        self.running = false;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn researcher(updated_at: Option<&str>) -> Researcher {
        Researcher {
            researcher_id: 1,
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            full_name: "Alice Nguyen".to_string(),
            email: "alice@quantumlab.edu".to_string(),
            orcid_id: None,
            institution: None,
            department: None,
            role: None,
            created_at: None,
            updated_at: updated_at.map(str::to_string),
        }
    }

    #[test]
    fn test_begin_resets_previous_run() {
        let mut run = DemoRun::default();
        run.begin();
        run.record_before(researcher(Some("2024-01-01T00:00:00Z")));
        run.push(DemoLogKind::Info, "first run");
        run.settle();
        assert_eq!(run.phase, DemoPhase::Completed);

        run.begin();
        assert!(run.running);
        assert_eq!(run.phase, DemoPhase::Running);
        assert!(run.before.is_none());
        assert!(run.after.is_none());
        assert!(run.log.is_empty());
    }

    #[test]
    fn test_settle_trigger_fired() {
        let mut run = DemoRun::default();
        run.begin();
        run.record_before(researcher(Some("2024-01-01T00:00:00Z")));
        run.record_after(researcher(Some("2024-01-01T00:05:00Z")));
        run.settle();

        let last = run.log.last().unwrap();
        assert_eq!(last.kind, DemoLogKind::Trigger);
        assert_eq!(run.phase, DemoPhase::Completed);
        assert!(!run.running);
        assert_ne!(
            run.before.unwrap().updated_at,
            run.after.unwrap().updated_at
        );
    }

    #[test]
    fn test_settle_no_change() {
        let mut run = DemoRun::default();
        run.begin();
        run.record_before(researcher(Some("2024-01-01T00:00:00Z")));
        run.record_after(researcher(Some("2024-01-01T00:00:00Z")));
        run.settle();

        let last = run.log.last().unwrap();
        assert_eq!(last.kind, DemoLogKind::Warning);
        assert!(last.message.starts_with("No change detected"));
        assert_eq!(run.phase, DemoPhase::Completed);
        assert!(!run.running);
    }

    #[test]
    fn test_verdict_missing_updated_at_counts_as_no_change() {
        let mut run = DemoRun::default();
        run.begin();
        run.record_before(researcher(None));
        run.record_after(researcher(None));
        assert_eq!(run.verdict(), Some(DemoVerdict::NoChange));
    }

    #[test]
    fn test_fail_appends_single_error_and_halts() {
        let mut run = DemoRun::default();
        run.begin();
        run.push(DemoLogKind::Info, "Fetching current researcher state...");
        run.fail("network error: connection refused");

        let errors: Vec<_> = run
            .log
            .iter()
            .filter(|entry| entry.kind == DemoLogKind::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Error: network error: connection refused"
        );
        assert_eq!(run.phase, DemoPhase::Errored);
        assert!(!run.running);
        assert!(run.after.is_none());
    }

    #[test]
    fn test_can_start_only_outside_running() {
        let mut run = DemoRun::default();
        assert!(run.can_start());
        run.begin();
        assert!(!run.can_start());
        run.settle();
        assert!(run.can_start());
        run.begin();
        run.fail("boom");
        assert!(run.can_start());
    }
}
