// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What happened.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A sign-in was started (first start or retry).
    SessionStarted { generation: u64 },

    /// The login endpoint issued a token.
    Authenticated { duration_ms: u64 },

    /// The record list was downloaded and decoded.
    AnimalsFetched {
        count: usize,
        skipped: usize,
        duration_ms: u64,
    },

    /// The user picked another filter.
    FilterChanged { filter: String },

    /// A thumbnail could not be downloaded.
    ImageFailed { animal_id: i64, message: String },

    Warning { message: String },

    Error { message: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Returns `true` for warnings, errors and failed thumbnails.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticEventKind::Warning { .. }
                | DiagnosticEventKind::Error { .. }
                | DiagnosticEventKind::ImageFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_flat_kind_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::AnimalsFetched {
            count: 3,
            skipped: 1,
            duration_ms: 40,
        });
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["kind"], "animals_fetched");
        assert_eq!(json["count"], 3);
        assert_eq!(json["skipped"], 1);
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn problems_are_flagged() {
        assert!(DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: "x".into()
        })
        .is_problem());
        assert!(!DiagnosticEvent::new(DiagnosticEventKind::FilterChanged {
            filter: "dog".into()
        })
        .is_problem());
    }
}
