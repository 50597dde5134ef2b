// SPDX-License-Identifier: MPL-2.0
//! Diagnostics log for the roster session.
//!
//! Events are kept in a memory-bounded circular buffer and can be exported
//! as JSON. Warnings and errors are also written to stderr.
//!
//! # Privacy
//!
//! Registered secrets (password, bearer token) are replaced by
//! `<redacted>` in every message before it is stored or printed.

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, DiagnosticEventKind};

use crate::config::DEFAULT_DIAGNOSTICS_CAPACITY;

const REDACTED: &str = "<redacted>";

/// In-memory event log.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    buffer: CircularBuffer<DiagnosticEvent>,
    secrets: Vec<String>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

impl Diagnostics {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            secrets: Vec::new(),
        }
    }

    /// Registers a value that must never appear in the log.
    pub fn register_secret(&mut self, secret: impl Into<String>) {
        let secret = secret.into();
        if !secret.is_empty() && !self.secrets.contains(&secret) {
            self.secrets.push(secret);
        }
    }

    /// Replaces every registered secret in `message`.
    #[must_use]
    pub fn sanitize(&self, message: &str) -> String {
        self.secrets
            .iter()
            .fold(message.to_string(), |acc, secret| {
                acc.replace(secret.as_str(), REDACTED)
            })
    }

    pub fn log(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    pub fn log_warning(&mut self, message: impl AsRef<str>) {
        let message = self.sanitize(message.as_ref());
        eprintln!("[WARN] {message}");
        self.log(DiagnosticEventKind::Warning { message });
    }

    pub fn log_error(&mut self, message: impl AsRef<str>) {
        let message = self.sanitize(message.as_ref());
        eprintln!("[ERROR] {message}");
        self.log(DiagnosticEventKind::Error { message });
    }

    pub fn log_image_failure(&mut self, animal_id: i64, message: impl AsRef<str>) {
        let message = self.sanitize(message.as_ref());
        eprintln!("[WARN] thumbnail for animal {animal_id} failed: {message}");
        self.log(DiagnosticEventKind::ImageFailed { animal_id, message });
    }

    /// Events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.events().filter(|event| event.is_problem()).count()
    }

    /// Serializes the buffered events as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.events().collect();
        serde_json::to_string_pretty(&events)
    }
}
