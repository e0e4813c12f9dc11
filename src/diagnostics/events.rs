// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What went wrong.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A subscribed listener panicked while receiving a snapshot. The
    /// listener has been dropped; other listeners were unaffected.
    ListenerPanic {
        /// Panic message, when one could be extracted.
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
    /// A configuration value was outside the supported range and has been
    /// clamped.
    InvalidConfig {
        /// Name of the offending field.
        field: String,
        /// The rejected raw value.
        rejected: String,
    },
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}
