// SPDX-License-Identifier: MPL-2.0
//! Collector aggregating diagnostic events.
//!
//! The collector receives events through a bounded channel and stores them
//! in a circular buffer. The sending side is a cheap, cloneable handle
//! that never blocks: when the channel is full the event is dropped.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::events::{DiagnosticEvent, DiagnosticEventKind};
use super::CircularBuffer;
use crate::config::defaults::DEFAULT_DIAGNOSTICS_CAPACITY;

/// Channel capacity between handles and the collector.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. All reporting methods are non-blocking and drop the
/// event if the internal channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Reports a listener that panicked during snapshot delivery.
    pub fn report_listener_panic(&self, detail: Option<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::ListenerPanic { detail });
        let _ = self.event_tx.try_send(event);
    }

    /// Reports a configuration value that was clamped into range.
    pub fn report_invalid_config(&self, field: &'static str, rejected: String) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::InvalidConfig {
            field: field.to_string(),
            rejected,
        });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsCollector {
    /// Creates a collector with the default buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_DIAGNOSTICS_CAPACITY)
    }

    /// Creates a collector with a specific buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains all pending events from the channel into the buffer. Call
    /// periodically, e.g. on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Iterates over collected events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns whether no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discards all collected events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
