// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active toasts.
//!
//! The store is the single source of truth a renderer consumes. Entries are
//! kept newest-first (index 0 is the most recent). Each entry owns its
//! toast together with its countdown and animation sequencer, so removing
//! an entry drops both; there is no timer left to fire for a removed
//! toast.

use crate::animation::Sequencer;
use crate::config::Position;
use crate::notification::{Toast, ToastCallback, ToastId};
use crate::timer::Countdown;
use std::collections::VecDeque;
use std::time::Instant;

/// One tracked toast with its lifecycle state.
#[derive(Clone)]
pub(crate) struct Entry {
    pub(crate) toast: Toast,
    pub(crate) countdown: Countdown,
    pub(crate) sequencer: Sequencer,
    pub(crate) on_click: Option<ToastCallback>,
    pub(crate) on_close: Option<ToastCallback>,
    /// Pointer is currently over this toast and pausing is enabled for it.
    pub(crate) hover_paused: bool,
    /// Outside the visible window under the defer-timers overflow policy.
    pub(crate) deferred: bool,
}

impl Entry {
    /// Reconciles the countdown's pause state with the active pause
    /// reasons. Hover and deferral are independent; the countdown stays
    /// paused while either holds.
    pub(crate) fn sync_pause(&mut self, now: Instant) {
        let should_pause = self.hover_paused || self.deferred;
        if should_pause && !self.countdown.is_paused() {
            self.countdown.pause(now);
        } else if !should_pause && self.countdown.is_paused() {
            self.countdown.resume(now);
        }
    }
}

/// Newest-first collection of active toasts.
#[derive(Default)]
pub(crate) struct Store {
    entries: VecDeque<Entry>,
}

impl Store {
    /// Prepends a new entry.
    pub(crate) fn insert(&mut self, entry: Entry) {
        self.entries.push_front(entry);
    }

    /// Deletes the entry with the given id, returning it. No-op (`None`)
    /// when absent, which keeps dismissal idempotent under races.
    pub(crate) fn remove(&mut self, id: ToastId) -> Option<Entry> {
        let position = self.entries.iter().position(|entry| entry.toast.id() == id)?;
        self.entries.remove(position)
    }

    pub(crate) fn get(&self, id: ToastId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.toast.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: ToastId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.toast.id() == id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// At most `max_toasts` entries from the front of the collection.
    ///
    /// For bottom anchors the slice is reversed so the newest toast still
    /// appears adjacent to the screen edge it entered from. Pure read: the
    /// underlying collection and the entries' timers are untouched.
    pub(crate) fn visible_slice(&self, max_toasts: usize, position: Position) -> Vec<&Entry> {
        let mut slice: Vec<&Entry> = self.entries.iter().take(max_toasts).collect();
        if position.is_bottom() {
            slice.reverse();
        }
        slice
    }
}
