// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle coordination.
//!
//! The [`ToastManager`] owns the store and drives every lifecycle
//! transition: on creation it merges options over the container defaults,
//! assigns an id, and starts the countdown and enter phase; on expiry or
//! dismissal it begins the exit transition; once the exit transition
//! completes it removes the entry and fires the close callback, exactly
//! once. Re-entrant dismissal is a no-op throughout.
//!
//! All engine logic runs single-threaded and event-driven: discrete calls
//! (create, dismiss, hover, click) mutate state synchronously, and a host
//! calls [`ToastManager::tick`] periodically to advance countdowns and
//! animation phases. Because every countdown and sequencer is owned by its
//! store entry, removal cancels all outstanding timing for that toast:
//! a late tick cannot revive or double-process a removed entry.

use crate::animation::{AnimationKind, Phase, Sequencer};
use crate::config::defaults;
use crate::config::{Config, OverflowPolicy, Position};
use crate::diagnostics::DiagnosticsHandle;
use crate::notification::{Toast, ToastDefaults, ToastId, ToastKind, ToastOptions};
use crate::store::{Entry, Store};
use crate::timer::Countdown;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Read-only view of one active toast, delivered to listeners and
/// consumed by renderers.
#[derive(Debug, Clone)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub icon: Option<String>,
    pub duration: Duration,
    pub dismissible: bool,
    pub animation: AnimationKind,
    pub pause_on_hover: bool,
    pub phase: Phase,
    /// Fraction of the duration left (`0.0..=1.0`); `None` for toasts that
    /// never auto-expire.
    pub remaining_fraction: Option<f32>,
    /// Countdown currently paused (hover or deferred overflow).
    pub paused: bool,
    /// Progress through the current animation phase (`0.0..=1.0`).
    pub phase_progress: f32,
    /// A click handler is attached; clicking will dismiss.
    pub has_click_action: bool,
}

/// Token returned by [`ToastManager::subscribe`]; pass it back to
/// [`ToastManager::unsubscribe`] to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle {
    instance_id: u64,
    seq: u64,
}

type Listener = Box<dyn FnMut(&[ToastSnapshot])>;

struct ListenerEntry {
    seq: u64,
    callback: Listener,
}

/// Owns the collection of active toasts and coordinates their lifecycle.
///
/// Create one instance per toast container; there is no ambient global
/// state, so tests get full isolation from a fresh instance.
pub struct ToastManager {
    store: Store,
    toast_defaults: ToastDefaults,
    position: Position,
    max_toasts: usize,
    overflow: OverflowPolicy,
    listeners: Vec<ListenerEntry>,
    next_listener_seq: u64,
    instance_id: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    /// Creates a manager with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static INSTANCES: AtomicU64 = AtomicU64::new(0);
        Self {
            store: Store::default(),
            toast_defaults: ToastDefaults::default(),
            position: Position::default(),
            max_toasts: defaults::DEFAULT_MAX_TOASTS,
            overflow: OverflowPolicy::default(),
            listeners: Vec::new(),
            next_listener_seq: 0,
            instance_id: INSTANCES.fetch_add(1, Ordering::Relaxed),
            diagnostics: None,
        }
    }

    /// Creates a manager from a container configuration.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let mut manager = Self::new();
        manager.apply_config(config);
        manager
    }

    /// Sets the diagnostics handle used to report listener failures and
    /// clamped configuration.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Applies a container configuration, clamping out-of-range values and
    /// reporting each clamp to the diagnostics sink.
    pub fn apply_config(&mut self, config: &Config) {
        if config.max_toasts_clamped() {
            let raw = config.max_toasts.unwrap_or_default();
            self.report_clamp("max_toasts", raw.to_string());
        }
        if config.duration_clamped() {
            let raw = config.default_duration_ms.unwrap_or_default();
            self.report_clamp("default_duration_ms", raw.to_string());
        }
        self.position = config.resolved_position();
        self.max_toasts = config.resolved_max_toasts();
        self.overflow = config.resolved_overflow();
        self.toast_defaults = config.toast_defaults();
    }

    fn report_clamp(&self, field: &'static str, rejected: String) {
        if let Some(handle) = &self.diagnostics {
            handle.report_invalid_config(field, rejected);
        }
    }

    /// Returns the configured anchor.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Returns the visible-count ceiling.
    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts
    }

    /// Sets the visible-count ceiling, clamped to the supported bounds.
    pub fn set_max_toasts(&mut self, max_toasts: usize) {
        let clamped = max_toasts.clamp(defaults::MIN_MAX_TOASTS, defaults::MAX_MAX_TOASTS);
        if clamped != max_toasts {
            self.report_clamp("max_toasts", max_toasts.to_string());
        }
        self.max_toasts = clamped;
    }

    /// Returns the overflow policy.
    #[must_use]
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn set_overflow(&mut self, overflow: OverflowPolicy) {
        self.overflow = overflow;
    }

    /// Returns the per-toast defaults merged under every new toast.
    #[must_use]
    pub fn toast_defaults(&self) -> &ToastDefaults {
        &self.toast_defaults
    }

    /// Replaces the per-toast defaults. Only affects toasts created
    /// afterwards.
    pub fn set_toast_defaults(&mut self, toast_defaults: ToastDefaults) {
        self.toast_defaults = toast_defaults;
    }

    /// Returns the resolved data of one tracked toast.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.store.get(id).map(|entry| &entry.toast)
    }

    /// Returns the number of tracked toasts, including hidden and exiting
    /// ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether no toasts are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ======================================================================
    // Creation
    // ======================================================================

    /// Enqueues a toast and returns its id immediately.
    pub fn create(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.create_at(Instant::now(), message, options)
    }

    /// Enqueues a toast with an explicit creation instant.
    pub fn create_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        let id = ToastId::generate();
        let toast = Toast::resolve(id, message.into(), &options, &self.toast_defaults, now);
        let entry = Entry {
            countdown: Countdown::start(toast.duration(), now),
            sequencer: Sequencer::begin_enter(now),
            toast,
            on_click: options.on_click,
            on_close: options.on_close,
            hover_paused: false,
            deferred: false,
        };
        self.store.insert(entry);
        self.notify(now);
        id
    }

    /// Shows a success toast with default options.
    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.create(message, ToastOptions::kind(ToastKind::Success))
    }

    /// Shows an error toast with default options.
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.create(message, ToastOptions::kind(ToastKind::Error))
    }

    /// Shows a warning toast with default options.
    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.create(message, ToastOptions::kind(ToastKind::Warning))
    }

    /// Shows an info toast with default options.
    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.create(message, ToastOptions::kind(ToastKind::Info))
    }

    /// Shows a debug toast with default options.
    pub fn debug(&mut self, message: impl Into<String>) -> ToastId {
        self.create(message, ToastOptions::kind(ToastKind::Debug))
    }

    // ======================================================================
    // Dismissal
    // ======================================================================

    /// Requests the exit transition for one toast. Fire-and-forget:
    /// unknown ids and toasts already exiting are silently ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.dismiss_at(id, Instant::now());
    }

    /// [`Self::dismiss`] with an explicit instant.
    pub fn dismiss_at(&mut self, id: ToastId, now: Instant) {
        if let Some(entry) = self.store.get_mut(id) {
            entry.sequencer.begin_exit(now);
        }
    }

    /// Requests the exit transition for every tracked toast. Each entry
    /// still plays its own exit phase before removal.
    pub fn dismiss_all(&mut self) {
        self.dismiss_all_at(Instant::now());
    }

    /// [`Self::dismiss_all`] with an explicit instant.
    pub fn dismiss_all_at(&mut self, now: Instant) {
        for entry in self.store.iter_mut() {
            entry.sequencer.begin_exit(now);
        }
    }

    // ======================================================================
    // Interaction
    // ======================================================================

    /// Reports a click on a toast. Invokes the click handler if one is
    /// attached and, only then, also dismisses the toast.
    pub fn click(&mut self, id: ToastId) {
        self.click_at(id, Instant::now());
    }

    /// [`Self::click`] with an explicit instant.
    pub fn click_at(&mut self, id: ToastId, now: Instant) {
        let Some(entry) = self.store.get_mut(id) else {
            return;
        };
        if entry.sequencer.is_exiting() {
            return;
        }
        if let Some(on_click) = entry.on_click.clone() {
            on_click();
            entry.sequencer.begin_exit(now);
        }
    }

    /// Reports the pointer entering a toast. Pauses the countdown when
    /// pause-on-hover is enabled for it; no effect once exiting.
    pub fn hover_enter(&mut self, id: ToastId) {
        self.hover_enter_at(id, Instant::now());
    }

    /// [`Self::hover_enter`] with an explicit instant.
    pub fn hover_enter_at(&mut self, id: ToastId, now: Instant) {
        if let Some(entry) = self.store.get_mut(id) {
            if entry.sequencer.is_exiting() || !entry.toast.pause_on_hover() {
                return;
            }
            entry.hover_paused = true;
            entry.sync_pause(now);
        }
    }

    /// Reports the pointer leaving a toast, resuming its countdown.
    pub fn hover_leave(&mut self, id: ToastId) {
        self.hover_leave_at(id, Instant::now());
    }

    /// [`Self::hover_leave`] with an explicit instant.
    pub fn hover_leave_at(&mut self, id: ToastId, now: Instant) {
        if let Some(entry) = self.store.get_mut(id) {
            entry.hover_paused = false;
            entry.sync_pause(now);
        }
    }

    // ======================================================================
    // Scheduling
    // ======================================================================

    /// Advances every countdown and animation phase to `now`, starting
    /// exit transitions for expired toasts and removing entries whose exit
    /// transition completed. Close callbacks fire here, exactly once per
    /// toast.
    pub fn tick(&mut self, now: Instant) {
        self.apply_overflow_policy(now);

        let mut expired: Vec<ToastId> = Vec::new();
        let mut completed: Vec<ToastId> = Vec::new();
        for entry in self.store.iter_mut() {
            if entry.sequencer.tick(now) {
                completed.push(entry.toast.id());
                continue;
            }
            if !entry.sequencer.is_exiting() && entry.countdown.tick(now) {
                expired.push(entry.toast.id());
            }
        }

        for id in expired {
            self.dismiss_at(id, now);
        }

        let mut removed_any = false;
        for id in completed {
            if let Some(entry) = self.store.remove(id) {
                if let Some(on_close) = entry.on_close {
                    on_close();
                }
                removed_any = true;
            }
        }
        if removed_any {
            self.notify(now);
        }
    }

    fn apply_overflow_policy(&mut self, now: Instant) {
        let defer = self.overflow == OverflowPolicy::DeferTimers;
        let max_toasts = self.max_toasts;
        for (index, entry) in self.store.iter_mut().enumerate() {
            entry.deferred = defer && index >= max_toasts;
            entry.sync_pause(now);
        }
    }

    // ======================================================================
    // Snapshots & listeners
    // ======================================================================

    /// Full ordered snapshot of all tracked toasts, newest first.
    #[must_use]
    pub fn snapshots(&self, now: Instant) -> Vec<ToastSnapshot> {
        self.store
            .iter()
            .map(|entry| Self::snapshot_entry(entry, now))
            .collect()
    }

    /// The bounded slice handed to a renderer, ordered for the configured
    /// anchor.
    #[must_use]
    pub fn visible_snapshots(&self, now: Instant) -> Vec<ToastSnapshot> {
        self.store
            .visible_slice(self.max_toasts, self.position)
            .into_iter()
            .map(|entry| Self::snapshot_entry(entry, now))
            .collect()
    }

    fn snapshot_entry(entry: &Entry, now: Instant) -> ToastSnapshot {
        ToastSnapshot {
            id: entry.toast.id(),
            message: entry.toast.message().to_string(),
            kind: entry.toast.kind(),
            icon: entry.toast.icon().map(str::to_string),
            duration: entry.toast.duration(),
            dismissible: entry.toast.dismissible(),
            animation: entry.toast.animation(),
            pause_on_hover: entry.toast.pause_on_hover(),
            phase: entry.sequencer.phase(),
            remaining_fraction: entry.countdown.remaining_fraction(now),
            paused: entry.countdown.is_paused(),
            phase_progress: entry.sequencer.progress(now),
            has_click_action: entry.on_click.is_some(),
        }
    }

    /// Registers a listener that receives the full ordered snapshot on
    /// every store mutation, starting with an immediate snapshot of the
    /// current state.
    pub fn subscribe(&mut self, listener: impl FnMut(&[ToastSnapshot]) + 'static) -> ListenerHandle {
        let seq = self.next_listener_seq;
        self.next_listener_seq += 1;
        let mut entry = ListenerEntry {
            seq,
            callback: Box::new(listener),
        };

        let snapshot = self.snapshots(Instant::now());
        let delivered = catch_unwind(AssertUnwindSafe(|| (entry.callback)(&snapshot)));
        let handle = ListenerHandle {
            instance_id: self.instance_id,
            seq,
        };
        match delivered {
            Ok(()) => self.listeners.push(entry),
            Err(payload) => self.report_listener_panic(&payload),
        }
        handle
    }

    /// Deregisters a listener.
    ///
    /// # Panics
    ///
    /// Panics when the handle was issued by a different manager instance.
    /// That is a caller contract violation, not a runtime condition.
    pub fn unsubscribe(&mut self, handle: ListenerHandle) {
        assert_eq!(
            handle.instance_id, self.instance_id,
            "listener handle was issued by a different ToastManager"
        );
        self.listeners.retain(|listener| listener.seq != handle.seq);
    }

    fn notify(&mut self, now: Instant) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshots(now);
        let mut panicked: Vec<u64> = Vec::new();
        let mut payloads = Vec::new();
        for listener in &mut self.listeners {
            let result = catch_unwind(AssertUnwindSafe(|| (listener.callback)(&snapshot)));
            if let Err(payload) = result {
                panicked.push(listener.seq);
                payloads.push(payload);
            }
        }
        if !panicked.is_empty() {
            // A panicking listener is dropped so it cannot fail again;
            // the remaining listeners were already notified above.
            self.listeners
                .retain(|listener| !panicked.contains(&listener.seq));
            for payload in &payloads {
                self.report_listener_panic(payload);
            }
        }
    }

    fn report_listener_panic(&self, payload: &(dyn std::any::Any + Send)) {
        if let Some(handle) = &self.diagnostics {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned());
            handle.report_listener_panic(detail);
        }
    }
}
