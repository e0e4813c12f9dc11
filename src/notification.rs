// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] entity, its identity type, the closed
//! set of semantic kinds, and the per-toast option surface merged over
//! container defaults at creation time.

use crate::animation::AnimationKind;
use crate::config::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Shared callback attached to a toast (`on_click` / `on_close`).
pub type ToastCallback = Arc<dyn Fn() + Send + Sync>;

/// Unique identifier for a toast.
///
/// Combines a unix-millisecond creation prefix with a process-wide sequence
/// number. The sequence alone guarantees in-process uniqueness for the
/// lifetime of the process; the time prefix keeps identifiers
/// collision-resistant across processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId {
    created_ms: u64,
    seq: u64,
}

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let created_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        Self {
            created_ms,
            seq: COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}-{}", self.created_ms, self.seq)
    }
}

/// Semantic category of a toast.
///
/// The engine never interprets the kind; it only carries it so a renderer
/// can pick an accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

/// Container-level defaults merged under every [`ToastOptions`].
#[derive(Debug, Clone)]
pub struct ToastDefaults {
    pub kind: ToastKind,
    pub duration: Duration,
    pub dismissible: bool,
    pub animation: AnimationKind,
    pub pause_on_hover: bool,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            kind: ToastKind::Info,
            duration: defaults::DEFAULT_DURATION,
            dismissible: true,
            animation: AnimationKind::Slide,
            pause_on_hover: true,
        }
    }
}

/// Per-toast options supplied at creation.
///
/// Every field is optional; omitted fields fall back to the container
/// defaults. Options are built with `with_*` methods:
///
/// ```
/// use iced_toast::notification::{ToastKind, ToastOptions};
/// use std::time::Duration;
///
/// let options = ToastOptions::kind(ToastKind::Warning)
///     .with_duration(Duration::from_secs(5))
///     .with_dismissible(false);
/// ```
#[derive(Clone, Default)]
pub struct ToastOptions {
    pub(crate) kind: Option<ToastKind>,
    pub(crate) duration: Option<Duration>,
    pub(crate) dismissible: Option<bool>,
    pub(crate) icon: Option<String>,
    pub(crate) animation: Option<AnimationKind>,
    pub(crate) pause_on_hover: Option<bool>,
    pub(crate) on_click: Option<ToastCallback>,
    pub(crate) on_close: Option<ToastCallback>,
}

impl ToastOptions {
    /// Options preset to a specific kind.
    #[must_use]
    pub fn kind(kind: ToastKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Sets the auto-dismiss duration. [`Duration::ZERO`] disables
    /// auto-dismissal entirely.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the auto-dismiss duration from a signed millisecond count.
    ///
    /// Negative values are floored at zero, which means "never
    /// auto-expires".
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration = Some(Duration::from_millis(duration_ms.max(0) as u64));
        self
    }

    /// Sets whether the renderer should offer a manual dismiss control.
    ///
    /// Advisory only: programmatic dismissal is always honored.
    #[must_use]
    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    /// Attaches an opaque icon handle for the renderer.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Selects the transition the renderer plays on enter and exit.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationKind) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Gates whether hover events pause this toast's countdown.
    #[must_use]
    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = Some(pause_on_hover);
        self
    }

    /// Attaches a click handler. A toast with a click handler is also
    /// dismissed when clicked.
    #[must_use]
    pub fn with_on_click(mut self, on_click: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(on_click));
        self
    }

    /// Attaches a close callback, invoked exactly once after the exit
    /// transition completes and the toast is removed.
    #[must_use]
    pub fn with_on_close(mut self, on_close: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(on_close));
        self
    }
}

impl fmt::Debug for ToastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOptions")
            .field("kind", &self.kind)
            .field("duration", &self.duration)
            .field("dismissible", &self.dismissible)
            .field("icon", &self.icon)
            .field("animation", &self.animation)
            .field("pause_on_hover", &self.pause_on_hover)
            .field("on_click", &self.on_click.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// A toast tracked by the engine.
///
/// This is the resolved, immutable data of one notification. Lifecycle
/// state (countdown, animation phase) lives alongside it in the store
/// entry, not here.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    duration: Duration,
    dismissible: bool,
    icon: Option<String>,
    animation: AnimationKind,
    pause_on_hover: bool,
    created_at: Instant,
}

impl Toast {
    /// Resolves options over defaults into a toast.
    pub(crate) fn resolve(
        id: ToastId,
        message: String,
        options: &ToastOptions,
        toast_defaults: &ToastDefaults,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            message,
            kind: options.kind.unwrap_or(toast_defaults.kind),
            duration: options.duration.unwrap_or(toast_defaults.duration),
            dismissible: options.dismissible.unwrap_or(toast_defaults.dismissible),
            icon: options.icon.clone(),
            animation: options.animation.unwrap_or(toast_defaults.animation),
            pause_on_hover: options
                .pause_on_hover
                .unwrap_or(toast_defaults.pause_on_hover),
            created_at,
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the message payload. The engine never interprets it.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the semantic kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the auto-dismiss duration; zero means "never auto-expires".
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether manual dismissal should be offered by the renderer.
    #[must_use]
    pub fn dismissible(&self) -> bool {
        self.dismissible
    }

    /// Returns the opaque icon handle, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the transition kind.
    #[must_use]
    pub fn animation(&self) -> AnimationKind {
        self.animation
    }

    /// Returns whether hover events pause this toast's countdown.
    #[must_use]
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
