// SPDX-License-Identifier: MPL-2.0
//! Enter/exit animation phase tracking.
//!
//! The sequencer models the visual phases of a toast as timed state,
//! decoupled from any renderer. A toast starts in [`Phase::Entering`] and
//! settles to [`Phase::Visible`] after a short fixed delay. The delay lets
//! a renderer apply the "from" state of the enter transition before the
//! "to" state, so the transition is observed rather than skipped. Exit is
//! requested with [`Sequencer::begin_exit`] and completes after the fixed
//! exit transition duration; that completion, reported exactly once by
//! [`Sequencer::tick`], is the sole authorized trigger for removal.

use crate::config::defaults;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Transition a renderer plays on enter and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    #[default]
    Slide,
    Fade,
    Bounce,
    Zoom,
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, waiting out the render-settle delay.
    Entering,
    /// Fully presented.
    Visible,
    /// Exit transition in progress; still in the store.
    Exiting,
    /// Exit transition finished. Terminal: the store entry is deleted the
    /// moment this phase is reached, so it is never observed in a snapshot.
    Removed,
}

/// Tracks the animation phase of one toast.
#[derive(Debug, Clone)]
pub struct Sequencer {
    phase: Phase,
    phase_started_at: Instant,
}

impl Sequencer {
    /// Starts the enter phase at `now`.
    #[must_use]
    pub fn begin_enter(now: Instant) -> Self {
        Self {
            phase: Phase::Entering,
            phase_started_at: now,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the exit transition has been requested.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting | Phase::Removed)
    }

    /// Requests the exit transition. Idempotent: repeated calls while
    /// already exiting do not restart the transition or schedule a second
    /// completion.
    pub fn begin_exit(&mut self, now: Instant) {
        if self.is_exiting() {
            return;
        }
        self.phase = Phase::Exiting;
        self.phase_started_at = now;
    }

    /// Advances the phase; returns true exactly once, when the exit
    /// transition duration has elapsed after [`Self::begin_exit`].
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering => {
                let settled_at = self.phase_started_at + defaults::ENTER_SETTLE;
                if now >= settled_at {
                    self.phase = Phase::Visible;
                    self.phase_started_at = settled_at;
                }
                false
            }
            Phase::Exiting => {
                if now >= self.phase_started_at + defaults::EXIT_TRANSITION {
                    self.phase = Phase::Removed;
                    return true;
                }
                false
            }
            Phase::Visible | Phase::Removed => false,
        }
    }

    /// Progress through the current phase in `0.0..=1.0`, for renderer
    /// styling. Visible and removed phases report 1.0.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let phase_duration = match self.phase {
            Phase::Entering => defaults::ENTER_SETTLE,
            Phase::Exiting => defaults::EXIT_TRANSITION,
            Phase::Visible | Phase::Removed => return 1.0,
        };
        let elapsed = now.saturating_duration_since(self.phase_started_at);
        (elapsed.as_secs_f32() / phase_duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}
