// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the library. Constants are organized by category.
//!
//! # Categories
//!
//! - **Duration**: Auto-dismiss durations and presets
//! - **Animation**: Enter/exit transition timing
//! - **Scheduling**: Tick cadence for the engine
//! - **Container**: Visible-count ceiling bounds
//! - **Diagnostics**: Event buffer capacity

use std::time::Duration;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default auto-dismiss duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Short preset, suited to quick confirmations.
pub const SHORT_DURATION_MS: u64 = 3000;

/// Medium preset, suited to warnings.
pub const MEDIUM_DURATION_MS: u64 = 5000;

/// Long preset, suited to messages the user must have time to read.
pub const LONG_DURATION_MS: u64 = 8000;

/// Default auto-dismiss duration as a [`Duration`].
pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_DURATION_MS);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Render-settle delay before a toast is considered fully entered.
///
/// Gives the renderer one frame to apply the "from" state of the enter
/// transition so the transition is observed rather than skipped.
pub const ENTER_SETTLE_MS: u64 = 50;

/// Duration of the exit transition. Removal from the store happens only
/// after this much time has elapsed since the exit began.
pub const EXIT_TRANSITION_MS: u64 = 300;

/// Render-settle delay as a [`Duration`].
pub const ENTER_SETTLE: Duration = Duration::from_millis(ENTER_SETTLE_MS);

/// Exit transition as a [`Duration`].
pub const EXIT_TRANSITION: Duration = Duration::from_millis(EXIT_TRANSITION_MS);

// ==========================================================================
// Scheduling Defaults
// ==========================================================================

/// Engine tick interval in milliseconds (~60 fps progress updates).
pub const TICK_INTERVAL_MS: u64 = 16;

/// Engine tick interval as a [`Duration`].
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

// ==========================================================================
// Container Defaults
// ==========================================================================

/// Default maximum number of toasts handed to the renderer at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Minimum allowed visible-count ceiling.
pub const MIN_MAX_TOASTS: usize = 1;

/// Maximum allowed visible-count ceiling.
pub const MAX_MAX_TOASTS: usize = 32;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Capacity of the diagnostics event ring buffer.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(SHORT_DURATION_MS < DEFAULT_DURATION_MS);
    assert!(DEFAULT_DURATION_MS < MEDIUM_DURATION_MS);
    assert!(MEDIUM_DURATION_MS < LONG_DURATION_MS);
    assert!(ENTER_SETTLE_MS < EXIT_TRANSITION_MS);
    assert!(MIN_MAX_TOASTS >= 1);
    assert!(MIN_MAX_TOASTS <= DEFAULT_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);
};
