// SPDX-License-Identifier: MPL-2.0
//! Diagnostic sink for engine-internal failures.
//!
//! The engine has no I/O of its own, so its error surface is narrow:
//! listener callbacks that panic and configuration values that had to be
//! clamped. Both are reported here instead of being surfaced to the end
//! user, who should never see raw failures in a notification overlay.
//!
//! Events flow through a bounded channel into a memory-bounded circular
//! buffer:
//!
//! ```
//! use iced_toast::diagnostics::DiagnosticsCollector;
//! use iced_toast::ToastManager;
//!
//! let mut collector = DiagnosticsCollector::new();
//! let mut manager = ToastManager::new();
//! manager.set_diagnostics(collector.handle());
//!
//! // ... drive the manager ...
//!
//! collector.process_pending();
//! for event in collector.events() {
//!     eprintln!("{:?}", event);
//! }
//! ```

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
