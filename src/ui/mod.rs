// SPDX-License-Identifier: MPL-2.0
//! Iced widget layer over the toast engine.
//!
//! This module is strictly a consumer of engine snapshots: it renders the
//! visible slice as an anchored overlay and feeds pointer and timer events
//! back into the [`ToastManager`](crate::manager::ToastManager).
//!
//! # Components
//!
//! - [`design_tokens`] - Shared palette, spacing, and sizing constants
//! - [`toast`] - Card view for a single toast snapshot
//! - [`overlay`] - Anchored overlay, message handling, tick subscription
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui;
//!
//! // In your update function:
//! Message::Toast(message) => ui::update(&mut self.toasts, message),
//!
//! // In your view function:
//! let overlay = ui::overlay::view(&self.toasts).map(Message::Toast);
//!
//! // In your subscription function:
//! ui::tick_subscription(!self.toasts.is_empty()).map(Message::Toast)
//! ```

pub mod design_tokens;
pub mod overlay;
pub mod toast;

pub use overlay::{tick_subscription, update, Message};
