// SPDX-License-Identifier: MPL-2.0
//! Anchored toast overlay and engine wiring.
//!
//! The overlay renders the engine's visible slice as a vertical stack
//! anchored to one of the six container positions. The [`Message`] enum
//! and [`update`] function connect widget events back to the engine, and
//! [`tick_subscription`] drives the engine clock while toasts are active.

use super::toast;
use crate::config::defaults;
use crate::config::Position;
use crate::manager::ToastManager;
use crate::notification::ToastId;
use iced::widget::{text, Column, Container};
use iced::{alignment, time, Element, Length, Subscription};
use std::time::Instant;

/// Widget events produced by the overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// The toast body was clicked.
    Clicked(ToastId),
    /// Pointer entered a toast.
    HoverEnter(ToastId),
    /// Pointer left a toast.
    HoverLeave(ToastId),
    /// Engine clock tick.
    Tick,
}

/// Applies an overlay message to the engine.
pub fn update(manager: &mut ToastManager, message: Message) {
    match message {
        Message::Dismiss(id) => manager.dismiss(id),
        Message::Clicked(id) => manager.click(id),
        Message::HoverEnter(id) => manager.hover_enter(id),
        Message::HoverLeave(id) => manager.hover_leave(id),
        Message::Tick => manager.tick(Instant::now()),
    }
}

/// Creates a periodic tick subscription for countdowns and animation
/// phases. Idle when no toasts are tracked, so an application at rest
/// schedules nothing.
pub fn tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(defaults::TICK_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Renders the overlay with all visible toasts for the manager's
/// configured anchor.
pub fn view(manager: &ToastManager) -> Element<'static, Message> {
    let now = Instant::now();
    let cards: Vec<Element<'static, Message>> = manager
        .visible_snapshots(now)
        .iter()
        .map(toast::view)
        .collect();

    if cards.is_empty() {
        // An empty container that takes no space.
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let (align_x, align_y) = anchor_alignment(manager.position());
    let stack = Column::with_children(cards)
        .spacing(super::design_tokens::spacing::XS)
        .align_x(align_x);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(super::design_tokens::spacing::MD)
        .into()
}

fn anchor_alignment(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Position::TopCenter => (alignment::Horizontal::Center, alignment::Vertical::Top),
        Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Position::BottomCenter => (alignment::Horizontal::Center, alignment::Vertical::Bottom),
        Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_alignment_covers_all_positions() {
        assert_eq!(
            anchor_alignment(Position::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor_alignment(Position::BottomCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Bottom)
        );
        assert_eq!(
            anchor_alignment(Position::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn update_routes_dismiss_to_engine() {
        let mut manager = ToastManager::new();
        let id = manager.create("bye", crate::notification::ToastOptions::default());

        update(&mut manager, Message::Dismiss(id));
        let snapshot = manager.snapshots(Instant::now());
        assert_eq!(snapshot[0].phase, crate::animation::Phase::Exiting);
    }

    #[test]
    fn tick_message_advances_the_engine() {
        let mut manager = ToastManager::new();
        manager.create("hi", crate::notification::ToastOptions::default());

        update(&mut manager, Message::Tick);
        assert_eq!(manager.len(), 1);
    }
}
