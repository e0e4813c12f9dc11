// SPDX-License-Identifier: MPL-2.0
//! Card view for a single toast snapshot.
//!
//! Toasts render as small cards with a kind-colored accent border, an
//! optional glyph, the message, a dismiss button, and a remaining-time
//! bar. Pointer events are captured with a `mouse_area` so the engine can
//! pause countdowns on hover and run click-to-dismiss.

use super::overlay::Message;
use crate::animation::Phase;
use crate::manager::ToastSnapshot;
use crate::notification::ToastKind;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Accent color for a toast kind.
#[must_use]
pub fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::SUCCESS_500,
        ToastKind::Error => palette::ERROR_500,
        ToastKind::Warning => palette::WARNING_500,
        ToastKind::Info => palette::INFO_500,
        ToastKind::Debug => palette::DEBUG_500,
    }
}

/// Default glyph for a toast kind, used when no icon handle is attached.
#[must_use]
pub fn kind_glyph(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✕",
        ToastKind::Warning => "!",
        ToastKind::Info => "i",
        ToastKind::Debug => "#",
    }
}

/// Renders a single toast card.
pub fn view(snapshot: &ToastSnapshot) -> Element<'static, Message> {
    let accent = kind_color(snapshot.kind);
    // Exiting cards fade with the exit transition.
    let fade = match snapshot.phase {
        Phase::Exiting | Phase::Removed => 1.0 - snapshot.phase_progress,
        Phase::Entering => snapshot.phase_progress,
        Phase::Visible => opacity::OPAQUE,
    };

    // The icon handle is opaque to the engine; the built-in renderer
    // displays it as glyph text.
    let glyph: String = snapshot
        .icon
        .clone()
        .unwrap_or_else(|| kind_glyph(snapshot.kind).to_string());
    let glyph_widget = Text::new(glyph)
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(Color { a: fade, ..accent }),
        });

    let message_widget = Text::new(snapshot.message.clone())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph_widget).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if snapshot.dismissible {
        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(snapshot.id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss_button);
    }

    let mut card = Column::new().spacing(spacing::XXS).push(content);

    // Remaining-time bar; absent for toasts that never auto-expire.
    if let Some(fraction) = snapshot.remaining_fraction {
        let bar_width = (sizing::TOAST_WIDTH - 2.0 * spacing::SM) * fraction;
        let bar = Container::new(text(""))
            .width(Length::Fixed(bar_width.max(0.0)))
            .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(Color { a: fade, ..accent })),
                ..Default::default()
            });
        card = card.push(bar);
    }

    let card = Container::new(card)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, fade));

    mouse_area(card)
        .on_enter(Message::HoverEnter(snapshot.id))
        .on_exit(Message::HoverLeave(snapshot.id))
        .on_press(Message::Clicked(snapshot.id))
        .into()
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent: Color, fade: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color { a: fade, ..bg_color })),
        border: iced::Border {
            color: Color { a: fade, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            kind_color(ToastKind::Success),
            kind_color(ToastKind::Error),
            kind_color(ToastKind::Warning),
            kind_color(ToastKind::Info),
            kind_color(ToastKind::Debug),
        ];
        for (index, color) in colors.iter().enumerate() {
            for other in &colors[index + 1..] {
                assert_ne!(color, other);
            }
        }
    }

    #[test]
    fn kind_glyphs_are_defined() {
        for kind in [
            ToastKind::Success,
            ToastKind::Error,
            ToastKind::Warning,
            ToastKind::Info,
            ToastKind::Debug,
        ] {
            assert!(!kind_glyph(kind).is_empty());
        }
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }
}
