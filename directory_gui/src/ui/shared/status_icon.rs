//! Status column marker
//!
//! Draws the glyph for a [`StatusIndicator`] with its accessible label beside
//! it as a tooltip.

use iced::widget::{container, text, tooltip};
use iced::{Color, Element, Length};

use directory_core::{StatusIndicator, StatusMarker};

use crate::Message;

fn marker_color(marker: StatusMarker) -> Color {
    match marker {
        StatusMarker::Positive => Color::from_rgb(0.16, 0.6, 0.3),
        StatusMarker::Employee => Color::from_rgb(0.5, 0.5, 0.5),
    }
}

/// Render the marker for one status cell
pub fn view_status_icon(indicator: StatusIndicator, width: Length) -> Element<'static, Message> {
    let glyph = text(indicator.marker.glyph())
        .size(14)
        .color(marker_color(indicator.marker));

    let cell = container(glyph).center_x(width);

    tooltip(cell, text(indicator.label).size(10), tooltip::Position::Right).into()
}
