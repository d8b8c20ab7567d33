//! Header component
//!
//! Application title on the left, user count on the right.

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header(user_count: usize) -> Element<'static, Message> {
    row![
        text("User Directory").size(24),
        Space::new().width(Length::Fill),
        text(format!("{} users", user_count)).size(12),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
