//! Status Bar (Bottom)
//!
//! Displays:
//! - Current selection (or "No selection")
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use directory_core::UserRecord;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(selection: Option<&'a UserRecord>, status: &'a str) -> Element<'a, Message> {
    let selection_info = match selection {
        Some(user) => format!("{} - {}", user.id, user.full_name()),
        None => "No selection".to_string(),
    };

    row![
        text(selection_info).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
