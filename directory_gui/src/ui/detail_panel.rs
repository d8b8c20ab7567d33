//! Detail Panel (Right)
//!
//! Shows the selected user's fields, or a placeholder when nothing is
//! selected, under a header with the Close button.

use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use directory_core::detail::{CLOSE_LABEL, DETAIL_TITLE};
use directory_core::{DetailContent, DirectoryEvent, UserRecord};

use crate::Message;

/// Render the detail panel
///
/// `portion` is this panel's share of the window width out of 100.
pub fn view_detail_panel<'a>(selection: Option<&'a UserRecord>, portion: u16) -> Element<'a, Message> {
    let header = row![
        text(DETAIL_TITLE).size(14),
        Space::new().width(Length::Fill),
        button(text(CLOSE_LABEL).size(11))
            .on_press(Message::Directory(DirectoryEvent::CloseRequested))
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let body: Column<'a, Message> = match DetailContent::for_selection(selection) {
        DetailContent::Placeholder(placeholder) => {
            column![text(placeholder).size(11).color([0.5, 0.5, 0.5])]
        }
        DetailContent::Fields(fields) => Column::with_children(
            fields
                .into_iter()
                .map(|field| -> Element<'a, Message> { text(field.to_string()).size(11).into() }),
        )
        .spacing(6),
    };

    let content = column![header, Space::new().height(8), body];

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
