//! Master Panel (Left)
//!
//! The user table: a header row built from `USER_COLUMNS` followed by one
//! clickable row per user. Clicking a row emits `RowSelected` with that
//! user's record; the panel itself keeps no selection state and only
//! highlights whatever the controller currently has selected.

use iced::widget::{button, column, container, rule, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use directory_core::table::{ColumnDescriptor, USER_COLUMNS, USER_TABLE};
use directory_core::{DirectoryEvent, RecordSet, UserRecord};

use super::shared::status_icon::view_status_icon;
use crate::Message;

/// Render the master panel
///
/// `portion` is this panel's share of the window width out of 100.
pub fn view_master_panel<'a>(
    records: &'a RecordSet,
    selection: Option<&'a UserRecord>,
    row_height: f32,
    portion: u16,
) -> Element<'a, Message> {
    let mut rows: Column<'a, Message> = column![].spacing(1);

    if records.is_empty() {
        let min_height = row_height * USER_TABLE.min_rows as f32;
        rows = rows.push(
            container(text(USER_TABLE.no_data_text).size(11).color([0.5, 0.5, 0.5]))
                .center_y(Length::Fixed(min_height))
                .padding(Padding::from([0, 6])),
        );
    } else {
        for user in records {
            let is_selected = selection.is_some_and(|s| s.id == user.id);
            rows = rows.push(view_user_row(user, is_selected, row_height));
        }
    }

    let content = column![
        text(USER_TABLE.title).size(14),
        Space::new().height(6),
        view_header_row(),
        rule::horizontal(1),
        scrollable(rows).height(Length::Fill),
    ];

    container(content)
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(8)
        .into()
}

fn column_width(column: &ColumnDescriptor) -> Length {
    match column.width {
        Some(width) => Length::Fixed(width),
        None => Length::FillPortion(1),
    }
}

fn view_header_row() -> Element<'static, Message> {
    let cells = USER_COLUMNS.iter().map(|column| -> Element<'static, Message> {
        text(column.header).size(11).width(column_width(column)).into()
    });

    Row::with_children(cells)
        .padding(Padding::from([4, 6]))
        .into()
}

fn view_user_row<'a>(user: &'a UserRecord, is_selected: bool, row_height: f32) -> Element<'a, Message> {
    let cells = USER_COLUMNS.iter().map(|column| -> Element<'a, Message> {
        match column.accessor.status_indicator(user) {
            Some(indicator) => view_status_icon(indicator, column_width(column)),
            None => text(column.accessor.cell_text(user))
                .size(11)
                .width(column_width(column))
                .into(),
        }
    });

    let style = if is_selected { button::primary } else { button::text };

    button(
        Row::with_children(cells)
            .height(Length::Fill)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Directory(DirectoryEvent::RowSelected(Some(user.clone()))))
    .padding(Padding::from([0, 6]))
    .width(Length::Fill)
    .height(Length::Fixed(row_height))
    .style(style)
    .into()
}
