//! Frame rendering
//!
//! ```text
//! ┌ Users ─────────────────────────┐┌ Details ──────┐
//! │   ID    First name  ...        ││ ID: U-003     │
//! │ ● U-001 First1      ...        ││ Name: ...     │
//! └────────────────────────────────┘└───────────────┘
//!  ↑/↓ move  Enter select  Esc close  q quit
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use directory_core::detail::{CLOSE_LABEL, DETAIL_TITLE};
use directory_core::table::{ColumnDescriptor, USER_COLUMNS, USER_TABLE};
use directory_core::{DetailContent, StatusMarker, UserRecord};

use crate::app::TuiApp;

/// Render a full frame
pub fn draw(frame: &mut Frame<'_>, app: &mut TuiApp) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    let mode = app.controller.mode();
    let (master_pct, detail_pct) = app.settings.column_portions(mode);

    if mode.shows_detail() {
        let [master, detail] = Layout::horizontal([
            Constraint::Percentage(master_pct),
            Constraint::Percentage(detail_pct),
        ])
        .areas(body);
        render_master(frame, master, app);
        render_detail(frame, detail, app.controller.selection());
    } else {
        render_master(frame, body, app);
    }

    render_footer(frame, footer, mode.shows_detail());
}

/// Terminal column width for a descriptor (pixel widths scaled down)
fn column_constraint(column: &ColumnDescriptor) -> Constraint {
    match column.width {
        Some(_) => Constraint::Length(2),
        None => Constraint::Fill(1),
    }
}

fn marker_style(marker: StatusMarker) -> Style {
    match marker {
        StatusMarker::Positive => Style::default().fg(Color::Green),
        StatusMarker::Employee => Style::default().fg(Color::DarkGray),
    }
}

fn user_row<'a>(user: &'a UserRecord, is_selected: bool) -> Row<'a> {
    let cells = USER_COLUMNS.iter().map(|column| {
        match column.accessor.status_indicator(user) {
            Some(indicator) => {
                Cell::from(Span::styled(indicator.marker.glyph(), marker_style(indicator.marker)))
            }
            None => Cell::from(column.accessor.cell_text(user)),
        }
    });

    let row = Row::new(cells);
    if is_selected {
        row.style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
    } else {
        row
    }
}

fn render_master(frame: &mut Frame<'_>, area: Rect, app: &mut TuiApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", USER_TABLE.title, app.records.len()));

    if app.records.is_empty() {
        let empty = Paragraph::new(USER_TABLE.no_data_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(USER_COLUMNS.iter().map(|column| Cell::from(column.header)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row<'_>> = app
        .records
        .iter()
        .map(|user| user_row(user, app.controller.is_selected(&user.id)))
        .collect();

    let widths: Vec<Constraint> = USER_COLUMNS.iter().map(column_constraint).collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, selection: Option<&UserRecord>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", DETAIL_TITLE))
        .title_bottom(Line::from(format!(" Esc: {} ", CLOSE_LABEL)).right_aligned());

    let content = DetailContent::for_selection(selection);
    let lines: Vec<Line<'_>> = match &content {
        DetailContent::Placeholder(text) => {
            vec![Line::styled(*text, Style::default().fg(Color::DarkGray))]
        }
        DetailContent::Fields(fields) => fields
            .iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(format!("{}: ", field.label), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(field.value.clone()),
                ])
            })
            .collect(),
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, detail_open: bool) {
    let mut hints = vec![
        Span::styled(" ↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" select  "),
    ];
    if detail_open {
        hints.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
        hints.push(Span::raw(" close  "));
    }
    hints.push(Span::styled("q", Style::default().fg(Color::Yellow)));
    hints.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}
