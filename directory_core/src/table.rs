//! # Master Table Configuration
//!
//! Static column descriptors and table options for the user list. Both
//! front-ends render the master pane from these definitions so the column
//! order, headers and widths stay identical.
//!
//! ## Example
//!
//! ```rust
//! use directory_core::records::generate_users;
//! use directory_core::table::{USER_COLUMNS, USER_TABLE};
//!
//! let users = generate_users(3);
//! let cells: Vec<String> = USER_COLUMNS
//!     .iter()
//!     .map(|c| c.accessor.cell_text(users.get(0).unwrap()))
//!     .collect();
//! assert_eq!(cells[1], "U-001");
//! assert!(!USER_TABLE.sortable);
//! ```

use serde::Serialize;

use crate::records::UserRecord;
use crate::status::StatusIndicator;

/// Which record field a column displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnAccessor {
    Status,
    Id,
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl ColumnAccessor {
    /// Plain-text value of this column for `record`.
    ///
    /// The status column yields the indicator's accessible label; renderers
    /// that can draw a marker should use [`ColumnAccessor::status_indicator`].
    pub fn cell_text(&self, record: &UserRecord) -> String {
        match self {
            ColumnAccessor::Status => record.status.display_name().to_string(),
            ColumnAccessor::Id => record.id.clone(),
            ColumnAccessor::FirstName => record.first_name.clone(),
            ColumnAccessor::LastName => record.last_name.clone(),
            ColumnAccessor::Email => record.email.clone(),
            ColumnAccessor::Department => record.department.clone(),
            ColumnAccessor::Role => record.role.display_name().to_string(),
        }
    }

    /// Marker for the status column, `None` for text columns
    pub fn status_indicator(&self, record: &UserRecord) -> Option<StatusIndicator> {
        match self {
            ColumnAccessor::Status => Some(StatusIndicator::for_status(record.status)),
            _ => None,
        }
    }
}

/// One column of the master table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    /// Visible header text (empty for the status column)
    pub header: &'static str,
    pub accessor: ColumnAccessor,
    /// Fixed width in pixels, `None` to share remaining space
    pub width: Option<f32>,
    pub min_width: Option<f32>,
    /// Accessible header name, used where `header` is empty
    pub header_label: &'static str,
}

impl ColumnDescriptor {
    const fn text(header: &'static str, accessor: ColumnAccessor) -> Self {
        ColumnDescriptor {
            header,
            accessor,
            width: None,
            min_width: None,
            header_label: header,
        }
    }
}

/// Columns of the user table, in display order
pub static USER_COLUMNS: [ColumnDescriptor; 7] = [
    ColumnDescriptor {
        header: "",
        accessor: ColumnAccessor::Status,
        width: Some(50.0),
        min_width: Some(50.0),
        header_label: "Status",
    },
    ColumnDescriptor::text("ID", ColumnAccessor::Id),
    ColumnDescriptor::text("First name", ColumnAccessor::FirstName),
    ColumnDescriptor::text("Last name", ColumnAccessor::LastName),
    ColumnDescriptor::text("Email", ColumnAccessor::Email),
    ColumnDescriptor::text("Department", ColumnAccessor::Department),
    ColumnDescriptor::text("Role", ColumnAccessor::Role),
];

/// How many rows may be selected at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// What a click must hit to select a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionBehavior {
    /// Anywhere on the row
    RowOnly,
    /// Only the dedicated selection cell
    RowSelector,
}

/// Options for the master table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableConfig {
    pub title: &'static str,
    pub no_data_text: &'static str,
    pub selection_mode: SelectionMode,
    pub selection_behavior: SelectionBehavior,
    pub filterable: bool,
    pub sortable: bool,
    /// Row height in pixels
    pub row_height: f32,
    /// Rows kept visible even when there is no data
    pub min_rows: usize,
}

/// The user table: single row selection, no filtering or sorting.
pub const USER_TABLE: TableConfig = TableConfig {
    title: "Users",
    no_data_text: "No users found.",
    selection_mode: SelectionMode::Single,
    selection_behavior: SelectionBehavior::RowOnly,
    filterable: false,
    sortable: false,
    row_height: 30.0,
    min_rows: 1,
};

/// Text cells of one row, in column order
pub fn row_cells(record: &UserRecord) -> Vec<String> {
    USER_COLUMNS
        .iter()
        .map(|c| c.accessor.cell_text(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusMarker;

    #[test]
    fn test_column_order() {
        let accessors: Vec<ColumnAccessor> = USER_COLUMNS.iter().map(|c| c.accessor).collect();
        assert_eq!(
            accessors,
            vec![
                ColumnAccessor::Status,
                ColumnAccessor::Id,
                ColumnAccessor::FirstName,
                ColumnAccessor::LastName,
                ColumnAccessor::Email,
                ColumnAccessor::Department,
                ColumnAccessor::Role,
            ]
        );
    }

    #[test]
    fn test_status_column_is_narrow() {
        let status = &USER_COLUMNS[0];
        assert_eq!(status.header, "");
        assert_eq!(status.header_label, "Status");
        assert_eq!(status.width, Some(50.0));
        assert_eq!(status.min_width, Some(50.0));
        assert!(USER_COLUMNS[1..].iter().all(|c| c.width.is_none()));
    }

    #[test]
    fn test_row_cells() {
        let cells = row_cells(&UserRecord::synthetic(10));
        assert_eq!(
            cells,
            vec!["Inactive", "U-010", "First10", "Last10", "user10@example.com", "IT", "Editor"]
        );
    }

    #[test]
    fn test_status_indicator_only_on_status_column() {
        let record = UserRecord::synthetic(1);
        let indicator = ColumnAccessor::Status.status_indicator(&record).unwrap();
        assert_eq!(indicator.marker, StatusMarker::Positive);
        assert!(ColumnAccessor::Email.status_indicator(&record).is_none());
    }

    #[test]
    fn test_table_config() {
        assert_eq!(USER_TABLE.selection_mode, SelectionMode::Single);
        assert_eq!(USER_TABLE.selection_behavior, SelectionBehavior::RowOnly);
        assert!(!USER_TABLE.filterable);
        assert!(!USER_TABLE.sortable);
        assert_eq!(USER_TABLE.row_height, 30.0);
        assert_eq!(USER_TABLE.min_rows, 1);
        assert_eq!(USER_TABLE.no_data_text, "No users found.");
    }
}
