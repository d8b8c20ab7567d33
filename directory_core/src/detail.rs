//! Detail pane content
//!
//! Either a placeholder (nothing selected) or the labelled fields of the
//! selected user, in a fixed order.

use serde::Serialize;

use crate::records::UserRecord;

/// Title of the detail pane
pub const DETAIL_TITLE: &str = "Details";

/// Label of the button that collapses the layout
pub const CLOSE_LABEL: &str = "Close";

/// Shown when no user is selected
pub const PLACEHOLDER_TEXT: &str = "Select a user to see details.";

/// One labelled line of the detail pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        DetailField {
            label,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for DetailField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// What the detail pane shows for a given selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DetailContent {
    Placeholder(&'static str),
    Fields(Vec<DetailField>),
}

impl DetailContent {
    pub fn for_selection(selection: Option<&UserRecord>) -> Self {
        match selection {
            None => DetailContent::Placeholder(PLACEHOLDER_TEXT),
            Some(user) => DetailContent::Fields(vec![
                DetailField::new("ID", user.id.as_str()),
                DetailField::new("Name", user.full_name()),
                DetailField::new("Email", user.email.as_str()),
                DetailField::new("Department", user.department.as_str()),
                DetailField::new("Role", user.role.display_name()),
                DetailField::new("Status", user.status.display_name()),
            ]),
        }
    }

    /// Display lines, one per field (or the placeholder alone)
    pub fn lines(&self) -> Vec<String> {
        match self {
            DetailContent::Placeholder(text) => vec![text.to_string()],
            DetailContent::Fields(fields) => fields.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        let content = DetailContent::for_selection(None);
        assert_eq!(content, DetailContent::Placeholder(PLACEHOLDER_TEXT));
        assert_eq!(content.lines(), vec!["Select a user to see details."]);
    }

    #[test]
    fn test_fields_for_selected_user() {
        let user = UserRecord::synthetic(3);
        let content = DetailContent::for_selection(Some(&user));
        assert_eq!(
            content.lines(),
            vec![
                "ID: U-003",
                "Name: First3 Last3",
                "Email: user3@example.com",
                "Department: Finance",
                "Role: Admin",
                "Status: Active",
            ]
        );
    }
}
