//! Status column indicator
//!
//! Maps a user's [`Status`] to the marker drawn in the first table column and
//! the accessible label that goes with it.

use serde::{Deserialize, Serialize};

use crate::records::Status;

/// Visual marker identity for the status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusMarker {
    /// Shown for active users
    Positive,
    /// Shown for inactive users
    Employee,
}

impl StatusMarker {
    /// Icon name in the web icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            StatusMarker::Positive => "status-positive",
            StatusMarker::Employee => "employee",
        }
    }

    /// Single-character glyph for text renderers
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusMarker::Positive => "●",
            StatusMarker::Employee => "○",
        }
    }
}

/// Marker plus accessible label for one status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    pub marker: StatusMarker,
    /// Equal to the status string ("Active" / "Inactive")
    pub label: &'static str,
}

impl StatusIndicator {
    pub fn for_status(status: Status) -> Self {
        let marker = match status {
            Status::Active => StatusMarker::Positive,
            Status::Inactive => StatusMarker::Employee,
        };
        StatusIndicator {
            marker,
            label: status.display_name(),
        }
    }
}

impl From<Status> for StatusIndicator {
    fn from(status: Status) -> Self {
        StatusIndicator::for_status(status)
    }
}
