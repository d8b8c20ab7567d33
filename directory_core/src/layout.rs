//! # Master/Detail Layout Controller
//!
//! The only stateful piece of the directory. [`LayoutController`] owns the
//! current selection and, through it, the layout mode:
//!
//! ```text
//!              select(r)                     select(r')
//!  Collapsed ─────────────▶ Expanded(r) ─────────────▶ Expanded(r')
//!      ▲                        │
//!      └──────── close() ───────┘
//! ```
//!
//! Views never touch the state directly. The master table emits
//! [`DirectoryEvent::RowSelected`], the detail pane emits
//! [`DirectoryEvent::CloseRequested`], and the front-end feeds both into
//! [`LayoutController::handle`].
//!
//! Because the mode is derived from the selection, `MasterDetail` is shown
//! exactly when a user is selected.

use serde::{Deserialize, Serialize};

use crate::records::UserRecord;

/// How many panes the layout shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Master table only
    Single,
    /// Master table plus detail pane
    MasterDetail,
}

impl LayoutMode {
    pub fn shows_detail(&self) -> bool {
        matches!(self, LayoutMode::MasterDetail)
    }
}

/// Controller state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Collapsed,
    Expanded(UserRecord),
}

/// Signals emitted by the master and detail views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryEvent {
    /// A row was picked in the master table. `None` when the toolkit event
    /// carried no record.
    RowSelected(Option<UserRecord>),
    /// The detail pane's close button was pressed
    CloseRequested,
}

/// Outcome of feeding an event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Collapsed -> Expanded
    Opened,
    /// Expanded -> Expanded with a different user
    Replaced,
    /// Expanded -> Collapsed
    Closed,
    /// State unchanged
    Ignored,
}

impl Transition {
    /// Whether the layout needs repainting
    pub fn changed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

/// Owner of the selection and layout mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutController {
    state: ViewState,
}

impl LayoutController {
    /// Start collapsed with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn mode(&self) -> LayoutMode {
        match self.state {
            ViewState::Collapsed => LayoutMode::Single,
            ViewState::Expanded(_) => LayoutMode::MasterDetail,
        }
    }

    pub fn selection(&self) -> Option<&UserRecord> {
        match &self.state {
            ViewState::Collapsed => None,
            ViewState::Expanded(user) => Some(user),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.mode().shows_detail()
    }

    /// Whether `id` is the selected user
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection().is_some_and(|user| user.id == id)
    }

    /// Show `user` in the detail pane, expanding the layout if needed.
    pub fn select(&mut self, user: UserRecord) -> Transition {
        let transition = match &self.state {
            ViewState::Expanded(current) if *current == user => return Transition::Ignored,
            ViewState::Expanded(_) => Transition::Replaced,
            ViewState::Collapsed => Transition::Opened,
        };
        tracing::debug!(id = %user.id, ?transition, "user selected");
        self.state = ViewState::Expanded(user);
        transition
    }

    /// Clear the selection and collapse to the master table.
    pub fn close(&mut self) -> Transition {
        match std::mem::take(&mut self.state) {
            ViewState::Collapsed => Transition::Ignored,
            ViewState::Expanded(user) => {
                tracing::debug!(id = %user.id, "detail pane closed");
                Transition::Closed
            }
        }
    }

    /// Apply a view event.
    ///
    /// A selection event without a record is dropped.
    pub fn handle(&mut self, event: DirectoryEvent) -> Transition {
        match event {
            DirectoryEvent::RowSelected(Some(user)) => self.select(user),
            DirectoryEvent::RowSelected(None) => {
                tracing::trace!("row selection without a record ignored");
                Transition::Ignored
            }
            DirectoryEvent::CloseRequested => self.close(),
        }
    }
}
