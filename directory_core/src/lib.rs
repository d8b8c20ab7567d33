//! # directory_core - User Directory Engine
//!
//! `directory_core` holds everything about the user directory sample that does
//! not depend on a UI toolkit: the synthetic user records, the static table
//! configuration, the detail-pane content and the master/detail layout
//! controller. The `iced` GUI and the `ratatui` TUI are thin renderers on top.
//!
//! ## Design Philosophy
//!
//! - **Toolkit-free**: No widget types leak into this crate
//! - **JSON-First**: Records, events and settings implement Serialize/Deserialize
//! - **One Owner**: Selection and layout mode live only in [`LayoutController`]
//!
//! ## Quick Start
//!
//! ```rust
//! use directory_core::{generate_users, DirectoryEvent, LayoutController, LayoutMode};
//!
//! let users = generate_users(5);
//! let mut controller = LayoutController::new();
//!
//! // A row click in the master table
//! controller.handle(DirectoryEvent::RowSelected(users.get(2).cloned()));
//! assert_eq!(controller.mode(), LayoutMode::MasterDetail);
//! assert_eq!(controller.selection().map(|u| u.id.as_str()), Some("U-003"));
//!
//! // The detail pane's close button
//! controller.handle(DirectoryEvent::CloseRequested);
//! assert_eq!(controller.mode(), LayoutMode::Single);
//! ```
//!
//! ## Modules
//!
//! - [`records`] - User records and the deterministic generator
//! - [`status`] - Status column marker and accessible label
//! - [`table`] - Column descriptors and master table configuration
//! - [`detail`] - Content of the detail pane
//! - [`layout`] - Layout controller state machine
//! - [`settings`] - Directory settings
//! - [`errors`] - Structured error types

pub mod detail;
pub mod errors;
pub mod layout;
pub mod records;
pub mod settings;
pub mod status;
pub mod table;

// Re-export commonly used types at crate root for convenience
pub use detail::{DetailContent, DetailField};
pub use errors::{DirectoryError, DirectoryResult};
pub use layout::{DirectoryEvent, LayoutController, LayoutMode, Transition, ViewState};
pub use records::{generate_users, RecordSet, Role, Status, UserRecord};
pub use settings::DirectorySettings;
pub use status::{StatusIndicator, StatusMarker};
pub use table::{ColumnAccessor, ColumnDescriptor, TableConfig, USER_COLUMNS, USER_TABLE};
