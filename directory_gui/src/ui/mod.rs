//! UI module for the User Directory GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header with the user count
//! - `master_panel` - Left pane: the user table
//! - `detail_panel` - Right pane: selected user's fields and Close button
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/status_icon` - Status column marker

// Top-level panels
pub mod toolbar;
pub mod master_panel;
pub mod detail_panel;
pub mod status_bar;

// Shared components
pub mod shared;
