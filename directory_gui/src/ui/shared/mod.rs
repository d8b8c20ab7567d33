//! Shared UI components reusable across panels
//!
//! Contains:
//! - `status_icon` - Marker drawn in the status column

pub mod status_icon;
