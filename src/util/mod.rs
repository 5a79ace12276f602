//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `authz` holds the pure authorization decisions, `auth` the reactive
//! guard effects built on them, and `persist` the browser-storage glue.

pub mod auth;
pub mod authz;
pub mod persist;
