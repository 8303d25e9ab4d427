//! Terminal CRUD client for a REST `properties` resource.
//!
//! The table view mirrors the last fetched server snapshot; every mutation
//! is followed by a full reload of the list.

pub mod api;
pub mod config;
pub mod console;
pub mod models;
pub mod sync;
pub mod view;
