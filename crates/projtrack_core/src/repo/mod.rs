//! Repository layer: filesystem persistence behind a use-case contract.
//!
//! # Responsibility
//! - Own directory/file lifecycle for project stores.
//! - Rebuild the project object graph from independent record files.
//!
//! # Invariants
//! - Repository writes enforce entity validation before touching disk.
//! - Read paths skip individual malformed records instead of aborting a
//!   batch enumeration.

pub mod loader;
pub mod project_repo;
