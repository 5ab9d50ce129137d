//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs for the
//!   interactive caller.
//! - Keep that caller decoupled from layout and record-format details.

pub mod tracker_service;
