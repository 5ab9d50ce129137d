//! Domain model for the project tracker.
//!
//! # Responsibility
//! - Define the canonical entity shapes persisted by the store.
//! - Keep identity and record-format invariants close to the data.
//!
//! # Invariants
//! - Every entity carries a stable, globally unique 128-bit id generated at
//!   creation time and never reused.
//! - Text fields must not contain line breaks; the on-disk record format is
//!   line-delimited and has no escaping mechanism.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod individual;
pub mod meeting;
pub mod project;

/// Validation error for entity construction and write-path checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Caller-provided id was the nil UUID.
    NilId { entity: &'static str },
    /// A text field contained a line break, which the line-delimited record
    /// format cannot represent.
    EmbeddedLineBreak {
        entity: &'static str,
        field: &'static str,
    },
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId { entity } => write!(f, "{entity} id must not be the nil uuid"),
            Self::EmbeddedLineBreak { entity, field } => {
                write!(f, "{entity} {field} must not contain a line break")
            }
        }
    }
}

impl Error for EntityValidationError {}

/// Rejects text that the line-delimited record format cannot round-trip.
pub(crate) fn check_line_safe(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), EntityValidationError> {
    if value.contains(['\n', '\r']) {
        return Err(EntityValidationError::EmbeddedLineBreak { entity, field });
    }
    Ok(())
}
