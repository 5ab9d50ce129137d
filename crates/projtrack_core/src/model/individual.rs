//! Individual domain model.
//!
//! An individual belongs to exactly one project; containment is expressed by
//! the filesystem layout, not by a back-reference field. Records are
//! immutable once written.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{check_line_safe, EntityValidationError};

/// Stable identifier for an individual.
pub type IndividualId = Uuid;

/// A person assigned to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Stable global ID, also the stem of the on-disk file name.
    pub id: IndividualId,
    pub name: String,
    pub role: String,
}

impl Individual {
    /// Creates an individual with a freshly generated id.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// Creates an individual with a caller-provided id.
    ///
    /// Used by load paths where identity already exists on disk.
    pub fn with_id(
        id: IndividualId,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, EntityValidationError> {
        if id.is_nil() {
            return Err(EntityValidationError::NilId {
                entity: "individual",
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            role: role.into(),
        })
    }

    /// Checks record-format invariants before persistence.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        check_line_safe("individual", "name", &self.name)?;
        check_line_safe("individual", "role", &self.role)?;
        Ok(())
    }
}
