//! Project domain model.
//!
//! # Responsibility
//! - Define the root of the persisted object graph.
//!
//! # Invariants
//! - `id` doubles as the project's directory name under the storage root.
//! - `individuals` and `meetings` grow by append only; no delete or
//!   in-place update operation exists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::individual::{Individual, IndividualId};
use super::meeting::Meeting;
use super::{check_line_safe, EntityValidationError};

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// A tracked project together with its loaded object graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID; also the project directory name.
    pub id: ProjectId,
    pub title: String,
    pub goal: String,
    /// Calendar date without a time component.
    pub start_date: NaiveDate,
    /// People assigned to the project.
    pub individuals: Vec<Individual>,
    pub meetings: Vec<Meeting>,
}

impl Project {
    /// Creates a project with a freshly generated id and empty member lists.
    pub fn new(
        title: impl Into<String>,
        goal: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            goal: goal.into(),
            start_date,
            individuals: Vec::new(),
            meetings: Vec::new(),
        }
    }

    /// Creates a project with a caller-provided id.
    ///
    /// Used by load paths where identity already exists on disk.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        goal: impl Into<String>,
        start_date: NaiveDate,
    ) -> Result<Self, EntityValidationError> {
        if id.is_nil() {
            return Err(EntityValidationError::NilId { entity: "project" });
        }
        Ok(Self {
            id,
            title: title.into(),
            goal: goal.into(),
            start_date,
            individuals: Vec::new(),
            meetings: Vec::new(),
        })
    }

    /// Looks up a loaded individual by id.
    pub fn individual(&self, id: IndividualId) -> Option<&Individual> {
        self.individuals.iter().find(|individual| individual.id == id)
    }

    /// Checks record-format invariants before persistence.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        check_line_safe("project", "title", &self.title)?;
        check_line_safe("project", "goal", &self.goal)?;
        Ok(())
    }
}
