//! Meeting domain model.
//!
//! A meeting belongs to exactly one project and is immutable once written.
//! Attendees are stored on disk as an id list (a foreign-key-style
//! reference) and resolved to `Individual` values when the project graph is
//! loaded; the in-memory model carries the resolved values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::individual::{Individual, IndividualId};
use super::{check_line_safe, EntityValidationError};

/// Stable identifier for a meeting.
pub type MeetingId = Uuid;

/// A meeting held for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Stable global ID, also the stem of the on-disk file name.
    pub id: MeetingId,
    pub title: String,
    /// Calendar date without a time component.
    pub date: NaiveDate,
    pub summary: String,
    /// Resolved attendee values, in stored reference order.
    pub attendees: Vec<Individual>,
}

impl Meeting {
    /// Creates a meeting with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        summary: impl Into<String>,
        attendees: Vec<Individual>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            summary: summary.into(),
            attendees,
        }
    }

    /// Creates a meeting with a caller-provided id.
    pub fn with_id(
        id: MeetingId,
        title: impl Into<String>,
        date: NaiveDate,
        summary: impl Into<String>,
        attendees: Vec<Individual>,
    ) -> Result<Self, EntityValidationError> {
        if id.is_nil() {
            return Err(EntityValidationError::NilId { entity: "meeting" });
        }
        Ok(Self {
            id,
            title: title.into(),
            date,
            summary: summary.into(),
            attendees,
        })
    }

    /// Attendee ids in stored order, the form persisted in the record.
    pub fn attendee_ids(&self) -> Vec<IndividualId> {
        self.attendees.iter().map(|individual| individual.id).collect()
    }

    /// Checks record-format invariants before persistence.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        check_line_safe("meeting", "title", &self.title)?;
        check_line_safe("meeting", "summary", &self.summary)?;
        Ok(())
    }
}
