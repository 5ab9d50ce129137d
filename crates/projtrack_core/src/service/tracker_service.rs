//! Tracker use-case service.
//!
//! # Responsibility
//! - Provide the create/append/list entry points consumed by the
//!   interactive front end.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Input text is expected pre-validated by the caller; the repository
//!   still enforces record-format invariants before every write.
//! - Member lists grow by append only; the service mirrors each successful
//!   write into the in-memory project it was given.

use chrono::NaiveDate;

use crate::model::individual::{Individual, IndividualId};
use crate::model::meeting::Meeting;
use crate::model::project::Project;
use crate::repo::project_repo::ProjectRepository;
use crate::store::StoreResult;

/// Use-case service wrapper over a project repository.
pub struct TrackerService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> TrackerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a new project with empty member lists.
    pub fn create_project(
        &self,
        title: impl Into<String>,
        goal: impl Into<String>,
        start_date: NaiveDate,
    ) -> StoreResult<Project> {
        let project = Project::new(title, goal, start_date);
        self.repo.create_project(&project)?;
        Ok(project)
    }

    /// Persists a new individual under the project and appends it to the
    /// project's in-memory list.
    pub fn add_individual(
        &self,
        project: &mut Project,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> StoreResult<Individual> {
        let individual = Individual::new(name, role);
        self.repo.add_individual(project.id, &individual)?;
        project.individuals.push(individual.clone());
        Ok(individual)
    }

    /// Persists a new meeting under the project and appends it to the
    /// project's in-memory list.
    ///
    /// Attendee selections are resolved against the project's current
    /// individual list; an id with no match is dropped, mirroring the
    /// best-effort resolution applied at load time.
    pub fn add_meeting(
        &self,
        project: &mut Project,
        title: impl Into<String>,
        date: NaiveDate,
        summary: impl Into<String>,
        attendee_selections: &[IndividualId],
    ) -> StoreResult<Meeting> {
        let attendees = attendee_selections
            .iter()
            .filter_map(|id| project.individual(*id).cloned())
            .collect();
        let meeting = Meeting::new(title, date, summary, attendees);
        self.repo.add_meeting(project.id, &meeting)?;
        project.meetings.push(meeting.clone());
        Ok(meeting)
    }

    /// Loads every project with its full object graph.
    pub fn list_projects(&self) -> StoreResult<Vec<Project>> {
        self.repo.list_projects()
    }
}
