//! Project graph loader.
//!
//! # Responsibility
//! - Rebuild a fully-linked `Project` from its independent record files.
//! - Resolve each meeting's stored attendee-id list against the project's
//!   loaded individual set.
//!
//! # Invariants
//! - A malformed record file is logged and skipped; it never aborts loading
//!   of its siblings.
//! - Attendee references that match no loaded individual are dropped
//!   silently; attendee lists are best-effort.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use log::warn;

use crate::model::individual::{Individual, IndividualId};
use crate::model::meeting::Meeting;
use crate::model::project::{Project, ProjectId};
use crate::repo::project_repo::FsProjectRepository;
use crate::store::codec::{decode_individual, decode_meeting, decode_project};
use crate::store::{StoreError, StoreResult};

/// Loads every project under the store root.
///
/// A project that fails to load is logged and excluded from the result; the
/// rest of the listing is unaffected. An empty or missing root yields an
/// empty sequence.
pub fn load_all_projects(repo: &FsProjectRepository) -> StoreResult<Vec<Project>> {
    let mut projects = Vec::new();
    for project_id in repo.list_project_ids()? {
        match load_project(repo, project_id) {
            Ok(project) => projects.push(project),
            Err(err) => {
                warn!(
                    "event=project_load module=repo status=skip project_id={project_id} error={err}"
                );
            }
        }
    }
    Ok(projects)
}

/// Loads one project's full object graph from its config record.
///
/// Individuals are loaded before meetings so that attendee references can
/// be resolved against the complete individual set.
pub fn load_project(repo: &FsProjectRepository, project_id: ProjectId) -> StoreResult<Project> {
    let config_path = repo.layout().config_file(project_id);
    let text = read_record(&config_path)?;
    let mut project = decode_project(&text).map_err(|source| StoreError::Malformed {
        path: config_path,
        source,
    })?;

    project.individuals = load_individuals(repo, project.id)?;
    project.meetings = load_meetings(repo, project.id, &project.individuals)?;
    Ok(project)
}

fn load_individuals(
    repo: &FsProjectRepository,
    project_id: ProjectId,
) -> StoreResult<Vec<Individual>> {
    let mut individuals = Vec::new();
    for path in repo.list_individual_files(project_id)? {
        let decoded = read_record(&path)
            .and_then(|text| {
                decode_individual(&text).map_err(|source| StoreError::Malformed {
                    path: path.clone(),
                    source,
                })
            });
        match decoded {
            Ok(individual) => individuals.push(individual),
            Err(err) => {
                warn!(
                    "event=individual_load module=repo status=skip path={} error={err}",
                    path.display()
                );
            }
        }
    }
    Ok(individuals)
}

fn load_meetings(
    repo: &FsProjectRepository,
    project_id: ProjectId,
    individuals: &[Individual],
) -> StoreResult<Vec<Meeting>> {
    let index: HashMap<IndividualId, &Individual> = individuals
        .iter()
        .map(|individual| (individual.id, individual))
        .collect();

    let mut meetings = Vec::new();
    for path in repo.list_meeting_files(project_id)? {
        let decoded = read_record(&path)
            .and_then(|text| {
                decode_meeting(&text).map_err(|source| StoreError::Malformed {
                    path: path.clone(),
                    source,
                })
            });
        match decoded {
            Ok(record) => {
                let attendees = record
                    .attendee_ids
                    .iter()
                    .filter_map(|id| index.get(id).map(|&individual| individual.clone()))
                    .collect();
                meetings.push(Meeting {
                    id: record.id,
                    title: record.title,
                    date: record.date,
                    summary: record.summary,
                    attendees,
                });
            }
            Err(err) => {
                warn!(
                    "event=meeting_load module=repo status=skip path={} error={err}",
                    path.display()
                );
            }
        }
    }
    Ok(meetings)
}

fn read_record(path: &Path) -> StoreResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(StoreError::NotFound(path.to_path_buf()))
        }
        Err(err) => Err(StoreError::io(path, err)),
    }
}
