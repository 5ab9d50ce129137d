//! Project repository contract and filesystem implementation.
//!
//! # Responsibility
//! - Provide the use-case persistence surface consumed by services.
//! - Keep directory layout and record-file details inside the store
//!   boundary.
//!
//! # Invariants
//! - Every write validates the entity first; nothing unrepresentable
//!   reaches disk.
//! - Records are written once and never updated or deleted.
//! - Enumerations are sorted by file name (id text) so listing order is
//!   deterministic across platforms; creation order is not preserved.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::model::individual::Individual;
use crate::model::meeting::Meeting;
use crate::model::project::{Project, ProjectId};
use crate::repo::loader;
use crate::store::codec::{encode_individual, encode_meeting, encode_project};
use crate::store::layout::StoreLayout;
use crate::store::{StoreError, StoreResult};

/// Persistence contract for the tracker's use-case layer.
pub trait ProjectRepository {
    /// Creates the project skeleton and writes its config record.
    fn create_project(&self, project: &Project) -> StoreResult<()>;
    /// Writes one individual record under the project.
    fn add_individual(&self, project_id: ProjectId, individual: &Individual) -> StoreResult<()>;
    /// Writes one meeting record under the project.
    fn add_meeting(&self, project_id: ProjectId, meeting: &Meeting) -> StoreResult<()>;
    /// Loads every readable project with its full object graph.
    fn list_projects(&self) -> StoreResult<Vec<Project>>;
}

/// Filesystem-backed project repository.
pub struct FsProjectRepository {
    layout: StoreLayout,
}

impl FsProjectRepository {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Creates the project directory, individuals directory, and meetings
    /// directory.
    ///
    /// Idempotent: creating over an existing structure neither fails nor
    /// touches files already written under it.
    pub fn create_project_skeleton(&self, project_id: ProjectId) -> StoreResult<()> {
        create_dir(self.layout.project_dir(project_id))?;
        create_dir(self.layout.individuals_dir(project_id))?;
        create_dir(self.layout.meetings_dir(project_id))?;
        Ok(())
    }

    pub fn write_project_config(&self, project: &Project) -> StoreResult<()> {
        project.validate()?;
        write_record(self.layout.config_file(project.id), encode_project(project))
    }

    pub fn write_individual(
        &self,
        project_id: ProjectId,
        individual: &Individual,
    ) -> StoreResult<()> {
        individual.validate()?;
        write_record(
            self.layout.individual_file(project_id, individual.id),
            encode_individual(individual),
        )
    }

    pub fn write_meeting(&self, project_id: ProjectId, meeting: &Meeting) -> StoreResult<()> {
        meeting.validate()?;
        write_record(
            self.layout.meeting_file(project_id, meeting.id),
            encode_meeting(meeting),
        )
    }

    /// Lists ids of root subdirectories that look like projects: a UUID
    /// directory name and a readable config file.
    ///
    /// Anything else under the root is treated as non-project clutter and
    /// skipped silently, including orphaned skeletons whose config write
    /// never happened.
    pub fn list_project_ids(&self) -> StoreResult<Vec<ProjectId>> {
        let root = self.layout.root();
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(root, err)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| StoreError::io(root, err))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name,
                None => continue,
            };
            let id = match Uuid::parse_str(name) {
                Ok(id) => id,
                Err(_) => continue,
            };
            if !self.layout.config_file(id).is_file() {
                continue;
            }
            ids.push(id);
        }
        ids.sort_unstable();
        Ok(ids)
    }

    /// Record files in the project's individuals directory, sorted by file
    /// name. An absent directory yields an empty list.
    pub fn list_individual_files(&self, project_id: ProjectId) -> StoreResult<Vec<PathBuf>> {
        list_record_files(&self.layout.individuals_dir(project_id))
    }

    /// Record files in the project's meetings directory, sorted by file
    /// name. An absent directory yields an empty list.
    pub fn list_meeting_files(&self, project_id: ProjectId) -> StoreResult<Vec<PathBuf>> {
        list_record_files(&self.layout.meetings_dir(project_id))
    }
}

impl ProjectRepository for FsProjectRepository {
    fn create_project(&self, project: &Project) -> StoreResult<()> {
        project.validate()?;
        // Not transactional: a failure between skeleton and config leaves an
        // orphan directory, which listing then skips.
        self.create_project_skeleton(project.id)?;
        self.write_project_config(project)
    }

    fn add_individual(&self, project_id: ProjectId, individual: &Individual) -> StoreResult<()> {
        self.write_individual(project_id, individual)
    }

    fn add_meeting(&self, project_id: ProjectId, meeting: &Meeting) -> StoreResult<()> {
        self.write_meeting(project_id, meeting)
    }

    fn list_projects(&self) -> StoreResult<Vec<Project>> {
        loader::load_all_projects(self)
    }
}

fn create_dir(path: PathBuf) -> StoreResult<()> {
    fs::create_dir_all(&path).map_err(|err| StoreError::io(path, err))
}

fn write_record(path: PathBuf, contents: String) -> StoreResult<()> {
    fs::write(&path, contents).map_err(|err| StoreError::io(path, err))
}

fn list_record_files(dir: &Path) -> StoreResult<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(StoreError::io(dir, err)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| StoreError::io(dir, err))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_unstable();
    Ok(files)
}
