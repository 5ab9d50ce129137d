//! Canonical filesystem layout for the store.
//!
//! # Responsibility
//! - Map `(storage root, entity kind, ids)` to paths. No I/O here.
//!
//! # Invariants
//! - Deterministic and injective: distinct ids never map to the same path.
//! - File name stems are the id's canonical UUID text form, nothing else.
//!
//! Layout:
//!
//! ```text
//! <root>/<projectId>/config.txt
//! <root>/<projectId>/individuals/<individualId>.txt
//! <root>/<projectId>/meetings/<meetingId>.txt
//! ```

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::model::individual::IndividualId;
use crate::model::meeting::MeetingId;
use crate::model::project::ProjectId;

/// Default storage root directory name.
pub const DEFAULT_ROOT: &str = "projects";

const CONFIG_FILE_NAME: &str = "config.txt";
const INDIVIDUALS_DIR_NAME: &str = "individuals";
const MEETINGS_DIR_NAME: &str = "meetings";
const RECORD_FILE_EXT: &str = "txt";

/// Pure path resolver rooted at a storage directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the default `projects` directory.
    pub fn default_root() -> Self {
        Self::new(DEFAULT_ROOT)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_dir(&self, project_id: ProjectId) -> PathBuf {
        self.root.join(project_id.to_string())
    }

    pub fn config_file(&self, project_id: ProjectId) -> PathBuf {
        self.project_dir(project_id).join(CONFIG_FILE_NAME)
    }

    pub fn individuals_dir(&self, project_id: ProjectId) -> PathBuf {
        self.project_dir(project_id).join(INDIVIDUALS_DIR_NAME)
    }

    pub fn individual_file(&self, project_id: ProjectId, individual_id: IndividualId) -> PathBuf {
        self.individuals_dir(project_id)
            .join(record_file_name(individual_id))
    }

    pub fn meetings_dir(&self, project_id: ProjectId) -> PathBuf {
        self.project_dir(project_id).join(MEETINGS_DIR_NAME)
    }

    pub fn meeting_file(&self, project_id: ProjectId, meeting_id: MeetingId) -> PathBuf {
        self.meetings_dir(project_id).join(record_file_name(meeting_id))
    }
}

fn record_file_name(id: Uuid) -> String {
    format!("{id}.{RECORD_FILE_EXT}")
}
