//! Core persistence logic for ProjTrack.
//! This crate is the single source of truth for the on-disk store format.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::individual::{Individual, IndividualId};
pub use model::meeting::{Meeting, MeetingId};
pub use model::project::{Project, ProjectId};
pub use model::EntityValidationError;
pub use repo::loader::{load_all_projects, load_project};
pub use repo::project_repo::{FsProjectRepository, ProjectRepository};
pub use service::tracker_service::TrackerService;
pub use store::layout::{StoreLayout, DEFAULT_ROOT};
pub use store::{CodecError, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
