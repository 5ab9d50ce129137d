//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `projtrack_core` linkage.
//! - Report how many projects the default store currently holds.

use projtrack_core::{FsProjectRepository, ProjectRepository, StoreLayout};

fn main() {
    println!("projtrack_core ping={}", projtrack_core::ping());
    println!("projtrack_core version={}", projtrack_core::core_version());

    let repo = FsProjectRepository::new(StoreLayout::default_root());
    match repo.list_projects() {
        Ok(projects) => println!("projects={}", projects.len()),
        Err(err) => eprintln!("store error: {err}"),
    }
}
