use chrono::NaiveDate;
use projtrack_core::{FsProjectRepository, StoreLayout, TrackerService};
use uuid::Uuid;

fn service_in(dir: &tempfile::TempDir) -> TrackerService<FsProjectRepository> {
    TrackerService::new(FsProjectRepository::new(StoreLayout::new(
        dir.path().join("projects"),
    )))
}

fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn create_add_reload_round_trips_the_full_graph() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let mut project = service
        .create_project("Launch", "Ship v1", date(1, 1, 2024))
        .unwrap();
    let ana = service.add_individual(&mut project, "Ana", "PM").unwrap();
    let meeting = service
        .add_meeting(&mut project, "Kickoff", date(2, 1, 2024), "Intro", &[ana.id])
        .unwrap();
    assert_eq!(meeting.attendees, vec![ana.clone()]);

    let projects = service.list_projects().unwrap();
    assert_eq!(projects.len(), 1);

    let loaded = &projects[0];
    assert_eq!(loaded.id, project.id);
    assert_eq!(loaded.title, "Launch");
    assert_eq!(loaded.goal, "Ship v1");
    assert_eq!(loaded.start_date, date(1, 1, 2024));

    assert_eq!(loaded.individuals.len(), 1);
    assert_eq!(loaded.individuals[0].name, "Ana");
    assert_eq!(loaded.individuals[0].role, "PM");

    assert_eq!(loaded.meetings.len(), 1);
    let loaded_meeting = &loaded.meetings[0];
    assert_eq!(loaded_meeting.title, "Kickoff");
    assert_eq!(loaded_meeting.date, date(2, 1, 2024));
    assert_eq!(loaded_meeting.summary, "Intro");
    assert_eq!(loaded_meeting.attendees, vec![ana]);
}

#[test]
fn add_meeting_resolves_selections_against_project_individuals() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let mut project = service
        .create_project("Launch", "Ship v1", date(1, 1, 2024))
        .unwrap();
    let ana = service.add_individual(&mut project, "Ana", "PM").unwrap();

    // A selection id that matches no individual in this project is dropped,
    // mirroring load-time attendee resolution.
    let stranger = Uuid::new_v4();
    let meeting = service
        .add_meeting(
            &mut project,
            "Planning",
            date(3, 1, 2024),
            "Scope",
            &[stranger, ana.id],
        )
        .unwrap();

    assert_eq!(meeting.attendees, vec![ana]);
}

#[test]
fn service_mirrors_appends_into_the_in_memory_project() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let mut project = service
        .create_project("Launch", "Ship v1", date(1, 1, 2024))
        .unwrap();
    assert!(project.individuals.is_empty());
    assert!(project.meetings.is_empty());

    service.add_individual(&mut project, "Ana", "PM").unwrap();
    service.add_individual(&mut project, "Ben", "Engineer").unwrap();
    service
        .add_meeting(&mut project, "Kickoff", date(2, 1, 2024), "Intro", &[])
        .unwrap();

    assert_eq!(project.individuals.len(), 2);
    assert_eq!(project.meetings.len(), 1);
}

#[test]
fn multiple_projects_all_reload() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let first = service
        .create_project("Alpha", "goal a", date(1, 1, 2024))
        .unwrap();
    let second = service
        .create_project("Beta", "goal b", date(2, 2, 2024))
        .unwrap();

    let projects = service.list_projects().unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().any(|p| p.id == first.id));
    assert!(projects.iter().any(|p| p.id == second.id));
}
