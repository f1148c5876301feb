use time::macros::date;
use uuid::Uuid;

use archive_domain::{
	Actor, ProjectFacts, ProjectStatus, Role,
	visibility,
};

const AFFILIATED: [Role; 4] = [Role::Faculty, Role::ProgramHead, Role::Coordinator, Role::Dean];
const UNRESTRICTED: [Role; 3] = [Role::Ueso, Role::Director, Role::Vp];
const OTHERS: [Role; 3] = [Role::Client, Role::Implementer, Role::Guest];

struct Scenario {
	college_a: Uuid,
	college_b: Uuid,
	projects: Vec<ProjectFacts>,
}

fn project(title: &str, status: ProjectStatus, college_id: Option<Uuid>) -> ProjectFacts {
	ProjectFacts {
		project_id: Uuid::new_v4(),
		title: title.to_string(),
		status,
		leader_given_name: Some("Maria".to_string()),
		leader_last_name: Some("Santos".to_string()),
		leader_college_id: college_id,
		leader_college_name: college_id.map(|_| "College".to_string()),
		agenda_name: None,
		project_type: None,
		start_date: Some(date!(2024 - 06 - 01)),
		estimated_end_date: None,
		primary_location: "Campus".to_string(),
	}
}

fn scenario() -> Scenario {
	let college_a = Uuid::new_v4();
	let college_b = Uuid::new_v4();
	let projects = vec![
		project("P1", ProjectStatus::Completed, Some(college_a)),
		project("P2", ProjectStatus::InProgress, Some(college_a)),
		project("P3", ProjectStatus::InProgress, Some(college_b)),
		project("P4", ProjectStatus::Completed, Some(college_b)),
		project("P5", ProjectStatus::NotStarted, Some(college_a)),
		project("P6", ProjectStatus::Cancelled, None),
		project("P7", ProjectStatus::InProgress, None),
	];

	Scenario { college_a, college_b, projects }
}

fn visible_titles(actor: &Actor, projects: &[ProjectFacts]) -> Vec<String> {
	let predicate = visibility::resolve(actor);

	projects
		.iter()
		.filter(|project| predicate.evaluate(project))
		.map(|project| project.title.clone())
		.collect()
}

#[test]
fn unrestricted_roles_see_everything() {
	let scenario = scenario();

	for role in UNRESTRICTED {
		for college_id in [None, Some(scenario.college_a)] {
			let actor = Actor::user(Uuid::new_v4(), Some(role), college_id);

			assert_eq!(
				visible_titles(&actor, &scenario.projects).len(),
				scenario.projects.len(),
				"{role} should see every project"
			);
		}
	}
}

#[test]
fn affiliated_roles_without_college_see_completed_only() {
	let scenario = scenario();

	for role in AFFILIATED {
		let actor = Actor::user(Uuid::new_v4(), Some(role), None);

		assert_eq!(visible_titles(&actor, &scenario.projects), ["P1", "P4"], "{role}");
	}
}

#[test]
fn affiliated_roles_see_own_college_in_progress() {
	let scenario = scenario();

	for role in AFFILIATED {
		let in_a = Actor::user(Uuid::new_v4(), Some(role), Some(scenario.college_a));
		let in_b = Actor::user(Uuid::new_v4(), Some(role), Some(scenario.college_b));

		assert_eq!(visible_titles(&in_a, &scenario.projects), ["P1", "P2", "P4"], "{role}");
		assert_eq!(visible_titles(&in_b, &scenario.projects), ["P1", "P3", "P4"], "{role}");
	}
}

#[test]
fn other_roles_and_anonymous_see_completed_only() {
	let scenario = scenario();

	for role in OTHERS {
		let actor = Actor::user(Uuid::new_v4(), Some(role), Some(scenario.college_a));

		assert_eq!(visible_titles(&actor, &scenario.projects), ["P1", "P4"], "{role}");
	}

	assert_eq!(visible_titles(&Actor::anonymous(), &scenario.projects), ["P1", "P4"]);

	let unknown_role = Actor::user(Uuid::new_v4(), None, Some(scenario.college_a));

	assert_eq!(visible_titles(&unknown_role, &scenario.projects), ["P1", "P4"]);
}

#[test]
fn three_project_scenario() {
	let college_a = Uuid::new_v4();
	let college_b = Uuid::new_v4();
	let projects = vec![
		project("P1", ProjectStatus::Completed, Some(college_a)),
		project("P2", ProjectStatus::InProgress, Some(college_a)),
		project("P3", ProjectStatus::InProgress, Some(college_b)),
	];
	let faculty = Actor::user(Uuid::new_v4(), Some(Role::Faculty), Some(college_a));
	let guest = Actor::user(Uuid::new_v4(), Some(Role::Guest), None);
	let director = Actor::user(Uuid::new_v4(), Some(Role::Director), None);

	assert_eq!(visible_titles(&faculty, &projects), ["P1", "P2"]);
	assert_eq!(visible_titles(&guest, &projects), ["P1"]);
	assert_eq!(visible_titles(&director, &projects), ["P1", "P2", "P3"]);
}

#[test]
fn completed_projects_are_visible_to_every_role() {
	let scenario = scenario();
	let completed: Vec<_> = scenario
		.projects
		.iter()
		.filter(|project| project.status == ProjectStatus::Completed)
		.collect();

	for role in Role::ALL {
		let predicate =
			visibility::resolve(&Actor::user(Uuid::new_v4(), Some(role), Some(Uuid::new_v4())));

		assert!(completed.iter().all(|project| predicate.evaluate(project)), "{role}");
	}
}
