//! Row inserts for tests. The archive itself never writes these tables.

use sqlx::PgExecutor;
use time::Date;
use uuid::Uuid;

use crate::Result;

#[derive(Debug, Clone)]
pub struct UserSeed {
	pub given_name: String,
	pub last_name: String,
	pub role: String,
	pub college_id: Option<Uuid>,
	pub is_active: bool,
}
impl UserSeed {
	pub fn new(role: &str, college_id: Option<Uuid>) -> Self {
		Self {
			given_name: "Test".to_string(),
			last_name: "User".to_string(),
			role: role.to_string(),
			college_id,
			is_active: true,
		}
	}

	pub fn named(mut self, given_name: &str, last_name: &str) -> Self {
		self.given_name = given_name.to_string();
		self.last_name = last_name.to_string();

		self
	}
}

#[derive(Debug, Clone)]
pub struct ProjectSeed {
	pub title: String,
	pub status: String,
	pub leader_id: Option<Uuid>,
	pub agenda_id: Option<Uuid>,
	pub project_type: Option<String>,
	pub start_date: Option<Date>,
	pub estimated_end_date: Option<Date>,
	pub primary_location: String,
}
impl ProjectSeed {
	pub fn new(title: &str, status: &str, leader_id: Option<Uuid>) -> Self {
		Self {
			title: title.to_string(),
			status: status.to_string(),
			leader_id,
			agenda_id: None,
			project_type: None,
			start_date: None,
			estimated_end_date: None,
			primary_location: String::new(),
		}
	}
}

pub async fn insert_college<'e, E>(executor: E, name: &str) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let college_id = Uuid::new_v4();

	sqlx::query("INSERT INTO colleges (college_id, name) VALUES ($1, $2)")
		.bind(college_id)
		.bind(name)
		.execute(executor)
		.await?;

	Ok(college_id)
}

pub async fn insert_agenda<'e, E>(executor: E, name: &str) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let agenda_id = Uuid::new_v4();

	sqlx::query("INSERT INTO agendas (agenda_id, name) VALUES ($1, $2)")
		.bind(agenda_id)
		.bind(name)
		.execute(executor)
		.await?;

	Ok(agenda_id)
}

pub async fn insert_user<'e, E>(executor: E, user: &UserSeed) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let user_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO users (user_id, given_name, last_name, role, college_id, is_active)
VALUES ($1, $2, $3, $4, $5, $6)",
	)
	.bind(user_id)
	.bind(user.given_name.as_str())
	.bind(user.last_name.as_str())
	.bind(user.role.as_str())
	.bind(user.college_id)
	.bind(user.is_active)
	.execute(executor)
	.await?;

	Ok(user_id)
}

pub async fn insert_project<'e, E>(executor: E, project: &ProjectSeed) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let project_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO projects (
	project_id,
	title,
	status,
	project_leader_id,
	agenda_id,
	project_type,
	start_date,
	estimated_end_date,
	primary_location
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
	)
	.bind(project_id)
	.bind(project.title.as_str())
	.bind(project.status.as_str())
	.bind(project.leader_id)
	.bind(project.agenda_id)
	.bind(project.project_type.as_deref())
	.bind(project.start_date)
	.bind(project.estimated_end_date)
	.bind(project.primary_location.as_str())
	.execute(executor)
	.await?;

	Ok(project_id)
}

pub async fn insert_notification<'e, E>(executor: E, recipient_id: Uuid, is_read: bool) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let notification_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO notifications (notification_id, recipient_id, message, is_read)
VALUES ($1, $2, $3, $4)",
	)
	.bind(notification_id)
	.bind(recipient_id)
	.bind("Project update")
	.bind(is_read)
	.execute(executor)
	.await?;

	Ok(notification_id)
}
