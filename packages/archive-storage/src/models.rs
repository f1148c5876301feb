use time::Date;
use uuid::Uuid;

use archive_domain::{ProjectFacts, ProjectStatus, ProjectType};

use crate::Result;

/// A project joined with its leader, the leader's college, and its agenda.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
	pub project_id: Uuid,
	pub title: String,
	pub status: String,
	pub leader_given_name: Option<String>,
	pub leader_last_name: Option<String>,
	pub leader_college_id: Option<Uuid>,
	pub leader_college_name: Option<String>,
	pub agenda_name: Option<String>,
	pub project_type: Option<String>,
	pub start_date: Option<Date>,
	pub estimated_end_date: Option<Date>,
	pub primary_location: String,
}
impl ProjectRow {
	pub fn into_facts(self) -> Result<ProjectFacts> {
		let status = self.status.parse::<ProjectStatus>()?;
		let project_type = self.project_type.as_deref().map(str::parse::<ProjectType>).transpose()?;

		Ok(ProjectFacts {
			project_id: self.project_id,
			title: self.title,
			status,
			leader_given_name: self.leader_given_name,
			leader_last_name: self.leader_last_name,
			leader_college_id: self.leader_college_id,
			leader_college_name: self.leader_college_name,
			agenda_name: self.agenda_name,
			project_type,
			start_date: self.start_date,
			estimated_end_date: self.estimated_end_date,
			primary_location: self.primary_location,
		})
	}
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
	pub user_id: Uuid,
	pub role: String,
	pub college_id: Option<Uuid>,
	pub is_active: bool,
}

/// One group of the aggregation query. `label` is the group key rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AggregateRow {
	pub label: Option<String>,
	pub count: i64,
}
