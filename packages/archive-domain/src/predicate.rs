use std::fmt::{self, Display, Formatter};

use uuid::Uuid;

use crate::project::ProjectFacts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
	Status,
	LeaderCollegeId,
	LeaderCollegeName,
	AgendaName,
	ProjectType,
	StartYear,
	EndYear,
	Title,
	LeaderGivenName,
	LeaderLastName,
	PrimaryLocation,
}
impl ProjectField {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Status => "status",
			Self::LeaderCollegeId => "leader.college_id",
			Self::LeaderCollegeName => "leader.college.name",
			Self::AgendaName => "agenda.name",
			Self::ProjectType => "project_type",
			Self::StartYear => "start_date.year",
			Self::EndYear => "estimated_end_date.year",
			Self::Title => "title",
			Self::LeaderGivenName => "leader.given_name",
			Self::LeaderLastName => "leader.last_name",
			Self::PrimaryLocation => "primary_location",
		}
	}

	pub fn lookup(self, project: &ProjectFacts) -> Option<FieldValue> {
		match self {
			Self::Status => Some(FieldValue::text(project.status.as_str())),
			Self::LeaderCollegeId => project.leader_college_id.map(FieldValue::Id),
			Self::LeaderCollegeName => project.leader_college_name.as_deref().map(FieldValue::text),
			Self::AgendaName => project.agenda_name.as_deref().map(FieldValue::text),
			Self::ProjectType => project.project_type.map(|kind| FieldValue::text(kind.as_str())),
			Self::StartYear =>
				project.start_date.map(|date| FieldValue::Integer(i64::from(date.year()))),
			Self::EndYear =>
				project.estimated_end_date.map(|date| FieldValue::Integer(i64::from(date.year()))),
			Self::Title => Some(FieldValue::text(&project.title)),
			Self::LeaderGivenName => project.leader_given_name.as_deref().map(FieldValue::text),
			Self::LeaderLastName => project.leader_last_name.as_deref().map(FieldValue::text),
			Self::PrimaryLocation => Some(FieldValue::text(&project.primary_location)),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	Text(String),
	Integer(i64),
	Id(Uuid),
}
impl FieldValue {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}
}
impl Display for FieldValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(value) => write!(f, "{value:?}"),
			Self::Integer(value) => write!(f, "{value}"),
			Self::Id(value) => write!(f, "{value}"),
		}
	}
}

/// A boolean filter over projects.
///
/// `And([])` holds for every project and `Or([])` for none. Comparisons against a missing value
/// never hold; use [`Predicate::IsNull`] to select missing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
	All,
	And(Vec<Predicate>),
	Or(Vec<Predicate>),
	Eq { field: ProjectField, value: FieldValue },
	IsNull(ProjectField),
	ContainsIgnoreCase { field: ProjectField, needle: String },
}
impl Predicate {
	pub fn eq(field: ProjectField, value: FieldValue) -> Self {
		Self::Eq { field, value }
	}

	pub fn contains_ignore_case(field: ProjectField, needle: impl Into<String>) -> Self {
		Self::ContainsIgnoreCase { field, needle: needle.into() }
	}

	/// Conjunction that drops `All` operands and flattens nested conjunctions.
	pub fn and(self, other: Self) -> Self {
		match (self, other) {
			(Self::All, other) | (other, Self::All) => other,
			(Self::And(mut left), Self::And(right)) => {
				left.extend(right);

				Self::And(left)
			},
			(Self::And(mut left), other) => {
				left.push(other);

				Self::And(left)
			},
			(this, Self::And(mut right)) => {
				right.insert(0, this);

				Self::And(right)
			},
			(this, other) => Self::And(vec![this, other]),
		}
	}

	pub fn evaluate(&self, project: &ProjectFacts) -> bool {
		match self {
			Self::All => true,
			Self::And(nodes) => nodes.iter().all(|node| node.evaluate(project)),
			Self::Or(nodes) => nodes.iter().any(|node| node.evaluate(project)),
			Self::Eq { field, value } => field.lookup(project).as_ref() == Some(value),
			Self::IsNull(field) => field.lookup(project).is_none(),
			Self::ContainsIgnoreCase { field, needle } => match field.lookup(project) {
				Some(FieldValue::Text(text)) =>
					text.to_lowercase().contains(needle.to_lowercase().as_str()),
				_ => false,
			},
		}
	}
}
impl Display for Predicate {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str("true"),
			Self::And(nodes) => write_joined(f, nodes, " AND ", "true"),
			Self::Or(nodes) => write_joined(f, nodes, " OR ", "false"),
			Self::Eq { field, value } => write!(f, "{} = {value}", field.as_str()),
			Self::IsNull(field) => write!(f, "{} IS NULL", field.as_str()),
			Self::ContainsIgnoreCase { field, needle } =>
				write!(f, "{} ICONTAINS {needle:?}", field.as_str()),
		}
	}
}

fn write_joined(
	f: &mut Formatter<'_>,
	nodes: &[Predicate],
	separator: &str,
	empty: &str,
) -> fmt::Result {
	if nodes.is_empty() {
		return f.write_str(empty);
	}

	f.write_str("(")?;

	for (idx, node) in nodes.iter().enumerate() {
		if idx > 0 {
			f.write_str(separator)?;
		}

		write!(f, "{node}")?;
	}

	f.write_str(")")
}

#[cfg(test)]
mod tests {
	use uuid::Uuid;

	use crate::{
		predicate::{FieldValue, Predicate, ProjectField},
		project::{ProjectFacts, ProjectStatus},
	};

	fn project() -> ProjectFacts {
		ProjectFacts {
			project_id: Uuid::new_v4(),
			title: "River Cleanup Drive".to_string(),
			status: ProjectStatus::Completed,
			leader_given_name: Some("Ana".to_string()),
			leader_last_name: Some("Reyes".to_string()),
			leader_college_id: None,
			leader_college_name: None,
			agenda_name: None,
			project_type: None,
			start_date: None,
			estimated_end_date: None,
			primary_location: "Barangay Poblacion".to_string(),
		}
	}

	#[test]
	fn empty_conjunction_and_disjunction() {
		assert!(Predicate::And(Vec::new()).evaluate(&project()));
		assert!(!Predicate::Or(Vec::new()).evaluate(&project()));
	}

	#[test]
	fn equality_never_matches_missing_values() {
		let predicate = Predicate::eq(ProjectField::AgendaName, FieldValue::text("Health"));

		assert!(!predicate.evaluate(&project()));
		assert!(Predicate::IsNull(ProjectField::AgendaName).evaluate(&project()));
	}

	#[test]
	fn contains_ignores_case() {
		assert!(
			Predicate::contains_ignore_case(ProjectField::Title, "CLEANUP").evaluate(&project())
		);
		assert!(
			!Predicate::contains_ignore_case(ProjectField::LeaderCollegeName, "eng")
				.evaluate(&project())
		);
	}

	#[test]
	fn and_flattens_and_drops_all() {
		let status = Predicate::eq(ProjectField::Status, FieldValue::text("COMPLETED"));
		let title = Predicate::contains_ignore_case(ProjectField::Title, "river");

		assert_eq!(Predicate::All.and(status.clone()), status);
		assert_eq!(
			status.clone().and(title.clone()).and(Predicate::All).and(status.clone()),
			Predicate::And(vec![status.clone(), title, status])
		);
	}

	#[test]
	fn display_is_readable() {
		let predicate = Predicate::Or(vec![
			Predicate::eq(ProjectField::Status, FieldValue::text("COMPLETED")),
			Predicate::IsNull(ProjectField::AgendaName),
		]);

		assert_eq!(predicate.to_string(), r#"(status = "COMPLETED" OR agenda.name IS NULL)"#);
	}
}
