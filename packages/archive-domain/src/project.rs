use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
	NotStarted,
	InProgress,
	Completed,
	Cancelled,
}
impl ProjectStatus {
	pub const ALL: [Self; 4] = [Self::NotStarted, Self::InProgress, Self::Completed, Self::Cancelled];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::NotStarted => "NOT_STARTED",
			Self::InProgress => "IN_PROGRESS",
			Self::Completed => "COMPLETED",
			Self::Cancelled => "CANCELLED",
		}
	}
}
impl fmt::Display for ProjectStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProjectStatus {
	type Err = UnknownEnumValue;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|status| status.as_str() == raw).ok_or_else(|| UnknownEnumValue {
			kind: "project status",
			value: raw.to_string(),
		})
	}
}

/// How a project originated. Stored in canonical UPPER_SNAKE form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
	NeedsBased,
	ResearchBased,
}
impl ProjectType {
	pub const ALL: [Self; 2] = [Self::NeedsBased, Self::ResearchBased];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::NeedsBased => "NEEDS_BASED",
			Self::ResearchBased => "RESEARCH_BASED",
		}
	}

	/// `RESEARCH_BASED` becomes `Research Based`.
	pub fn display_name(self) -> String {
		display_project_type(self.as_str())
	}

	pub fn from_display_name(display: &str) -> Option<Self> {
		let canonical = canonical_project_type(display);

		Self::ALL.into_iter().find(|kind| kind.as_str() == canonical)
	}
}
impl fmt::Display for ProjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProjectType {
	type Err = UnknownEnumValue;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|kind| kind.as_str() == raw).ok_or_else(|| UnknownEnumValue {
			kind: "project type",
			value: raw.to_string(),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}.")]
pub struct UnknownEnumValue {
	pub kind: &'static str,
	pub value: String,
}

/// Display form of a stored project type: underscores become spaces, then title case.
pub fn display_project_type(raw: &str) -> String {
	title_case(&raw.replace('_', " "))
}

/// Inverse of [`display_project_type`] for the values it produces.
pub fn canonical_project_type(display: &str) -> String {
	display.trim().replace(' ', "_").to_uppercase()
}

/// Uppercases the first letter of every run of letters and lowercases the rest.
pub fn title_case(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut previous_cased = false;

	for ch in raw.chars() {
		if previous_cased {
			out.extend(ch.to_lowercase());
		} else {
			out.extend(ch.to_uppercase());
		}

		previous_cased = ch.is_alphabetic();
	}

	out
}

/// The project attributes the archive filters, groups, and searches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFacts {
	pub project_id: Uuid,
	pub title: String,
	pub status: ProjectStatus,
	pub leader_given_name: Option<String>,
	pub leader_last_name: Option<String>,
	pub leader_college_id: Option<Uuid>,
	pub leader_college_name: Option<String>,
	pub agenda_name: Option<String>,
	pub project_type: Option<ProjectType>,
	pub start_date: Option<Date>,
	pub estimated_end_date: Option<Date>,
	pub primary_location: String,
}
