use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
	predicate::{FieldValue, Predicate, ProjectField},
	project,
};

/// Label standing in for a missing related record or an empty field.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	StartYear,
	EstimatedEndDate,
	Agenda,
	ProjectType,
	College,
}
impl Category {
	pub const ALL: [Self; 5] =
		[Self::StartYear, Self::EstimatedEndDate, Self::Agenda, Self::ProjectType, Self::College];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::StartYear => "start_year",
			Self::EstimatedEndDate => "estimated_end_date",
			Self::Agenda => "agenda",
			Self::ProjectType => "project_type",
			Self::College => "college",
		}
	}

	/// Menu label shown on the archive page.
	pub fn label(self) -> &'static str {
		match self {
			Self::StartYear => "Year Started",
			Self::EstimatedEndDate => "Year Ended",
			Self::Agenda => "Agenda",
			Self::ProjectType => "Project Type",
			Self::College => "College/CORD",
		}
	}

	/// Field the category groups and filters on.
	pub fn field(self) -> ProjectField {
		match self {
			Self::StartYear => ProjectField::StartYear,
			Self::EstimatedEndDate => ProjectField::EndYear,
			Self::Agenda => ProjectField::AgendaName,
			Self::ProjectType => ProjectField::ProjectType,
			Self::College => ProjectField::LeaderCollegeName,
		}
	}

	pub fn is_year(self) -> bool {
		matches!(self, Self::StartYear | Self::EstimatedEndDate)
	}

	/// Label of one aggregation bucket. Missing or empty keys become [`NOT_AVAILABLE`].
	pub fn bucket_label(self, key: Option<&str>) -> String {
		match key.filter(|key| !key.is_empty()) {
			None => NOT_AVAILABLE.to_string(),
			Some(key) if self == Self::ProjectType => project::display_project_type(key),
			Some(key) => key.to_string(),
		}
	}
}
impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for Category {
	type Err = CategoryError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|category| category.as_str() == raw)
			.ok_or_else(|| CategoryError::InvalidCategory { category: raw.to_string() })
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
	#[error("Invalid category specified: {category}.")]
	InvalidCategory { category: String },
	#[error("Invalid filter value for {category}: {value}.")]
	InvalidFilterValue { category: Category, value: String },
}

/// A list filter on one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
	/// Projects with no value for the category.
	Missing(Category),
	/// Projects whose category value equals the canonical value.
	Equals(Category, FieldValue),
}
impl CategoryFilter {
	/// Parses a filter as it arrives from a client, in bucket-label form.
	///
	/// [`NOT_AVAILABLE`] is only interpreted here and always means [`CategoryFilter::Missing`].
	pub fn parse(category: &str, raw_value: &str) -> Result<Self, CategoryError> {
		let category = category.parse::<Category>()?;

		if raw_value == NOT_AVAILABLE {
			return Ok(Self::Missing(category));
		}

		let value = match category {
			Category::StartYear | Category::EstimatedEndDate => raw_value
				.trim()
				.parse::<i64>()
				.map(FieldValue::Integer)
				.map_err(|_| CategoryError::InvalidFilterValue {
					category,
					value: raw_value.to_string(),
				})?,
			Category::ProjectType => FieldValue::Text(project::canonical_project_type(raw_value)),
			Category::Agenda | Category::College => FieldValue::text(raw_value),
		};

		Ok(Self::Equals(category, value))
	}

	pub fn category(&self) -> Category {
		match self {
			Self::Missing(category) | Self::Equals(category, _) => *category,
		}
	}

	pub fn to_predicate(&self) -> Predicate {
		match self {
			Self::Missing(category) => Predicate::IsNull(category.field()),
			Self::Equals(category, value) => Predicate::eq(category.field(), value.clone()),
		}
	}
}
