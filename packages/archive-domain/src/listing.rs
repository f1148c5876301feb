use crate::{
	category::CategoryFilter,
	predicate::{Predicate, ProjectField},
};

/// Literal page selector for the last page.
pub const LAST_PAGE: &str = "last";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
	#[default]
	Title,
	StartDate,
	EndDate,
}
impl SortBy {
	/// Unknown or absent values sort by title.
	pub fn from_param(raw: Option<&str>) -> Self {
		match raw.map(str::trim) {
			Some("start_date") => Self::StartDate,
			Some("end_date") => Self::EndDate,
			_ => Self::Title,
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
	#[default]
	Asc,
	Desc,
}
impl SortOrder {
	/// Only `desc` sorts descending.
	pub fn from_param(raw: Option<&str>) -> Self {
		match raw.map(str::trim) {
			Some("desc") => Self::Desc,
			_ => Self::Asc,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
	pub default_size: u32,
	pub max_size: u32,
}
impl PageLimits {
	/// Positive requests are honored up to `max_size`. Anything else yields `default_size`.
	pub fn page_size(&self, requested: Option<&str>) -> u32 {
		let Some(requested) = requested.and_then(|raw| raw.trim().parse::<i64>().ok()) else {
			return self.default_size;
		};

		if requested <= 0 {
			return self.default_size;
		}

		u32::try_from(requested).unwrap_or(u32::MAX).min(self.max_size)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelector {
	Number(i64),
	Last,
}
impl PageSelector {
	pub fn from_param(raw: Option<&str>) -> Result<Self, PageError> {
		let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
			return Ok(Self::Number(1));
		};

		if raw == LAST_PAGE {
			return Ok(Self::Last);
		}

		raw.parse::<i64>().map(Self::Number).map_err(|_| PageError::InvalidPage)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
	#[error("Invalid page.")]
	InvalidPage,
}

/// One resolved page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	pub page: u32,
	pub page_size: u32,
	pub total_count: u64,
	pub total_pages: u32,
}
impl PageWindow {
	/// An empty result still has one (empty) page; any other page past the end is invalid.
	pub fn resolve(
		selector: PageSelector,
		page_size: u32,
		total_count: u64,
	) -> Result<Self, PageError> {
		let page_size = page_size.max(1);
		let total_pages =
			u32::try_from(total_count.div_ceil(u64::from(page_size)).max(1)).unwrap_or(u32::MAX);
		let page = match selector {
			PageSelector::Last => total_pages,
			PageSelector::Number(number) => {
				let number = u32::try_from(number).map_err(|_| PageError::InvalidPage)?;

				if number == 0 || number > total_pages {
					return Err(PageError::InvalidPage);
				}

				number
			},
		};

		Ok(Self { page, page_size, total_count, total_pages })
	}

	pub fn offset(&self) -> u64 {
		u64::from(self.page - 1) * u64::from(self.page_size)
	}

	pub fn limit(&self) -> u64 {
		u64::from(self.page_size)
	}

	pub fn next(&self) -> Option<u32> {
		(self.page < self.total_pages).then_some(self.page + 1)
	}

	pub fn previous(&self) -> Option<u32> {
		(self.page > 1).then_some(self.page - 1)
	}
}

/// Filters layered on top of the visibility predicate for one list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
	pub filter: Option<CategoryFilter>,
	pub search: Option<String>,
	pub sort_by: SortBy,
	pub order: SortOrder,
}
impl ListQuery {
	pub fn predicate(&self, visibility: Predicate) -> Predicate {
		let mut predicate = visibility;

		if let Some(filter) = self.filter.as_ref() {
			predicate = predicate.and(filter.to_predicate());
		}
		if let Some(search) = self.search.as_deref().and_then(search_predicate) {
			predicate = predicate.and(search);
		}

		predicate
	}
}

/// Case-insensitive match of the raw search text on title, leader names, or location. An empty
/// search matches everything and yields `None`.
pub fn search_predicate(needle: &str) -> Option<Predicate> {
	if needle.is_empty() {
		return None;
	}

	Some(Predicate::Or(
		[
			ProjectField::Title,
			ProjectField::LeaderGivenName,
			ProjectField::LeaderLastName,
			ProjectField::PrimaryLocation,
		]
		.into_iter()
		.map(|field| Predicate::contains_ignore_case(field, needle))
		.collect(),
	))
}
