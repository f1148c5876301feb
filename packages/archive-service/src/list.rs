use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use archive_domain::{
	Actor, CategoryError, CategoryFilter, ProjectFacts, ProjectStatus,
	listing::{ListQuery, PageSelector, PageWindow, SortBy, SortOrder},
	visibility,
};
use archive_storage::queries::{self, ProjectPage};

use crate::{ArchiveService, Error, Result};

pub const LISTING_FAILED: &str = "A server error occurred while listing projects.";

/// Raw list parameters as they arrive from a client. Parsing rules live in the domain crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRequest {
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub filter_value: Option<String>,
	#[serde(default)]
	pub search: Option<String>,
	#[serde(default)]
	pub sort_by: Option<String>,
	#[serde(default)]
	pub order: Option<String>,
	#[serde(default)]
	pub page: Option<String>,
	#[serde(default)]
	pub page_size: Option<String>,
}
impl ListRequest {
	fn to_query(&self) -> Result<ListQuery> {
		let filter = match (non_empty(&self.category), non_empty(&self.filter_value)) {
			(Some(category), Some(value)) => match CategoryFilter::parse(category, value) {
				Ok(filter) => Some(filter),
				Err(CategoryError::InvalidCategory { category }) => {
					tracing::debug!(%category, "Unknown list category; listing without a filter.");

					None
				},
				Err(err) => return Err(err.into()),
			},
			_ => None,
		};

		Ok(ListQuery {
			filter,
			search: non_empty(&self.search).map(str::to_string),
			sort_by: SortBy::from_param(self.sort_by.as_deref()),
			order: SortOrder::from_param(self.order.as_deref()),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
	pub project_id: Uuid,
	pub title: String,
	pub leader_name: Option<String>,
	pub status: ProjectStatus,
	#[serde(with = "crate::date_serde::option")]
	pub start_date: Option<Date>,
	#[serde(with = "crate::date_serde::option")]
	pub estimated_end_date: Option<Date>,
	pub agenda: Option<String>,
	pub project_type: Option<String>,
	pub college: Option<String>,
	pub primary_location: String,
}
impl From<ProjectFacts> for ListItem {
	fn from(project: ProjectFacts) -> Self {
		let leader_name = match (project.leader_given_name, project.leader_last_name) {
			(Some(given), Some(last)) => Some(format!("{given} {last}")),
			(given, last) => given.or(last),
		};

		Self {
			project_id: project.project_id,
			title: project.title,
			leader_name,
			status: project.status,
			start_date: project.start_date,
			estimated_end_date: project.estimated_end_date,
			agenda: project.agenda_name,
			project_type: project.project_type.map(|kind| kind.display_name()),
			college: project.leader_college_name,
			primary_location: project.primary_location,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
	pub count: u64,
	pub page: u32,
	pub page_size: u32,
	pub total_pages: u32,
	pub next: Option<u32>,
	pub previous: Option<u32>,
	pub items: Vec<ListItem>,
}

impl ArchiveService {
	/// One page of the projects visible to `actor`, narrowed by the request's filters.
	pub async fn list(&self, actor: &Actor, req: ListRequest) -> Result<ListResponse> {
		let query = req.to_query()?;
		let selector = PageSelector::from_param(req.page.as_deref())?;
		let page_size = self.page_limits().page_size(req.page_size.as_deref());
		let predicate = query.predicate(visibility::resolve(actor));

		tracing::debug!(
			%predicate,
			sort_by = ?query.sort_by,
			order = ?query.order,
			page_size,
			"Listing archive projects."
		);

		let total = queries::count_projects(&self.db.pool, &predicate)
			.await
			.map_err(|err| Error::data_access("list", LISTING_FAILED, err))?;
		let window = PageWindow::resolve(selector, page_size, total)?;
		let rows = queries::list_projects(
			&self.db.pool,
			&predicate,
			ProjectPage {
				sort_by: query.sort_by,
				order: query.order,
				limit: window.limit(),
				offset: window.offset(),
			},
		)
		.await
		.map_err(|err| Error::data_access("list", LISTING_FAILED, err))?;
		let mut items = Vec::with_capacity(rows.len());

		for row in rows {
			let facts =
				row.into_facts().map_err(|err| Error::data_access("list", LISTING_FAILED, err))?;

			items.push(ListItem::from(facts));
		}

		Ok(ListResponse {
			count: window.total_count,
			page: window.page,
			page_size: window.page_size,
			total_pages: window.total_pages,
			next: window.next(),
			previous: window.previous(),
			items,
		})
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|value| !value.is_empty())
}
