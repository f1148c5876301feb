//! Renders domain predicates and sort orders into Postgres SQL.

use sqlx::{Postgres, QueryBuilder};

use archive_domain::{
	FieldValue, Predicate, ProjectField,
	listing::{SortBy, SortOrder},
};

/// Every join is to-one, so each project appears at most once.
pub const PROJECT_SOURCE: &str = "\
FROM projects p
LEFT JOIN users leader ON leader.user_id = p.project_leader_id
LEFT JOIN colleges college ON college.college_id = leader.college_id
LEFT JOIN agendas agenda ON agenda.agenda_id = p.agenda_id";

pub const PROJECT_COLUMNS: &str = "\
SELECT
	p.project_id,
	p.title,
	p.status,
	leader.given_name AS leader_given_name,
	leader.last_name AS leader_last_name,
	leader.college_id AS leader_college_id,
	college.name AS leader_college_name,
	agenda.name AS agenda_name,
	p.project_type,
	p.start_date,
	p.estimated_end_date,
	p.primary_location";

pub fn column(field: ProjectField) -> &'static str {
	match field {
		ProjectField::Status => "p.status",
		ProjectField::LeaderCollegeId => "leader.college_id",
		ProjectField::LeaderCollegeName => "college.name",
		ProjectField::AgendaName => "agenda.name",
		ProjectField::ProjectType => "p.project_type",
		ProjectField::StartYear => "CAST(EXTRACT(YEAR FROM p.start_date) AS BIGINT)",
		ProjectField::EndYear => "CAST(EXTRACT(YEAR FROM p.estimated_end_date) AS BIGINT)",
		ProjectField::Title => "p.title",
		ProjectField::LeaderGivenName => "leader.given_name",
		ProjectField::LeaderLastName => "leader.last_name",
		ProjectField::PrimaryLocation => "p.primary_location",
	}
}

pub fn sort_column(sort_by: SortBy) -> &'static str {
	match sort_by {
		SortBy::Title => "p.title",
		SortBy::StartDate => "p.start_date",
		SortBy::EndDate => "p.estimated_end_date",
	}
}

/// Appends `ORDER BY` with a project id tie-breaker so pages are stable.
pub fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, sort_by: SortBy, order: SortOrder) {
	let direction = match order {
		SortOrder::Asc => "ASC",
		SortOrder::Desc => "DESC",
	};

	builder.push(" ORDER BY ");
	builder.push(sort_column(sort_by));
	builder.push(" ");
	builder.push(direction);
	builder.push(", p.project_id ASC");
}

pub fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
	match predicate {
		Predicate::All => {
			builder.push("TRUE");
		},
		Predicate::And(nodes) => push_joined(builder, nodes, " AND ", "TRUE"),
		Predicate::Or(nodes) => push_joined(builder, nodes, " OR ", "FALSE"),
		Predicate::Eq { field, value } => {
			builder.push(column(*field));
			builder.push(" = ");
			push_value(builder, value);
		},
		Predicate::IsNull(field) => {
			builder.push(column(*field));
			builder.push(" IS NULL");
		},
		Predicate::ContainsIgnoreCase { field, needle } => {
			builder.push(column(*field));
			builder.push(" ILIKE ");
			builder.push_bind(format!("%{}%", escape_like(needle)));
		},
	}
}

fn push_joined(
	builder: &mut QueryBuilder<'_, Postgres>,
	nodes: &[Predicate],
	separator: &str,
	empty: &str,
) {
	if nodes.is_empty() {
		builder.push(empty);

		return;
	}

	builder.push("(");

	for (idx, node) in nodes.iter().enumerate() {
		if idx > 0 {
			builder.push(separator);
		}

		push_predicate(builder, node);
	}

	builder.push(")");
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: &FieldValue) {
	match value {
		FieldValue::Text(text) => {
			builder.push_bind(text.clone());
		},
		FieldValue::Integer(number) => {
			builder.push_bind(*number);
		},
		FieldValue::Id(id) => {
			builder.push_bind(*id);
		},
	}
}

/// Escapes `LIKE` wildcards so the needle matches literally. Postgres uses `\` as the default
/// escape character.
pub fn escape_like(needle: &str) -> String {
	let mut out = String::with_capacity(needle.len());

	for ch in needle.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}

#[cfg(test)]
mod tests {
	use sqlx::{Postgres, QueryBuilder};
	use uuid::Uuid;

	use archive_domain::{
		Actor, Category, CategoryFilter, FieldValue, Predicate, ProjectField, Role,
		listing::{self, SortBy, SortOrder},
		visibility,
	};

	use crate::sql::{escape_like, push_order_by, push_predicate};

	fn render(predicate: &Predicate) -> String {
		let mut builder = QueryBuilder::<Postgres>::new("");

		push_predicate(&mut builder, predicate);

		builder.sql().to_string()
	}

	#[test]
	fn unrestricted_visibility_renders_true() {
		let actor = Actor::user(Uuid::new_v4(), Some(Role::Vp), None);

		assert_eq!(render(&visibility::resolve(&actor)), "TRUE");
	}

	#[test]
	fn affiliated_visibility_binds_status_and_college() {
		let actor = Actor::user(Uuid::new_v4(), Some(Role::Dean), Some(Uuid::new_v4()));

		assert_eq!(
			render(&visibility::resolve(&actor)),
			"(p.status = $1 OR (p.status = $2 AND leader.college_id = $3))"
		);
	}

	#[test]
	fn missing_filter_renders_is_null() {
		let predicate = CategoryFilter::Missing(Category::College).to_predicate();

		assert_eq!(render(&predicate), "college.name IS NULL");
	}

	#[test]
	fn year_filter_uses_extracted_year() {
		let predicate = Predicate::eq(ProjectField::StartYear, FieldValue::Integer(2024));

		assert_eq!(render(&predicate), "CAST(EXTRACT(YEAR FROM p.start_date) AS BIGINT) = $1");
	}

	#[test]
	fn search_renders_ilike_over_four_columns() {
		let predicate = listing::search_predicate("50%").expect("Search must not be blank.");

		assert_eq!(
			render(&predicate),
			"(p.title ILIKE $1 OR leader.given_name ILIKE $2 OR leader.last_name ILIKE $3 OR p.primary_location ILIKE $4)"
		);
	}

	#[test]
	fn empty_groups_render_constants() {
		assert_eq!(render(&Predicate::And(Vec::new())), "TRUE");
		assert_eq!(render(&Predicate::Or(Vec::new())), "FALSE");
	}

	#[test]
	fn like_wildcards_are_escaped() {
		assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
		assert_eq!(escape_like("plain"), "plain");
	}

	#[test]
	fn order_by_appends_tie_breaker() {
		let mut builder = QueryBuilder::<Postgres>::new("SELECT 1");

		push_order_by(&mut builder, SortBy::StartDate, SortOrder::Desc);

		assert_eq!(builder.sql(), "SELECT 1 ORDER BY p.start_date DESC, p.project_id ASC");
	}
}
