use sqlx::{PgExecutor, Postgres, QueryBuilder};
use uuid::Uuid;

use archive_domain::{
	Category, Predicate,
	listing::{SortBy, SortOrder},
};

use crate::{
	Result,
	models::{AggregateRow, ProjectRow, UserRow},
	sql,
};

/// Counts projects matching `predicate` per category key, largest key first.
///
/// Missing keys form their own group with a `NULL` label, which Postgres orders first on a
/// descending sort.
pub async fn aggregate_projects<'e, E>(
	executor: E,
	predicate: &Predicate,
	category: Category,
) -> Result<Vec<AggregateRow>>
where
	E: PgExecutor<'e>,
{
	let mut builder = QueryBuilder::<Postgres>::new(
		"SELECT CAST(grouped.group_key AS TEXT) AS label, grouped.count FROM (SELECT ",
	);

	builder.push(sql::column(category.field()));
	builder.push(" AS group_key, COUNT(p.project_id) AS count ");
	builder.push(sql::PROJECT_SOURCE);
	builder.push(" WHERE ");
	sql::push_predicate(&mut builder, predicate);
	builder.push(" GROUP BY 1) grouped ORDER BY grouped.group_key DESC");

	let rows = builder.build_query_as::<AggregateRow>().fetch_all(executor).await?;

	Ok(rows)
}

pub async fn count_projects<'e, E>(executor: E, predicate: &Predicate) -> Result<u64>
where
	E: PgExecutor<'e>,
{
	let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) ");

	builder.push(sql::PROJECT_SOURCE);
	builder.push(" WHERE ");
	sql::push_predicate(&mut builder, predicate);

	let count = builder.build_query_scalar::<i64>().fetch_one(executor).await?;

	Ok(u64::try_from(count).unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectPage {
	pub sort_by: SortBy,
	pub order: SortOrder,
	pub limit: u64,
	pub offset: u64,
}

pub async fn list_projects<'e, E>(
	executor: E,
	predicate: &Predicate,
	page: ProjectPage,
) -> Result<Vec<ProjectRow>>
where
	E: PgExecutor<'e>,
{
	let mut builder = QueryBuilder::<Postgres>::new(sql::PROJECT_COLUMNS);

	builder.push(" ");
	builder.push(sql::PROJECT_SOURCE);
	builder.push(" WHERE ");
	sql::push_predicate(&mut builder, predicate);
	sql::push_order_by(&mut builder, page.sort_by, page.order);
	builder.push(" LIMIT ");
	builder.push_bind(to_sql_bigint(page.limit));
	builder.push(" OFFSET ");
	builder.push_bind(to_sql_bigint(page.offset));

	let rows = builder.build_query_as::<ProjectRow>().fetch_all(executor).await?;

	Ok(rows)
}

pub async fn count_unread_notifications<'e, E>(executor: E, recipient_id: Uuid) -> Result<i64>
where
	E: PgExecutor<'e>,
{
	let count = sqlx::query_scalar::<_, i64>(
		"\
SELECT COUNT(*)
FROM notifications
WHERE recipient_id = $1
	AND is_read = FALSE",
	)
	.bind(recipient_id)
	.fetch_one(executor)
	.await?;

	Ok(count)
}

pub async fn find_user<'e, E>(executor: E, user_id: Uuid) -> Result<Option<UserRow>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, UserRow>(
		"\
SELECT user_id, role, college_id, is_active
FROM users
WHERE user_id = $1",
	)
	.bind(user_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

fn to_sql_bigint(value: u64) -> i64 {
	i64::try_from(value).unwrap_or(i64::MAX)
}
