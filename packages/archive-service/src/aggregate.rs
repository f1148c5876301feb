use serde::{Deserialize, Serialize};

use archive_domain::{Actor, Category, visibility};

use crate::{ArchiveService, Error, Result};

pub const AGGREGATION_FAILED: &str = "A server error occurred during aggregation.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateBucket {
	pub label: String,
	pub count: i64,
}

impl ArchiveService {
	/// Counts the projects visible to `actor`, grouped by `category`, largest key first.
	pub async fn aggregate(&self, actor: &Actor, category: &str) -> Result<Vec<AggregateBucket>> {
		let category = category.parse::<Category>()?;
		let predicate = visibility::resolve(actor);

		tracing::debug!(%category, %predicate, "Aggregating archive projects.");

		let rows = archive_storage::queries::aggregate_projects(&self.db.pool, &predicate, category)
			.await
			.map_err(|err| Error::data_access("aggregate", AGGREGATION_FAILED, err))?;

		Ok(rows
			.into_iter()
			.map(|row| AggregateBucket {
				label: category.bucket_label(row.label.as_deref()),
				count: row.count,
			})
			.collect())
	}
}
