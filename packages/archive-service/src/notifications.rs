use archive_domain::Actor;

use crate::{ArchiveService, Error, GENERIC_SERVER_ERROR, Result};

impl ArchiveService {
	/// Unread notifications addressed to `actor`. Anonymous actors get zero without a query.
	pub async fn unread_notifications_count(&self, actor: &Actor) -> Result<i64> {
		let Some(user_id) = actor.user_id else {
			return Ok(0);
		};

		archive_storage::queries::count_unread_notifications(&self.db.pool, user_id)
			.await
			.map_err(|err| Error::data_access("unread_notifications_count", GENERIC_SERVER_ERROR, err))
	}
}
