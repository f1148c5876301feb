use uuid::Uuid;

use archive_domain::{Actor, Role};

use crate::{ArchiveService, Error, GENERIC_SERVER_ERROR, Result};

impl ArchiveService {
	/// Resolves the session's user id into an actor.
	///
	/// No id, an unknown id, or an inactive user all yield the anonymous actor. A role string the
	/// archive does not know keeps the user authenticated but without a role.
	pub async fn load_actor(&self, user_id: Option<Uuid>) -> Result<Actor> {
		let Some(user_id) = user_id else {
			return Ok(Actor::anonymous());
		};
		let user = archive_storage::queries::find_user(&self.db.pool, user_id)
			.await
			.map_err(|err| Error::data_access("load_actor", GENERIC_SERVER_ERROR, err))?;
		let Some(user) = user.filter(|user| user.is_active) else {
			tracing::debug!(%user_id, "Session user is unknown or inactive; treating as anonymous.");

			return Ok(Actor::anonymous());
		};
		let role = match user.role.parse::<Role>() {
			Ok(role) => Some(role),
			Err(err) => {
				tracing::debug!(%user_id, error = %err, "User has a role outside the archive policy.");

				None
			},
		};

		Ok(Actor::user(user.user_id, role, user.college_id))
	}
}
