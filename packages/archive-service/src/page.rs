use archive_domain::{Actor, page::ArchivePage};

use crate::{ArchiveService, Result};

impl ArchiveService {
	pub async fn archive_page(&self, actor: &Actor) -> Result<ArchivePage> {
		let unread = self.unread_notifications_count(actor).await?;

		Ok(ArchivePage::for_actor(actor, unread))
	}
}
