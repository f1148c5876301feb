pub mod actor;
pub mod aggregate;
pub mod date_serde;
pub mod list;
pub mod notifications;
pub mod page;

mod error;

pub use aggregate::AggregateBucket;
pub use error::{Error, Result};
pub use list::{ListItem, ListRequest, ListResponse};

use archive_config::Config;
use archive_domain::listing::PageLimits;
use archive_storage::db::Db;

pub const GENERIC_SERVER_ERROR: &str = "A server error occurred.";

/// Read-only archive operations. Each call takes the requesting actor explicitly.
pub struct ArchiveService {
	pub cfg: Config,
	pub db: Db,
}
impl ArchiveService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}

	pub fn page_limits(&self) -> PageLimits {
		PageLimits {
			default_size: self.cfg.archive.default_page_size,
			max_size: self.cfg.archive.max_page_size,
		}
	}
}
