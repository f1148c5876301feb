use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub archive: Archive,
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Listing behavior of the archive endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Archive {
	/// Page size used when the caller does not ask for one.
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	/// Hard cap applied to caller-requested page sizes.
	#[serde(default = "max_page_size")]
	pub max_page_size: u32,
}
impl Default for Archive {
	fn default() -> Self {
		Self { default_page_size: default_page_size(), max_page_size: max_page_size() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}

pub(crate) fn default_log_level() -> String {
	"info".to_string()
}

fn default_page_size() -> u32 {
	10
}

fn max_page_size() -> u32 {
	100
}
