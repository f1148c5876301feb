mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Archive, Config, Postgres, Security, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.archive.default_page_size == 0 {
		return Err(Error::Validation {
			message: "archive.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.archive.default_page_size > cfg.archive.max_page_size {
		return Err(Error::Validation {
			message: "archive.default_page_size must not exceed archive.max_page_size.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let log_level = cfg.service.log_level.trim();

	cfg.service.log_level =
		if log_level.is_empty() { types::default_log_level() } else { log_level.to_string() };
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
}
