use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use archive_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let table = root.as_table_mut().expect("Sample config must be a table.");
	let section = table
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Sample config must include the requested section.");

	section.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("archive_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.")
}

#[test]
fn sample_config_loads() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML.to_string());
	let result = archive_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected sample config to load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert_eq!(cfg.archive.default_page_size, 10);
	assert_eq!(cfg.archive.max_page_size, 100);
	assert!(cfg.security.bind_localhost_only);
}

#[test]
fn archive_section_defaults_when_absent() {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");

	root.as_table_mut().expect("Sample config must be a table.").remove("archive");

	let cfg: Config =
		toml::from_str(&toml::to_string(&root).expect("Failed to render config."))
			.expect("Failed to parse config without [archive].");

	assert_eq!(cfg.archive.default_page_size, 10);
	assert_eq!(cfg.archive.max_page_size, 100);
}

#[test]
fn blank_log_level_falls_back_to_info() {
	let payload = sample_toml_with("service", "log_level", Value::String("  ".to_string()));
	let path = write_temp_config(payload);
	let result = archive_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert_eq!(result.expect("Expected config to load.").service.log_level, "info");
}

#[test]
fn pool_size_must_be_positive() {
	let mut cfg = base_config();

	cfg.storage.postgres.pool_max_conns = 0;

	let err = archive_config::validate(&cfg).expect_err("Expected pool size validation error.");

	assert!(
		err.to_string().contains("storage.postgres.pool_max_conns must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn default_page_size_must_not_exceed_max() {
	let payload = sample_toml_with("archive", "default_page_size", Value::Integer(500));
	let path = write_temp_config(payload);
	let result = archive_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected page size validation error.");

	assert!(
		err.to_string().contains("archive.default_page_size must not exceed archive.max_page_size."),
		"Unexpected error: {err}"
	);
}

#[test]
fn default_page_size_must_be_positive() {
	let mut cfg = base_config();

	cfg.archive.default_page_size = 0;

	let err = archive_config::validate(&cfg).expect_err("Expected page size validation error.");

	assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn missing_file_reports_read_error() {
	let mut path = env::temp_dir();

	path.push("archive_config_test_missing_file.toml");

	let err = archive_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
	let path = write_temp_config("[service\nhttp_bind = ".to_string());
	let result = archive_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert!(matches!(result, Err(Error::ParseConfig { .. })));
}
