pub mod context;
pub mod render;
pub mod routes;
pub mod state;

use std::{net::SocketAddr, path::PathBuf};

use clap::{
	Parser,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use color_eyre::eyre;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(
	version = VERSION,
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = archive_config::load(&args.config)?;

	init_tracing(&config)?;

	let http_addr = http_addr(&config)?;
	let state = AppState::new(config).await?;
	let app = routes::router(state);
	let listener = TcpListener::bind(http_addr).await?;

	tracing::info!(%http_addr, "HTTP server listening.");

	axum::serve(listener, app).await?;

	Ok(())
}

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

/// The listen address, refused unless loopback while `security.bind_localhost_only` is set.
pub fn http_addr(config: &archive_config::Config) -> color_eyre::Result<SocketAddr> {
	let addr = config
		.service
		.http_bind
		.parse::<SocketAddr>()
		.map_err(|err| eyre::eyre!("Invalid service.http_bind {:?}: {err}.", config.service.http_bind))?;

	if config.security.bind_localhost_only && !addr.ip().is_loopback() {
		return Err(eyre::eyre!(
			"service.http_bind must be a loopback address when security.bind_localhost_only is true."
		));
	}

	Ok(addr)
}

fn init_tracing(config: &archive_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	Ok(())
}
