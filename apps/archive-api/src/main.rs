use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = archive_api::Args::parse();

	archive_api::run(args).await
}
