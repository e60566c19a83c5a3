use anyhow::Result;
use chunk_csv::{commands::Cli, config::AppConfig, services::CsvExportService};
use clap::Parser as _;

#[tokio::main]
async fn main() -> Result<()> {
	dotenvy::dotenv().ok();
	thin_logger::build(None).init();

	let cli = Cli::parse();
	let config = AppConfig::from_env()?.with_overrides(&cli);

	let csv = CsvExportService::new(config).export().await?;

	println!("{csv}");

	Ok(())
}
