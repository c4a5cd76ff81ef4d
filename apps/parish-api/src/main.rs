use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = parish_api::Args::parse();

	parish_api::run(args).await
}
