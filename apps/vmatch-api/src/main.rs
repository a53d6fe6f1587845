use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = vmatch_api::Args::parse();
	vmatch_api::run(args).await
}
