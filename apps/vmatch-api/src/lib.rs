pub mod routes;
pub mod state;

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::eyre;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = vmatch_cli::VERSION,
	rename_all = "kebab",
	styles = vmatch_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = vmatch_config::load(&args.config)?;

	init_tracing(&config.service.log_level)?;

	let http_addr: SocketAddr = config.service.http_bind.parse()?;

	tracing::info!(
		embedding_model = %config.providers.embedding.model,
		generation_model = %config.providers.generation.model,
		cache = config.matching.cache.enabled,
		"Matching service configured."
	);

	let app = routes::router(AppState::new(config));
	let listener = TcpListener::bind(http_addr).await?;

	tracing::info!(%http_addr, "HTTP server listening.");

	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	tracing::info!("HTTP server stopped.");

	Ok(())
}

// `RUST_LOG` wins over `service.log_level`.
fn init_tracing(log_level: &str) -> color_eyre::Result<()> {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(log_level))
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.try_init()
		.map_err(|err| eyre::eyre!("Failed to install tracing subscriber: {err}"))
}

async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::warn!(error = %err, "Failed to listen for shutdown signal.");
	}
}
