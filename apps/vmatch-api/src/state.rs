use std::sync::Arc;

use vmatch_service::{MatchService, Providers};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MatchService>,
}
impl AppState {
	pub fn new(config: vmatch_config::Config) -> Self {
		Self::with_providers(config, Providers::default())
	}

	pub fn with_providers(config: vmatch_config::Config, providers: Providers) -> Self {
		Self { service: Arc::new(MatchService::with_providers(config, providers)) }
	}
}
