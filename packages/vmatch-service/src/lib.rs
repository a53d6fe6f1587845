pub mod cache;
pub mod embed;
pub mod matching;
pub mod tasks;

mod error;

pub use error::{Error, Result};
pub use matching::EventMatch;
pub use vmatch_domain::{
	EventListing, MatchScore, TaskSuggestion, TextVector, VolunteerProfile, cosine_similarity,
};
pub use vmatch_providers::UnavailableReason;

use std::{future::Future, pin::Pin, sync::Arc};

use vmatch_config::{Config, EmbeddingProviderConfig, LlmProviderConfig};
use vmatch_providers::{chat, embedding};

use crate::cache::EmbeddingCache;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, vmatch_providers::Result<Vec<Vec<f32>>>>;
}

pub trait GenerationProvider
where
	Self: Send + Sync,
{
	fn generate<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, vmatch_providers::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub generation: Arc<dyn GenerationProvider>,
}

pub struct MatchService {
	pub cfg: Config,
	pub providers: Providers,
	cache: Option<EmbeddingCache>,
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, vmatch_providers::Result<Vec<Vec<f32>>>> {
		Box::pin(embedding::embed(cfg, texts))
	}
}

impl GenerationProvider for DefaultProviders {
	fn generate<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, vmatch_providers::Result<String>> {
		Box::pin(chat::complete(cfg, prompt))
	}
}

impl Providers {
	pub fn new(
		embedding: Arc<dyn EmbeddingProvider>,
		generation: Arc<dyn GenerationProvider>,
	) -> Self {
		Self { embedding, generation }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);
		Self { embedding: provider.clone(), generation: provider }
	}
}

impl MatchService {
	pub fn new(cfg: Config) -> Self {
		Self::with_providers(cfg, Providers::default())
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		let cache = cfg
			.matching
			.cache
			.enabled
			.then(|| EmbeddingCache::new(cfg.matching.cache.max_entries as usize));

		Self { cfg, providers, cache }
	}

	/// Pure cosine similarity; never touches a provider.
	pub fn similarity(&self, lhs: &TextVector, rhs: &TextVector) -> Result<MatchScore> {
		Ok(vmatch_domain::similarity(lhs, rhs)?)
	}

	pub fn cache(&self) -> Option<&EmbeddingCache> {
		self.cache.as_ref()
	}
}

pub(crate) fn embedding_version(cfg: &Config) -> String {
	format!(
		"{}:{}:{}",
		cfg.providers.embedding.provider_id,
		cfg.providers.embedding.model,
		cfg.providers.embedding.dimensions
	)
}
