use std::collections::{HashMap, HashSet};

use crate::{Error, MatchService, Result, TextVector, UnavailableReason, cache};

impl MatchService {
	pub async fn embed(&self, text: &str) -> Result<TextVector> {
		let mut vectors = self.embed_many(&[text.to_string()]).await?;

		vectors.pop().ok_or_else(|| Error::UpstreamUnavailable {
			reason: UnavailableReason::InvalidResponse,
			message: "Embedding provider returned no vector.".to_string(),
		})
	}

	/// Embeds `texts` in order with at most one provider call.
	///
	/// Cached texts and duplicates within the batch are not sent again.
	pub async fn embed_many(&self, texts: &[String]) -> Result<Vec<TextVector>> {
		let cfg = &self.cfg.providers.embedding;
		let version = crate::embedding_version(&self.cfg);
		let keys: Vec<String> =
			texts.iter().map(|text| cache::embedding_cache_key(&version, text)).collect();
		let mut resolved: HashMap<&str, Vec<f32>> = HashMap::new();
		let mut pending: Vec<String> = Vec::new();
		let mut pending_keys: Vec<&str> = Vec::new();
		let mut seen: HashSet<&str> = HashSet::new();

		for (text, key) in texts.iter().zip(keys.iter()) {
			if !seen.insert(key.as_str()) {
				continue;
			}

			match self.cache.as_ref().and_then(|cache| cache.get(key)) {
				Some(vec) => {
					tracing::debug!(cache_key = cache::cache_key_prefix(key), "Embedding cache hit.");

					resolved.insert(key.as_str(), vec);
				},
				None => {
					pending.push(text.clone());
					pending_keys.push(key.as_str());
				},
			}
		}

		if !pending.is_empty() {
			tracing::info!(
				provider_id = %cfg.provider_id,
				model = %cfg.model,
				inputs = pending.len(),
				"Requesting embeddings."
			);

			let vectors = self.providers.embedding.embed(cfg, &pending).await.map_err(|err| {
				tracing::warn!(error = %err, model = %cfg.model, "Embedding request failed.");

				Error::from(err)
			})?;

			// Every provider implementation is held to the same batch shape.
			vmatch_providers::embedding::check_batch(cfg, pending.len(), &vectors)?;

			for (key, vec) in pending_keys.into_iter().zip(vectors) {
				if let Some(cache) = self.cache.as_ref() {
					cache.insert(key.to_string(), vec.clone());
				}

				resolved.insert(key, vec);
			}
		}

		let mut out = Vec::with_capacity(texts.len());

		for key in &keys {
			let vec = resolved.get(key.as_str()).cloned().ok_or_else(|| {
				Error::UpstreamUnavailable {
					reason: UnavailableReason::InvalidResponse,
					message: "Embedding missing for input.".to_string(),
				}
			})?;

			out.push(TextVector::new(cfg.model.clone(), vec));
		}

		Ok(out)
	}
}
