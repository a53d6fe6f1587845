mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, EmbeddingCache, EmbeddingProviderConfig, LlmProviderConfig, Matching, Providers,
	Service,
};

use std::{env, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	let embedding = &cfg.providers.embedding;

	if embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if embedding.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.embedding.model must be non-empty.".to_string(),
		});
	}

	let generation = &cfg.providers.generation;

	if generation.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.generation.model must be non-empty.".to_string(),
		});
	}
	if !generation.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.generation.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&generation.temperature) {
		return Err(Error::Validation {
			message: "providers.generation.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}

	for (label, api_base, path, api_key, timeout_ms, headers) in [
		(
			"embedding",
			&embedding.api_base,
			&embedding.path,
			&embedding.api_key,
			embedding.timeout_ms,
			&embedding.default_headers,
		),
		(
			"generation",
			&generation.api_base,
			&generation.path,
			&generation.api_key,
			generation.timeout_ms,
			&generation.default_headers,
		),
	] {
		if api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_base must be non-empty."),
			});
		}
		if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
			return Err(Error::Validation {
				message: format!("Provider {label} api_base must start with http:// or https://."),
			});
		}
		if !path.starts_with('/') {
			return Err(Error::Validation {
				message: format!("Provider {label} path must start with '/'."),
			});
		}
		if api_key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_key must be non-empty."),
			});
		}
		if timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("Provider {label} timeout_ms must be greater than zero."),
			});
		}
		if headers.values().any(|value| !value.is_string()) {
			return Err(Error::Validation {
				message: format!("Provider {label} default_headers values must be strings."),
			});
		}
	}

	if !cfg.matching.min_score.is_finite() {
		return Err(Error::Validation {
			message: "matching.min_score must be a finite number.".to_string(),
		});
	}
	if !(-1.0..=1.0).contains(&cfg.matching.min_score) {
		return Err(Error::Validation {
			message: "matching.min_score must be in the range -1.0-1.0.".to_string(),
		});
	}
	if cfg.matching.top_k == 0 {
		return Err(Error::Validation {
			message: "matching.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.matching.cache.enabled && cfg.matching.cache.max_entries == 0 {
		return Err(Error::Validation {
			message: "matching.cache.max_entries must be greater than zero when enabled."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let embedding = &mut cfg.providers.embedding;

	embedding.api_base = embedding.api_base.trim_end_matches('/').to_string();

	if embedding.api_key.trim().is_empty()
		&& let Some(key) = resolve_env_key(embedding.api_key_env.as_deref())
	{
		embedding.api_key = key;
	}

	let generation = &mut cfg.providers.generation;

	generation.api_base = generation.api_base.trim_end_matches('/').to_string();

	if generation.api_key.trim().is_empty()
		&& let Some(key) = resolve_env_key(generation.api_key_env.as_deref())
	{
		generation.api_key = key;
	}
}

fn resolve_env_key(var: Option<&str>) -> Option<String> {
	let var = var.map(str::trim).filter(|var| !var.is_empty())?;

	env::var(var).ok().filter(|key| !key.trim().is_empty())
}
