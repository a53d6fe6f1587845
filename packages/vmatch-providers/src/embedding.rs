use serde_json::Value;

use crate::{Error, Result};

pub async fn embed(
	cfg: &vmatch_config::EmbeddingProviderConfig,
	texts: &[String],
) -> Result<Vec<Vec<f32>>> {
	let client = crate::build_client(cfg.timeout_ms)?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let mut body = serde_json::json!({
		"model": cfg.model,
		"input": texts,
	});

	if cfg.request_dimensions {
		body["dimensions"] = Value::from(cfg.dimensions);
	}

	let headers = crate::auth_headers(&cfg.api_key, &cfg.default_headers)?;
	let json = crate::post_json(&client, &cfg.provider_id, &url, headers, &body).await?;
	let vectors = read_vectors(&cfg.provider_id, &json, texts.len())?;

	check_batch(cfg, texts.len(), &vectors)?;

	Ok(vectors)
}

/// Rejects a batch that does not hold exactly `inputs` vectors of the configured width.
pub fn check_batch(
	cfg: &vmatch_config::EmbeddingProviderConfig,
	inputs: usize,
	vectors: &[Vec<f32>],
) -> Result<()> {
	if vectors.len() != inputs {
		return Err(Error::invalid_response(
			&cfg.provider_id,
			format!("Embedding response has {} items for {} inputs.", vectors.len(), inputs),
		));
	}
	if let Some(bad) = vectors.iter().find(|vec| vec.len() != cfg.dimensions as usize) {
		return Err(Error::invalid_response(
			&cfg.provider_id,
			format!(
				"Embedding has {} dimensions but {} are configured for {}.",
				bad.len(),
				cfg.dimensions,
				cfg.model
			),
		));
	}

	Ok(())
}

// Items without an `index` take their array position.
fn read_vectors(provider: &str, json: &Value, inputs: usize) -> Result<Vec<Vec<f32>>> {
	let Some(items) = json.get("data").and_then(Value::as_array) else {
		return Err(Error::invalid_response(provider, "Embedding response is missing data array."));
	};

	if items.len() != inputs {
		return Err(Error::invalid_response(
			provider,
			format!("Embedding response has {} items for {} inputs.", items.len(), inputs),
		));
	}

	let mut slots: Vec<Option<Vec<f32>>> = vec![None; inputs];

	for (position, item) in items.iter().enumerate() {
		let slot = match item.get("index") {
			None => position,
			Some(raw) => match raw.as_u64().and_then(|n| usize::try_from(n).ok()) {
				Some(slot) if slot < inputs => slot,
				_ => {
					return Err(Error::invalid_response(
						provider,
						format!("Embedding index {raw} is outside 0..{inputs}."),
					));
				},
			},
		};

		if slots[slot].is_some() {
			return Err(Error::invalid_response(
				provider,
				format!("Embedding index {slot} appears more than once."),
			));
		}

		slots[slot] = Some(read_values(provider, item)?);
	}

	// Counts match and no slot repeats, so every slot is filled.
	slots
		.into_iter()
		.map(|slot| {
			slot.ok_or_else(|| Error::invalid_response(provider, "Embedding response skipped an index."))
		})
		.collect()
}

fn read_values(provider: &str, item: &Value) -> Result<Vec<f32>> {
	let Some(values) = item.get("embedding").and_then(Value::as_array) else {
		return Err(Error::invalid_response(provider, "Embedding item missing embedding array."));
	};

	values
		.iter()
		.map(|value| {
			value
				.as_f64()
				.map(|number| number as f32)
				.ok_or_else(|| Error::invalid_response(provider, "Embedding value must be numeric."))
		})
		.collect()
}
