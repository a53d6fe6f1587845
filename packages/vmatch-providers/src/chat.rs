use serde_json::Value;

use crate::{Error, Result};

/// Sends `prompt` as a single user message and returns the raw completion text.
pub async fn complete(cfg: &vmatch_config::LlmProviderConfig, prompt: &str) -> Result<String> {
	let client = crate::build_client(cfg.timeout_ms)?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": [{ "role": "user", "content": prompt }],
	});
	let headers = crate::auth_headers(&cfg.api_key, &cfg.default_headers)?;
	let json = crate::post_json(&client, &cfg.provider_id, &url, headers, &body).await?;

	parse_completion_text(&cfg.provider_id, json)
}

fn parse_completion_text(provider: &str, json: Value) -> Result<String> {
	let choice = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.ok_or_else(|| Error::invalid_response(provider, "Completion response has no choices."))?;

	if choice.get("finish_reason").and_then(|v| v.as_str()) == Some("content_filter") {
		return Err(Error::Refused {
			provider: provider.to_string(),
			status: None,
			message: "Completion was stopped by the content filter.".to_string(),
		});
	}

	let message = choice.get("message");

	if let Some(refusal) = message.and_then(|msg| msg.get("refusal")).and_then(|v| v.as_str()) {
		return Err(Error::Refused {
			provider: provider.to_string(),
			status: None,
			message: refusal.to_string(),
		});
	}

	message
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.map(str::to_string)
		.ok_or_else(|| Error::invalid_response(provider, "Completion response is missing content."))
}
