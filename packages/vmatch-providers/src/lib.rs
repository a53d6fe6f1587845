pub mod chat;
pub mod embedding;

mod error;

pub use error::{Error, Result, UnavailableReason};

use std::time::Duration;

use reqwest::{
	Client, StatusCode,
	header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::{Map, Value};

/// Error codes providers use for content policy rejections.
const POLICY_CODES: [&str; 3] = ["content_policy_violation", "content_filter", "moderation_blocked"];

/// Bearer credential plus the configured extras. The credential value is marked sensitive.
pub fn auth_headers(api_key: &str, default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))?;

	bearer.set_sensitive(true);

	let mut headers = HeaderMap::with_capacity(default_headers.len() + 1);

	headers.insert(AUTHORIZATION, bearer);

	for (name, value) in default_headers {
		let raw = value.as_str().ok_or_else(|| Error::InvalidConfig {
			message: format!("Default header {name} must have a string value."),
		})?;

		headers.insert(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(raw)?);
	}

	Ok(headers)
}

pub(crate) fn build_client(timeout_ms: u64) -> Result<Client> {
	Client::builder()
		.timeout(Duration::from_millis(timeout_ms))
		.build()
		.map_err(|err| Error::InvalidConfig { message: format!("Failed to build HTTP client: {err}") })
}

/// One POST, no retry. Non-success statuses are classified by [`classify_status`].
pub(crate) async fn post_json(
	client: &Client,
	provider: &str,
	url: &str,
	headers: HeaderMap,
	body: &Value,
) -> Result<Value> {
	let res = client
		.post(url)
		.headers(headers)
		.json(body)
		.send()
		.await
		.map_err(|err| classify_transport(provider, &err))?;
	let status = res.status();

	if !status.is_success() {
		let raw = res.text().await.unwrap_or_default();
		let err = classify_status(provider, status, &raw);

		tracing::warn!(provider, status = status.as_u16(), error = %err, "Provider request failed.");

		return Err(err);
	}

	res.json::<Value>().await.map_err(|err| {
		if err.is_timeout() {
			classify_transport(provider, &err)
		} else {
			Error::invalid_response(provider, format!("Response body is not valid JSON: {err}"))
		}
	})
}

/// Builder failures (malformed URL and the like) can never succeed on retry.
pub(crate) fn classify_transport(provider: &str, err: &reqwest::Error) -> Error {
	if err.is_builder() {
		return Error::InvalidConfig {
			message: format!("Provider {provider} request could not be built: {err}"),
		};
	}

	let reason =
		if err.is_timeout() { UnavailableReason::Timeout } else { UnavailableReason::Transport };

	Error::Unavailable {
		provider: provider.to_string(),
		reason,
		status: err.status().map(|status| status.as_u16()),
		message: err.to_string(),
	}
}

pub(crate) fn classify_status(provider: &str, status: StatusCode, raw_body: &str) -> Error {
	let (code, message) = parse_error_body(raw_body);
	let message = message.unwrap_or_else(|| {
		let trimmed = raw_body.trim();

		if trimmed.is_empty() {
			status.to_string()
		} else {
			trimmed.chars().take(512).collect()
		}
	});
	let reason = match status {
		StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(UnavailableReason::Auth),
		StatusCode::TOO_MANY_REQUESTS => Some(UnavailableReason::RateLimited),
		StatusCode::REQUEST_TIMEOUT => Some(UnavailableReason::Timeout),
		status if status.is_server_error() => Some(UnavailableReason::Server),
		_ => None,
	};
	let status = Some(status.as_u16());

	match reason {
		Some(reason) => Error::Unavailable { provider: provider.to_string(), reason, status, message },
		None => {
			let message = match code {
				Some(code) if POLICY_CODES.contains(&code.as_str()) => {
					format!("Content policy ({code}): {message}")
				},
				_ => message,
			};

			Error::Refused { provider: provider.to_string(), status, message }
		},
	}
}

/// OpenAI-style `{"error": {"code", "type", "message"}}`.
fn parse_error_body(raw: &str) -> (Option<String>, Option<String>) {
	let Ok(json) = serde_json::from_str::<Value>(raw) else {
		return (None, None);
	};
	let Some(error) = json.get("error") else {
		return (None, None);
	};

	if let Some(message) = error.as_str() {
		return (None, Some(message.to_string()));
	}

	let code = error
		.get("code")
		.and_then(|v| v.as_str())
		.or_else(|| error.get("type").and_then(|v| v.as_str()))
		.map(str::to_string);
	let message = error.get("message").and_then(|v| v.as_str()).map(str::to_string);

	(code, message)
}
