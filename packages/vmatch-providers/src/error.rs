use std::fmt;

use serde::Serialize;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a provider could not serve a request that may succeed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
	Auth,
	RateLimited,
	Timeout,
	Transport,
	Server,
	InvalidResponse,
}
impl UnavailableReason {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Auth => "auth",
			Self::RateLimited => "rate_limited",
			Self::Timeout => "timeout",
			Self::Transport => "transport",
			Self::Server => "server",
			Self::InvalidResponse => "invalid_response",
		}
	}
}
impl fmt::Display for UnavailableReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Provider {provider} is unavailable ({reason}): {message}")]
	Unavailable {
		provider: String,
		reason: UnavailableReason,
		status: Option<u16>,
		message: String,
	},
	#[error("Provider {provider} refused the request: {message}")]
	Refused { provider: String, status: Option<u16>, message: String },
	#[error(transparent)]
	InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("{message}")]
	InvalidConfig { message: String },
}
impl Error {
	pub(crate) fn invalid_response(provider: &str, message: impl Into<String>) -> Self {
		Self::Unavailable {
			provider: provider.to_string(),
			reason: UnavailableReason::InvalidResponse,
			status: None,
			message: message.into(),
		}
	}
}
