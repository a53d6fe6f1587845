use vmatch_providers::UnavailableReason;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Upstream unavailable ({reason}): {message}")]
	UpstreamUnavailable { reason: UnavailableReason, message: String },
	#[error("Upstream refused: {message}")]
	UpstreamRefused { message: String },
	#[error("Vector dimensions differ: {lhs} vs {rhs}.")]
	DimensionMismatch { lhs: usize, rhs: usize },
	#[error("Vectors come from different embedding models: {lhs} vs {rhs}.")]
	ModelMismatch { lhs: String, rhs: String },
	#[error("Vector has zero norm or non-finite components.")]
	DegenerateVector,
	#[error("Invalid provider configuration: {message}")]
	InvalidConfig { message: String },
}
impl Error {
	/// Only transient upstream failures are worth retrying with the same input.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::UpstreamUnavailable { .. })
	}

	pub fn is_upstream(&self) -> bool {
		matches!(self, Self::UpstreamUnavailable { .. } | Self::UpstreamRefused { .. })
	}
}

impl From<vmatch_providers::Error> for Error {
	fn from(err: vmatch_providers::Error) -> Self {
		use vmatch_providers::Error as ProviderError;

		match err {
			ProviderError::Unavailable { provider, reason, message, .. } => {
				Self::UpstreamUnavailable { reason, message: format!("{provider}: {message}") }
			},
			ProviderError::Refused { provider, message, .. } => {
				Self::UpstreamRefused { message: format!("{provider}: {message}") }
			},
			ProviderError::InvalidHeaderName(inner) => Self::InvalidConfig { message: inner.to_string() },
			ProviderError::InvalidHeaderValue(inner) => {
				Self::InvalidConfig { message: inner.to_string() }
			},
			ProviderError::InvalidConfig { message } => Self::InvalidConfig { message },
		}
	}
}

impl From<vmatch_domain::Error> for Error {
	fn from(err: vmatch_domain::Error) -> Self {
		match err {
			vmatch_domain::Error::DimensionMismatch { lhs, rhs } => Self::DimensionMismatch { lhs, rhs },
			vmatch_domain::Error::ModelMismatch { lhs, rhs } => Self::ModelMismatch { lhs, rhs },
			vmatch_domain::Error::DegenerateVector => Self::DegenerateVector,
		}
	}
}
