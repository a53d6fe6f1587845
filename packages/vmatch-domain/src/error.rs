pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Vector dimensions differ: {lhs} vs {rhs}.")]
	DimensionMismatch { lhs: usize, rhs: usize },
	#[error("Vectors come from different embedding models: {lhs} vs {rhs}.")]
	ModelMismatch { lhs: String, rhs: String },
	#[error("Vector has zero norm or non-finite components.")]
	DegenerateVector,
}
