use serde::{Deserialize, Serialize};

use crate::{Error, Result, TextVector};

/// Cosine similarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchScore(f32);
impl MatchScore {
	pub fn value(self) -> f32 {
		self.0
	}
}
impl From<MatchScore> for f32 {
	fn from(score: MatchScore) -> Self {
		score.0
	}
}

pub fn similarity(lhs: &TextVector, rhs: &TextVector) -> Result<MatchScore> {
	if lhs.model() != rhs.model() {
		return Err(Error::ModelMismatch {
			lhs: lhs.model().to_string(),
			rhs: rhs.model().to_string(),
		});
	}

	cosine_similarity(lhs.values(), rhs.values()).map(MatchScore)
}

/// Dot product over the product of Euclidean norms.
///
/// Accumulates in `f64`. A zero-norm side, an empty pair, or any non-finite component is
/// reported as [`Error::DegenerateVector`] instead of leaking NaN.
pub fn cosine_similarity(lhs: &[f32], rhs: &[f32]) -> Result<f32> {
	if lhs.len() != rhs.len() {
		return Err(Error::DimensionMismatch { lhs: lhs.len(), rhs: rhs.len() });
	}

	let mut dot = 0.0_f64;
	let mut lhs_norm = 0.0_f64;
	let mut rhs_norm = 0.0_f64;

	for (l, r) in lhs.iter().zip(rhs.iter()) {
		let (l, r) = (f64::from(*l), f64::from(*r));

		dot += l * r;
		lhs_norm += l * l;
		rhs_norm += r * r;
	}

	if !dot.is_finite() || !lhs_norm.is_finite() || !rhs_norm.is_finite() {
		return Err(Error::DegenerateVector);
	}
	if lhs_norm == 0.0 || rhs_norm == 0.0 {
		return Err(Error::DegenerateVector);
	}

	Ok((dot / (lhs_norm.sqrt() * rhs_norm.sqrt())).clamp(-1.0, 1.0) as f32)
}
