use serde::{Deserialize, Serialize};

/// An embedding tagged with the model that produced it.
///
/// Scores are only meaningful between vectors of the same model, so the tag travels with the
/// values and is checked by [`crate::similarity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextVector {
	model: String,
	values: Vec<f32>,
}
impl TextVector {
	pub fn new(model: impl Into<String>, values: Vec<f32>) -> Self {
		Self { model: model.into(), values }
	}

	pub fn model(&self) -> &str {
		&self.model
	}

	pub fn values(&self) -> &[f32] {
		&self.values
	}

	pub fn dimensions(&self) -> usize {
		self.values.len()
	}

	pub fn into_values(self) -> Vec<f32> {
		self.values
	}
}
impl AsRef<[f32]> for TextVector {
	fn as_ref(&self) -> &[f32] {
		&self.values
	}
}
