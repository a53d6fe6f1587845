use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerProfile {
	pub describe_yourself: String,
	pub interests_and_passions: String,
	pub past_volunteer_experience: String,
	#[serde(default)]
	pub city: Option<String>,
	#[serde(default)]
	pub country: Option<String>,
}
impl VolunteerProfile {
	/// Skills, interests and past experience as one text block.
	pub fn describe(&self) -> String {
		let mut out = format!(
			"About me: {}\nInterests and passions: {}\nPast volunteer experience: {}",
			self.describe_yourself.trim(),
			self.interests_and_passions.trim(),
			self.past_volunteer_experience.trim(),
		);
		let location = [self.city.as_deref(), self.country.as_deref()]
			.into_iter()
			.flatten()
			.map(str::trim)
			.filter(|part| !part.is_empty())
			.collect::<Vec<_>>();

		if !location.is_empty() {
			out.push_str("\nLocation: ");
			out.push_str(&location.join(", "));
		}

		out
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListing {
	pub id: String,
	pub title: String,
	pub dates: String,
	pub location: String,
	pub description: String,
	/// Existing task list as free text.
	pub tasks: String,
}
impl EventListing {
	/// Title, description and existing task list as one text block.
	pub fn describe(&self) -> String {
		format!(
			"Title: {}\nDescription: {}\nTasks: {}",
			self.title.trim(),
			self.description.trim(),
			self.tasks.trim(),
		)
	}
}

/// Free-form model output. Not parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskSuggestion(String);
impl TaskSuggestion {
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}
