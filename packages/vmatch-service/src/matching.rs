use serde::Serialize;

use crate::{EventListing, MatchScore, MatchService, Result, TaskSuggestion, VolunteerProfile};

#[derive(Debug, Clone, Serialize)]
pub struct EventMatch {
	pub event_id: String,
	pub score: MatchScore,
}

impl MatchService {
	/// Scores every event against the profile in one embedding batch.
	///
	/// Results are sorted by descending score with ties in input order, filtered by
	/// `matching.min_score` and truncated to `matching.top_k`.
	pub async fn rank_events(
		&self,
		profile: &VolunteerProfile,
		events: &[EventListing],
	) -> Result<Vec<EventMatch>> {
		if events.is_empty() {
			return Ok(Vec::new());
		}

		let mut texts = Vec::with_capacity(events.len() + 1);

		texts.push(profile.describe());
		texts.extend(events.iter().map(EventListing::describe));

		let vectors = self.embed_many(&texts).await?;
		let (user, event_vectors) = vectors.split_first().ok_or_else(|| {
			crate::Error::UpstreamUnavailable {
				reason: crate::UnavailableReason::InvalidResponse,
				message: "Embedding provider returned no vectors.".to_string(),
			}
		})?;
		let mut matches = Vec::with_capacity(events.len());

		for (event, vector) in events.iter().zip(event_vectors) {
			let score = self.similarity(user, vector)?;

			matches.push(EventMatch { event_id: event.id.clone(), score });
		}

		Ok(select_matches(matches, self.cfg.matching.min_score, self.cfg.matching.top_k as usize))
	}

	pub async fn personalize(
		&self,
		profile: &VolunteerProfile,
		event: &EventListing,
	) -> Result<TaskSuggestion> {
		self.generate_tasks(&event.describe(), &profile.describe()).await
	}
}

fn select_matches(mut matches: Vec<EventMatch>, min_score: f32, top_k: usize) -> Vec<EventMatch> {
	matches.retain(|item| item.score.value() >= min_score);
	matches.sort_by(|lhs, rhs| rhs.score.value().total_cmp(&lhs.score.value()));
	matches.truncate(top_k);

	tracing::info!(selected = matches.len(), "Ranked events.");

	matches
}
