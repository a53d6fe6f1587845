use vmatch_domain::prompt;

use crate::{Error, MatchService, Result, TaskSuggestion};

impl MatchService {
	/// Asks the generative model for personalized tasks.
	///
	/// Empty descriptions are forwarded as-is. The reply is returned verbatim; the
	/// "3 to 5 tasks in one paragraph" instruction is advisory only.
	pub async fn generate_tasks(
		&self,
		event_description: &str,
		user_description: &str,
	) -> Result<TaskSuggestion> {
		let cfg = &self.cfg.providers.generation;
		let prompt = prompt::build_task_prompt(event_description, user_description);

		tracing::info!(
			provider_id = %cfg.provider_id,
			model = %cfg.model,
			temperature = cfg.temperature,
			prompt_chars = prompt.len(),
			"Requesting task suggestions."
		);

		let text = self.providers.generation.generate(cfg, &prompt).await.map_err(|err| {
			tracing::warn!(error = %err, model = %cfg.model, "Task generation failed.");

			Error::from(err)
		})?;

		Ok(TaskSuggestion::new(text))
	}
}
