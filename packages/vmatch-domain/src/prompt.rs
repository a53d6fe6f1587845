const EVENT_CONTEXT: &str = "Here is a description and list of tasks of the volunteering event: \n";
const USER_CONTEXT: &str = "Here is the user's list of skills, description of his interests and past volunteer experiences : ";

pub const TASK_INSTRUCTION: &str = "Can you generate 3 to 5 personalized tasks for the user that are tailored to the event? Try not to repeat tasks that are already in the event description. Do not use any lists, keep the response in a single paragraph.";

/// Context block (event then user) followed by [`TASK_INSTRUCTION`].
///
/// Inputs are inserted verbatim; empty descriptions still yield a complete prompt.
pub fn build_task_prompt(event_description: &str, user_description: &str) -> String {
	let mut prompt = String::with_capacity(
		EVENT_CONTEXT.len()
			+ USER_CONTEXT.len()
			+ TASK_INSTRUCTION.len()
			+ event_description.len()
			+ user_description.len()
			+ 8,
	);

	prompt.push_str(EVENT_CONTEXT);
	prompt.push_str(event_description);
	prompt.push_str("\n\n");
	prompt.push_str(USER_CONTEXT);
	prompt.push_str(user_description);
	prompt.push_str("\n\n");
	prompt.push_str("\n\n");
	prompt.push_str(TASK_INSTRUCTION);

	prompt
}
