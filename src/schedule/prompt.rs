//! Prompt construction for text-generation backends.
//!
//! Every concrete generation backend submits the same rendered prompt so
//! that goal coverage and the expected response shape do not drift between
//! adapters.

use crate::goal::domain::Goal;
use crate::schedule::domain::UserPreferences;
use minijinja::Environment;
use thiserror::Error;

const DAILY_SCHEDULE_TEMPLATE: &str = r#"You are a personal productivity assistant. Plan today's schedule for the user as a set of concrete tasks.

Goals:
{% for goal in goals %}- [{{ goal.id }}] {{ goal.title }}{% if goal.description %}: {{ goal.description }}{% endif %}
{% endfor %}
{% if user_context %}About the user: {{ user_context }}
{% endif %}{% if preferred_time_slots %}Preferred time slots: {{ preferred_time_slots | join(", ") }}
{% endif %}
Respond with a single JSON object of the form
{"tasks": [{"title": "...", "description": "...", "timeSlot": "...", "specificTime": "...", "durationMinutes": 30, "goalId": 1, "fixed": false}], "reasoning": "..."}.
Every task must reference one of the goal ids listed above, use a timeSlot of "morning", "afternoon", or "night", and keep durationMinutes between 5 and 480."#;

/// Error raised when prompt rendering fails.
#[derive(Debug, Error)]
#[error("failed to render generation prompt: {0}")]
pub struct PromptError(#[from] minijinja::Error);

/// Renders the daily schedule prompt for the given goals and preferences.
///
/// # Errors
///
/// Returns [`PromptError`] when template rendering fails.
pub fn render_daily_prompt(
    goals: &[Goal],
    preferences: &UserPreferences,
) -> Result<String, PromptError> {
    let environment = Environment::new();
    let context = serde_json::json!({
        "goals": goals,
        "user_context": preferences.user_context(),
        "preferred_time_slots": preferences.preferred_time_slots(),
    });
    Ok(environment.render_str(DAILY_SCHEDULE_TEMPLATE, context)?)
}
