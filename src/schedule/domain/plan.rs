//! Untrusted generator output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One candidate-shaped record as emitted by the text-generation backend.
///
/// Every field is optional: generators omit fields, emit `null`, and
/// hallucinate values. Parsing is kept strictly separate from repair; all
/// defaulting and healing happens in [`crate::schedule::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawGeneratedTask {
    /// Proposed task title.
    pub title: Option<String>,
    /// Proposed task description.
    pub description: Option<String>,
    /// Proposed coarse time-of-day slot label.
    pub time_slot: Option<String>,
    /// Proposed specific scheduled time.
    pub specific_time: Option<DateTime<Utc>>,
    /// Proposed duration in minutes. Backends emit both integers and
    /// floats; fractional minutes are truncated toward zero.
    #[serde(deserialize_with = "loose_minutes")]
    pub duration_minutes: Option<i64>,
    /// Proposed goal reference.
    pub goal_id: Option<i64>,
    /// Whether the task is fixed in time.
    pub fixed: Option<bool>,
}

/// Complete generator response: raw candidates plus free-text reasoning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Raw candidate records, in generator order.
    pub tasks: Vec<RawGeneratedTask>,
    /// Free-text explanation of the proposed schedule.
    pub reasoning: String,
}

impl GeneratedPlan {
    /// Parses a plan from raw model output.
    ///
    /// Tolerates the Markdown code fences language models commonly wrap
    /// JSON in; any other deviation from the expected shape is an error for
    /// the calling backend to surface.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the payload is not a
    /// plan-shaped JSON object.
    pub fn from_model_output(output: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_fences(output))
    }
}

fn loose_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|minutes| {
        minutes.as_i64().or_else(|| {
            minutes.as_f64().map(|fractional| {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "fractional minutes are truncated toward zero on purpose"
                )]
                let whole = fractional.trunc() as i64;
                whole
            })
        })
    }))
}

fn strip_code_fences(output: &str) -> &str {
    let trimmed = output.trim();
    let opened = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    opened.strip_suffix("```").unwrap_or(opened).trim()
}
