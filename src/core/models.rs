use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A completed writing test, as posted by the test client.
///
/// Every field is optional; the formatter substitutes defaults instead of
/// rejecting incomplete submissions. Scalars of the wrong JSON type are
/// accepted and rendered as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    #[serde(deserialize_with = "lenient_text")]
    pub student_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub test_name: Option<String>,
    /// Epoch milliseconds.
    #[serde(deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "lenient_task")]
    pub task1: TaskAnswer,
    #[serde(deserialize_with = "lenient_task")]
    pub task2: TaskAnswer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskAnswer {
    #[serde(deserialize_with = "lenient_text")]
    pub question: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub answer: Option<String>,
    /// Descriptive count computed by the client, e.g. "152 words (minimum 150)".
    #[serde(deserialize_with = "lenient_text")]
    pub word_count: Option<String>,
}

impl TaskAnswer {
    /// The answer text, or `""` when absent.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        self.answer.as_deref().unwrap_or("")
    }
}

/// Strings pass through, numbers and booleans are stringified, anything else
/// is treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Epoch milliseconds from a number, a numeric string, or an RFC 3339 string.
#[allow(clippy::cast_precision_loss)]
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<f64>().ok().or_else(|| {
                DateTime::parse_from_rfc3339(text)
                    .ok()
                    .map(|dt| dt.timestamp_millis() as f64)
            })
        }
        _ => None,
    })
}

/// A `null` or non-object task is treated as an empty one.
fn lenient_task<'de, D>(deserializer: D) -> Result<TaskAnswer, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        task @ Value::Object(_) => TaskAnswer::deserialize(task).map_err(serde::de::Error::custom),
        _ => Ok(TaskAnswer::default()),
    }
}
