//! Renders a [`Submission`] as a Telegram HTML message.
//!
//! Every piece of user-supplied text is escaped before it is embedded, and
//! every missing field falls back to a default, so formatting never fails.

use chrono::{DateTime, Local, TimeZone};

use crate::core::models::{Submission, TaskAnswer};
use crate::utils::text::{count_words, escape_html};

pub const NOT_PROVIDED: &str = "Not provided";
pub const NO_ANSWER_PROVIDED: &str = "No answer provided";

/// en-US `toLocaleString` layout, e.g. `11/14/2023, 10:13:20 PM`.
const DISPLAY_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Formats a submission using the current local time as the processing time.
#[must_use]
pub fn format_telegram_message(submission: &Submission) -> String {
    format_submission_message(submission, Local::now())
}

/// Formats a submission with an explicit processing time.
#[must_use]
pub fn format_submission_message(submission: &Submission, processed_at: DateTime<Local>) -> String {
    let task1_words = count_words(submission.task1.answer_text());
    let task2_words = count_words(submission.task2.answer_text());

    let sections = [
        "<b>📝 IELTS WRITING TEST SUBMITTED</b>".to_string(),
        student_section(submission),
        task_section(
            "📋 TASK 1 - CHART DESCRIPTION",
            "Task 1",
            &submission.task1,
            task1_words,
        ),
        task_section(
            "📝 TASK 2 - ESSAY WRITING",
            "Task 2",
            &submission.task2,
            task2_words,
        ),
        overall_section(task1_words, task2_words),
        footer_section(processed_at),
    ];

    sections.join("\n\n")
}

/// Renders epoch milliseconds in local time, or `None` if out of range.
#[must_use]
pub fn format_local_timestamp(epoch_millis: f64) -> Option<String> {
    if !epoch_millis.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = epoch_millis.trunc() as i64;
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format(DISPLAY_TIME_FORMAT).to_string())
}

fn student_section(submission: &Submission) -> String {
    let name = text_or_default(submission.student_name.as_deref(), NOT_PROVIDED);
    let test = text_or_default(submission.test_name.as_deref(), NOT_PROVIDED);
    let duration = text_or_default(submission.duration.as_deref(), NOT_PROVIDED);
    let timestamp = submission
        .timestamp
        .and_then(format_local_timestamp)
        .unwrap_or_else(|| NOT_PROVIDED.to_string());

    format!(
        "<b>👤 STUDENT INFORMATION</b>\n• <b>Name:</b> {name}\n• <b>Test:</b> {test}\n• <b>Timestamp:</b> {timestamp}\n• <b>Duration:</b> {duration}"
    )
}

fn task_section(heading: &str, label: &str, task: &TaskAnswer, words: usize) -> String {
    let question = text_or_default(task.question.as_deref(), NOT_PROVIDED);
    let answer = text_or_default(task.answer.as_deref(), NO_ANSWER_PROVIDED);
    let reported = escape_html(task.word_count.as_deref().unwrap_or(""));

    [
        format!("<b>{heading}</b>\n<b>Question:</b>\n{question}"),
        format!("<b>📝 Student's Answer:</b>\n<code>{answer}</code>"),
        format!("<b>📊 {label} Statistics:</b>\n• {reported}\n• Word Count: {words}"),
    ]
    .join("\n\n")
}

fn overall_section(task1_words: usize, task2_words: usize) -> String {
    format!(
        "<b>📈 OVERALL STATISTICS</b>\n• Total Words: {}\n• Task 1 Words: {task1_words}\n• Task 2 Words: {task2_words}",
        task1_words + task2_words
    )
}

fn footer_section(processed_at: DateTime<Local>) -> String {
    format!(
        "---\n<i>✅ Test automatically submitted and recorded</i>\n<i>🕒 Submission Time: {}</i>",
        processed_at.format(DISPLAY_TIME_FORMAT)
    )
}

/// Escaped text, or the default when the value is absent or empty.
fn text_or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => escape_html(text),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<Local> {
        Local.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_sections_render_in_order() {
        let message = format_submission_message(&Submission::default(), fixed_time());

        let order = [
            "IELTS WRITING TEST SUBMITTED",
            "STUDENT INFORMATION",
            "TASK 1 - CHART DESCRIPTION",
            "TASK 2 - ESSAY WRITING",
            "OVERALL STATISTICS",
            "Submission Time:",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| message.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_submission_uses_defaults() {
        let message = format_submission_message(&Submission::default(), fixed_time());

        assert!(message.contains("• <b>Name:</b> Not provided"));
        assert!(message.contains("• <b>Timestamp:</b> Not provided"));
        assert!(message.contains("<b>Question:</b>\nNot provided"));
        assert_eq!(message.matches("<code>No answer provided</code>").count(), 2);
        assert!(message.contains("• Total Words: 0"));
        assert!(!message.contains("undefined"));
        assert!(!message.contains("null"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let submission = Submission {
            student_name: Some("<script>".to_string()),
            task1: TaskAnswer {
                question: Some("A & B".to_string()),
                answer: Some("x < y".to_string()),
                word_count: Some("3 \"words\"".to_string()),
            },
            ..Submission::default()
        };

        let message = format_submission_message(&submission, fixed_time());

        assert!(message.contains("&lt;script&gt;"));
        assert!(message.contains("A &amp; B"));
        assert!(message.contains("<code>x &lt; y</code>"));
        assert!(message.contains("• 3 &quot;words&quot;"));
        assert!(!message.contains("<script>"));
    }

    #[test]
    fn test_format_local_timestamp_out_of_range() {
        assert!(format_local_timestamp(f64::NAN).is_none());
        assert!(format_local_timestamp(1e30).is_none());
    }

    #[test]
    fn test_footer_uses_processing_time() {
        let message = format_submission_message(&Submission::default(), fixed_time());
        let expected = fixed_time().format(DISPLAY_TIME_FORMAT).to_string();

        assert!(message.ends_with(&format!("<i>🕒 Submission Time: {expected}</i>")));
    }
}
