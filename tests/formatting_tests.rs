use chrono::{Local, TimeZone};
use submission_notifier::core::models::Submission;
use submission_notifier::telegram::message_formatter::{
    format_local_timestamp, format_submission_message, format_telegram_message,
};

/// Tests for the Telegram message formatting logic

fn alice_submission() -> Submission {
    serde_json::from_value(serde_json::json!({
        "studentName": "Alice",
        "testName": "IELTS Mock 1",
        "timestamp": 1_700_000_000_000_i64,
        "duration": "60 min",
        "task1": {
            "question": "Describe the chart.",
            "answer": "The chart shows growth.",
            "wordCount": "4 words (official)"
        },
        "task2": {
            "question": "Discuss X.",
            "answer": "",
            "wordCount": "0 words"
        }
    }))
    .unwrap()
}

#[test]
fn test_end_to_end_submission_message() {
    let processed_at = Local.timestamp_millis_opt(1_700_000_360_000).unwrap();
    let formatted = format_submission_message(&alice_submission(), processed_at);

    assert!(formatted.starts_with("<b>📝 IELTS WRITING TEST SUBMITTED</b>\n\n"));
    assert!(formatted.contains("• <b>Name:</b> Alice\n"));
    assert!(formatted.contains("• <b>Test:</b> IELTS Mock 1\n"));
    assert!(formatted.contains("• <b>Duration:</b> 60 min"));

    // Task 1: raw count rendered verbatim beside the computed one
    assert!(formatted.contains("<b>Question:</b>\nDescribe the chart."));
    assert!(formatted.contains("<code>The chart shows growth.</code>"));
    assert!(
        formatted.contains("<b>📊 Task 1 Statistics:</b>\n• 4 words (official)\n• Word Count: 4")
    );

    // Task 2: empty answer renders the default text and counts zero words
    assert!(formatted.contains("<b>Question:</b>\nDiscuss X."));
    assert!(formatted.contains("<code>No answer provided</code>"));
    assert!(formatted.contains("<b>📊 Task 2 Statistics:</b>\n• 0 words\n• Word Count: 0"));

    assert!(formatted.contains(
        "<b>📈 OVERALL STATISTICS</b>\n• Total Words: 4\n• Task 1 Words: 4\n• Task 2 Words: 0"
    ));
}

#[test]
fn test_submission_timestamp_is_localized() {
    let processed_at = Local.timestamp_millis_opt(1_700_000_360_000).unwrap();
    let formatted = format_submission_message(&alice_submission(), processed_at);

    let expected = format_local_timestamp(1_700_000_000_000.0).unwrap();
    assert!(formatted.contains(&format!("• <b>Timestamp:</b> {expected}\n")));
    assert!(expected.contains("/2023, "));
    assert!(expected.ends_with("AM") || expected.ends_with("PM"));
}

#[test]
fn test_missing_tasks_render_defaults() {
    let submission: Submission =
        serde_json::from_str(r#"{"studentName":"Bob","task1":{"question":"Q1"}}"#).unwrap();

    let formatted = format_telegram_message(&submission);

    assert!(formatted.contains("<b>Question:</b>\nQ1"));
    assert!(formatted.contains("<b>Question:</b>\nNot provided"));
    assert_eq!(formatted.matches("<code>No answer provided</code>").count(), 2);
    assert!(formatted.contains("• Total Words: 0"));
    assert!(!formatted.contains("undefined"));
}

#[test]
fn test_answer_markup_is_neutralized() {
    let submission: Submission = serde_json::from_str(
        r#"{"task2":{"answer":"<b>\"test\" & 'ok'</b>","wordCount":"4 words"}}"#,
    )
    .unwrap();

    let formatted = format_telegram_message(&submission);

    assert!(formatted.contains(
        "<code>&lt;b&gt;&quot;test&quot; &amp; &#039;ok&#039;&lt;/b&gt;</code>"
    ));
    // Counted on the raw answer, not the escaped text.
    assert!(formatted.contains("• Task 2 Words: 3"));
}
