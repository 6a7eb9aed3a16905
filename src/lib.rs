//! Submission Notifier - forwards completed writing test submissions to Telegram.
//!
//! This crate implements a single API Lambda: it accepts a POSTed test
//! submission, renders it as a Telegram HTML message, and delivers it with
//! one `sendMessage` call.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the Telegram Bot API call
//! - chrono for local timestamp rendering
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use submission_notifier::core::config::AppConfig;
//! use submission_notifier::telegram::TelegramClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     submission_notifier::setup_logging();
//!
//!     let config = AppConfig::from_env().ok();
//!     let client = TelegramClient::new();
//!     let request = serde_json::json!({
//!         "httpMethod": "POST",
//!         "body": r#"{"studentName":"Alice","task1":{"answer":"The chart shows growth."}}"#,
//!     });
//!
//!     let response =
//!         submission_notifier::api::handle_request(&request, config.as_ref(), &client).await;
//!     println!("{response}");
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod telegram;
pub mod utils;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at Lambda startup;
/// later calls are ignored.
///
/// # Example
///
/// ```
/// submission_notifier::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
