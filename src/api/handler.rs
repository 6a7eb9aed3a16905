//! API Lambda handler.
//!
//! This module handles:
//! - Method gate (POST only)
//! - Configuration check
//! - Formatting and delivering the submission to Telegram
//!
//! Every failure is turned into a response here; the Lambda invocation itself
//! never errors on a bad request.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::errors::NotifierError;
use crate::telegram::{MessageSender, format_telegram_message};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns `Err`; failures are reported as proxy responses.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<S>(
    event: LambdaEvent<Value>,
    config: Option<&AppConfig>,
    sender: &S,
) -> Result<Value, Error>
where
    S: MessageSender + ?Sized,
{
    Ok(handle_request(&event.payload, config, sender).await)
}

/// Runs one request through the gate, config check, formatter and delivery.
pub async fn handle_request<S>(payload: &Value, config: Option<&AppConfig>, sender: &S) -> Value
where
    S: MessageSender + ?Sized,
{
    // ========================================================================
    // Method gate
    // ========================================================================

    if !parsing::is_post(payload) {
        return helpers::method_not_allowed();
    }

    match notify(payload, config, sender).await {
        Ok(()) => helpers::ok_sent(),
        Err(e) => {
            match &e {
                NotifierError::ConfigError(_) => {
                    error!("Telegram bot token or chat ID not configured: {}", e);
                }
                NotifierError::DeliveryError(_) => error!("Failed to send message: {}", e),
                _ => error!("Error in Telegram handler: {}", e),
            }
            helpers::error_to_response(&e)
        }
    }
}

async fn notify<S>(
    payload: &Value,
    config: Option<&AppConfig>,
    sender: &S,
) -> Result<(), NotifierError>
where
    S: MessageSender + ?Sized,
{
    let config = config.ok_or_else(|| {
        NotifierError::ConfigError("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not set".to_string())
    })?;

    let submission = parsing::parse_submission(payload)?;
    let message = format_telegram_message(&submission);

    #[cfg(feature = "debug-logs")]
    info!("Formatted Telegram message:\n{}", message);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        message_len = message.len(),
        "Formatted Telegram message [... content masked, enable debug-logs feature to view ...]"
    );

    sender
        .send_message(&config.telegram_bot_token, &config.telegram_chat_id, &message)
        .await
}
