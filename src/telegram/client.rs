//! Telegram Bot API client
//!
//! Sends one `sendMessage` call per notification. There is no retry: a
//! rejected message is reported to the caller as a delivery failure.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::errors::NotifierError;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Outbound seam for delivering a formatted message.
///
/// Error text must never contain `bot_token`; it ends up in the logs.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Delivers `text` to `chat_id` using the bot identified by `bot_token`.
    ///
    /// # Errors
    ///
    /// `NotifierError::DeliveryError` when the messaging API rejects the
    /// message; any other variant for transport or decoding faults.
    async fn send_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<(), NotifierError>;
}

pub struct TelegramClient {
    http: Client,
    api_base: String,
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TelegramClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_api_base(Client::new(), TELEGRAM_API_BASE)
    }

    #[must_use]
    pub fn with_api_base(http: Client, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn send_message_url(&self, bot_token: &str) -> String {
        format!("{}/bot{bot_token}/sendMessage", self.api_base)
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<(), NotifierError> {
        let payload = build_send_message_payload(chat_id, text);

        let resp = self
            .http
            .post(self.send_message_url(bot_token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                NotifierError::HttpError(format!("sendMessage request: {}", e.without_url()))
            })?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| {
                NotifierError::ParseError(format!("sendMessage response: {}", e.without_url()))
            })?;

        check_send_message_response(status, &body)?;
        info!(chat_id = %chat_id, "Telegram message delivered");
        Ok(())
    }
}

/// Builds the JSON body for `sendMessage`.
#[must_use]
pub fn build_send_message_payload(chat_id: &str, text: &str) -> Value {
    json!({
        "chat_id": chat_id,
        "text": text,
        "parse_mode": "HTML",
    })
}

/// Interprets a `sendMessage` reply. A non-2xx status or `"ok": false` is a
/// delivery failure; the API's payload is logged as the diagnostic.
///
/// # Errors
///
/// Returns `NotifierError::DeliveryError` carrying the API's description.
pub fn check_send_message_response(status: StatusCode, body: &Value) -> Result<(), NotifierError> {
    let ok_flag = body.get("ok").and_then(Value::as_bool).unwrap_or(true);
    if status.is_success() && ok_flag {
        return Ok(());
    }

    error!(status = %status, response = %body, "Telegram API error");
    let description = body
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    Err(NotifierError::DeliveryError(format!(
        "sendMessage HTTP {status}: {description}"
    )))
}
