use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Telegram configuration missing: {0}")]
    ConfigError(String),

    #[error("Failed to parse submission: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Telegram API rejected the message: {0}")]
    DeliveryError(String),
}

// The request URL carries the bot token, so it is stripped before display.
impl From<reqwest::Error> for NotifierError {
    fn from(error: reqwest::Error) -> Self {
        NotifierError::HttpError(error.without_url().to_string())
    }
}

impl From<serde_json::Error> for NotifierError {
    fn from(error: serde_json::Error) -> Self {
        NotifierError::ParseError(error.to_string())
    }
}

impl From<base64::DecodeError> for NotifierError {
    fn from(error: base64::DecodeError) -> Self {
        NotifierError::ParseError(format!("invalid base64 body: {error}"))
    }
}
