use std::env;

use crate::errors::NotifierError;

pub const TELEGRAM_BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

#[derive(Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
}

// Keeps the bot token out of `{:?}` output.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("telegram_bot_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl AppConfig {
    /// Reads the Telegram credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `NotifierError::ConfigError` naming the first variable that is
    /// unset or empty. Values are never included in the error.
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| NotifierError::ConfigError(format!("{key} is not set")))
        };

        Ok(Self {
            telegram_bot_token: required(TELEGRAM_BOT_TOKEN_VAR)?,
            telegram_chat_id: required(TELEGRAM_CHAT_ID_VAR)?,
        })
    }
}
