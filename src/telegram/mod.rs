//! All Telegram-specific functionality

pub mod client;
pub mod message_formatter;

// Re-export main types for convenience
pub use client::{MessageSender, TELEGRAM_API_BASE, TelegramClient, build_send_message_payload};
pub use message_formatter::{format_submission_message, format_telegram_message};
