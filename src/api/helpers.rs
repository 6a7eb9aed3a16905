//! Response builders for the API handler.
//!
//! Each builder returns an API Gateway proxy response whose `body` is a JSON
//! string.

use serde_json::{Value, json};

use crate::errors::NotifierError;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const CONFIGURATION_MISSING: &str = "Telegram configuration missing";
pub const DELIVERY_FAILED: &str = "Failed to send message to Telegram";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const SENT_CONFIRMATION: &str = "Answers sent to Telegram";

// ============================================================================
// Response Builders
// ============================================================================

fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response confirming delivery.
#[must_use]
pub fn ok_sent() -> Value {
    json_response(200, &json!({ "success": true, "message": SENT_CONFIRMATION }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Returns the 405 response for any method other than POST.
#[must_use]
pub fn method_not_allowed() -> Value {
    err_response(405, METHOD_NOT_ALLOWED)
}

/// Maps a pipeline failure to its opaque 500 response.
#[must_use]
pub fn error_to_response(error: &NotifierError) -> Value {
    let message = match error {
        NotifierError::ConfigError(_) => CONFIGURATION_MISSING,
        NotifierError::DeliveryError(_) => DELIVERY_FAILED,
        NotifierError::ParseError(_) | NotifierError::HttpError(_) => INTERNAL_SERVER_ERROR,
    };
    err_response(500, message)
}
