use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;

use crate::core::models::Submission;
use crate::errors::NotifierError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a proxy event, from payload v2 or v1 fields.
pub fn request_method(event: &Value) -> Option<&str> {
    v_str(event, &["requestContext", "http", "method"]).or_else(|| v_str(event, &["httpMethod"]))
}

pub fn is_post(event: &Value) -> bool {
    request_method(event) == Some("POST")
}

/// Decodes the submission carried in the event body.
///
/// The body may be a JSON string (base64 encoded when `isBase64Encoded` is
/// set) or an already-decoded JSON object.
pub fn parse_submission(event: &Value) -> Result<Submission, NotifierError> {
    let Some(body) = event.get("body") else {
        return Err(NotifierError::ParseError("Missing body".to_string()));
    };

    match body {
        Value::String(raw) => {
            let is_base64 = event
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if is_base64 {
                let bytes = general_purpose::STANDARD.decode(raw)?;
                Ok(serde_json::from_slice(&bytes)?)
            } else {
                Ok(serde_json::from_str(raw)?)
            }
        }
        Value::Object(_) => Ok(serde_json::from_value(body.clone())?),
        _ => Err(NotifierError::ParseError("Invalid body format".to_string())),
    }
}
