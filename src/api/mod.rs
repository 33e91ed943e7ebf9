//! Wire format of the insight webhook.
//!
//! The webhook receives the raw prompt as `text/plain` and answers with a JSON
//! object carrying the reply in `output`. Interpretation of the answer is an
//! explicit step that yields a typed [`Reply`] instead of poking at optional
//! fields at the call site.

use serde_json::Value;

use crate::core::responder::Reply;

/// Interpret the body of a successful (2xx) webhook response.
pub fn parse_success_body(body: &str) -> Reply {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => return Reply::TransportError(format!("invalid JSON body: {err}")),
    };

    match value.get("output").and_then(Value::as_str) {
        Some(output) if !output.is_empty() => Reply::Success(output.to_string()),
        _ => Reply::Malformed,
    }
}
