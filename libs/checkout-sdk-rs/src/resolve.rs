//! Checkout response interpretation.
//!
//! The checkout endpoint answers in several shapes: `{ "url" }` on success,
//! `{ "detail" }` on failure, or plain text with any status. Everything is
//! folded into one `CheckoutOutcome` here. Only `detail` is recognized as an
//! error field.

use checkout_types::CheckoutOutcome;
use serde_json::Value;
use tracing::warn;

const NO_URL_RETURNED: &str = "No URL returned";
const MEDIA_TYPE_JSON: &str = "application/json";

/// Returns true if the media type (before any `;` parameters) names JSON.
///
/// Case-insensitive, so `Application/JSON; charset=utf-8` matches.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
        .contains(MEDIA_TYPE_JSON)
}

/// Resolves a buffered checkout response into an outcome.
///
/// # Arguments
/// * `status` - HTTP status code, used in fallback messages
/// * `ok` - Whether the transport reported success (2xx)
/// * `content_type` - The `Content-Type` header, if any
/// * `body` - Raw response body
///
/// Never fails: malformed bodies become `Failure` outcomes.
pub fn resolve_response(
    status: u16,
    ok: bool,
    content_type: Option<&str>,
    body: &str,
) -> CheckoutOutcome {
    if !ok {
        return CheckoutOutcome::failure(error_message(status, content_type, body));
    }

    // Success replies are parsed as JSON whatever Content-Type says.
    let parsed = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => {
            warn!(status, "Response is not valid JSON, returning as plain text.");
            let detail = if body.is_empty() { NO_URL_RETURNED } else { body };
            return CheckoutOutcome::failure(detail);
        }
    };

    match non_empty_str(&parsed, "url") {
        Some(url) => CheckoutOutcome::success(url),
        None => CheckoutOutcome::failure(non_empty_str(&parsed, "detail").unwrap_or(NO_URL_RETURNED)),
    }
}

fn error_message(status: u16, content_type: Option<&str>, body: &str) -> String {
    let fallback = || format!("HTTP {status}");

    if content_type.is_some_and(is_json_content_type) {
        return serde_json::from_str::<Value>(body)
            .ok()
            .as_ref()
            .and_then(|value| non_empty_str(value, "detail"))
            .map(str::to_owned)
            .unwrap_or_else(fallback);
    }

    if body.is_empty() {
        fallback()
    } else {
        body.to_string()
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
