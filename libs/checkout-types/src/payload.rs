use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::TokenDecodeError;

/// Identity claims read out of a session token's payload segment.
///
/// Nothing here is verified. The values only pre-fill the checkout request;
/// the payment backend is responsible for trusting or rejecting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub student_id: Option<String>,
    pub email: Option<String>,
}

/// Decodes the middle segment of a `header.payload.signature` token.
///
/// Accepts both the URL-safe alphabet used by JWTs and the standard alphabet
/// produced by `btoa`, with or without `=` padding. Valid JSON that is not an
/// object, or fields that are not strings, decode to `None` fields rather than
/// an error.
///
/// # Security Note
/// This does NOT verify the signature. Never use the result for authorization.
pub fn decode_token_payload(token: &str) -> Result<TokenPayload, TokenDecodeError> {
    let segment = token
        .split('.')
        .nth(1)
        .map(|s| s.trim().trim_end_matches('='))
        .filter(|s| !s.is_empty())
        .ok_or(TokenDecodeError::MissingPayload)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD_NO_PAD.decode(segment))?;

    let value: Value = serde_json::from_slice(&bytes)?;

    Ok(TokenPayload {
        student_id: string_claim(&value, "student_id"),
        email: string_claim(&value, "email"),
    })
}

fn string_claim(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    fn browser_token(payload: &Value) -> String {
        // Same shape the front end builds: btoa(JSON.stringify(payload))
        format!("header.{}.signature", STANDARD.encode(payload.to_string()))
    }

    #[test]
    fn test_decode_browser_style_token() {
        let token = browser_token(&serde_json::json!({
            "student_id": "BN-TEST-123",
            "email": "test@example.com"
        }));

        let payload = decode_token_payload(&token).unwrap();
        assert_eq!(payload.student_id.as_deref(), Some("BN-TEST-123"));
        assert_eq!(payload.email.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn test_decode_signed_jwt() {
        #[derive(Serialize)]
        struct Claims<'a> {
            student_id: &'a str,
            email: &'a str,
            exp: i64,
        }

        let token = encode(
            &Header::default(),
            &Claims {
                student_id: "BN-JWT-9",
                email: "jwt@example.com",
                exp: 1_735_689_600,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let payload = decode_token_payload(&token).unwrap();
        assert_eq!(payload.student_id.as_deref(), Some("BN-JWT-9"));
        assert_eq!(payload.email.as_deref(), Some("jwt@example.com"));
    }

    #[test]
    fn test_decode_is_idempotent() {
        let token = browser_token(&serde_json::json!({ "student_id": "BN-1" }));

        let first = decode_token_payload(&token).unwrap();
        let second = decode_token_payload(&token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_fields_are_none() {
        let token = browser_token(&serde_json::json!({ "sub": "user123" }));

        assert_eq!(decode_token_payload(&token).unwrap(), TokenPayload::default());
    }

    #[test]
    fn test_non_string_fields_are_none() {
        let token = browser_token(&serde_json::json!({ "student_id": 42, "email": null }));

        assert_eq!(decode_token_payload(&token).unwrap(), TokenPayload::default());
    }

    #[test]
    fn test_non_object_json_is_empty_payload() {
        let token = format!("h.{}.s", STANDARD.encode("[1,2,3]"));

        assert_eq!(decode_token_payload(&token).unwrap(), TokenPayload::default());
    }

    #[test]
    fn test_missing_segment() {
        assert!(matches!(
            decode_token_payload("invalid-token"),
            Err(TokenDecodeError::MissingPayload)
        ));
        assert!(matches!(
            decode_token_payload("header..signature"),
            Err(TokenDecodeError::MissingPayload)
        ));
        assert!(matches!(
            decode_token_payload(""),
            Err(TokenDecodeError::MissingPayload)
        ));
    }

    #[test]
    fn test_bad_base64() {
        assert!(matches!(
            decode_token_payload("header.@@not*base64@@.signature"),
            Err(TokenDecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_bad_json() {
        let token = format!("h.{}.s", STANDARD.encode("student_id=BN-1"));

        assert!(matches!(
            decode_token_payload(&token),
            Err(TokenDecodeError::Json(_))
        ));
    }
}
