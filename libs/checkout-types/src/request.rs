use serde::{Deserialize, Serialize};

use crate::{TokenPayload, ValidationError};

/// Student id sent when the session token carries none.
pub const DEFAULT_STUDENT_ID: &str = "BN-UNKNOWN";

/// JSON body of `POST /api/stripe/create-checkout-session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Plan identifier (e.g., "associates")
    pub plan: String,

    /// Billing cadence (e.g., "monthly")
    pub cadence: String,

    /// Student id from the token, or `DEFAULT_STUDENT_ID`
    pub student_id: String,

    /// Email from the token; omitted from the body when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Builds a checkout request, refusing empty plan or cadence.
///
/// Identity fields come from the (unverified) token payload when present.
/// Empty strings in the payload are treated the same as missing fields.
pub fn build_request(
    plan: &str,
    cadence: &str,
    payload: Option<&TokenPayload>,
) -> Result<CheckoutRequest, ValidationError> {
    if plan.is_empty() || cadence.is_empty() {
        return Err(ValidationError);
    }

    let student_id = payload
        .and_then(|p| p.student_id.as_deref())
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_STUDENT_ID)
        .to_string();

    let email = payload
        .and_then(|p| p.email.as_deref())
        .filter(|email| !email.is_empty())
        .map(str::to_owned);

    Ok(CheckoutRequest {
        plan: plan.to_string(),
        cadence: cadence.to_string(),
        student_id,
        email,
    })
}
