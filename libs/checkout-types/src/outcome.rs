use serde::{Deserialize, Serialize};

/// Normalized result of one checkout-session call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// The server returned a checkout URL to navigate to.
    Success { redirect_url: String },

    /// The server replied, but without a usable URL.
    Failure { message: String },
}

impl CheckoutOutcome {
    pub fn success(redirect_url: impl Into<String>) -> Self {
        Self::Success {
            redirect_url: redirect_url.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::Success { redirect_url } => Some(redirect_url),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}
