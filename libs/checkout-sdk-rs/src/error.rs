use checkout_types::ValidationError;
use thiserror::Error;

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Plan or cadence missing; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered without a usable checkout URL
    #[error("Checkout failed: {message}")]
    Business { message: String },

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// The text shown to the user for this failure.
    ///
    /// Transport errors pass the HTTP client's message through unchanged.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Business { message } => message.clone(),
            #[cfg(feature = "client")]
            Self::Transport(e) => e.to_string(),
            Self::Config(message) => message.clone(),
        }
    }
}
