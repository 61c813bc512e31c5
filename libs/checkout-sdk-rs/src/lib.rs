//! Rust SDK for starting Botnology Stripe checkouts.
//!
//! # Features
//!
//! - **Response resolution** - Normalize JSON and plain-text checkout replies into a
//!   single `CheckoutOutcome`
//! - **Token introspection** - Pre-fill the student id and email from the stored
//!   session token (unverified)
//! - **Checkout client** - Validate, dispatch and resolve in one call (`client` feature)
//! - **Return handling** - Recognize the `?checkout=success&plan=...` landing URL
//!
//! # Example
//!
//! ```rust,ignore
//! use checkout_sdk::{CheckoutClient, CheckoutConfig, MemoryTokenStore};
//!
//! let client = CheckoutClient::new(CheckoutConfig {
//!     base_url: "https://botnology.example".to_string(),
//!     checkout_path: None,
//! })?;
//!
//! let store = MemoryTokenStore::default();
//! let url = client.start_checkout("associates", "monthly", &store).await?;
//! println!("Redirect to {url}");
//! ```

mod checkout_return;
#[cfg(feature = "client")]
mod client;
mod error;
mod resolve;
mod sink;
mod store;

pub use checkout_return::{CHECKOUT_PARAM, CheckoutReturn, parse_checkout_return};
#[cfg(feature = "client")]
pub use client::{CheckoutClient, CheckoutConfig, DEFAULT_CHECKOUT_PATH, run_checkout};
pub use error::CheckoutError;
pub use resolve::{is_json_content_type, resolve_response};
pub use sink::{NotificationSink, RedirectSink};
pub use store::{MemoryTokenStore, TokenStore, peek_payload};

// Re-export shared types for convenience
pub use checkout_types::{
    Cadence, CheckoutOutcome, CheckoutRequest, DEFAULT_STUDENT_ID, PlanTier, TokenDecodeError,
    TokenPayload, ValidationError, build_request, decode_token_payload,
};
