//! Shared types and token primitives for Botnology checkout.
//!
//! This crate provides:
//! - The checkout request body (`CheckoutRequest`) and its validated constructor
//! - Unverified session-token payload decoding (`TokenPayload`)
//! - The normalized result of a checkout call (`CheckoutOutcome`)
//! - Plan tier and billing cadence identifiers

mod errors;
mod outcome;
mod payload;
mod plan;
mod request;

pub use errors::{TokenDecodeError, ValidationError};
pub use outcome::CheckoutOutcome;
pub use payload::{TokenPayload, decode_token_payload};
pub use plan::{Cadence, PlanTier};
pub use request::{CheckoutRequest, DEFAULT_STUDENT_ID, build_request};
