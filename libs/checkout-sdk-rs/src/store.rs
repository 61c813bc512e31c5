//! Session token storage.

use std::io;
use std::sync::Mutex;

use checkout_types::{TokenPayload, decode_token_payload};
use tracing::warn;

/// Storage for the signed-in user's session token.
///
/// Implement this for whatever persists the token on your platform (a file, a
/// keychain, browser storage) and pass it to `CheckoutClient::start_checkout`.
pub trait TokenStore: Send + Sync {
    /// Current token, or None if the user is not signed in.
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    fn set(&self, token: &str) -> io::Result<()>;

    /// Forget the stored token.
    fn clear(&self) -> io::Result<()>;
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) -> io::Result<()> {
        *self
            .token
            .lock()
            .map_err(|_| io::Error::other("token store lock poisoned"))? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self
            .token
            .lock()
            .map_err(|_| io::Error::other("token store lock poisoned"))? = None;
        Ok(())
    }
}

/// Reads and decodes the stored token's payload.
///
/// Returns None when there is no token or it cannot be decoded. Decode
/// failures are logged as warnings and never block a checkout.
pub fn peek_payload(store: &dyn TokenStore) -> Option<TokenPayload> {
    let token = store.get()?;

    match decode_token_payload(&token) {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!(error = %e, "Could not decode or parse token payload");
            None
        }
    }
}
