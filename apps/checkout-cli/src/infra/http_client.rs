//! HTTP client factory with consistent timeout configuration.
//!
//! The checkout SDK never imposes a timeout of its own, so the client handed
//! to it must be built here.

use reqwest::Client;
use std::time::Duration;

use crate::infra::error::InfraError;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with the given timeouts.
pub fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client, InfraError> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(InfraError::HttpClient)
}
