//! Checkout client implementation.

use checkout_types::{CheckoutOutcome, CheckoutRequest, build_request};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, info};

use crate::error::CheckoutError;
use crate::resolve::resolve_response;
use crate::sink::{NotificationSink, RedirectSink};
use crate::store::{TokenStore, peek_payload};

/// Default path of the checkout-session endpoint.
pub const DEFAULT_CHECKOUT_PATH: &str = "/api/stripe/create-checkout-session";

/// Configuration for the checkout client.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Origin of the tutoring API (e.g., "https://botnology.example")
    pub base_url: String,

    /// Endpoint path (default: `DEFAULT_CHECKOUT_PATH`)
    pub checkout_path: Option<String>,
}

/// Client for creating Stripe checkout sessions through the tutoring API.
///
/// Each call is independent: no retries, no deduplication, no timeout of its
/// own. Configure timeouts on the `reqwest::Client` passed to
/// `with_http_client`.
#[derive(Clone)]
pub struct CheckoutClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl CheckoutClient {
    /// Create a new checkout client with a default HTTP client.
    pub fn new(config: CheckoutConfig) -> Result<Self, CheckoutError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a new checkout client around an existing HTTP client.
    ///
    /// # Returns
    /// A configured `CheckoutClient` or an error if configuration is invalid.
    pub fn with_http_client(
        config: CheckoutConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, CheckoutError> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(CheckoutError::Config("base_url is required".into()));
        }

        let path = config
            .checkout_path
            .as_deref()
            .unwrap_or(DEFAULT_CHECKOUT_PATH);
        if !path.starts_with('/') {
            return Err(CheckoutError::Config(format!(
                "checkout_path must start with '/': {path}"
            )));
        }

        Ok(Self {
            endpoint: format!("{base_url}{path}"),
            http_client,
        })
    }

    /// Full URL checkout requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a validated request and resolve whatever comes back.
    ///
    /// Only transport failures (connect, DNS, body read) are errors here; any
    /// reply from the server becomes a `CheckoutOutcome`.
    pub async fn dispatch(&self, request: &CheckoutRequest) -> Result<CheckoutOutcome, CheckoutError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        debug!(status = status.as_u16(), content_type = ?content_type, "Received checkout response");

        let body = response.text().await?;

        Ok(resolve_response(
            status.as_u16(),
            status.is_success(),
            content_type.as_deref(),
            &body,
        ))
    }

    /// Validate, dispatch and resolve a checkout for the signed-in user.
    ///
    /// # Arguments
    /// * `plan` - Plan identifier, must be non-empty
    /// * `cadence` - Billing cadence, must be non-empty
    /// * `store` - Where the session token lives; an unreadable token is ignored
    ///
    /// # Returns
    /// The URL to redirect the user to.
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = client.start_checkout("bachelors", "annual", &store).await?;
    /// ```
    pub async fn start_checkout(
        &self,
        plan: &str,
        cadence: &str,
        store: &dyn TokenStore,
    ) -> Result<String, CheckoutError> {
        let payload = peek_payload(store);
        let request = build_request(plan, cadence, payload.as_ref())?;

        info!(
            plan = %request.plan,
            cadence = %request.cadence,
            student_id = %request.student_id,
            "Creating checkout session"
        );

        match self.dispatch(&request).await? {
            CheckoutOutcome::Success { redirect_url } => {
                info!(url = %redirect_url, "Redirecting to Stripe checkout");
                Ok(redirect_url)
            }
            CheckoutOutcome::Failure { message } => Err(CheckoutError::Business { message }),
        }
    }
}

/// Run one checkout on behalf of a UI trigger.
///
/// The redirect URL goes to `redirect`, any failure message to `notifier`.
/// Nothing is retried. Returns the outcome that was delivered.
pub async fn run_checkout(
    client: &CheckoutClient,
    plan: &str,
    cadence: &str,
    store: &dyn TokenStore,
    redirect: &dyn RedirectSink,
    notifier: &dyn NotificationSink,
) -> CheckoutOutcome {
    match client.start_checkout(plan, cadence, store).await {
        Ok(url) => {
            redirect.redirect(&url);
            CheckoutOutcome::Success { redirect_url: url }
        }
        Err(e) => {
            error!(error = %e, "Error creating checkout session");
            let message = e.user_message();
            notifier.notify(&message);
            CheckoutOutcome::Failure { message }
        }
    }
}
