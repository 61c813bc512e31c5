use std::path::PathBuf;
use std::time::Duration;

use checkout_sdk::DEFAULT_CHECKOUT_PATH;
use env_helpers::get_env_default;
use url::Url;

use crate::infra::http_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};

pub struct AppConfig {
    /// Origin of the tutoring API that creates checkout sessions.
    pub api_base_url: Url,
    pub checkout_path: String,
    /// File holding the session token between runs.
    pub token_file: PathBuf,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Optional JSON log output, in addition to the console.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url: Url = get_env_default(
            "CHECKOUT_API_BASE_URL",
            Url::parse("http://localhost:3001").expect("default base URL is valid"),
        );
        let checkout_path: String =
            get_env_default("CHECKOUT_PATH", DEFAULT_CHECKOUT_PATH.to_string());
        let token_file: PathBuf = get_env_default("TOKEN_FILE", PathBuf::from(".botnology_token"));
        let connect_timeout_secs: u64 =
            get_env_default("HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT.as_secs());
        let request_timeout_secs: u64 =
            get_env_default("HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT.as_secs());
        let log_file: Option<PathBuf> = std::env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            api_base_url,
            checkout_path,
            token_file,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            request_timeout: Duration::from_secs(request_timeout_secs),
            log_file,
        }
    }
}
