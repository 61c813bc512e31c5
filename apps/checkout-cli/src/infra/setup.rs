use std::fs::File;
use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::infra::error::InfraError;

const DEFAULT_LOG_FILTER: &str = "botnology_checkout=info,checkout_sdk=info";

/// Console logs go to stderr so stdout only carries command output.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    // File (structured JSON logs)
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
