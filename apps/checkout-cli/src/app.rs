use std::process::ExitCode;

use checkout_sdk::{
    Cadence, CheckoutClient, CheckoutConfig, DEFAULT_STUDENT_ID, PlanTier, TokenStore,
    parse_checkout_return, peek_payload, run_checkout,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        console::{ConsoleNotifier, ConsoleRedirect},
        token_file::FileTokenStore,
    },
    cli::Command,
    infra::{config::AppConfig, error::InfraError, http_client::build_client},
};

/// Executes one CLI command against the configured API and token file.
pub async fn run(command: Command, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let store = FileTokenStore::new(config.token_file.clone());

    match command {
        Command::Checkout { plan, cadence } => checkout(config, &store, &plan, &cadence).await,
        Command::SetToken { token } => {
            store.set(&token).map_err(|source| token_file_error(&store, source))?;
            info!(path = %store.path().display(), "Session token stored");
            Ok(ExitCode::SUCCESS)
        }
        Command::ClearToken => {
            store.clear().map_err(|source| token_file_error(&store, source))?;
            info!(path = %store.path().display(), "Session token cleared");
            Ok(ExitCode::SUCCESS)
        }
        Command::Whoami => {
            let payload = peek_payload(&store).unwrap_or_default();
            let student_id = payload
                .student_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_STUDENT_ID.to_string());
            println!("student_id: {student_id}");
            println!("email: {}", payload.email.as_deref().unwrap_or("-"));
            Ok(ExitCode::SUCCESS)
        }
        Command::ConfirmReturn { url } => match parse_checkout_return(&url) {
            Some(done) => {
                let tier = done
                    .tier()
                    .map(|t| format!(" (tier {})", t.level()))
                    .unwrap_or_default();
                println!("Checkout complete. Plan set to {}{tier}.", done.plan.to_uppercase());
                println!("{}", done.cleaned_url);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("Not a completed checkout return URL: {url}");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

async fn checkout(
    config: &AppConfig,
    store: &FileTokenStore,
    plan: &str,
    cadence: &str,
) -> anyhow::Result<ExitCode> {
    // The server owns plan validation; unknown values are only flagged.
    if !plan.is_empty() && plan.parse::<PlanTier>().is_err() {
        warn!(plan, "Unknown plan, sending as-is");
    }
    if !cadence.is_empty() && cadence.parse::<Cadence>().is_err() {
        warn!(cadence, "Unknown cadence, sending as-is");
    }

    let http_client = build_client(config.connect_timeout, config.request_timeout)?;
    let client = CheckoutClient::with_http_client(
        CheckoutConfig {
            base_url: config.api_base_url.to_string(),
            checkout_path: Some(config.checkout_path.clone()),
        },
        http_client,
    )?;

    let outcome = run_checkout(
        &client,
        plan,
        cadence,
        store,
        &ConsoleRedirect,
        &ConsoleNotifier,
    )
    .await;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn token_file_error(store: &FileTokenStore, source: std::io::Error) -> InfraError {
    InfraError::TokenFile {
        path: store.path().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    use super::*;
    use checkout_sdk::DEFAULT_CHECKOUT_PATH;

    fn config(base_url: &str, token_file: &Path) -> AppConfig {
        AppConfig {
            api_base_url: Url::parse(base_url).unwrap(),
            checkout_path: DEFAULT_CHECKOUT_PATH.to_string(),
            token_file: token_file.to_path_buf(),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
            log_file: None,
        }
    }

    #[tokio::test]
    async fn test_set_token_then_checkout_sends_identity() {
        let dir = tempfile::tempdir().unwrap();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(DEFAULT_CHECKOUT_PATH).json_body(json!({
                    "plan": "masters",
                    "cadence": "annual",
                    "student_id": "BN-CLI-7",
                    "email": "cli@example.com"
                }));
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"url":"https://mock-stripe.com/checkout?plan=masters"}"#);
            })
            .await;

        let config = config(&server.base_url(), &dir.path().join("token"));
        let token = format!(
            "header.{}.signature",
            STANDARD.encode(json!({ "student_id": "BN-CLI-7", "email": "cli@example.com" }).to_string())
        );

        let code = run(Command::SetToken { token }, &config).await.unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let code = run(
            Command::Checkout {
                plan: "masters".into(),
                cadence: "annual".into(),
            },
            &config,
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_checkout_failure_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(DEFAULT_CHECKOUT_PATH);
                then.status(404).header("content-type", "text/plain").body("");
            })
            .await;

        let config = config(&server.base_url(), &dir.path().join("token"));
        let code = run(
            Command::Checkout {
                plan: "associates".into(),
                cadence: "monthly".into(),
            },
            &config,
        )
        .await
        .unwrap();

        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_checkout_validation_failure_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let config = config("http://127.0.0.1:1", &dir.path().join("token"));

        let code = run(
            Command::Checkout {
                plan: String::new(),
                cadence: "monthly".into(),
            },
            &config,
        )
        .await
        .unwrap();

        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_clear_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        let config = config("http://127.0.0.1:1", &path);

        run(Command::SetToken { token: "a.b.c".into() }, &config)
            .await
            .unwrap();
        assert!(path.exists());

        run(Command::ClearToken, &config).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_confirm_return() {
        let dir = tempfile::tempdir().unwrap();
        let config = config("http://127.0.0.1:1", &dir.path().join("token"));

        let ok = Url::parse("https://botnology.example/?checkout=success&plan=bachelors").unwrap();
        assert_eq!(
            run(Command::ConfirmReturn { url: ok }, &config).await.unwrap(),
            ExitCode::SUCCESS
        );

        let cancelled = Url::parse("https://botnology.example/?checkout=cancel").unwrap();
        assert_eq!(
            run(Command::ConfirmReturn { url: cancelled }, &config).await.unwrap(),
            ExitCode::FAILURE
        );
    }
}
