use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

use botnology_checkout::{
    app::run,
    cli::Args,
    infra::{config::AppConfig, setup::init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::from_env();

    init_tracing(config.log_file.as_deref())?;

    run(args.command, &config).await
}
