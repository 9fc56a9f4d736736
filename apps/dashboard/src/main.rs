use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod menu;

use cli::{Cli, Operation};
use patient_cell::handlers::{Dashboard, DashboardOutcome};
use patient_cell::render::{OutputFormat, TerminalRenderer};
use shared_config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing; stdout is reserved for dashboard output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    info!("Using patient API at {}", config.api_base_url());

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Table };
    let mut dashboard = Dashboard::new(&config, TerminalRenderer::stdout(format));

    let Some(operation) = cli.command.and_then(cli::Commands::into_operation) else {
        menu::run(&mut dashboard).await?;
        return Ok(ExitCode::SUCCESS);
    };

    let outcome = match operation {
        Operation::Create(form) => dashboard.create_patient(&form).await,
        Operation::List => dashboard.list_patients().await,
        Operation::Sort(query) => dashboard.sort_patients(&query).await,
        Operation::Update { id, form } => dashboard.update_patient(&id, &form).await,
        Operation::Delete { id } => dashboard.delete_patient(&id).await,
    };

    Ok(match outcome {
        DashboardOutcome::Completed => ExitCode::SUCCESS,
        DashboardOutcome::Rejected(_) | DashboardOutcome::Failed(_) => ExitCode::FAILURE,
    })
}
