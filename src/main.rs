use anyhow::Result;
use poeditor_sync::config::Config;
use poeditor_sync::output::JsonSnapshotSink;
use poeditor_sync::poeditor::PoEditorError;
use poeditor_sync::sync::{SyncOutcome, Synchronizer};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file (ignored on CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("poeditor_sync=info".parse()?),
        )
        .init();

    info!("Starting POEditor strings sync");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Syncing {} (project {}) into {}",
        config.app,
        config.app.project_id(),
        config.localization_root().path().display()
    );

    let mut synchronizer =
        Synchronizer::new(config.client(), config.app).with_shaper(config.shaper());
    if let Some(output_dir) = &config.output_dir {
        synchronizer = synchronizer.with_sink(JsonSnapshotSink::new(output_dir));
    }

    let report = synchronizer.run(&config.localization_root()).await?;
    let outcome = report.outcome();

    match &outcome {
        SyncOutcome::Succeeded => {
            info!("Synced {} languages successfully!", report.available.len());
        }
        SyncOutcome::Failed { unavailable } => {
            eprintln!("The following languages could not be downloaded");
            eprintln!("{}", unavailable.join("\n"));
        }
        SyncOutcome::Aborted { app } => {
            eprintln!("{}", PoEditorError::MissingPermission(*app));
        }
    }

    Ok(ExitCode::from(outcome.exit_code()))
}
