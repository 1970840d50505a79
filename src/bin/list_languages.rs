//! Lists the languages enabled in POEditor for the configured app variant.
//!
//! Usage:
//!   cargo run --bin languages
//!
//! Required environment variables:
//! - POEDITOR_USER_API_KEY
//!
//! Optional:
//! - POEDITOR_APP (defaults to adidasGlobal)
//! - POEDITOR_API_URL
//! - POEDITOR_PROJECT_ROOT

use anyhow::Result;
use poeditor_sync::config::Config;
use poeditor_sync::language::ServiceLanguage;
use poeditor_sync::poeditor::TermSource;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("poeditor_sync=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Listing POEditor languages for {} (project {}, tags: {:?})",
        config.app,
        config.app.project_id(),
        config.app.tags()
    );
    if let Some(fallback_id) = config.app.fallback_project_id() {
        info!("{} is derived from project {}", config.app, fallback_id);
    }
    info!(
        "Localization folders: {}",
        config.localization_root().path().display()
    );
    match config.app.settings_path() {
        Some(settings) => info!(
            "Settings bundle: {}",
            config.project_root.join(settings).display()
        ),
        None => info!("{} has no Settings bundle", config.app),
    }

    let languages = config.client().fetch_available_languages(config.app).await?;
    if languages.is_empty() {
        info!("No languages available");
        return Ok(());
    }

    for language in &languages {
        let folder = ServiceLanguage::new(language.code.as_str()).to_platform();
        println!(
            "{:<8} {:<32} {:<4} {:<4} {}.lproj",
            language.code,
            language.name,
            folder.language_acronym(),
            folder.country_acronym().as_deref().unwrap_or("-"),
            folder
        );
    }

    info!("✓ {} languages available", languages.len());
    Ok(())
}
