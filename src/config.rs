use crate::app::AppVariant;
use crate::poeditor::{PoEditorClient, DEFAULT_API_URL};
use crate::project::{default_project_root, LocalizationRoot};
use crate::terms::{OtherSuffix, TermShaper};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // POEditor
    pub api_token: String,
    pub api_url: String,

    // Target
    pub app: AppVariant,
    pub project_root: PathBuf,

    // Output
    pub output_dir: Option<PathBuf>,
    pub other_suffix: OtherSuffix,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // POEditor
            api_token: std::env::var("POEDITOR_USER_API_KEY")
                .ok()
                .filter(|token| !token.trim().is_empty())
                .context("POEDITOR_USER_API_KEY is not set correctly")?,
            api_url: std::env::var("POEDITOR_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            // Target
            app: match std::env::var("POEDITOR_APP") {
                Ok(name) => name
                    .parse::<AppVariant>()
                    .context("Invalid POEDITOR_APP")?,
                Err(_) => AppVariant::AdidasGlobal,
            },
            project_root: match std::env::var("POEDITOR_PROJECT_ROOT") {
                Ok(path) => PathBuf::from(path),
                Err(_) => default_project_root()?,
            },

            // Output
            output_dir: std::env::var("POEDITOR_OUTPUT_DIR").ok().map(PathBuf::from),
            other_suffix: match std::env::var("POEDITOR_PLURAL_OTHER_SUFFIX") {
                Ok(value) => value
                    .parse::<OtherSuffix>()
                    .context("Invalid POEDITOR_PLURAL_OTHER_SUFFIX")?,
                Err(_) => OtherSuffix::default(),
            },
        })
    }

    /// Client holding the configured token; the token is never read ambiently.
    pub fn client(&self) -> PoEditorClient {
        PoEditorClient::new(&self.api_token).with_api_url(&self.api_url)
    }

    pub fn localization_root(&self) -> LocalizationRoot {
        LocalizationRoot::for_app(&self.project_root, self.app)
    }

    pub fn shaper(&self) -> TermShaper {
        TermShaper::new(self.other_suffix)
    }
}
