//! Destinations for finalized translations.
//!
//! Rendering Apple `.strings` files is left to the app's build scripts; the
//! sink shipped here writes a JSON snapshot per language they can consume.

use crate::translation::TranslationResult;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Receives each language as soon as it has been synced.
pub trait TranslationSink {
    fn write(&mut self, result: &TranslationResult) -> Result<()>;
}

/// Writes `<dir>/<language>.json`, replacing any previous snapshot.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSink {
    dir: PathBuf,
}

impl JsonSnapshotSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, language_code: &str) -> PathBuf {
        self.dir.join(format!("{}.json", language_code))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TranslationSink for JsonSnapshotSink {
    fn write(&mut self, result: &TranslationResult) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory {}", self.dir.display()))?;

        let path = self.path_for(&result.language_code);
        let json = serde_json::to_string_pretty(result)
            .context("Failed to serialize translation snapshot")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Wrote {} entries to {}", result.len(), path.display());
        Ok(())
    }
}
