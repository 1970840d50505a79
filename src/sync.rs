//! The sync run: fetch every local language from POEditor and shape it.
//!
//! Languages are processed one at a time. A missing term list only marks
//! that language as unavailable; a permission failure stops the run before
//! any further request is made; anything else aborts with an error.

use crate::app::AppVariant;
use crate::language::Language;
use crate::output::TranslationSink;
use crate::poeditor::{PoEditorError, TermSource};
use crate::project::{LanguageCatalog, PathError};
use crate::terms::TermShaper;
use crate::translation::{Translation, TranslationResult};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use tracing::{debug, error, info, warn};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Every local language was synced.
    Succeeded,
    /// All languages were attempted but some had no translations.
    Failed { unavailable: Vec<String> },
    /// The token lacks access to the project; remaining languages were skipped.
    Aborted { app: AppVariant },
}

impl SyncOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            SyncOutcome::Succeeded => 0,
            SyncOutcome::Failed { .. } | SyncOutcome::Aborted { .. } => 1,
        }
    }
}

/// Results collected over one run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub available: BTreeSet<String>,
    pub unavailable: BTreeSet<String>,
    pub permission_denied: Option<AppVariant>,
    pub translations: Vec<TranslationResult>,
}

impl SyncReport {
    pub fn outcome(&self) -> SyncOutcome {
        if let Some(app) = self.permission_denied {
            return SyncOutcome::Aborted { app };
        }
        if !self.unavailable.is_empty() {
            return SyncOutcome::Failed {
                unavailable: self.unavailable.iter().cloned().collect(),
            };
        }
        SyncOutcome::Succeeded
    }

    pub fn translation(&self, language_code: &str) -> Option<&TranslationResult> {
        self.translations
            .iter()
            .find(|result| result.language_code == language_code)
    }
}

/// Languages present in the project, deduplicated and sorted.
pub fn local_languages(catalog: &dyn LanguageCatalog) -> Result<Vec<Language>, PathError> {
    let languages: BTreeSet<Language> = catalog
        .directory_names()?
        .iter()
        .map(|name| Language::from_directory_name(name))
        .collect();
    Ok(languages.into_iter().collect())
}

pub struct Synchronizer<S> {
    source: S,
    app: AppVariant,
    shaper: TermShaper,
    sink: Option<Box<dyn TranslationSink + Send>>,
}

impl<S: TermSource> Synchronizer<S> {
    pub fn new(source: S, app: AppVariant) -> Self {
        Self {
            source,
            app,
            shaper: TermShaper::default(),
            sink: None,
        }
    }

    pub fn with_shaper(mut self, shaper: TermShaper) -> Self {
        self.shaper = shaper;
        self
    }

    pub fn with_sink(mut self, sink: impl TranslationSink + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Sync every language folder the catalog lists.
    ///
    /// Path problems are reported before any request is sent.
    pub async fn run(&mut self, catalog: &dyn LanguageCatalog) -> Result<SyncReport> {
        let languages = local_languages(catalog)?;
        info!(
            "Found {} local languages for {}: {}",
            languages.len(),
            self.app,
            languages
                .iter()
                .map(Language::code)
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.sync_languages(&languages).await
    }

    pub async fn sync_languages(&mut self, languages: &[Language]) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        for language in languages {
            match self.fetch_language(language).await {
                Ok(translation) => {
                    let result = translation.finalize();
                    if let Some(sink) = self.sink.as_mut() {
                        sink.write(&result).with_context(|| {
                            format!("Failed to store translations for '{}'", language)
                        })?;
                    }
                    info!(
                        "{}: synced {} entries ({} fuzzy)",
                        language,
                        result.len(),
                        translation.fuzzy_terms()
                    );
                    if let Some(newest) = translation.newest_term() {
                        debug!("{}: newest term created {}", language, newest.to_rfc3339());
                    }
                    report.available.insert(language.code().to_string());
                    report.translations.push(result);
                }
                Err(PoEditorError::MissingPermission(app)) => {
                    error!("Missing permissions for {}, stopping sync", app);
                    report.permission_denied = Some(app);
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    warn!("{}: {}", language, e);
                    report.unavailable.insert(language.code().to_string());
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to sync language '{}'", language));
                }
            }
        }

        Ok(report)
    }

    /// One request per language, against the variant's own project.
    async fn fetch_language(&self, language: &Language) -> Result<Translation, PoEditorError> {
        let terms = self
            .source
            .fetch_translations(self.app, &language.to_service())
            .await?;
        let mut translation = Translation::new(language.clone(), self.shaper);
        translation.add_terms(&terms);
        Ok(translation)
    }
}
