use crate::language::Language;
use crate::poeditor::Term;
use crate::terms::{Bucket, TermShaper};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Finalized translations of one language, split by destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub language_code: String,
    pub info_plist_entries: BTreeMap<String, String>,
    pub settings_bundle: BTreeMap<String, String>,
    pub regular_translations: BTreeMap<String, String>,
}

impl TranslationResult {
    pub fn bucket(&self, bucket: Bucket) -> &BTreeMap<String, String> {
        match bucket {
            Bucket::InfoPlistEntries => &self.info_plist_entries,
            Bucket::SettingsBundle => &self.settings_bundle,
            Bucket::RegularTranslations => &self.regular_translations,
        }
    }

    /// Number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.info_plist_entries.len() + self.settings_bundle.len() + self.regular_translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates shaped terms for one language.
///
/// Terms may be added in several batches; a later entry for the same bucket
/// and key replaces the earlier one.
#[derive(Debug, Clone)]
pub struct Translation {
    language: Language,
    shaper: TermShaper,
    info_plist_entries: BTreeMap<String, String>,
    settings_bundle: BTreeMap<String, String>,
    regular_translations: BTreeMap<String, String>,
    fuzzy_terms: usize,
    newest_term: Option<DateTime<FixedOffset>>,
}

impl Translation {
    pub fn new(language: Language, shaper: TermShaper) -> Self {
        Self {
            language,
            shaper,
            info_plist_entries: BTreeMap::new(),
            settings_bundle: BTreeMap::new(),
            regular_translations: BTreeMap::new(),
            fuzzy_terms: 0,
            newest_term: None,
        }
    }

    /// Terms POEditor still flags as fuzzy. They are shaped like any other term.
    pub fn fuzzy_terms(&self) -> usize {
        self.fuzzy_terms
    }

    /// Creation time of the most recently created term seen so far.
    pub fn newest_term(&self) -> Option<DateTime<FixedOffset>> {
        self.newest_term
    }

    /// Shape and store `terms`. Returns the number of entries written.
    pub fn add_terms(&mut self, terms: &[Term]) -> usize {
        let mut written = 0;
        for term in terms {
            if term.is_fuzzy() {
                self.fuzzy_terms += 1;
            }
            if let Some(created) = term.created_at() {
                self.newest_term = self.newest_term.max(Some(created));
            }
            for entry in self.shaper.shape(term) {
                self.bucket_mut(entry.bucket).insert(entry.key, entry.value);
                written += 1;
            }
        }

        debug!(
            "{}: {} terms shaped into {} entries",
            self.language,
            terms.len(),
            written
        );
        written
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut BTreeMap<String, String> {
        match bucket {
            Bucket::InfoPlistEntries => &mut self.info_plist_entries,
            Bucket::SettingsBundle => &mut self.settings_bundle,
            Bucket::RegularTranslations => &mut self.regular_translations,
        }
    }

    /// Snapshot of everything added so far. Accumulated state is kept.
    pub fn finalize(&self) -> TranslationResult {
        TranslationResult {
            language_code: self.language.code().to_string(),
            info_plist_entries: self.info_plist_entries.clone(),
            settings_bundle: self.settings_bundle.clone(),
            regular_translations: self.regular_translations.clone(),
        }
    }
}
