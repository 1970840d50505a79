//! Wire types for the POEditor v2 API.
//!
//! Every response carries a `response` envelope (`status`, `code`,
//! `message`). The `result` payload is only present when the call succeeded.

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Format POEditor uses for term timestamps, e.g. `2013-06-10T11:08:53+0000`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub status: String,
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl Envelope {
    pub fn is_forbidden(&self) -> bool {
        self.code == "403"
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguagesResponse {
    pub response: Envelope,
    pub result: Option<LanguagesResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguagesResult {
    #[serde(default)]
    pub languages: Vec<AvailableLanguage>,
}

/// A language enabled in a POEditor project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableLanguage {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TermsResponse {
    pub response: Envelope,
    pub result: Option<TermsResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TermsResult {
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// One translatable unit as returned by `terms/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    term: String,
    #[serde(default)]
    created: Option<String>,
    translation: TermTranslation,
}

#[derive(Debug, Clone, Deserialize)]
struct TermTranslation {
    content: TermContent,
    #[serde(default)]
    fuzzy: i64,
}

/// Grammatical number classes POEditor can return for a plural term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 4] = [
        PluralCategory::One,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];
}

/// Plural values keyed by category. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluralForms {
    one: Option<String>,
    few: Option<String>,
    many: Option<String>,
    other: Option<String>,
}

impl PluralForms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: PluralCategory, value: impl Into<String>) -> Self {
        let slot = match category {
            PluralCategory::One => &mut self.one,
            PluralCategory::Few => &mut self.few,
            PluralCategory::Many => &mut self.many,
            PluralCategory::Other => &mut self.other,
        };
        *slot = Some(value.into());
        self
    }

    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        let value = match category {
            PluralCategory::One => &self.one,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
            PluralCategory::Other => &self.other,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Present categories in `one, few, many, other` order.
    pub fn present(&self) -> impl Iterator<Item = (PluralCategory, &str)> + '_ {
        PluralCategory::ALL
            .into_iter()
            .filter_map(move |category| self.get(category).map(|value| (category, value)))
    }
}

/// The `content` of a translation: either plain text or plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermContent {
    Single(String),
    Plurals(PluralForms),
}

impl<'de> Deserialize<'de> for TermContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;

        if let Ok(text) = String::deserialize(&raw) {
            return Ok(TermContent::Single(text));
        }
        // Only a keyed object counts as plural forms; arrays would bind positionally
        if raw.is_object() {
            if let Ok(forms) = PluralForms::deserialize(&raw) {
                return Ok(TermContent::Plurals(forms));
            }
        }
        Err(de::Error::custom(format!(
            "translation content is neither a string nor plural forms: {}",
            raw
        )))
    }
}

impl Term {
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_content(key, TermContent::Single(value.into()))
    }

    pub fn plural(key: impl Into<String>, forms: PluralForms) -> Self {
        Self::with_content(key, TermContent::Plurals(forms))
    }

    fn with_content(key: impl Into<String>, content: TermContent) -> Self {
        Self {
            term: key.into(),
            created: None,
            translation: TermTranslation { content, fuzzy: 0 },
        }
    }

    pub fn key(&self) -> &str {
        &self.term
    }

    pub fn content(&self) -> &TermContent {
        &self.translation.content
    }

    pub fn has_plurals(&self) -> bool {
        matches!(self.translation.content, TermContent::Plurals(_))
    }

    /// The plain value, if the term is not pluralized and not empty.
    pub fn single_value(&self) -> Option<&str> {
        match &self.translation.content {
            TermContent::Single(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn plurals(&self) -> Option<&PluralForms> {
        match &self.translation.content {
            TermContent::Plurals(forms) => Some(forms),
            TermContent::Single(_) => None,
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        self.translation.fuzzy != 0
    }

    /// Creation time, when POEditor sent one in a parseable form.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.created
            .as_deref()
            .and_then(|raw| DateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok())
    }
}
