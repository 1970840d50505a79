//! POEditor API access.
//!
//! - `model`: wire types, including the two-stage decoding of term content
//! - `client`: `reqwest` based client for `languages/available` and `terms/list`
//! - `error`: request failures, split into fatal and per-language recoverable

mod client;
mod error;
mod model;

pub use client::{PoEditorClient, DEFAULT_API_URL};
pub use error::PoEditorError;
pub use model::{AvailableLanguage, Envelope, PluralCategory, PluralForms, Term, TermContent};

use crate::app::AppVariant;
use crate::language::ServiceLanguage;
use async_trait::async_trait;

/// Source of remote terms for the sync run.
#[async_trait]
pub trait TermSource: Send + Sync {
    /// Languages enabled in the variant's project. Never fails on an empty list.
    async fn fetch_available_languages(
        &self,
        app: AppVariant,
    ) -> Result<Vec<AvailableLanguage>, PoEditorError>;

    /// Terms of `language` in an explicit project, reporting failures against `app`.
    async fn fetch_project_translations(
        &self,
        project_id: u64,
        app: AppVariant,
        language: &ServiceLanguage,
    ) -> Result<Vec<Term>, PoEditorError>;

    /// Terms of `language` in the variant's own project.
    async fn fetch_translations(
        &self,
        app: AppVariant,
        language: &ServiceLanguage,
    ) -> Result<Vec<Term>, PoEditorError> {
        self.fetch_project_translations(app.project_id(), app, language)
            .await
    }
}
