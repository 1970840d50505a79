use super::error::PoEditorError;
use super::model::{AvailableLanguage, LanguagesResponse, Term, TermsResponse};
use super::TermSource;
use crate::app::AppVariant;
use crate::language::ServiceLanguage;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.poeditor.com/v2";

#[derive(Debug, Clone, Copy)]
enum Endpoint {
    AvailableLanguages,
    Terms,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::AvailableLanguages => "/languages/available",
            Endpoint::Terms => "/terms/list",
        }
    }
}

/// POEditor API client.
///
/// Holds the access token and a shared `reqwest::Client`; cloning is cheap
/// and clones share the connection pool. Requests are never retried.
#[derive(Debug, Clone)]
pub struct PoEditorClient {
    http: reqwest::Client,
    api_url: String,
    api_token: String,
}

impl PoEditorClient {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            api_token: api_token.into(),
        }
    }

    /// Point the client at another base URL (mock servers, proxies).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn post<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        form: &[(&str, String)],
    ) -> Result<T, PoEditorError> {
        let url = format!("{}{}", self.api_url, endpoint.path());
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => Err(PoEditorError::Http {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(PoEditorError::Decode(e)),
        }
    }
}

#[async_trait]
impl TermSource for PoEditorClient {
    async fn fetch_available_languages(
        &self,
        app: AppVariant,
    ) -> Result<Vec<AvailableLanguage>, PoEditorError> {
        let form = [
            ("api_token", self.api_token.clone()),
            ("id", app.project_id().to_string()),
        ];

        let response: LanguagesResponse = self.post(Endpoint::AvailableLanguages, &form).await?;
        if response.result.is_none() {
            warn!(
                "No language list for {} ({}): {}",
                app, response.response.code, response.response.message
            );
        }

        Ok(response
            .result
            .map(|result| result.languages)
            .unwrap_or_default())
    }

    async fn fetch_project_translations(
        &self,
        project_id: u64,
        app: AppVariant,
        language: &ServiceLanguage,
    ) -> Result<Vec<Term>, PoEditorError> {
        let form = [
            ("api_token", self.api_token.clone()),
            ("id", project_id.to_string()),
            ("language", language.code().to_string()),
        ];

        let response: TermsResponse = self.post(Endpoint::Terms, &form).await?;
        match response.result {
            Some(result) => Ok(result.terms),
            None if response.response.is_forbidden() => Err(PoEditorError::MissingPermission(app)),
            None => Err(PoEditorError::MissingTranslation(language.code().to_string())),
        }
    }
}
