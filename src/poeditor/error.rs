use crate::app::AppVariant;
use thiserror::Error;

/// Failures of a POEditor request.
#[derive(Debug, Error)]
pub enum PoEditorError {
    /// The API token has no access to the variant's project. Fatal for a run.
    #[error("You are missing permissions for {0}.app")]
    MissingPermission(AppVariant),

    /// The project has no term list for the language. Recoverable per language.
    #[error("No translations available for language '{0}'")]
    MissingTranslation(String),

    #[error("POEditor request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode POEditor response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("POEditor API error ({status}): {body}")]
    Http { status: u16, body: String },
}

impl PoEditorError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PoEditorError::MissingTranslation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_permission_message() {
        let err = PoEditorError::MissingPermission(AppVariant::Retail);
        assert_eq!(err.to_string(), "You are missing permissions for retail.app");
    }

    #[test]
    fn test_only_missing_translation_is_recoverable() {
        assert!(PoEditorError::MissingTranslation("de".to_string()).is_recoverable());
        assert!(!PoEditorError::MissingPermission(AppVariant::AdidasGlobal).is_recoverable());
        assert!(!PoEditorError::Http {
            status: 502,
            body: "Bad Gateway".to_string()
        }
        .is_recoverable());
    }

    #[test]
    fn test_http_error_message_format() {
        let err = PoEditorError::Http {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(err.to_string(), "POEditor API error (500): oops");
    }
}
