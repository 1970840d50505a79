//! Local app project layout.
//!
//! The sync only needs one thing from the checkout: the names of the
//! language folders under a variant's localization root.

use crate::app::AppVariant;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Localization path is invalid: {0}")]
    Invalid(PathBuf),

    #[error("Localization path does not exist: {0}")]
    Missing(PathBuf),

    #[error("Failed to read localization directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lists the language folder names present in the project.
pub trait LanguageCatalog {
    fn directory_names(&self) -> Result<Vec<String>, PathError>;
}

/// Localization folder of one app variant, e.g. `Apps/adidas/Resources/Localization`.
#[derive(Debug, Clone)]
pub struct LocalizationRoot {
    path: PathBuf,
}

impl LocalizationRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_app(project_root: &Path, app: AppVariant) -> Self {
        Self::new(project_root.join(app.localization_path()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the folder if needed and make sure it is a directory.
    pub fn ensure(&self) -> Result<&Path, PathError> {
        if self.path.as_os_str().is_empty() {
            return Err(PathError::Invalid(self.path.clone()));
        }

        // A failed create surfaces as Missing below
        if let Err(e) = fs::create_dir_all(&self.path) {
            debug!("Could not create {}: {}", self.path.display(), e);
        }

        if !self.path.is_dir() {
            return Err(PathError::Missing(self.path.clone()));
        }
        Ok(&self.path)
    }
}

impl LanguageCatalog for LocalizationRoot {
    /// Names of the sub-directories, sorted. Plain files are ignored.
    fn directory_names(&self) -> Result<Vec<String>, PathError> {
        let path = self.ensure()?;
        let io_error = |source| PathError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            if !entry.file_type().map_err(io_error)?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!("Skipping non UTF-8 folder name {:?}", raw),
            }
        }

        names.sort();
        Ok(names)
    }
}

/// The checkout root: two levels above the working directory, where the
/// tool is run from `Scripts/<tool>` inside the app repository.
pub fn default_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    cwd.ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no grandparent directory", cwd.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== LocalizationRoot Tests ====================

    #[test]
    fn test_for_app_joins_variant_path() {
        let root = LocalizationRoot::for_app(Path::new("/repo"), AppVariant::Retail);
        assert_eq!(root.path(), Path::new("/repo/Apps/Retail/Resources/Localization"));
    }

    #[test]
    fn test_ensure_creates_missing_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = LocalizationRoot::for_app(temp_dir.path(), AppVariant::AdidasGlobal);

        assert!(!root.path().exists());
        root.ensure().expect("Should create directory");
        assert!(root.path().is_dir());

        // Idempotent
        root.ensure().expect("Should succeed again");
    }

    #[test]
    fn test_ensure_empty_path_is_invalid() {
        let err = LocalizationRoot::new("").ensure().unwrap_err();
        assert!(matches!(err, PathError::Invalid(_)));
    }

    #[test]
    fn test_ensure_file_in_the_way_is_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file = temp_dir.path().join("Localization");
        fs::write(&file, "not a directory").unwrap();

        let err = LocalizationRoot::new(&file).ensure().unwrap_err();
        assert!(matches!(err, PathError::Missing(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    // ==================== directory_names Tests ====================

    #[test]
    fn test_directory_names_lists_only_directories_sorted() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for name in ["fr.lproj", "en.lproj", "zh-Hans.lproj"] {
            fs::create_dir(temp_dir.path().join(name)).unwrap();
        }
        fs::write(temp_dir.path().join(".DS_Store"), "").unwrap();

        let names = LocalizationRoot::new(temp_dir.path())
            .directory_names()
            .expect("Should list");

        assert_eq!(names, vec!["en.lproj", "fr.lproj", "zh-Hans.lproj"]);
    }

    #[test]
    fn test_directory_names_empty_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let names = LocalizationRoot::new(temp_dir.path().join("fresh"))
            .directory_names()
            .expect("Should list");
        assert!(names.is_empty());
    }

    // ==================== default_project_root Tests ====================

    #[test]
    fn test_default_project_root_is_grandparent_of_cwd() {
        let cwd = std::env::current_dir().unwrap();
        if let Some(expected) = cwd.ancestors().nth(2) {
            assert_eq!(default_project_root().unwrap(), expected);
        }
    }
}
