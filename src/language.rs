//! Language codes in their two spellings.
//!
//! The app project names its localization folders with the platform spelling
//! (`en_US`, `fr.lproj`), while POEditor expects the service spelling
//! (`en-US`). Conversion is mechanical except for Simplified Chinese, which
//! Xcode calls `zh-Hans` and POEditor calls `zh-CN`.

use std::fmt;

const LPROJ_SUFFIX: &str = ".lproj";
const SIMPLIFIED_CHINESE_FOLDER: &str = "zh-hans";
const SIMPLIFIED_CHINESE_SERVICE: &str = "zh-CN";

/// A language code as used by the local app project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    code: String,
}

/// A language code as used by the POEditor API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceLanguage {
    code: String,
}

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Interpret a localization folder name such as `de.lproj` or `zh-Hans.lproj`.
    ///
    /// The name is ASCII-lowercased and the `.lproj` suffix dropped. The
    /// Simplified Chinese folder is mapped straight to its POEditor code.
    pub fn from_directory_name(name: &str) -> Self {
        let lowered = name.to_ascii_lowercase();
        let stripped = lowered.strip_suffix(LPROJ_SUFFIX).unwrap_or(&lowered);

        if stripped.replace('_', "-") == SIMPLIFIED_CHINESE_FOLDER {
            return Self::new(SIMPLIFIED_CHINESE_SERVICE);
        }
        Self::new(stripped)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn to_service(&self) -> ServiceLanguage {
        ServiceLanguage {
            code: self.code.replace('_', "-"),
        }
    }

    /// Lowercased language part, e.g. `en` for `en_US`.
    pub fn language_acronym(&self) -> String {
        primary_component(&self.code).to_ascii_lowercase()
    }

    /// Uppercased region part, e.g. `US` for `en_US`.
    pub fn country_acronym(&self) -> Option<String> {
        region_component(&self.code).map(|region| region.to_ascii_uppercase())
    }
}

impl ServiceLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Mechanical reverse of [`Language::to_service`].
    ///
    /// `zh-CN` becomes `zh_CN`, not `zh-Hans`: the folder lookup is one-way.
    pub fn to_platform(&self) -> Language {
        Language::new(self.code.replace('-', "_"))
    }
}

fn primary_component(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or_default()
}

fn region_component(code: &str) -> Option<&str> {
    let mut parts = code.split(['-', '_']);
    parts.next()?;
    parts.last().filter(|region| !region.is_empty())
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl fmt::Display for ServiceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
