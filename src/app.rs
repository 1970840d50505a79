//! Application variants and their POEditor project identities.
//!
//! Every variant maps to exactly one POEditor project, and a sync only ever
//! reads that project. Derivative apps (Confirmed, Retail) also record the
//! main adidas project they were derived from.

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// The main adidas POEditor project, shared by most variants.
const ADIDAS_PROJECT_ID: u64 = 151_541;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppVariant {
    AdidasGlobal,
    AdidasChina,
    Confirmed,
    Retail,
    AppClip,
    FanaticsWidget,
}

impl AppVariant {
    pub const ALL: [AppVariant; 6] = [
        AppVariant::AdidasGlobal,
        AppVariant::AdidasChina,
        AppVariant::Confirmed,
        AppVariant::Retail,
        AppVariant::AppClip,
        AppVariant::FanaticsWidget,
    ];

    /// POEditor project id holding this variant's terms.
    pub fn project_id(&self) -> u64 {
        match self {
            AppVariant::AdidasGlobal
            | AppVariant::AdidasChina
            | AppVariant::AppClip
            | AppVariant::FanaticsWidget => ADIDAS_PROJECT_ID,
            AppVariant::Confirmed => 271_095,
            AppVariant::Retail => 437_363,
        }
    }

    /// Project this variant was derived from, if it is derivative.
    pub fn fallback_project_id(&self) -> Option<u64> {
        match self {
            AppVariant::AdidasGlobal
            | AppVariant::AdidasChina
            | AppVariant::AppClip
            | AppVariant::FanaticsWidget => None,
            AppVariant::Confirmed | AppVariant::Retail => Some(ADIDAS_PROJECT_ID),
        }
    }

    /// POEditor tags used to mark terms belonging to this variant.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            AppVariant::AppClip => &["appclip_v2"],
            AppVariant::FanaticsWidget => &["fanaticswidget"],
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppVariant::AdidasGlobal => "adidasGlobal",
            AppVariant::AdidasChina => "adidasChina",
            AppVariant::Confirmed => "confirmed",
            AppVariant::Retail => "retail",
            AppVariant::AppClip => "appClip",
            AppVariant::FanaticsWidget => "fanaticsWidget",
        }
    }

    /// Localization root relative to the project checkout.
    pub fn localization_path(&self) -> &'static str {
        match self {
            AppVariant::AdidasGlobal => "Apps/adidas/Resources/Localization",
            AppVariant::AdidasChina => "Apps/adidasChina/Resources/Localization",
            AppVariant::Confirmed => "Apps/Confirmed/Resources/Localization",
            AppVariant::Retail => "Apps/Retail/Resources/Localization",
            AppVariant::AppClip => "Clips/adidasClip/Resources/Localization",
            AppVariant::FanaticsWidget => "Extensions/adidasWidget/Resources/Localization",
        }
    }

    /// Settings bundle relative to the project checkout. Extensions have none.
    pub fn settings_path(&self) -> Option<&'static str> {
        match self {
            AppVariant::AdidasGlobal => Some("Apps/adidas/Resources/Settings.bundle"),
            AppVariant::AdidasChina => Some("Apps/adidasChina/Resources/Settings.bundle"),
            AppVariant::Confirmed => Some("Apps/Confirmed/Resources/Settings.bundle"),
            AppVariant::Retail => Some("Apps/Retail/Resources/Settings.bundle"),
            AppVariant::AppClip | AppVariant::FanaticsWidget => None,
        }
    }
}

impl fmt::Display for AppVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AppVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        for variant in AppVariant::ALL {
            if variant.name().eq_ignore_ascii_case(wanted) {
                return Ok(variant);
            }
        }
        bail!("Unknown app variant: '{}'", s)
    }
}
