//! Term classification and shaping.
//!
//! Each POEditor term lands in exactly one of three destinations: the
//! `InfoPlist.strings` entries, the Settings bundle `Root.strings`, or the
//! app's regular translations. Plural terms expand into one key per present
//! category, and every value is normalized for Apple string formatting.

use crate::poeditor::{PluralCategory, Term};
use anyhow::{bail, Result};
use regex::Regex;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::OnceLock;

/// Keys used specifically in the InfoPlist.strings file.
const INFO_PLIST_KEYS: &[&str] = &[
    "NSCameraUsageDescription",
    "NSLocationAlwaysAndWhenInUseUsageDescription",
    "NSLocationWhenInUseUsageDescription",
    "NSPhotoLibraryUsageDescription",
    "NFCReaderUsageDescription",
    "NSMicrophoneUsageDescription",
    "NSBluetoothPeripheralUsageDescription",
    "NSPhotoLibraryAddUsageDescription",
    "NSCalendarsUsageDescription",
    "NSBluetoothAlwaysUsageDescription",
    "NSUserTrackingUsageDescription",
    "LocationTemporaryUsageDescriptionUnbx",
    "LocationTemporaryUsageDescription",
    "NSContactsUsageDescription",
    "homescreen_shortcut_search",
    "homescreen_shortcut_new",
    "homescreen_shortcut_account",
    "homescreen_shortcut_store_finder",
    "homescreen_shortcut_order_status",
    "homescreen_shortcut_wishlist",
    "homescreen_shortcut_basket",
    "homescreen_shortcut_creators_pass",
    "RetailEventPreciseLocationReason",
];

/// Keys used specifically in the Root.strings file of the Settings bundle.
const SETTINGS_KEYS: &[&str] = &[
    "bundle_autoplay_videos_title",
    "bundle_autoplay_videos_footer",
    "bundle_acknowledgements",
];

static INFO_PLIST_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static SETTINGS_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static FORMAT_SPECIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Output destination of a shaped entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    InfoPlistEntries,
    SettingsBundle,
    RegularTranslations,
}

impl Bucket {
    /// Destination of a term key. Anything not reserved is a regular translation.
    pub fn for_key(key: &str) -> Bucket {
        let info_plist = INFO_PLIST_SET.get_or_init(|| INFO_PLIST_KEYS.iter().copied().collect());
        let settings = SETTINGS_SET.get_or_init(|| SETTINGS_KEYS.iter().copied().collect());

        if info_plist.contains(key) {
            Bucket::InfoPlistEntries
        } else if settings.contains(key) {
            Bucket::SettingsBundle
        } else {
            Bucket::RegularTranslations
        }
    }
}

/// Key suffix rendered for the `other` plural category.
///
/// `Legacy` writes `#many`, which is what existing app bundles were generated
/// with; `other` then overwrites a `many` value under the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtherSuffix {
    #[default]
    Legacy,
    Fixed,
}

impl FromStr for OtherSuffix {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "many" | "legacy" => Ok(OtherSuffix::Legacy),
            "other" | "fixed" => Ok(OtherSuffix::Fixed),
            _ => bail!("Invalid plural suffix for 'other': '{}' (expected 'many' or 'other')", s),
        }
    }
}

/// One shaped (bucket, key, value) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub bucket: Bucket,
    pub key: String,
    pub value: String,
}

/// Turns terms into bucketed, normalized entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermShaper {
    other_suffix: OtherSuffix,
}

impl TermShaper {
    pub fn new(other_suffix: OtherSuffix) -> Self {
        Self { other_suffix }
    }

    pub fn other_suffix(&self) -> OtherSuffix {
        self.other_suffix
    }

    /// Shape a single term into zero or more entries.
    ///
    /// Reserved keys (Info.plist, Settings) only take a single value; a
    /// pluralized or empty reserved term yields nothing.
    pub fn shape(&self, term: &Term) -> Vec<Entry> {
        let key = term.key();

        match Bucket::for_key(key) {
            bucket @ (Bucket::InfoPlistEntries | Bucket::SettingsBundle) => term
                .single_value()
                .map(|value| vec![entry(bucket, key.to_string(), value)])
                .unwrap_or_default(),
            Bucket::RegularTranslations => match term.plurals() {
                Some(forms) => forms
                    .present()
                    .map(|(category, value)| {
                        entry(
                            Bucket::RegularTranslations,
                            self.plural_key(key, category),
                            value,
                        )
                    })
                    .collect(),
                None => term
                    .single_value()
                    .map(|value| vec![entry(Bucket::RegularTranslations, key.to_string(), value)])
                    .unwrap_or_default(),
            },
        }
    }

    /// Output key for one plural category of `key`.
    pub fn plural_key(&self, key: &str, category: PluralCategory) -> String {
        let suffix = match (category, self.other_suffix) {
            (PluralCategory::One, _) => "one",
            (PluralCategory::Few, _) => "few",
            (PluralCategory::Many, _) | (PluralCategory::Other, OtherSuffix::Legacy) => "many",
            (PluralCategory::Other, OtherSuffix::Fixed) => "other",
        };
        format!("{}#{}", key, suffix)
    }
}

fn entry(bucket: Bucket, key: String, value: &str) -> Entry {
    Entry {
        bucket,
        key,
        value: normalize_value(value),
    }
}

/// Normalize a POEditor value for Apple `.strings` consumption.
///
/// Turns the escaped `\n` into a real newline and rewrites `%s` / `%1$s`
/// into `%@` / `%1$@`. Other specifiers (`%d`, `%.2f`, ...) are left alone.
pub fn normalize_value(raw: &str) -> String {
    let unescaped = raw.replace("\\n", "\n");
    let regex = FORMAT_SPECIFIER_REGEX
        .get_or_init(|| Regex::new(r"%(\d+\$)?s").expect("format specifier regex is valid"));
    regex.replace_all(&unescaped, "%${1}@").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poeditor::PluralForms;
    use proptest::prelude::*;

    fn full_plural(key: &str) -> Term {
        Term::plural(
            key,
            PluralForms::new()
                .with(PluralCategory::One, "one value")
                .with(PluralCategory::Few, "few value")
                .with(PluralCategory::Many, "many value")
                .with(PluralCategory::Other, "other value"),
        )
    }

    // ==================== Bucket Tests ====================

    #[test]
    fn test_bucket_for_info_plist_key() {
        assert_eq!(Bucket::for_key("NSCameraUsageDescription"), Bucket::InfoPlistEntries);
        assert_eq!(Bucket::for_key("homescreen_shortcut_basket"), Bucket::InfoPlistEntries);
    }

    #[test]
    fn test_bucket_for_settings_key() {
        assert_eq!(Bucket::for_key("bundle_acknowledgements"), Bucket::SettingsBundle);
    }

    #[test]
    fn test_bucket_for_regular_key() {
        assert_eq!(Bucket::for_key("checkout_title"), Bucket::RegularTranslations);
        // Membership is exact, not case-insensitive
        assert_eq!(Bucket::for_key("nscamerausagedescription"), Bucket::RegularTranslations);
    }

    #[test]
    fn test_key_sets_are_disjoint() {
        for key in SETTINGS_KEYS {
            assert!(!INFO_PLIST_KEYS.contains(key));
        }
    }

    // ==================== Shaping Tests ====================

    #[test]
    fn test_info_plist_term_yields_one_unsuffixed_entry() {
        let term = Term::single("NSCameraUsageDescription", "We need the camera");
        let entries = TermShaper::default().shape(&term);

        assert_eq!(
            entries,
            vec![Entry {
                bucket: Bucket::InfoPlistEntries,
                key: "NSCameraUsageDescription".to_string(),
                value: "We need the camera".to_string(),
            }]
        );
    }

    #[test]
    fn test_settings_term() {
        let term = Term::single("bundle_autoplay_videos_title", "Autoplay");
        let entries = TermShaper::default().shape(&term);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].bucket, Bucket::SettingsBundle);
        assert_eq!(entries[0].key, "bundle_autoplay_videos_title");
    }

    #[test]
    fn test_pluralized_reserved_term_is_skipped() {
        let entries = TermShaper::default().shape(&full_plural("NSContactsUsageDescription"));
        assert!(entries.is_empty());

        let entries = TermShaper::default().shape(&full_plural("bundle_acknowledgements"));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_reserved_term_is_skipped() {
        let entries = TermShaper::default().shape(&Term::single("NSCameraUsageDescription", ""));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_regular_single_term() {
        let entries = TermShaper::default().shape(&Term::single("greeting", "Hello %s"));
        assert_eq!(
            entries,
            vec![Entry {
                bucket: Bucket::RegularTranslations,
                key: "greeting".to_string(),
                value: "Hello %@".to_string(),
            }]
        );
    }

    #[test]
    fn test_regular_empty_single_term_is_skipped() {
        assert!(TermShaper::default().shape(&Term::single("greeting", "")).is_empty());
    }

    #[test]
    fn test_plural_legacy_suffixes() {
        let entries = TermShaper::default().shape(&full_plural("items"));
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();

        assert_eq!(keys, vec!["items#one", "items#few", "items#many", "items#many"]);
        assert_eq!(entries[3].value, "other value");
        assert!(entries.iter().all(|e| e.bucket == Bucket::RegularTranslations));
    }

    #[test]
    fn test_plural_fixed_suffixes() {
        let entries = TermShaper::new(OtherSuffix::Fixed).shape(&full_plural("items"));
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();

        assert_eq!(keys, vec!["items#one", "items#few", "items#many", "items#other"]);
    }

    #[test]
    fn test_plural_skips_absent_categories() {
        let term = Term::plural(
            "items",
            PluralForms::new()
                .with(PluralCategory::One, "%d item")
                .with(PluralCategory::Few, "")
                .with(PluralCategory::Other, "%d items"),
        );
        let entries = TermShaper::new(OtherSuffix::Fixed).shape(&term);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "items#one");
        assert_eq!(entries[1].key, "items#other");
        assert_eq!(entries[1].value, "%d items");
    }

    #[test]
    fn test_plural_key() {
        let shaper = TermShaper::default();
        assert_eq!(shaper.plural_key("k", PluralCategory::One), "k#one");
        assert_eq!(shaper.plural_key("k", PluralCategory::Other), "k#many");
    }

    // ==================== OtherSuffix Tests ====================

    #[test]
    fn test_other_suffix_from_str() {
        assert_eq!("many".parse::<OtherSuffix>().unwrap(), OtherSuffix::Legacy);
        assert_eq!("OTHER".parse::<OtherSuffix>().unwrap(), OtherSuffix::Fixed);
        assert!("few".parse::<OtherSuffix>().is_err());
    }

    #[test]
    fn test_other_suffix_default_is_legacy() {
        assert_eq!(OtherSuffix::default(), OtherSuffix::Legacy);
        assert_eq!(TermShaper::default().other_suffix(), OtherSuffix::Legacy);
    }

    // ==================== Normalization Tests ====================

    #[test]
    fn test_normalize_unescapes_newline() {
        assert_eq!(normalize_value(r"Line 1\nLine 2"), "Line 1\nLine 2");
    }

    #[test]
    fn test_normalize_rewrites_string_specifiers() {
        assert_eq!(normalize_value("Hi %s"), "Hi %@");
        assert_eq!(normalize_value("%1$s and %2$s"), "%1$@ and %2$@");
        assert_eq!(normalize_value("%12$s"), "%12$@");
    }

    #[test]
    fn test_normalize_leaves_other_specifiers() {
        assert_eq!(normalize_value("%d items for %.2f"), "%d items for %.2f");
        assert_eq!(normalize_value("%1$d of %2$@"), "%1$d of %2$@");
    }

    #[test]
    fn test_normalize_rewrites_every_occurrence() {
        assert_eq!(normalize_value("%s, %s\\n%s"), "%@, %@\n%@");
    }

    #[test]
    fn test_normalize_plain_text() {
        assert_eq!(normalize_value("Checkout"), "Checkout");
        assert_eq!(normalize_value(""), "");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in r"[a-z %$0-9sd@\\n]{0,40}") {
            let once = normalize_value(&raw);
            let twice = normalize_value(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalize_leaves_no_string_specifier(raw in r"[a-z %$0-9s]{0,40}") {
            let normalized = normalize_value(&raw);
            let regex = Regex::new(r"%(\d+\$)?s").unwrap();
            prop_assert!(!regex.is_match(&normalized));
        }
    }
}
