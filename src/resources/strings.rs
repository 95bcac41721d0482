//! Localized string tables bundled into the binary.
//!
//! Each locale ships as a TOML document under `assets/strings/` and is parsed
//! once at startup. Lookup is positional: a [`StringId`] indexes the
//! `affirmations` array of the selected bundle.

use crate::error::{Result, UpliftError};
use crate::resources::StringId;
use serde::Deserialize;

/// Locale used when no bundle matches the requested tag.
pub const DEFAULT_LOCALE: &str = "en";

/// Raw TOML bundles compiled into the binary, keyed by locale tag.
const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../assets/strings/en.toml")),
    ("es", include_str!("../../assets/strings/es.toml")),
];

#[derive(Debug, Deserialize)]
struct StringsFile {
    affirmations: Vec<String>,
}

/// A parsed, locale-selected string table.
#[derive(Debug)]
pub struct StringTable {
    locale: &'static str,
    entries: Vec<String>,
}

impl StringTable {
    /// Select and parse the bundle for a locale tag.
    ///
    /// Fallback mirrors standard resource lookup: exact tag match first, then
    /// the primary subtag (`en-US` -> `en`), then [`DEFAULT_LOCALE`].
    pub fn for_locale(tag: &str) -> Result<Self> {
        let (locale, raw) = lookup_bundle(tag);
        let parsed: StringsFile = toml::from_str(raw).map_err(|e| {
            UpliftError::string_table(format!("bundle '{locale}' is malformed: {e}"))
        })?;

        Ok(Self {
            locale,
            entries: parsed.affirmations,
        })
    }

    /// The locale tag this table resolved to.
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an id to its localized text.
    pub fn resolve(&self, id: StringId) -> Result<&str> {
        self.entries
            .get(id.index())
            .map(String::as_str)
            .ok_or_else(|| {
                UpliftError::resource(format!(
                    "string id {} out of range for locale '{}' ({} entries)",
                    id.index(),
                    self.locale,
                    self.entries.len()
                ))
            })
    }
}

fn lookup_bundle(tag: &str) -> (&'static str, &'static str) {
    let exact = BUNDLES.iter().find(|(locale, _)| *locale == tag);
    if let Some(&(locale, raw)) = exact {
        return (locale, raw);
    }

    // Primary subtag: "en-US" or "en_US" -> "en"
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or(tag)
        .to_ascii_lowercase();
    if let Some(&(locale, raw)) = BUNDLES.iter().find(|(locale, _)| *locale == primary) {
        return (locale, raw);
    }

    BUNDLES
        .iter()
        .find(|(locale, _)| *locale == DEFAULT_LOCALE)
        .copied()
        .expect("default locale bundle is always present")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_locale_match() {
        let table = StringTable::for_locale("es").unwrap();
        assert_eq!(table.locale(), "es");
        assert_eq!(table.resolve(StringId::new(0)).unwrap(), "Soy fuerte.");
    }

    #[test]
    fn test_primary_subtag_fallback() {
        let table = StringTable::for_locale("en-US").unwrap();
        assert_eq!(table.locale(), "en");

        let table = StringTable::for_locale("es_MX").unwrap();
        assert_eq!(table.locale(), "es");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        let table = StringTable::for_locale("fr").unwrap();
        assert_eq!(table.locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_resolve_out_of_range_is_error() {
        let table = StringTable::for_locale("en").unwrap();
        let err = table.resolve(StringId::new(table.len() as u16)).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_all_bundles_have_matching_lengths() {
        let lengths: Vec<usize> = BUNDLES
            .iter()
            .map(|(locale, _)| StringTable::for_locale(locale).unwrap().len())
            .collect();
        assert!(!lengths.is_empty());
        assert!(lengths.iter().all(|&len| len == lengths[0]));
    }
}
