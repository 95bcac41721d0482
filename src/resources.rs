//! Bundled resource tables and the resolver seam.
//!
//! Cards reference their content through opaque ids rather than owning strings
//! or art directly. Resolution goes through the [`ResourceResolver`] trait so the
//! rendering code never depends on where the tables come from; the bundled
//! implementation is [`Resources`], which embeds everything in the binary.

pub mod art;
pub mod strings;

use crate::error::Result;

pub use art::ArtTable;
pub use strings::StringTable;

/// Opaque handle into the bundled string table.
///
/// The numeric content is an implementation detail of the tables; nothing
/// outside the resource layer interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringId(u16);

impl StringId {
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle into the bundled art table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtId(u16);

impl ArtId {
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Capability for resolving resource ids to their bundled content.
///
/// An id that does not resolve is a fatal [`crate::UpliftError::Resource`]
/// error; there is no retry or fallback at this layer.
pub trait ResourceResolver {
    /// Resolve a string id to its localized text
    fn string(&self, id: StringId) -> Result<&str>;

    /// Resolve an art id to its raw panel source
    fn art(&self, id: ArtId) -> Result<&str>;
}

/// Bundled resource tables: a locale-selected string table plus the static art table.
#[derive(Debug)]
pub struct Resources {
    strings: StringTable,
    art: ArtTable,
}

impl Resources {
    /// Load resources for a locale tag, with standard fallback (exact match,
    /// primary subtag, then the `en` default).
    pub fn load(locale: &str) -> Result<Self> {
        let strings = StringTable::for_locale(locale)?;
        log::debug!("loaded string table for locale '{}'", strings.locale());
        Ok(Self {
            strings,
            art: ArtTable::bundled(),
        })
    }

    /// Load resources for the default locale.
    pub fn with_default_locale() -> Result<Self> {
        Self::load(strings::DEFAULT_LOCALE)
    }

    /// The locale tag the string table actually resolved to.
    pub fn locale(&self) -> &str {
        self.strings.locale()
    }
}

impl ResourceResolver for Resources {
    fn string(&self, id: StringId) -> Result<&str> {
        self.strings.resolve(id)
    }

    fn art(&self, id: ArtId) -> Result<&str> {
        self.art.resolve(id)
    }
}
