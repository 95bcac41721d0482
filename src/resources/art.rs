//! ASCII-art panels bundled into the binary.
//!
//! The terminal counterpart of a drawable table: fixed panels embedded with
//! `include_str!` and addressed positionally by [`ArtId`]. Scaling and cropping
//! are rendering concerns and live in the card renderer, not here.

use crate::error::{Result, UpliftError};
use crate::resources::ArtId;

/// Raw panel sources in table order.
const PANELS: &[&str] = &[
    include_str!("../../assets/art/sprout.txt"),
    include_str!("../../assets/art/mountains.txt"),
    include_str!("../../assets/art/shore.txt"),
    include_str!("../../assets/art/sunrise.txt"),
    include_str!("../../assets/art/forest.txt"),
    include_str!("../../assets/art/stars.txt"),
    include_str!("../../assets/art/river.txt"),
    include_str!("../../assets/art/meadow.txt"),
    include_str!("../../assets/art/moon.txt"),
    include_str!("../../assets/art/path.txt"),
];

/// The static art table.
#[derive(Debug)]
pub struct ArtTable {
    panels: &'static [&'static str],
}

impl ArtTable {
    /// The table compiled into this binary.
    pub fn bundled() -> Self {
        Self { panels: PANELS }
    }

    /// Number of panels in the table.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Resolve an id to the raw panel source.
    pub fn resolve(&self, id: ArtId) -> Result<&'static str> {
        self.panels.get(id.index()).copied().ok_or_else(|| {
            UpliftError::resource(format!(
                "art id {} out of range ({} panels)",
                id.index(),
                self.panels.len()
            ))
        })
    }
}
