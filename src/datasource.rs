//! Fixed in-memory data source.
//!
//! The deck contents are a compile-time literal table pairing each string id
//! with its art id by shared index. Loading is pure and total: every call
//! returns a fresh sequence with identical content and order.

use crate::model::Affirmation;
use crate::resources::{ArtId, StringId};

/// Number of cards in the deck.
pub const AFFIRMATION_COUNT: usize = 10;

const RECORDS: [Affirmation; AFFIRMATION_COUNT] = [
    Affirmation::new(StringId::new(0), ArtId::new(0)),
    Affirmation::new(StringId::new(1), ArtId::new(1)),
    Affirmation::new(StringId::new(2), ArtId::new(2)),
    Affirmation::new(StringId::new(3), ArtId::new(3)),
    Affirmation::new(StringId::new(4), ArtId::new(4)),
    Affirmation::new(StringId::new(5), ArtId::new(5)),
    Affirmation::new(StringId::new(6), ArtId::new(6)),
    Affirmation::new(StringId::new(7), ArtId::new(7)),
    Affirmation::new(StringId::new(8), ArtId::new(8)),
    Affirmation::new(StringId::new(9), ArtId::new(9)),
];

/// Load the deck. Insertion order is rendering order.
pub fn load_affirmations() -> Vec<Affirmation> {
    RECORDS.to_vec()
}
