//! Card rendering: maps a [`codecard_core::ProfileSummary`] to a display
//! model and to a 400×500 vector document exportable as SVG.
//!
//! The renderer is pure: no I/O happens here. The document is built from
//! typed drawing primitives and serialized to SVG text only at the boundary
//! via [`VectorDocument::to_svg`], so layout properties can be asserted
//! without string matching.

mod document;
mod export;
mod model;

pub use document::{FontWeight, Shape, TextAnchor, VectorDocument};
pub use export::export;
pub use model::{render, CardModel, StatRow};

use codecard_core::Platform;

/// Canonical file name for an exported card.
#[must_use]
pub fn export_file_name(platform: Platform) -> String {
    format!("{platform}-profile-card.svg")
}
