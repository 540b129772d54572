//! Naming for exported name cards.

use crate::types::GeneratedName;

/// File name for a card image: `soul-name-kim-seo-yeon.png`.
///
/// Whitespace runs in the romanized name become a single `-`, and the
/// result is lowercased.
#[must_use]
pub fn export_file_name(name: &GeneratedName) -> String {
    let slug = name
        .romanized_full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("soul-name-{slug}.png")
}
