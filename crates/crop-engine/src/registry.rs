// File: crates/crop-engine/src/registry.rs
// Summary: Category colour lookup; total over all names with a solid black fallback.

use std::collections::BTreeMap;

use crate::color::Rgba;
use crate::crops::KnownCrop;

/// Colour used for names with no known or configured colour.
pub const FALLBACK_COLOR: Rgba = Rgba::BLACK;

/// Read-only name → colour mapping.
///
/// Lookup order: configured overrides, the built-in crop catalogue, then
/// [`FALLBACK_COLOR`]. Unknown names never fail.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryRegistry {
    overrides: BTreeMap<String, Rgba>,
}

impl CategoryRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn with_color(mut self, name: impl Into<String>, color: Rgba) -> Self {
        self.overrides.insert(name.into(), color);
        self
    }

    pub fn color_for(&self, name: &str) -> Rgba {
        if let Some(color) = self.overrides.get(name) {
            return *color;
        }
        match KnownCrop::from_name(name) {
            Some(crop) => crop.color(),
            None => FALLBACK_COLOR,
        }
    }
}
