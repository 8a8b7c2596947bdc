use crate::foundation::core::{ItemKey, Size};
use crate::foundation::error::{CobbleError, CobbleResult};

/// A provider of item counts and intrinsic item sizes.
///
/// This is the capability contract the layout engine resolves at call time,
/// replacing runtime introspection of a loosely-typed data source. All
/// methods are total: out-of-range keys yield a zero size rather than an
/// error, and zero sizes are tolerated throughout the packing pass.
pub trait ItemSource {
    /// Number of sections in the source.
    fn section_count(&self) -> usize;

    /// Number of items in the given section (0 for out-of-range sections).
    fn item_count(&self, section: usize) -> usize;

    /// Intrinsic (unscaled) size of the item at `key`.
    ///
    /// The original aspect ratio of this size is preserved when the item is
    /// fitted into a column.
    fn item_size(&self, key: ItemKey) -> Size;
}

impl<S: ItemSource + ?Sized> ItemSource for &S {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }

    fn item_size(&self, key: ItemKey) -> Size {
        (**self).item_size(key)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A concrete, order-preserving capture of intrinsic item sizes.
///
/// The manifest is a pure data model: it can be built programmatically or
/// deserialized from JSON, and it implements [`ItemSource`] directly.
/// Insertion order within a section is significant and determines placement
/// order.
pub struct SizeManifest {
    /// Item sizes, outer index = section, inner index = item.
    pub sections: Vec<Vec<Size>>,
}

impl SizeManifest {
    /// Build a manifest from nested per-section size lists.
    pub fn from_sections(sections: Vec<Vec<Size>>) -> Self {
        Self { sections }
    }

    /// Build a manifest holding a single section.
    pub fn single_section(sizes: Vec<Size>) -> Self {
        Self {
            sections: vec![sizes],
        }
    }

    /// Append a section to the end of the manifest.
    pub fn push_section(&mut self, sizes: Vec<Size>) {
        self.sections.push(sizes);
    }

    /// Total number of items across all sections.
    pub fn total_items(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json_str(json: &str) -> CobbleResult<Self> {
        serde_json::from_str(json).map_err(|e| CobbleError::serde(e.to_string()))
    }

    /// Serialize the manifest to a JSON string.
    pub fn to_json_string(&self) -> CobbleResult<String> {
        serde_json::to_string(self).map_err(|e| CobbleError::serde(e.to_string()))
    }
}

impl ItemSource for SizeManifest {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Vec::len)
    }

    fn item_size(&self, key: ItemKey) -> Size {
        self.sections
            .get(key.section)
            .and_then(|s| s.get(key.item))
            .copied()
            .unwrap_or(Size::ZERO)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/manifest.rs"]
mod tests;
