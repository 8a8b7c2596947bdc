pub use kurbo::{Point, Rect, Size, Vec2};

/// Composite key identifying an item's position in the ordered input list.
///
/// Keys order section-major, then item-minor; placement follows this order
/// exactly and items are never reordered for packing efficiency.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemKey {
    /// Section index in the source.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl ItemKey {
    /// Build a key from a section index and an item index within it.
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
/// Layout margins in layout units.
pub struct Edges {
    /// Left inset.
    #[serde(default)]
    pub left: f64,
    /// Right inset.
    #[serde(default)]
    pub right: f64,
    /// Top inset.
    #[serde(default)]
    pub top: f64,
    /// Bottom inset.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Uniform margins on all four edges.
    pub fn uniform(inset: f64) -> Self {
        Self {
            left: inset,
            right: inset,
            top: inset,
            bottom: inset,
        }
    }

    /// Sum of the left and right insets.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}
