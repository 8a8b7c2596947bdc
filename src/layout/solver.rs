use std::collections::BTreeMap;

use crate::{
    foundation::core::{Edges, ItemKey, Rect, Size},
    foundation::error::{CobbleError, CobbleResult},
    source::manifest::ItemSource,
};

/// Default minimum desirable column width, in layout units.
///
/// Calibrated as two columns at the smallest supported viewport width.
pub const DEFAULT_MINIMUM_COLUMN_WIDTH: f64 = 148.0;

/// Default inter-item spacing, in layout units.
pub const DEFAULT_SPACING: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tunable packing parameters.
///
/// Both values affect column count and column width; see
/// [`LayoutContext::column_count`] and [`LayoutContext::column_width`].
pub struct MasonryConfig {
    /// Minimum desirable column width. Columns never get narrower than this
    /// except when the viewport cannot fit even one such column.
    #[serde(default = "default_minimum_column_width")]
    pub minimum_column_width: f64,
    /// Fixed spacing between items, between columns, and above the first row.
    #[serde(default = "default_spacing")]
    pub spacing: f64,
}

fn default_minimum_column_width() -> f64 {
    DEFAULT_MINIMUM_COLUMN_WIDTH
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            minimum_column_width: DEFAULT_MINIMUM_COLUMN_WIDTH,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl MasonryConfig {
    /// Build a validated config.
    pub fn new(minimum_column_width: f64, spacing: f64) -> CobbleResult<Self> {
        let config = Self {
            minimum_column_width,
            spacing,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the config values are usable for a packing pass.
    pub fn validate(&self) -> CobbleResult<()> {
        if !self.minimum_column_width.is_finite() || self.minimum_column_width <= 0.0 {
            return Err(CobbleError::validation(
                "minimum_column_width must be finite and > 0",
            ));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(CobbleError::validation("spacing must be finite and >= 0"));
        }
        Ok(())
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> CobbleResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CobbleError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Immutable inputs for one packing pass.
///
/// Built once per pass from the presentation surface's current bounds and
/// margins; column derivations are pure functions of these fields.
pub struct LayoutContext {
    /// Viewport bounds size.
    pub viewport: Size,
    /// Layout margins around the packed grid.
    pub margins: Edges,
    /// Packing parameters.
    pub config: MasonryConfig,
}

impl LayoutContext {
    /// Build a context for one packing pass.
    pub fn new(viewport: Size, margins: Edges, config: MasonryConfig) -> Self {
        Self {
            viewport,
            margins,
            config,
        }
    }

    /// Horizontal extent available to columns, after margins.
    pub fn usable_width(&self) -> f64 {
        self.viewport.width - self.margins.horizontal()
    }

    /// Number of columns for this context, always at least one.
    pub fn column_count(&self) -> usize {
        let spacing = self.config.spacing;
        let raw = (self.usable_width() + spacing) / (self.config.minimum_column_width + spacing);
        if raw > 1.0 { raw.floor() as usize } else { 1 }
    }

    /// Width of each column.
    ///
    /// The formula is `(usable + spacing) / count - spacing`, treating the
    /// spacing as if it trailed every column. It does not solve the
    /// exact-fill equation; reference geometry depends on this literal form.
    pub fn column_width(&self) -> f64 {
        let spacing = self.config.spacing;
        (self.usable_width() + spacing) / self.column_count() as f64 - spacing
    }
}

/// Running fill state of one column during a packing pass.
#[derive(Clone, Copy, Debug)]
struct ColumnState {
    /// Vertical coordinate immediately below the last placed cell, plus
    /// spacing; the y origin of the next cell placed in this column.
    bottom: f64,
}

/// The immutable result of one packing pass.
///
/// Owned by the layout engine and replaced wholesale on each pass; consumers
/// read it but never mutate it. Serializes (sizes plus ordered key/frame
/// pairs) for snapshot tests.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ComputedLayout {
    /// Bounds size the layout was computed for, used for validity checks.
    bounds: Size,
    /// Content size containing all laid-out cells.
    content: Size,
    /// Cell frames for all items, keyed by composite key.
    #[serde(serialize_with = "frames_as_pairs")]
    frames: BTreeMap<ItemKey, Rect>,
}

fn frames_as_pairs<S>(frames: &BTreeMap<ItemKey, Rect>, ser: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    ser.collect_seq(frames.iter())
}

impl ComputedLayout {
    /// Content size containing all laid-out cells.
    ///
    /// The width spans the full viewport (margins are respected in cell
    /// placement, not subtracted from the scrollable area); the height is 0
    /// when the layout holds no items.
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Bounds size this layout was computed for.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Cell frame for the given key, if the key was present in the input.
    pub fn frame(&self, key: ItemKey) -> Option<Rect> {
        self.frames.get(&key).copied()
    }

    /// All cell frames intersecting `rect`, in key order.
    ///
    /// Edge-adjacent frames (zero-area overlap) are not reported; this is
    /// the filter a virtualized surface uses to realize only visible items.
    pub fn frames_in(&self, rect: Rect) -> Vec<(ItemKey, Rect)> {
        self.frames
            .iter()
            .filter(|(_, frame)| overlaps(**frame, rect))
            .map(|(key, frame)| (*key, *frame))
            .collect()
    }

    /// Number of laid-out items.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the layout holds no items.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether this layout remains valid for new bounds.
    ///
    /// Only the width matters: height changes (safe-area adjustments and the
    /// like) never invalidate a computed layout.
    pub fn is_valid_for(&self, new_bounds: Size) -> bool {
        self.bounds.width == new_bounds.width
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Compute a masonry layout for the given context and item source.
///
/// Pure and deterministic: same inputs, same geometry. Item sizes are
/// captured up front, once per item in key order, before any placement
/// decision. Every degenerate input (empty source, zero-size items, zero or
/// negative usable width) degrades to a defined output rather than erroring.
pub fn compute_layout(ctx: &LayoutContext, source: &impl ItemSource) -> ComputedLayout {
    let spacing = ctx.config.spacing;
    let column_width = ctx.column_width();

    let mut sizes = Vec::new();
    for section in 0..source.section_count() {
        for item in 0..source.item_count(section) {
            let key = ItemKey::new(section, item);
            sizes.push((key, source.item_size(key)));
        }
    }

    // The top inset before the first row equals the inter-item spacing.
    let mut columns = vec![ColumnState { bottom: spacing }; ctx.column_count()];
    let mut frames = BTreeMap::new();

    for (key, size) in sizes {
        // Scale the item to the column width, preserving aspect ratio.
        // A 1-unit floor on the source width avoids dividing by zero.
        let safe_width = size.width.max(1.0);
        let scale = column_width / safe_width;
        let raw_height = size.height * scale;
        // Extreme aspect ratios are clamped so no cell is shorter than the
        // spacing or taller than the viewport.
        let cell_height = raw_height.max(spacing).min(ctx.viewport.height);

        // Shortest column wins; ties go to the lowest column index.
        let mut target = 0;
        for (index, column) in columns.iter().enumerate().skip(1) {
            if column.bottom < columns[target].bottom {
                target = index;
            }
        }

        let x = ctx.margins.left + target as f64 * (column_width + spacing);
        let y = columns[target].bottom;
        let frame = Rect::from_origin_size((x, y), Size::new(column_width, cell_height));
        columns[target].bottom = frame.y1 + spacing;
        frames.insert(key, frame);
    }

    let content_height = if frames.is_empty() {
        0.0
    } else {
        columns.iter().map(|c| c.bottom).fold(0.0, f64::max)
    };

    ComputedLayout {
        bounds: ctx.viewport,
        content: Size::new(ctx.viewport.width, content_height),
        frames,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
