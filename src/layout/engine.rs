use crate::{
    foundation::core::{Edges, ItemKey, Rect, Size},
    layout::solver::{ComputedLayout, LayoutContext, MasonryConfig, compute_layout},
    source::manifest::ItemSource,
};

#[derive(Clone, Debug, Default)]
/// Caching front-end over the masonry solver.
///
/// The engine owns at most one [`ComputedLayout`] at a time. Each call to
/// [`MasonryLayout::prepare`] builds a complete new layout before swapping it
/// in, so queries never observe a partially computed pass. The engine is
/// synchronous and performs no internal locking; callers invoking it from
/// more than one thread must serialize access themselves.
pub struct MasonryLayout {
    config: MasonryConfig,
    computed: Option<ComputedLayout>,
}

impl MasonryLayout {
    /// Build an engine with the given packing parameters.
    pub fn new(config: MasonryConfig) -> Self {
        Self {
            config,
            computed: None,
        }
    }

    /// The engine's packing parameters.
    pub fn config(&self) -> MasonryConfig {
        self.config
    }

    #[tracing::instrument(skip(self, source))]
    /// Recompute the layout for the current bounds, margins, and items.
    ///
    /// The previous layout is discarded unconditionally; the engine keeps no
    /// diffing state, so any item-list change requires a full pass. Call this
    /// whenever the presentation surface's data changes or
    /// [`MasonryLayout::should_invalidate`] reports the bounds moved.
    pub fn prepare(&mut self, viewport: Size, margins: Edges, source: &impl ItemSource) {
        let ctx = LayoutContext::new(viewport, margins, self.config);
        self.computed = Some(compute_layout(&ctx, source));
    }

    /// Drop the cached layout, e.g. when the item list changed and fresh
    /// bounds are not yet known.
    pub fn invalidate(&mut self) {
        self.computed = None;
    }

    /// Content size for the scrollable area, or zero if nothing is computed.
    pub fn content_size(&self) -> Size {
        self.computed
            .as_ref()
            .map_or(Size::ZERO, ComputedLayout::content_size)
    }

    /// Cell frame for one item, if a layout is computed and the key exists.
    pub fn item_frame(&self, key: ItemKey) -> Option<Rect> {
        self.computed.as_ref().and_then(|layout| layout.frame(key))
    }

    /// Cell frames intersecting the queried region, in key order.
    ///
    /// Empty when no layout has been computed yet; that state is an explicit
    /// empty result, not an error.
    pub fn items_in(&self, rect: Rect) -> Vec<(ItemKey, Rect)> {
        self.computed
            .as_ref()
            .map_or_else(Vec::new, |layout| layout.frames_in(rect))
    }

    /// Whether a bounds change requires a new packing pass.
    ///
    /// True when no layout is cached, or when the new width differs from the
    /// width the cached layout was computed for. Height-only changes return
    /// false.
    pub fn should_invalidate(&self, new_bounds: Size) -> bool {
        match &self.computed {
            Some(layout) => !layout.is_valid_for(new_bounds),
            None => true,
        }
    }

    /// The most recently computed layout, if any.
    pub fn computed(&self) -> Option<&ComputedLayout> {
        self.computed.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
