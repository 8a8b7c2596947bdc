//! Cobble is a masonry-style grid layout engine for virtualized galleries.
//!
//! Given a viewport of known width, layout margins, and an ordered list of
//! items with arbitrary intrinsic aspect ratios, Cobble computes a
//! multi-column, greedy-packed "waterfall" layout that preserves each item's
//! aspect ratio and recomputes its column count responsively as the viewport
//! changes.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: an [`ItemSource`] (or the concrete [`SizeManifest`])
//!    supplies section/item counts and per-item intrinsic sizes
//! 2. **Compute**: [`compute_layout`] turns a [`LayoutContext`] plus an item
//!    source into an immutable [`ComputedLayout`]
//! 3. **Query**: a [`MasonryLayout`] engine owns the latest layout and
//!    answers content-size, per-item-frame, visible-region, and
//!    invalidation queries for a recycling presentation surface
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a packing pass is a pure function of its
//!   inputs; same sizes and bounds, same geometry.
//! - **Total over its domain**: no layout operation errors; empty sources,
//!   zero-size items, and zero-width viewports all degrade to defined
//!   outputs. Errors surface only at configuration and JSON boundaries.
//! - **One owned snapshot**: the engine replaces its computed layout
//!   wholesale each pass; queries never see a half-built layout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod layout;
mod source;

pub use foundation::core::{Edges, ItemKey, Point, Rect, Size, Vec2};
pub use foundation::error::{CobbleError, CobbleResult};
pub use layout::engine::MasonryLayout;
pub use layout::solver::{
    ComputedLayout, DEFAULT_MINIMUM_COLUMN_WIDTH, DEFAULT_SPACING, LayoutContext, MasonryConfig,
    compute_layout,
};
pub use source::manifest::{ItemSource, SizeManifest};
