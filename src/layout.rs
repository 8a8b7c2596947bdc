//! The masonry solver and its caching engine.

pub mod engine;
pub mod solver;
