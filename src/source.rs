//! Item sources: the capability contract the engine pulls sizes from.

pub mod manifest;
