//! Shared primitives: geometry types, keys, and the error taxonomy.

pub mod core;
pub mod error;
