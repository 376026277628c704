//! Input handling: CSV loading and normalization.

pub mod loader;
