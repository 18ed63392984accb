//! Utilities for hosting field of view on text maps.

mod ascii_map;
pub use ascii_map::{AsciiMap, DEFAULT_WALLS, START};

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;

/// Set with an efficient hash function.
pub use rustc_hash::FxHashSet as HashSet;
