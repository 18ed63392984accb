//! Field-of-view computation with recursive shadowcasting.

mod field;
pub use field::Field;

mod grid;
pub use grid::GridMap;

mod octant;
pub use octant::{dist_to, Octant, OCTANTS};

mod scan;

use rustc_hash::FxHashSet as HashSet;
