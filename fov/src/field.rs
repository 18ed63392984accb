use glam::IVec2;

use crate::{scan::Scan, GridMap, HashSet, OCTANTS};

/// Set of cells visible from a point, reusable across computations.
///
/// ```
/// use fov::{Field, GridMap};
/// use glam::IVec2;
///
/// struct Open;
///
/// impl GridMap for Open {
///     fn in_bounds(&self, _: IVec2) -> bool { true }
///     fn is_opaque(&self, _: IVec2) -> bool { false }
/// }
///
/// let mut fov = Field::new();
/// fov.compute(&Open, [0, 0], 3);
/// assert!(fov.is_visible([2, 0]));
/// assert!(!fov.is_visible([3, 0]));
/// ```
#[derive(Clone, Default, Debug)]
pub struct Field {
    visible: HashSet<IVec2>,
    origin: Option<IVec2>,
    radius: i32,
}

impl Field {
    pub fn new() -> Self {
        Default::default()
    }

    /// Recompute the field of view from `origin` out to `radius`.
    ///
    /// Everything from the previous computation is discarded. The origin
    /// cell is always visible, even with a zero or negative radius.
    pub fn compute(
        &mut self,
        grid: &impl GridMap,
        origin: impl Into<IVec2>,
        radius: i32,
    ) {
        let origin = origin.into();

        self.visible.clear();
        self.origin = Some(origin);
        self.radius = radius;

        self.visible.insert(origin);
        for octant in OCTANTS {
            Scan {
                grid,
                origin,
                octant,
                radius,
            }
            .run(&mut self.visible);
        }

        log::trace!(
            "fov from {origin} radius {radius}: {} cells",
            self.visible.len()
        );
    }

    /// Whether the cell was seen in the latest computation.
    pub fn is_visible(&self, pos: impl Into<IVec2>) -> bool {
        self.visible.contains(&pos.into())
    }

    /// Origin of the latest computation, `None` if nothing has been computed
    /// yet.
    pub fn origin(&self) -> Option<IVec2> {
        self.origin
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Iterate the visible cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.visible.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl<'a> IntoIterator for &'a Field {
    type Item = IVec2;
    type IntoIter =
        std::iter::Copied<std::collections::hash_set::Iter<'a, IVec2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.visible.iter().copied()
    }
}
