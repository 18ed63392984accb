use glam::IVec2;

/// Read-only view of a grid that field of view is computed over.
///
/// The field of view code never stores the grid, it only queries it during
/// [`Field::compute`](crate::Field::compute).
pub trait GridMap {
    /// Whether the cell is part of the grid.
    fn in_bounds(&self, pos: IVec2) -> bool;

    /// Whether the cell blocks sight.
    ///
    /// Only called for cells where `in_bounds` is true, implementations can
    /// do whatever they want for cells outside the grid.
    fn is_opaque(&self, pos: IVec2) -> bool;

    /// Map a cell to the grid's own storage index.
    ///
    /// Not used by field of view, exists for callers who want a canonical
    /// index for a visible cell. Defaults to the cell coordinates themselves.
    fn index(&self, pos: IVec2) -> (i32, i32) {
        (pos.x, pos.y)
    }
}

impl<T: GridMap + ?Sized> GridMap for &T {
    fn in_bounds(&self, pos: IVec2) -> bool {
        (**self).in_bounds(pos)
    }

    fn is_opaque(&self, pos: IVec2) -> bool {
        (**self).is_opaque(pos)
    }

    fn index(&self, pos: IVec2) -> (i32, i32) {
        (**self).index(pos)
    }
}
