use bitflags::bitflags;
use glam::{ivec2, IVec2};

bitflags! {
    /// One of the eight 45 degree sectors around the origin.
    ///
    /// Scanning is always done in a canonical octant where `distance` grows
    /// along the x axis and `height` along the y axis, the flags describe how
    /// to reflect the canonical octant into this one.
    ///
    /// ```notrust
    ///    \ 7 | 5 /
    ///   3 \  |  / 2
    ///  ----- @ -----
    ///   1 /  |  \ 8
    ///    / 6 | 4 \
    /// ```
    ///
    /// Y axis grows downwards in the diagram. Octant 8 is the canonical one.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct Octant: u8 {
        /// Distance runs towards negative values.
        const FLIP_DISTANCE = 0b001;
        /// Height runs towards negative values.
        const FLIP_HEIGHT = 0b010;
        /// Distance is along the y axis and height along the x axis.
        const TRANSPOSE = 0b100;
    }
}

/// All octants in id order 1 to 8.
pub const OCTANTS: [Octant; 8] = [
    Octant::from_id(1),
    Octant::from_id(2),
    Octant::from_id(3),
    Octant::from_id(4),
    Octant::from_id(5),
    Octant::from_id(6),
    Octant::from_id(7),
    Octant::from_id(8),
];

impl Octant {
    /// Octant from the conventional 1 to 8 numbering.
    ///
    /// Only the three low bits of the id matter, so id 8 is the same as the
    /// untransformed octant 0.
    pub const fn from_id(id: u8) -> Self {
        Octant::from_bits_truncate(id)
    }

    /// Map distance and height in the canonical octant to an absolute grid
    /// position in this octant.
    ///
    /// Returns `None` if the position doesn't fit in `i32` coordinates.
    pub fn project(
        self,
        origin: IVec2,
        distance: i32,
        height: i32,
    ) -> Option<IVec2> {
        let d = if self.contains(Octant::FLIP_DISTANCE) {
            -distance
        } else {
            distance
        };
        let h = if self.contains(Octant::FLIP_HEIGHT) {
            -height
        } else {
            height
        };

        let (dx, dy) = if self.contains(Octant::TRANSPOSE) {
            (h, d)
        } else {
            (d, h)
        };
        Some(ivec2(origin.x.checked_add(dx)?, origin.y.checked_add(dy)?))
    }
}

/// Euclidean distance between two cells, truncated towards zero.
///
/// A cell at exactly `radius` is outside a field of view with that radius,
/// so the visible area comes out slightly smaller than the geometric disc.
pub fn dist_to(a: IVec2, b: IVec2) -> i32 {
    (a.as_i64vec2() - b.as_i64vec2()).as_dvec2().length() as i32
}
