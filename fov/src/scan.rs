use glam::IVec2;

use crate::{dist_to, GridMap, HashSet, Octant};

/// Recursive shadowcasting pass over a single octant.
///
/// The fields stay fixed for the whole pass, recursion only varies the
/// distance and the slopes bounding the wedge still being looked into.
pub(crate) struct Scan<'a, G> {
    pub grid: &'a G,
    pub origin: IVec2,
    pub octant: Octant,
    pub radius: i32,
}

impl<G: GridMap> Scan<'_, G> {
    /// Scan the whole octant, adding seen cells to `visible`.
    pub fn run(&self, visible: &mut HashSet<IVec2>) {
        self.scan(visible, 1, 0.0, 1.0);
    }

    fn scan(
        &self,
        visible: &mut HashSet<IVec2>,
        distance: i32,
        mut low_slope: f64,
        high_slope: f64,
    ) {
        if distance > self.radius {
            return;
        }

        // Round half up, not half to even, the edge cells depend on it.
        let d = distance as f64;
        let low = (low_slope * d + 0.5).floor() as i32;
        let high = (high_slope * d + 0.5).floor() as i32;

        // Previous cell on this row was see-through.
        let mut in_gap = false;

        for height in low..=high {
            // Cells past the edge of the coordinate space are out of bounds.
            let pos = self
                .octant
                .project(self.origin, distance, height)
                .filter(|&p| self.grid.in_bounds(p));

            // Walls get marked too, they just hide what's behind them.
            if let Some(p) = pos {
                if dist_to(self.origin, p) < self.radius {
                    visible.insert(p);
                }
            }

            let h = height as f64;
            if pos.map_or(true, |p| self.grid.is_opaque(p)) {
                if in_gap {
                    // Gap closes here, look further into it.
                    self.scan(visible, distance + 1, low_slope, (h - 0.5) / d);
                }
                low_slope = (h + 0.5) / d;
                in_gap = false;
            } else {
                in_gap = true;
                if height == high {
                    self.scan(visible, distance + 1, low_slope, high_slope);
                }
            }
        }
    }
}
