use grid_util::point::Point;

use crate::solver::{manhattan_distance, Heuristic};

/// A* guidance using the Manhattan distance, which is admissible and consistent for unit-cost
/// 4-neighbour movement.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the estimate. Values above 1.0 give Weighted A*, which tends to expand fewer cells
    /// but may return longer paths.
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Heuristic for AstarSolver {
    /// Just the Manhattan distance times the heuristic factor.
    fn estimate(&self, a: &Point, b: &Point) -> i32 {
        (manhattan_distance(a, b) as f32 * self.heuristic_factor) as i32
    }
}
