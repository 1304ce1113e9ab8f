use grid_util::point::Point;

use crate::solver::Heuristic;

/// Uniform-cost search: the zero heuristic turns the engine into plain Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl Heuristic for DijkstraSolver {
    fn estimate(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::CellState;
    use crate::observer::NoopObserver;
    use crate::pathing_grid::PathingGrid;
    use crate::solver::engine::SearchEngine;

    use super::*;

    /// With equal costs everywhere Dijkstra expands cells in rings around the start.
    #[test]
    fn expands_by_distance() {
        let mut grid = PathingGrid::build(5, 50);
        grid.compute_adjacency();
        let start = Point::new(2, 2);
        let mut order = Vec::new();
        let mut observer = |g: &PathingGrid| {
            let settled = g.count_state(CellState::Closed) + g.count_state(CellState::Path);
            order.push(settled);
        };
        let mut engine = SearchEngine::new(DijkstraSolver);
        engine
            .run(&mut grid, start, Point::new(0, 0), &mut observer)
            .unwrap();
        // Cells are closed after their observer call and the start is never closed, so the count
        // lags two expansions behind. Path cells were all closed before.
        assert_eq!(&order[..3], &[0, 0, 1]);
        assert!(order.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn estimate_is_zero() {
        assert_eq!(
            DijkstraSolver.estimate(&Point::new(0, 0), &Point::new(9, 9)),
            0
        );
    }
}
