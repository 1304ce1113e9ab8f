use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::cell::CellState;
use crate::observer::StepObserver;
use crate::pathing_grid::PathingGrid;
use crate::solver::manhattan_distance;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps a cell index to the index of the cell it was best reached from. Entries are kept in the
/// order cells were first discovered.
#[derive(Clone, Debug, Default)]
pub struct PredecessorMap(FxIndexMap<usize, usize>);

impl PredecessorMap {
    pub fn insert(&mut self, cell: usize, from: usize) {
        self.0.insert(cell, from);
    }
    pub fn get(&self, cell: usize) -> Option<usize> {
        self.0.get(&cell).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Cells in the order they were first reached.
    pub fn discovery_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }
}

/// A shortest path, ordered from start to end with both endpoints included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    pub fn new(cells: Vec<Point>) -> Path {
        Path { cells }
    }
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }
    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }
    /// Number of unit steps.
    pub fn cost(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }
    pub fn end(&self) -> Option<Point> {
        self.cells.last().copied()
    }
    /// Checks that every consecutive pair of cells is one 4-neighbour step apart.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| manhattan_distance(a, b) == 1)
    }
}

/// Walks a [PredecessorMap] back from the end cell, marking the route on the grid.
pub struct PathReconstructor<'a> {
    came_from: &'a PredecessorMap,
}

impl<'a> PathReconstructor<'a> {
    pub fn new(came_from: &'a PredecessorMap) -> PathReconstructor<'a> {
        PathReconstructor { came_from }
    }

    /// Follows predecessors from `end` until a cell without one (the start) is reached. Every
    /// visited cell is classified [CellState::Path] and reported to the observer, one step per
    /// cell. The returned [Path] is in start to end order.
    pub fn reconstruct<O>(&self, grid: &mut PathingGrid, end: usize, observer: &mut O) -> Path
    where
        O: StepObserver + ?Sized,
    {
        let mut trail = vec![end];
        let mut current = end;
        while let Some(previous) = self.came_from.get(current) {
            debug_assert!(
                trail.len() <= grid.cell_count(),
                "predecessor cycle at {current}"
            );
            current = previous;
            grid.classify(current, CellState::Path);
            observer.on_step(grid);
            trail.push(current);
        }
        trail.reverse();
        Path::new(trail.into_iter().map(|ix| grid.ix_to_point(ix)).collect())
    }
}
