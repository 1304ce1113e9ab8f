use grid_util::point::Point;
use log::{debug, info};
use smallvec::SmallVec;

use crate::cell::{CellState, N_NEIGHBOURS};
use crate::error::InvalidConfiguration;
use crate::frontier::PriorityFrontier;
use crate::observer::{CancelFlag, StepObserver};
use crate::pathing_grid::PathingGrid;
use crate::solver::reconstruct::{Path, PathReconstructor, PredecessorMap};
use crate::solver::Heuristic;

/// Cost of a cell that has not been reached.
pub const INFINITY: i32 = i32::MAX;

/// Best known `g_score` and `f_score` per arena index.
#[derive(Clone, Debug)]
pub struct CostMap {
    g_score: Vec<i32>,
    f_score: Vec<i32>,
}

impl CostMap {
    pub fn new(cell_count: usize) -> CostMap {
        CostMap {
            g_score: vec![INFINITY; cell_count],
            f_score: vec![INFINITY; cell_count],
        }
    }
    pub fn g(&self, cell: usize) -> i32 {
        self.g_score[cell]
    }
    pub fn f(&self, cell: usize) -> i32 {
        self.f_score[cell]
    }
    pub fn set(&mut self, cell: usize, g: i32, f: i32) {
        self.g_score[cell] = g;
        self.f_score[cell] = f;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    PathFound(Path),
    /// The frontier ran dry; the end is walled off from the start.
    NoPathExists,
    /// The [CancelFlag] was raised during the run.
    Cancelled,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            _ => None,
        }
    }
    pub fn is_found(&self) -> bool {
        self.path().is_some()
    }
}

/// Counters of the last run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier, the end cell included.
    pub expanded: usize,
    /// Frontier pushes, one per cell made pending.
    pub enqueued: usize,
    /// Observer invocations.
    pub steps: usize,
}

struct CountingObserver<'a, O: ?Sized> {
    inner: &'a mut O,
    steps: usize,
}

impl<O: StepObserver + ?Sized> StepObserver for CountingObserver<'_, O> {
    fn on_step(&mut self, grid: &PathingGrid) {
        self.steps += 1;
        self.inner.on_step(grid);
    }
}

/// Best-first search over a [PathingGrid] with unit edge costs. The heuristic decides the
/// strategy: Manhattan distance gives A*, the zero heuristic gives Dijkstra.
pub struct SearchEngine<H> {
    heuristic: H,
    cancel: CancelFlag,
    stats: SearchStats,
}

impl<H: Heuristic> SearchEngine<H> {
    pub fn new(heuristic: H) -> SearchEngine<H> {
        SearchEngine {
            heuristic,
            cancel: CancelFlag::new(),
            stats: SearchStats::default(),
        }
    }

    /// Shares an existing flag, e.g. one that a quit handler raises.
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> SearchEngine<H> {
        self.cancel = cancel;
        self
    }
    pub fn cancel_flag(&self) -> &CancelFlag {
        &self.cancel
    }
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn validate(
        &self,
        grid: &PathingGrid,
        start: Point,
        end: Point,
    ) -> Result<(usize, usize), InvalidConfiguration> {
        if grid.rows() == 0 {
            return Err(InvalidConfiguration::EmptyGrid);
        }
        let index = |point: Point| {
            grid.ix(point).ok_or(InvalidConfiguration::OutOfBounds {
                point,
                rows: grid.rows(),
            })
        };
        let (s, e) = (index(start)?, index(end)?);
        if s == e {
            return Err(InvalidConfiguration::StartIsEnd(start));
        }
        for (ix, point) in [(s, start), (e, end)] {
            if grid.state_ix(ix) == CellState::Barrier {
                return Err(InvalidConfiguration::BlockedEndpoint(point));
            }
        }
        if grid.adjacency_is_stale() {
            return Err(InvalidConfiguration::StaleAdjacency);
        }
        Ok((s, e))
    }

    /// Searches a shortest path from `start` to `end`.
    ///
    /// Every iteration pops the frontier cell with the lowest `f_score` (earliest push on ties),
    /// relaxes its neighbours, calls the observer, checks the cancel flag and finally marks the
    /// cell Closed. Newly discovered cells are marked Open. Once the end is popped the path is
    /// traced back by [PathReconstructor], with one more observer call per path cell.
    ///
    /// The grid must have fresh adjacency (see
    /// [compute_adjacency](PathingGrid::compute_adjacency)). Start and End cells are never
    /// reclassified. A cancelled run leaves its Open/Closed marks in place.
    pub fn run<O>(
        &mut self,
        grid: &mut PathingGrid,
        start: Point,
        end: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome, InvalidConfiguration>
    where
        O: StepObserver + ?Sized,
    {
        let (s, e) = self.validate(grid, start, end)?;
        info!(
            "Searching {:?} -> {:?} on a {}x{} grid",
            start,
            end,
            grid.rows(),
            grid.rows()
        );
        let mut observer = CountingObserver {
            inner: observer,
            steps: 0,
        };
        let mut stats = SearchStats::default();
        let outcome = self.search(grid, (s, e), end, &mut observer, &mut stats);
        stats.steps = observer.steps;
        self.stats = stats;
        match &outcome {
            SearchOutcome::PathFound(path) => info!(
                "Found a path of cost {} after expanding {} cells",
                path.cost(),
                stats.expanded
            ),
            SearchOutcome::NoPathExists => info!(
                "{:?} is not reachable from {:?}, expanded {} cells",
                end, start, stats.expanded
            ),
            SearchOutcome::Cancelled => {
                info!("Search cancelled after {} steps", stats.steps)
            }
        }
        Ok(outcome)
    }

    /// `g + h`, saturating so an oversized estimate cannot wrap around to a small priority.
    fn priority(&self, grid: &PathingGrid, g: i32, ix: usize, end: &Point) -> i32 {
        let h = self.heuristic.estimate(&grid.ix_to_point(ix), end);
        g.saturating_add(h)
    }

    fn search<O>(
        &self,
        grid: &mut PathingGrid,
        (s, e): (usize, usize),
        end: Point,
        observer: &mut O,
        stats: &mut SearchStats,
    ) -> SearchOutcome
    where
        O: StepObserver + ?Sized,
    {
        let mut costs = CostMap::new(grid.cell_count());
        let mut came_from = PredecessorMap::default();
        let mut frontier = PriorityFrontier::new();

        costs.set(s, 0, self.priority(grid, 0, s, &end));
        frontier.push(costs.f(s), s);
        stats.enqueued += 1;

        loop {
            let Some((_, current)) = frontier.pop_min() else {
                break SearchOutcome::NoPathExists;
            };
            stats.expanded += 1;

            if current == e {
                let reconstructor = PathReconstructor::new(&came_from);
                let path = reconstructor.reconstruct(grid, e, observer);
                break SearchOutcome::PathFound(path);
            }

            let tentative_g = costs.g(current) + 1;
            let neighbours =
                SmallVec::<[usize; N_NEIGHBOURS]>::from_slice(grid.neighbour_ixs(current));
            for neighbour in neighbours {
                if tentative_g >= costs.g(neighbour) {
                    continue;
                }
                came_from.insert(neighbour, current);
                let f = self.priority(grid, tentative_g, neighbour, &end);
                costs.set(neighbour, tentative_g, f);
                // A pending cell keeps its queued entry and priority.
                if !frontier.contains(neighbour) {
                    frontier.push(f, neighbour);
                    stats.enqueued += 1;
                    grid.classify(neighbour, CellState::Open);
                }
            }

            observer.on_step(grid);
            if self.cancel.is_cancelled() {
                debug!("Cancel flag raised with {} cells pending", frontier.len());
                break SearchOutcome::Cancelled;
            }

            if current != s {
                grid.classify(current, CellState::Closed);
            }
        }
    }
}
