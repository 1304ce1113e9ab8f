use crate::cell::{Cell, CellState, Neighbours};
use crate::error::LayoutError;
use core::fmt;
use grid_util::point::Point;
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] owns an N×N arena of [Cell]s stored in row-major order, so the cell at
/// `(row, col)` lives at index `row * N + col`. Positions are [Point]s with `x` as the row and
/// `y` as the column. Besides the per-cell state it keeps the 4-neighbour adjacency used by the
/// search and a [UnionFind] structure over passable cells to answer reachability queries.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cell_size: u32,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    adjacency_stale: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::build(0, 0)
    }
}

impl PathingGrid {
    /// Allocates `rows`×`rows` empty cells. Each cell is `pixel_width / rows` pixels wide; the
    /// remainder of the division is left unused at the right and bottom edges.
    pub fn build(rows: usize, pixel_width: u32) -> PathingGrid {
        let cell_size = u32::try_from(rows)
            .ok()
            .and_then(|r| pixel_width.checked_div(r))
            .unwrap_or(0);
        let mut grid = PathingGrid {
            rows,
            cell_size,
            cells: vec![Cell::default(); rows * rows],
            components: UnionFind::new(rows * rows),
            components_dirty: false,
            adjacency_stale: true,
        };
        grid.generate_components();
        grid
    }

    /// Parses a square ASCII layout, one line per row. See [CellState::glyph] for the glyphs.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_layout(layout: &str, pixel_width: u32) -> Result<PathingGrid, LayoutError> {
        let lines = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        if lines.is_empty() {
            return Err(LayoutError::Empty);
        }
        let rows = lines.len();
        let mut grid = PathingGrid::build(rows, pixel_width);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != rows {
                return Err(LayoutError::NotSquare { row, len, rows });
            }
            for (col, glyph) in line.chars().enumerate() {
                let state = CellState::from_glyph(glyph)
                    .ok_or(LayoutError::UnknownGlyph { glyph, row, col })?;
                grid.cells[row * rows + col].state = state;
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Side length of a cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
    pub fn point_in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.rows && (p.y as usize) < self.rows
    }
    /// Arena index of an in-bounds point.
    pub fn get_ix_point(&self, p: &Point) -> usize {
        debug_assert!(self.point_in_bounds(*p));
        p.x as usize * self.rows + p.y as usize
    }
    pub fn ix(&self, p: Point) -> Option<usize> {
        self.point_in_bounds(p).then(|| self.get_ix_point(&p))
    }
    pub fn ix_to_point(&self, ix: usize) -> Point {
        Point::new((ix / self.rows) as i32, (ix % self.rows) as i32)
    }
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.ix(p).map(|ix| &self.cells[ix])
    }
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(|c| c.state)
    }
    pub(crate) fn state_ix(&self, ix: usize) -> CellState {
        self.cells[ix].state
    }
    /// Passable neighbours of `p` as of the last [compute_adjacency](Self::compute_adjacency).
    pub fn neighbours(&self, p: Point) -> SmallVec<[Point; 4]> {
        match self.cell(p) {
            Some(c) => c.neighbours.iter().map(|&n| self.ix_to_point(n)).collect(),
            None => SmallVec::new(),
        }
    }
    pub(crate) fn neighbour_ixs(&self, ix: usize) -> &[usize] {
        &self.cells[ix].neighbours
    }
    /// First cell in row-major order that is in the given state.
    pub fn find_state(&self, state: CellState) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| c.state == state)
            .map(|ix| self.ix_to_point(ix))
    }
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }
    /// True when barriers changed after the last [compute_adjacency](Self::compute_adjacency).
    pub fn adjacency_is_stale(&self) -> bool {
        self.adjacency_stale
    }

    pub fn set_barrier(&mut self, pos: Point) {
        self.set_state(pos, CellState::Barrier);
    }
    pub fn set_start(&mut self, pos: Point) {
        self.set_state(pos, CellState::Start);
    }
    pub fn set_end(&mut self, pos: Point) {
        self.set_state(pos, CellState::End);
    }
    pub fn reset(&mut self, pos: Point) {
        self.set_state(pos, CellState::Empty);
    }

    /// Updates a single cell. Unblocking a cell joins it with the components of its neighbours,
    /// blocking one flags the components as dirty since they may break apart. Both invalidate
    /// the adjacency.
    pub fn set_state(&mut self, pos: Point, state: CellState) {
        let Some(ix) = self.ix(pos) else {
            warn!(
                "Ignoring {:?} for {:?} outside the {}x{} grid",
                state, pos, self.rows, self.rows
            );
            return;
        };
        let was_barrier = self.cells[ix].is_barrier();
        let is_barrier = state == CellState::Barrier;
        self.cells[ix].state = state;
        if was_barrier != is_barrier {
            self.adjacency_stale = true;
            if is_barrier {
                self.components_dirty = true;
            } else {
                for n in self.passable_neighbours(ix) {
                    self.components.union(ix, n);
                }
            }
        }
    }

    /// Classification written by a search. Start and End cells keep their state.
    pub(crate) fn classify(&mut self, ix: usize, state: CellState) {
        debug_assert!(state.is_search_mark());
        let cell = &mut self.cells[ix];
        if !cell.state.is_endpoint() {
            cell.state = state;
        }
    }

    /// Resets every cell to [CellState::Empty].
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
        self.adjacency_stale = true;
        self.generate_components();
    }

    /// Removes Open, Closed and Path marks left by a previous search.
    pub fn clear_search_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.state.is_search_mark() {
                cell.state = CellState::Empty;
            }
        }
    }

    fn passable_neighbours(&self, ix: usize) -> Neighbours {
        let (row, col) = (ix / self.rows, ix % self.rows);
        let mut neighbours = Neighbours::new();
        // Down, up, right, left
        if row + 1 < self.rows {
            neighbours.push(ix + self.rows);
        }
        if row > 0 {
            neighbours.push(ix - self.rows);
        }
        if col + 1 < self.rows {
            neighbours.push(ix + 1);
        }
        if col > 0 {
            neighbours.push(ix - 1);
        }
        neighbours.retain(|n| !self.cells[*n].is_barrier());
        neighbours
    }

    /// Rebuilds the neighbour list of every cell, leaving out barriers and anything past the
    /// border. Must run after the last barrier edit and before a search.
    pub fn compute_adjacency(&mut self) {
        for ix in 0..self.cells.len() {
            self.cells[ix].neighbours = self.passable_neighbours(ix);
        }
        self.adjacency_stale = false;
        debug!("Computed adjacency for {} cells", self.cells.len());
        self.update();
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable 4-neighbours.
    pub fn generate_components(&mut self) {
        let n = self.cells.len();
        self.components = UnionFind::new(n);
        self.components_dirty = false;
        for ix in 0..n {
            if self.cells[ix].is_barrier() {
                continue;
            }
            // Linking forward (down and right) covers every edge once.
            for other in self.passable_neighbours(ix) {
                if other > ix {
                    self.components.union(ix, other);
                }
            }
        }
    }

    /// Checks if start and goal are on the same component. Barrier cells are never reachable.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.cell(*start), self.cell(*goal)) {
            (Some(a), Some(b)) if !a.is_barrier() && !b.is_barrier() => self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal)),
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.rows.max(1)) {
            let line = row.iter().map(|c| c.state.glyph()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
