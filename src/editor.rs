use grid_util::point::Point;
use log::{debug, info};

use crate::cell::CellState;
use crate::error::InvalidConfiguration;
use crate::observer::StepObserver;
use crate::pathing_grid::PathingGrid;
use crate::solver::engine::{SearchEngine, SearchOutcome};
use crate::solver::Heuristic;

/// Maps a pixel `(x, y)` of a square drawing area `width` pixels wide to the cell under it.
/// Cell `(row, col)` is drawn at pixel `(row * size, col * size)` with `size = width / rows`, so
/// rows advance along the x axis. Pixels in the truncated remainder past the last full cell map
/// to nothing, as does every pixel when a cell would be less than one pixel wide.
pub fn pixel_to_cell((x, y): (u32, u32), rows: usize, width: u32) -> Option<Point> {
    let size = u32::try_from(rows)
        .ok()
        .and_then(|r| width.checked_div(r))?;
    if size == 0 {
        return None;
    }
    let (row, col) = ((x / size) as usize, (y / size) as usize);
    if row < rows && col < rows {
        Some(Point::new(row as i32, col as i32))
    } else {
        None
    }
}

/// An editing session over a [PathingGrid], owning the click policy of the visualizer: the
/// first placed cell becomes the start, the next one the end and every later one a barrier.
/// Start and end are unique and never turned into barriers.
#[derive(Clone, Debug)]
pub struct Editor {
    grid: PathingGrid,
    pixel_width: u32,
    start: Option<Point>,
    end: Option<Point>,
}

impl Editor {
    pub fn new(rows: usize, pixel_width: u32) -> Editor {
        Editor {
            grid: PathingGrid::build(rows, pixel_width),
            pixel_width,
            start: None,
            end: None,
        }
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Applies the placement policy to `cell` and returns the state it received, if any.
    pub fn place(&mut self, cell: Point) -> Option<CellState> {
        if !self.grid.point_in_bounds(cell) {
            return None;
        }
        let state = if self.start.is_none() && self.end != Some(cell) {
            self.start = Some(cell);
            CellState::Start
        } else if self.end.is_none() && self.start != Some(cell) {
            self.end = Some(cell);
            CellState::End
        } else if self.start != Some(cell) && self.end != Some(cell) {
            CellState::Barrier
        } else {
            return None;
        };
        self.grid.set_state(cell, state);
        Some(state)
    }

    /// Resets `cell` to empty, forgetting it as start or end.
    pub fn erase(&mut self, cell: Point) {
        if !self.grid.point_in_bounds(cell) {
            return;
        }
        self.grid.reset(cell);
        if self.start == Some(cell) {
            self.start = None;
        } else if self.end == Some(cell) {
            self.end = None;
        }
    }

    /// Primary click: [place](Self::place) on the cell under the pixel.
    pub fn left_click(&mut self, pixel: (u32, u32)) -> Option<CellState> {
        let cell = pixel_to_cell(pixel, self.grid.rows(), self.pixel_width)?;
        self.place(cell)
    }

    /// Secondary click: [erase](Self::erase) the cell under the pixel.
    pub fn right_click(&mut self, pixel: (u32, u32)) -> Option<Point> {
        let cell = pixel_to_cell(pixel, self.grid.rows(), self.pixel_width)?;
        self.erase(cell);
        Some(cell)
    }

    /// Throws the layout away and starts over with an empty grid of the same size.
    pub fn clear(&mut self) {
        info!("Clearing {}x{} grid", self.grid.rows(), self.grid.rows());
        self.grid = PathingGrid::build(self.grid.rows(), self.pixel_width);
        self.start = None;
        self.end = None;
    }

    /// Runs `engine` on the current layout. Marks of an earlier search are wiped and adjacency is
    /// recomputed first, so barriers edited since the last run are honoured.
    pub fn search<H, O>(
        &mut self,
        engine: &mut SearchEngine<H>,
        observer: &mut O,
    ) -> Result<SearchOutcome, InvalidConfiguration>
    where
        H: Heuristic,
        O: StepObserver + ?Sized,
    {
        let start = self.start.ok_or(InvalidConfiguration::MissingStart)?;
        let end = self.end.ok_or(InvalidConfiguration::MissingEnd)?;
        self.grid.clear_search_marks();
        self.grid.compute_adjacency();
        debug!("Adjacency ready, starting search");
        engine.run(&mut self.grid, start, end, observer)
    }
}
