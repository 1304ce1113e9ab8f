//! # grid_visualizer
//!
//! The core of a grid shortest-path visualizer. A square [PathingGrid] of cells holds the start,
//! the end and any number of barriers; a [SearchEngine] then runs
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) or
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) over it one expansion at a
//! time, classifying cells as Open, Closed and finally Path while a [StepObserver] gets to redraw
//! after every step. Movement is 4-directional with unit cost.
//!
//! Both algorithms are the same best-first search; only the [Heuristic] differs (Manhattan
//! distance for A*, zero for Dijkstra). Ties between equal priorities are broken by insertion
//! order, so a layout always produces the same search.
//!
//! Drawing, windows and input handling are left to the caller. [Editor] implements the
//! click-to-edit policy and [pixel_to_cell] the mapping from screen pixels to cells.
pub mod cell;
pub mod editor;
pub mod error;
pub mod frontier;
pub mod observer;
pub mod pathing_grid;
pub mod solver;

pub use cell::{Cell, CellState, Rgb};
pub use editor::{pixel_to_cell, Editor};
pub use error::{InvalidConfiguration, LayoutError};
pub use frontier::PriorityFrontier;
pub use grid_util::point::Point;
pub use observer::{CancelFlag, NoopObserver, StepObserver};
pub use pathing_grid::PathingGrid;
pub use solver::astar::AstarSolver;
pub use solver::dijkstra::DijkstraSolver;
pub use solver::engine::{SearchEngine, SearchOutcome, SearchStats};
pub use solver::reconstruct::{Path, PathReconstructor, PredecessorMap};
pub use solver::{manhattan_distance, Algorithm, Heuristic};
