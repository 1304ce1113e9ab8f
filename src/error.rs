use grid_util::point::Point;
use thiserror::Error;

/// Reasons a search is refused before it touches the grid.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("grid has zero rows")]
    EmptyGrid,
    #[error("no start cell has been placed")]
    MissingStart,
    #[error("no end cell has been placed")]
    MissingEnd,
    #[error("start and end are the same cell {0:?}")]
    StartIsEnd(Point),
    #[error("{point:?} lies outside the {rows}x{rows} grid")]
    OutOfBounds { point: Point, rows: usize },
    #[error("{0:?} is a barrier and cannot be a search endpoint")]
    BlockedEndpoint(Point),
    #[error("barriers changed since adjacency was last computed")]
    StaleAdjacency,
}

/// Errors while parsing an ASCII grid layout.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has {len} cells but the layout has {rows} rows")]
    NotSquare { row: usize, len: usize, rows: usize },
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}
