use smallvec::SmallVec;

/// Adjacency of a cell on a 4-grid never exceeds four entries.
pub const N_NEIGHBOURS: usize = 4;

pub type Neighbours = SmallVec<[usize; N_NEIGHBOURS]>;

/// Classification of a single cell. The engine writes [Open](CellState::Open),
/// [Closed](CellState::Closed) and [Path](CellState::Path) during a run, everything else is set
/// by whoever edits the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Open,
    Closed,
    Barrier,
    Start,
    End,
    Path,
}

/// An RGB triple from the window palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const ORANGE: Rgb = Rgb(255, 165, 0);
pub const TURQUOISE: Rgb = Rgb(64, 224, 208);
pub const PURPLE: Rgb = Rgb(128, 0, 128);
/// Colour of the separating lines drawn between cells.
pub const GRID_LINE: Rgb = Rgb(128, 128, 128);

impl CellState {
    /// Fill colour for a cell in this state.
    pub fn color(self) -> Rgb {
        match self {
            CellState::Empty => WHITE,
            CellState::Open => GREEN,
            CellState::Closed => RED,
            CellState::Barrier => BLACK,
            CellState::Start => ORANGE,
            CellState::End => TURQUOISE,
            CellState::Path => PURPLE,
        }
    }

    /// Single character used by the ASCII rendering of a grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Barrier => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Path => '*',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<CellState> {
        Some(match glyph {
            '.' => CellState::Empty,
            'o' => CellState::Open,
            'x' => CellState::Closed,
            '#' => CellState::Barrier,
            'S' => CellState::Start,
            'E' => CellState::End,
            '*' => CellState::Path,
            _ => return None,
        })
    }

    /// Marks written by a search run, as opposed to marks placed while editing.
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }

    /// Start and End are owned by the editor and never overwritten by a search.
    pub fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }
}

/// A cell of the [PathingGrid](crate::pathing_grid::PathingGrid) arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    /// Arena indices of the passable neighbours, valid after the last
    /// [compute_adjacency](crate::pathing_grid::PathingGrid::compute_adjacency).
    pub neighbours: Neighbours,
}

impl Cell {
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Open,
        CellState::Closed,
        CellState::Barrier,
        CellState::Start,
        CellState::End,
        CellState::Path,
    ];

    #[test]
    fn glyphs_map_back_to_states() {
        for state in ALL {
            assert_eq!(CellState::from_glyph(state.glyph()), Some(state));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn every_state_has_its_own_colour() {
        let colors = ALL.map(CellState::color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(CellState::Barrier.color(), BLACK);
        assert_eq!(CellState::Path.color(), PURPLE);
    }

    #[test]
    fn search_marks_and_endpoints_are_disjoint() {
        for state in ALL {
            assert!(!(state.is_search_mark() && state.is_endpoint()));
        }
        assert!(!CellState::Barrier.is_search_mark());
    }
}
