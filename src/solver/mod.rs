use core::fmt;
use grid_util::point::Point;
use std::str::FromStr;

pub mod astar;
pub mod dijkstra;
pub mod engine;
pub mod reconstruct;

use astar::AstarSolver;
use dijkstra::DijkstraSolver;

/// Estimate of the remaining cost between two cells. The engine is optimal as long as the
/// estimate never exceeds the true number of unit steps.
pub trait Heuristic {
    fn estimate(&self, a: &Point, b: &Point) -> i32;
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    fn estimate(&self, a: &Point, b: &Point) -> i32 {
        (**self).estimate(a, b)
    }
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, a: &Point, b: &Point) -> i32 {
        (**self).estimate(a, b)
    }
}

/// Manhattan (L1) distance, the exact cost of an unobstructed 4-neighbour path.
#[inline]
pub fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// The search strategies a user can pick by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Astar,
    Dijkstra,
}

impl Algorithm {
    pub fn heuristic(self) -> Box<dyn Heuristic> {
        match self {
            Algorithm::Astar => Box::new(AstarSolver::new()),
            Algorithm::Dijkstra => Box::new(DijkstraSolver),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Astar => "astar",
            Algorithm::Dijkstra => "dijkstra",
        })
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a_star" | "a*" => Ok(Algorithm::Astar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(format!(
                "unknown algorithm {other:?}, expected astar or dijkstra"
            )),
        }
    }
}
