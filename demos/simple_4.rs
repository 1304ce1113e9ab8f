use grid_visualizer::{AstarSolver, NoopObserver, PathingGrid, Point, SearchEngine};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut pathing_grid = PathingGrid::build(3, 300);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    pathing_grid.set_start(start);
    pathing_grid.set_end(end);
    pathing_grid.set_barrier(Point::new(1, 1));
    pathing_grid.compute_adjacency();
    println!("{}", pathing_grid);
    let mut engine = SearchEngine::new(AstarSolver::new());
    let outcome = engine
        .run(&mut pathing_grid, start, end, &mut NoopObserver)
        .unwrap();
    println!("{}", pathing_grid);
    if let Some(path) = outcome.path() {
        println!("Path:");
        for p in path.cells() {
            println!("{:?}", p);
        }
    }
}
