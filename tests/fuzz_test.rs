/// Fuzzes the search by checking for many random grids that a path is found exactly when the end
/// is on the same connected component as the start, and that A* and Dijkstra agree on its cost.
use grid_visualizer::{
    AstarSolver, DijkstraSolver, NoopObserver, PathingGrid, Point, SearchEngine, SearchOutcome,
};
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng, start: Point, end: Point) -> PathingGrid {
    let mut pathing_grid = PathingGrid::build(n, 10 * n as u32);
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            if rng.gen_bool(0.4) {
                pathing_grid.set_barrier(Point::new(x, y));
            }
        }
    }
    pathing_grid.set_start(start);
    pathing_grid.set_end(end);
    pathing_grid.compute_adjacency();
    pathing_grid
}

fn random_grid_point(n: usize, rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..n) as i32, rng.gen_range(0..n) as i32)
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let mut engine = SearchEngine::new(AstarSolver::new());
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, &mut rng, start, end);
        let reachable = random_grid.reachable(&start, &end);
        let outcome = engine
            .run(&mut random_grid, start, end, &mut NoopObserver)
            .unwrap();
        // Show the grid if the outcome disagrees with the components
        if outcome.is_found() != reachable {
            println!("{random_grid}");
        }
        assert_eq!(outcome.is_found(), reachable);
        if !reachable {
            assert_eq!(outcome, SearchOutcome::NoPathExists);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let mut astar = SearchEngine::new(AstarSolver::new());
    let mut dijkstra = SearchEngine::new(DijkstraSolver);

    for _ in 0..N_GRIDS {
        let start = random_grid_point(N, &mut rng);
        let end = random_grid_point(N, &mut rng);
        if start == end {
            continue;
        }
        let layout = random_grid(N, &mut rng, start, end);
        let mut astar_grid = layout.clone();
        let mut dijkstra_grid = layout;
        let a = astar
            .run(&mut astar_grid, start, end, &mut NoopObserver)
            .unwrap();
        let d = dijkstra
            .run(&mut dijkstra_grid, start, end, &mut NoopObserver)
            .unwrap();
        match (a.path(), d.path()) {
            (Some(astar_path), Some(dijkstra_path)) => {
                if astar_path.cost() != dijkstra_path.cost() {
                    println!(
                        "Astar path: {astar_path:?}\nDijkstra path: {dijkstra_path:?}\n"
                    );
                    println!("{astar_grid}");
                }
                assert_eq!(astar_path.cost(), dijkstra_path.cost());
                for path in [astar_path, dijkstra_path] {
                    assert!(path.is_contiguous());
                    assert_eq!(path.start(), Some(start));
                    assert_eq!(path.end(), Some(end));
                }
                assert!(astar.stats().expanded <= dijkstra.stats().expanded);
            }
            (None, None) => {}
            _ => panic!("A* returned {a:?} but Dijkstra returned {d:?}"),
        }
    }
}

/// Without barriers every search returns a path as long as the Manhattan distance.
#[test]
fn fuzz_open_grid() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(7);
    let mut engine = SearchEngine::new(AstarSolver::new());
    for _ in 0..500 {
        let start = random_grid_point(N, &mut rng);
        let end = random_grid_point(N, &mut rng);
        if start == end {
            continue;
        }
        let mut grid = PathingGrid::build(N, 600);
        grid.compute_adjacency();
        let outcome = engine
            .run(&mut grid, start, end, &mut NoopObserver)
            .unwrap();
        assert_eq!(
            outcome.path().unwrap().cost() as i32,
            grid_visualizer::manhattan_distance(&start, &end)
        );
    }
}
