use grid_visualizer::{
    Algorithm, CellState, DijkstraSolver, Editor, InvalidConfiguration, NoopObserver, PathingGrid,
    Point, SearchEngine, SearchOutcome,
};

/// Places start, end and barriers the way a user clicking cells would.
fn editor_with(rows: usize, start: Point, end: Point, barriers: &[Point]) -> Editor {
    let mut editor = Editor::new(rows, 500);
    editor.place(start);
    editor.place(end);
    for barrier in barriers {
        editor.place(*barrier);
    }
    editor
}

#[test]
fn open_five_by_five() {
    for algorithm in [Algorithm::Astar, Algorithm::Dijkstra] {
        let mut editor = editor_with(5, Point::new(0, 0), Point::new(4, 4), &[]);
        let mut engine = SearchEngine::new(algorithm.heuristic());
        let mut frames = Vec::new();
        let mut record = |g: &PathingGrid| frames.push(g.to_string());
        let outcome = editor.search(&mut engine, &mut record).unwrap();
        let path = outcome.path().expect("open grid always has a path");
        assert_eq!(path.cost(), 8);
        assert_eq!(path.cells().len(), 9);
        assert_eq!(editor.grid().count_state(CellState::Path), 7);
        assert_eq!(frames.len(), engine.stats().steps);
        // The last frame shows the finished path.
        assert_eq!(frames.last(), Some(&editor.grid().to_string()));
    }
}

#[test]
fn wall_column_has_no_path() {
    let wall = [Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)];
    let mut editor = editor_with(3, Point::new(0, 0), Point::new(0, 2), &wall);
    let mut engine = SearchEngine::new(DijkstraSolver);
    let outcome = editor.search(&mut engine, &mut NoopObserver).unwrap();
    assert_eq!(outcome, SearchOutcome::NoPathExists);
    assert!(editor
        .grid()
        .unreachable(&Point::new(0, 0), &Point::new(0, 2)));
}

#[test]
fn start_equal_to_end_is_invalid() {
    let mut grid = PathingGrid::build(4, 400);
    grid.compute_adjacency();
    let mut engine = SearchEngine::new(Algorithm::Astar.heuristic());
    let p = Point::new(2, 1);
    let result = engine.run(&mut grid, p, p, &mut NoopObserver);
    assert_eq!(result, Err(InvalidConfiguration::StartIsEnd(p)));
}

#[test]
fn cancel_before_first_step() {
    let mut editor = editor_with(6, Point::new(0, 0), Point::new(5, 5), &[]);
    let mut engine = SearchEngine::new(Algorithm::Astar.heuristic());
    engine.cancel_flag().cancel();
    let outcome = editor.search(&mut engine, &mut NoopObserver).unwrap();
    assert_eq!(outcome, SearchOutcome::Cancelled);
    assert_eq!(editor.grid().count_state(CellState::Closed), 0);

    // Re-arming the flag lets the same layout finish.
    engine.cancel_flag().reset();
    let outcome = editor.search(&mut engine, &mut NoopObserver).unwrap();
    assert_eq!(outcome.path().map(|p| p.cost()), Some(10));
}

/// The detour around a wall is found and ordered from start to end.
#[test]
fn detour_around_wall() {
    // |S.#..|
    // |..#..|
    // |..#E.|
    // |.....|
    // |.....|
    let wall = [Point::new(0, 2), Point::new(1, 2), Point::new(2, 2)];
    let (start, end) = (Point::new(0, 0), Point::new(2, 3));
    let mut editor = editor_with(5, start, end, &wall);
    let mut engine = SearchEngine::new(Algorithm::Astar.heuristic());
    let outcome = editor.search(&mut engine, &mut NoopObserver).unwrap();
    let path = outcome.path().unwrap();
    assert_eq!(path.cost(), 7);
    assert_eq!(path.start(), Some(start));
    assert_eq!(path.end(), Some(end));
    assert!(path.is_contiguous());
    assert!(path.cells().iter().all(|p| !wall.contains(p)));
}
