//! Terminal stand-in for the visualizer window: builds a random layout through the same click
//! policy a mouse user would go through, then redraws the grid as ASCII after every search step.
use clap::Parser;
use grid_visualizer::{
    pixel_to_cell, Algorithm, CancelFlag, Editor, PathingGrid, SearchEngine, SearchOutcome,
};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Config {
    /// Number of rows (and columns) of the grid.
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Width of the simulated drawing area in pixels.
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Search strategy, `astar` or `dijkstra`.
    #[arg(long, default_value = "astar")]
    algorithm: Algorithm,

    /// Chance of each simulated click after start and end to draw a barrier.
    #[arg(long, default_value_t = 0.3)]
    barrier_density: f64,

    #[arg(long)]
    seed: Option<u64>,

    /// Pause between frames.
    #[arg(long, default_value_t = 30)]
    delay_ms: u64,

    /// Abort the search after this many steps.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Only print the final frame.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn random_pixel(rng: &mut StdRng, width: u32) -> (u32, u32) {
    (rng.gen_range(0..width), rng.gen_range(0..width))
}

/// Clicks random pixels until start and end are placed, then scatters barriers.
fn build_layout(config: &Config, rng: &mut StdRng) -> Editor {
    let mut editor = Editor::new(config.rows, config.width);
    while editor.start().is_none() || editor.end().is_none() {
        editor.left_click(random_pixel(rng, config.width));
    }
    let cell_size = editor.grid().cell_size().max(1);
    for row in 0..config.rows as u32 {
        for col in 0..config.rows as u32 {
            if rng.gen_bool(config.barrier_density) {
                let pixel = (
                    row * cell_size + cell_size / 2,
                    col * cell_size + cell_size / 2,
                );
                if pixel_to_cell(pixel, config.rows, config.width).is_some() {
                    editor.left_click(pixel);
                }
            }
        }
    }
    editor
}

fn draw(grid: &PathingGrid, frame: usize) {
    // Clear the terminal and move the cursor home before every frame.
    print!("\x1B[2J\x1B[H");
    println!("step {frame}");
    print!("{grid}");
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let config = Config::parse();
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "Building a {}x{} grid with seed {}",
        config.rows, config.rows, seed
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let mut editor = build_layout(&config, &mut rng);

    let cancel = CancelFlag::new();
    let mut engine = SearchEngine::new(config.algorithm.heuristic())
        .with_cancel_flag(cancel.clone());
    let delay = Duration::from_millis(config.delay_ms);
    let mut frame = 0;
    let mut observer = |grid: &PathingGrid| {
        frame += 1;
        if !config.quiet {
            draw(grid, frame);
            thread::sleep(delay);
        }
        if config.max_steps.is_some_and(|max| frame >= max) {
            cancel.cancel();
        }
    };

    match editor.search(&mut engine, &mut observer) {
        Ok(outcome) => {
            draw(editor.grid(), engine.stats().steps);
            match outcome {
                SearchOutcome::PathFound(path) => println!(
                    "{}: path of cost {} found, {} cells expanded",
                    config.algorithm,
                    path.cost(),
                    engine.stats().expanded
                ),
                SearchOutcome::NoPathExists => {
                    println!("{}: the end is walled off", config.algorithm)
                }
                SearchOutcome::Cancelled => println!("{}: cancelled", config.algorithm),
            }
        }
        Err(e) => {
            eprintln!("Cannot search: {}", e);
            std::process::exit(1);
        }
    }
}
