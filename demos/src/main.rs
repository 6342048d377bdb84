//! Terminal shortest-path playback.
//!
//! Run: cargo run --bin pathviz [seed]

use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use pathviz_core::Board;
use pathviz_demo::{DemoConfig, Screen, play, scatter_walls, wait_key};
use pathviz_paths::{Playback, search};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut cfg = DemoConfig::default();
    if let Some(seed) = std::env::args().nth(1) {
        cfg.seed = seed.parse()?;
    }

    let mut board = Board::default();
    let walls = scatter_walls(&mut board, cfg.wall_pct, &mut StdRng::seed_from_u64(cfg.seed));
    log::info!("seed {}: {walls} walls on a {} board", cfg.seed, board.dims());

    let (start, goal) = (board.start(), board.goal());
    let grid = board.grid();
    let result = search(&grid, start, goal)?;
    let playback = Playback::new(&grid, &result, start, goal, cfg.playback);

    let mut screen = Screen::init()?;
    let outcome = show(&mut screen, &board, &playback, result.distance());
    screen.close();
    outcome
}

fn show(
    screen: &mut Screen,
    board: &Board,
    playback: &Playback<'_>,
    distance: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let dims = board.dims();
    screen.draw_frame(&playback.frame_at(0))?;
    screen.status(dims, "searching... (q to quit)")?;

    if !play(screen, playback, [board.start(), board.goal()])? {
        return Ok(());
    }

    let text = match distance {
        Some(d) => format!("path found: {d} steps. Press any key."),
        None => "goal unreachable. Press any key.".to_owned(),
    };
    screen.status(dims, &text)?;
    wait_key()?;
    Ok(())
}
