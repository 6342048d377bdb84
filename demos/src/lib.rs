//! Terminal playback of a grid shortest-path search.
//!
//! Builds the default 20x40 board, scatters walls, runs
//! [`pathviz_paths::search`] and replays the resulting [`Playback`] through
//! crossterm: visited cells first, then the path.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use rand::{Rng, RngExt};

use pathviz_core::{Board, Coord, Dims};
use pathviz_paths::{Frame, Mark, Playback, PlaybackConfig, Step, StepKind};

/// Settings for one demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Chance, in percent, that a non-endpoint cell becomes a wall.
    pub wall_pct: u32,
    pub seed: u64,
    pub playback: PlaybackConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            wall_pct: 25,
            seed: 42,
            playback: PlaybackConfig::default(),
        }
    }
}

/// Block random cells of `board`. Endpoints are never blocked.
///
/// Returns how many cells were blocked.
pub fn scatter_walls(board: &mut Board, wall_pct: u32, rng: &mut impl Rng) -> usize {
    let mut n = 0;
    for c in board.dims().iter() {
        if rng.random_range(0..100) < wall_pct && !board.is_blocked(c) && board.toggle_block(c) {
            n += 1;
        }
    }
    n
}

fn mark_color(m: Mark) -> CtColor {
    match m {
        Mark::Empty => CtColor::DarkGrey,
        Mark::Visited => CtColor::Cyan,
        Mark::Path => CtColor::Yellow,
        Mark::Blocked => CtColor::White,
        Mark::Goal => CtColor::Red,
        Mark::Start => CtColor::Green,
    }
}

/// Whether the user asked to quit.
fn quit_requested(ev: &Event) -> bool {
    matches!(
        ev,
        Event::Key(KeyEvent {
            code: KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'),
            ..
        })
    )
}

/// Run `undo` if `res` failed, keeping the original error.
fn undo_on_err<T>(res: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if res.is_err() {
        let _ = undo();
    }
    res
}

/// Raw-mode terminal screen drawing one character per grid cell.
pub struct Screen {
    out: io::Stdout,
}

impl Screen {
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        let setup = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        );
        undo_on_err(setup, terminal::disable_raw_mode)?;
        Ok(Self { out })
    }

    fn put(&mut self, c: Coord, m: Mark) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(c.col as u16, c.row as u16),
            SetForegroundColor(mark_color(m)),
            Print(m.glyph()),
            ResetColor
        )
    }

    /// Draw every cell of `frame`.
    pub fn draw_frame(&mut self, frame: &Frame) -> io::Result<()> {
        for c in frame.dims.iter() {
            if let Some(m) = frame.mark(c) {
                self.put(c, m)?;
            }
        }
        self.out.flush()
    }

    /// Draw the cell a step reveals, unless an endpoint sits there.
    pub fn draw_step(&mut self, step: &Step, endpoints: [Coord; 2]) -> io::Result<()> {
        let (c, m) = match step.kind {
            StepKind::Visit(c) => (c, Mark::Visited),
            StepKind::Path(c) => (c, Mark::Path),
        };
        if endpoints.contains(&c) {
            return Ok(());
        }
        self.put(c, m)?;
        self.out.flush()
    }

    pub fn status(&mut self, dims: Dims, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, dims.rows as u16 + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }

    pub fn close(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Replay `playback` in real time. Returns `false` if the user quit early.
pub fn play(screen: &mut Screen, playback: &Playback<'_>, endpoints: [Coord; 2]) -> io::Result<bool> {
    let started = Instant::now();
    for step in playback.steps() {
        let due = started + step.at;
        // Wait for the step's offset, reacting to keys meanwhile.
        loop {
            let now = Instant::now();
            if now >= due {
                break;
            }
            if event::poll(due - now)? && quit_requested(&event::read()?) {
                return Ok(false);
            }
        }
        screen.draw_step(&step, endpoints)?;
    }
    Ok(true)
}

/// Block until any key is pressed.
pub fn wait_key() -> io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
