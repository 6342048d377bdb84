//! Step-by-step playback of a finished search.
//!
//! A search is instant; showing it is not. [`Playback`] turns a
//! [`SearchResult`] into a finite, lazily produced sequence of timed
//! [`Step`]s (every visited cell, then every path cell) and the matching
//! grid [`Frame`]s. Nothing here sleeps or schedules: each step carries the
//! offset at which a renderer should show it, and the renderer consumes the
//! sequence at its own pace. Calling [`Playback::steps`] or
//! [`Playback::frames`] again starts over from the beginning.

use std::fmt;
use std::time::Duration;

use pathviz_core::{Coord, Dims, Grid};

use crate::result::SearchResult;

/// Timing for a playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    /// Delay between two visited cells.
    pub visit_interval: Duration,
    /// Delay between two path cells.
    pub path_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            visit_interval: Duration::from_millis(10),
            path_interval: Duration::from_millis(40),
        }
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    Visit(Coord),
    Path(Coord),
}

impl StepKind {
    #[inline]
    pub fn coord(self) -> Coord {
        match self {
            Self::Visit(c) | Self::Path(c) => c,
        }
    }
}

/// One reveal in a playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Position in the sequence, starting at 0.
    pub index: usize,
    /// Offset from the start of playback at which this step is shown.
    pub at: Duration,
    pub kind: StepKind,
}

// ---------------------------------------------------------------------------
// Mark / Frame
// ---------------------------------------------------------------------------

/// What a renderer shows for one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    Empty,
    Visited,
    Path,
    Blocked,
    Goal,
    Start,
}

impl Mark {
    /// Higher wins when two marks land on the same cell.
    #[inline]
    fn priority(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Visited => 1,
            Self::Path => 2,
            Self::Blocked => 3,
            Self::Goal => 4,
            Self::Start => 5,
        }
    }

    /// ASCII glyph used by [`Frame`]'s `Display`.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Visited => 'o',
            Self::Path => '*',
            Self::Blocked => '#',
            Self::Goal => 'G',
            Self::Start => 'S',
        }
    }
}

/// Full grid state after some number of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Number of steps applied.
    pub index: usize,
    /// Offset of the last applied step, zero for the initial frame.
    pub at: Duration,
    pub dims: Dims,
    /// Row-major marks.
    pub marks: Vec<Mark>,
}

impl Frame {
    fn initial(grid: &Grid, start: Coord, goal: Coord) -> Self {
        let dims = grid.dims();
        let marks = grid
            .iter()
            .map(|cell| {
                if cell.coord == start {
                    Mark::Start
                } else if cell.coord == goal {
                    Mark::Goal
                } else if cell.blocked {
                    Mark::Blocked
                } else {
                    Mark::Empty
                }
            })
            .collect();
        Self {
            index: 0,
            at: Duration::ZERO,
            dims,
            marks,
        }
    }

    fn apply(&mut self, step: &Step) {
        let mark = match step.kind {
            StepKind::Visit(_) => Mark::Visited,
            StepKind::Path(_) => Mark::Path,
        };
        if let Some(m) = self.dims.index(step.kind.coord()).and_then(|i| self.marks.get_mut(i)) {
            if mark.priority() > m.priority() {
                *m = mark;
            }
        }
        self.index = step.index + 1;
        self.at = step.at;
    }

    /// The mark at `c`, or `None` if out of bounds or missing from `marks`.
    pub fn mark(&self, c: Coord) -> Option<Mark> {
        self.dims.index(c).and_then(|i| self.marks.get(i).copied())
    }

    /// How many cells carry `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.dims.cols.max(1) as usize;
        for row in self.marks.chunks(cols) {
            for m in row {
                write!(f, "{}", m.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// Replayable view of a search over a grid.
#[derive(Debug, Clone, Copy)]
pub struct Playback<'a> {
    grid: &'a Grid,
    result: &'a SearchResult,
    start: Coord,
    goal: Coord,
    config: PlaybackConfig,
}

impl<'a> Playback<'a> {
    /// `result` must come from searching `grid` between `start` and `goal`.
    pub fn new(
        grid: &'a Grid,
        result: &'a SearchResult,
        start: Coord,
        goal: Coord,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            grid,
            result,
            start,
            goal,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> PlaybackConfig {
        self.config
    }

    /// Total number of steps: visited cells plus path cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.result.visited.len() + self.result.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `n`-th step, or `None` past the end.
    pub fn step(&self, n: usize) -> Option<Step> {
        let visits = self.result.visited.len();
        if n < visits {
            return Some(Step {
                index: n,
                at: scaled(self.config.visit_interval, n),
                kind: StepKind::Visit(self.result.visited[n]),
            });
        }
        let j = n - visits;
        let c = *self.result.path.get(j)?;
        Some(Step {
            index: n,
            at: scaled(self.config.visit_interval, visits) + scaled(self.config.path_interval, j),
            kind: StepKind::Path(c),
        })
    }

    /// Offset of the last step.
    pub fn total_duration(&self) -> Duration {
        self.len()
            .checked_sub(1)
            .and_then(|n| self.step(n))
            .map_or(Duration::ZERO, |s| s.at)
    }

    /// All steps, in order. Each call starts from the beginning.
    pub fn steps(&self) -> Steps<'a> {
        Steps {
            playback: *self,
            next: 0,
        }
    }

    /// The grid state once the first `n` steps have been shown.
    ///
    /// `n` is clamped to [`len`](Self::len).
    pub fn frame_at(&self, n: usize) -> Frame {
        let mut frame = Frame::initial(self.grid, self.start, self.goal);
        for step in self.steps().take(n) {
            frame.apply(&step);
        }
        frame
    }

    /// The initial frame followed by one frame per step.
    pub fn frames(&self) -> Frames<'a> {
        Frames {
            playback: *self,
            frame: Frame::initial(self.grid, self.start, self.goal),
            started: false,
        }
    }
}

fn scaled(d: Duration, n: usize) -> Duration {
    d.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX))
}

/// Iterator returned by [`Playback::steps`].
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    playback: Playback<'a>,
    next: usize,
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let step = self.playback.step(self.next)?;
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.playback.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps<'_> {}

/// Iterator returned by [`Playback::frames`].
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    playback: Playback<'a>,
    frame: Frame,
    started: bool,
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if !self.started {
            self.started = true;
            return Some(self.frame.clone());
        }
        let step = self.playback.step(self.frame.index)?;
        self.frame.apply(&step);
        Some(self.frame.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(!self.started);
        let remaining = self.playback.len().saturating_sub(self.frame.index) + pending;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

#[cfg(test)]
mod tests {
    use pathviz_core::build_grid;

    use super::*;
    use crate::search;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn fixture() -> (Grid, SearchResult) {
        // S . .
        // # # .
        // G . .
        let grid = build_grid(3, 3, [c(1, 0), c(1, 1)]).unwrap();
        let result = search(&grid, c(0, 0), c(2, 0)).unwrap();
        (grid, result)
    }

    #[test]
    fn step_timing() {
        let (grid, result) = fixture();
        let pb = Playback::new(&grid, &result, c(0, 0), c(2, 0), PlaybackConfig::default());
        let steps: Vec<Step> = pb.steps().collect();
        assert_eq!(steps.len(), result.visited.len() + result.path.len());
        assert_eq!(steps.len(), pb.len());

        let visits = result.visited.len();
        for (i, s) in steps.iter().enumerate() {
            assert_eq!(s.index, i);
        }
        assert_eq!(steps[0].at, Duration::ZERO);
        assert_eq!(steps[0].kind, StepKind::Visit(c(0, 0)));
        assert_eq!(steps[1].at, Duration::from_millis(10));
        assert_eq!(steps[visits].kind, StepKind::Path(c(0, 0)));
        assert_eq!(steps[visits].at, Duration::from_millis(10 * visits as u64));
        assert_eq!(
            steps[visits + 1].at,
            Duration::from_millis(10 * visits as u64 + 40)
        );
        assert_eq!(pb.total_duration(), steps.last().unwrap().at);
    }

    #[test]
    fn steps_restart() {
        let (grid, result) = fixture();
        let pb = Playback::new(&grid, &result, c(0, 0), c(2, 0), PlaybackConfig::default());
        let mut it = pb.steps();
        it.next();
        it.next();
        assert_eq!(it.len(), pb.len() - 2);
        let first: Vec<_> = pb.steps().collect();
        let second: Vec<_> = pb.steps().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn final_frame() {
        let (grid, result) = fixture();
        let pb = Playback::new(&grid, &result, c(0, 0), c(2, 0), PlaybackConfig::default());
        let last = pb.frame_at(pb.len());
        assert_eq!(
            last.to_string(),
            "S**\n\
             ##*\n\
             G**\n"
        );
        assert_eq!(last.index, pb.len());
        assert_eq!(pb.frame_at(usize::MAX), last);
    }

    #[test]
    fn initial_frame() {
        let (grid, result) = fixture();
        let pb = Playback::new(&grid, &result, c(0, 0), c(2, 0), PlaybackConfig::default());
        let f = pb.frame_at(0);
        assert_eq!(f.to_string(), "S..\n##.\nG..\n");
        assert_eq!(f.at, Duration::ZERO);
        assert_eq!(f.count(Mark::Blocked), 2);
        assert_eq!(f.mark(c(0, 0)), Some(Mark::Start));
        assert_eq!(f.mark(c(5, 5)), None);
    }

    #[test]
    fn frames_match_frame_at() {
        let (grid, result) = fixture();
        let pb = Playback::new(&grid, &result, c(0, 0), c(2, 0), PlaybackConfig::default());
        let frames: Vec<Frame> = pb.frames().collect();
        assert_eq!(frames.len(), pb.len() + 1);
        assert_eq!(pb.frames().len(), pb.len() + 1);
        for (n, f) in frames.iter().enumerate() {
            assert_eq!(*f, pb.frame_at(n));
        }
        // Visited cells show up before any path cell.
        let visits = result.visited.len();
        assert_eq!(frames[visits].count(Mark::Path), 0);
        assert_eq!(frames[visits].count(Mark::Visited), visits - 2);
    }

    #[test]
    fn unreachable_playback_has_no_path_steps() {
        let grid = build_grid(1, 3, [c(0, 1)]).unwrap();
        let result = search(&grid, c(0, 0), c(0, 2)).unwrap();
        let pb = Playback::new(&grid, &result, c(0, 0), c(0, 2), PlaybackConfig::default());
        assert_eq!(pb.len(), 1);
        assert!(pb.steps().all(|s| matches!(s.kind, StepKind::Visit(_))));
        assert_eq!(pb.frame_at(1).to_string(), "S#G\n");
    }

    #[test]
    fn custom_intervals() {
        let grid = build_grid(1, 3, Vec::<Coord>::new()).unwrap();
        let result = search(&grid, c(0, 0), c(0, 2)).unwrap();
        let cfg = PlaybackConfig {
            visit_interval: Duration::from_millis(1),
            path_interval: Duration::from_millis(100),
        };
        let pb = Playback::new(&grid, &result, c(0, 0), c(0, 2), cfg);
        // 3 visits then 3 path cells.
        assert_eq!(pb.total_duration(), Duration::from_millis(3 + 200));
    }

    #[test]
    fn hand_built_frame_with_short_marks() {
        let frame = Frame {
            index: 0,
            at: Duration::ZERO,
            dims: Dims::new(2, 2),
            marks: vec![Mark::Start, Mark::Empty],
        };
        assert_eq!(frame.mark(c(0, 0)), Some(Mark::Start));
        assert_eq!(frame.mark(c(0, 1)), Some(Mark::Empty));
        assert_eq!(frame.mark(c(1, 1)), None);
        assert_eq!(frame.mark(c(5, 5)), None);
    }
}
