use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(row, col)` offset of one step along this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Most direction changes held between ticks.
pub const MAX_PENDING_DIRECTIONS: usize = 2;

/// FIFO buffer of pending direction changes, at most two deep.
///
/// Two slots let a player queue one turn ahead of the tick cadence while
/// a tick still consumes at most one change. Requests that would repeat
/// the effective direction, reverse it (running the snake into its own
/// neck), or arrive while both slots are taken are dropped without error:
/// over-eager input during fast play is ordinary, not a failure.
#[derive(Debug, Clone, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the direction the next accepted request is checked against:
    /// the most recently queued entry, or `current` when nothing is queued.
    #[must_use]
    pub fn last_effective(&self, current: Direction) -> Direction {
        self.pending.back().copied().unwrap_or(current)
    }

    /// Queues `requested` when it is a legal change, returning whether it
    /// was accepted.
    pub fn try_push(&mut self, current: Direction, requested: Direction) -> bool {
        if self.pending.len() >= MAX_PENDING_DIRECTIONS {
            return false;
        }

        let last = self.last_effective(current);
        if requested == last || requested == last.opposite() {
            return false;
        }

        self.pending.push_back(requested);
        true
    }

    /// Takes the oldest pending change, if any.
    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    /// Returns the number of pending changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true when no change is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
    CycleTheme,
}

/// Polls the terminal for up to `timeout` and maps the next key press.
///
/// Returns `Ok(None)` when no bound key arrived in time.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Maps a key event to a game input, if the key is bound.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p' | 'P') => Some(GameInput::Pause),
        KeyCode::Char('t' | 'T') => Some(GameInput::CycleTheme),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        _ => None,
    }
}
