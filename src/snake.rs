use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Board position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a position from row and column.
    #[must_use]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position one step away along `direction`.
    #[must_use]
    pub fn translate(self, direction: Direction) -> Self {
        let (row_offset, col_offset) = direction.offset();
        Self {
            row: self.row + row_offset,
            col: self.col + col_offset,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.row >= 0
            && self.col >= 0
            && self.row < i32::from(bounds.rows)
            && self.col < i32::from(bounds.cols)
    }
}

/// Ordered snake body, head first, tail last.
///
/// The body is a position sequence only; which board cells count as
/// occupied lives on the board, and the session keeps the two in
/// lockstep through its head/tail mutations.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Pushes a new head segment.
    pub fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    /// Removes and returns the tail segment.
    pub fn pop_tail(&mut self) -> Position {
        self.body
            .pop_back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }
}
