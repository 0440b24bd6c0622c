use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{Board, Cell};
use crate::config::{DEFAULT_SNAKE_LENGTH, GridSize};
use crate::food;
use crate::input::{Direction, DirectionQueue};
use crate::snake::{Position, Snake};

/// Rejected session configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board size {rows}x{cols}: the snake needs at least 1 row and more than 3 columns")]
    InvalidConfiguration { rows: u16, cols: u16 },
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What the head would meet at a target cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Hit {
    OutOfBounds,
    Cell(Cell),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    snake: Snake,
    direction: Direction,
    pending: DirectionQueue,
    score: u32,
    game_over: bool,
    death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl GameState {
    /// Creates a session on an entropy-seeded generator.
    pub fn new(size: GridSize) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn with_seed(size: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, mut rng: StdRng) -> Result<Self, GameError> {
        if size.rows == 0 || size.cols <= DEFAULT_SNAKE_LENGTH {
            return Err(GameError::InvalidConfiguration {
                rows: size.rows,
                cols: size.cols,
            });
        }

        let mut board = Board::new(size);
        let row = i32::from(size.rows / 2);
        let segments: Vec<Position> = (1..=i32::from(DEFAULT_SNAKE_LENGTH))
            .rev()
            .map(|col| Position::new(row, col))
            .collect();
        for segment in &segments {
            board.set(*segment, Cell::Snake);
        }
        let snake = Snake::from_segments(segments);

        let _ = food::spawn(&mut rng, &mut board);

        Ok(Self {
            board,
            snake,
            direction: Direction::Right,
            pending: DirectionQueue::new(),
            score: 0,
            game_over: false,
            death_reason: None,
            rng,
        })
    }

    /// Buffers a direction change for upcoming ticks.
    ///
    /// At most two turns are held; a request matching the most recently
    /// buffered direction or reversing it is dropped.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        let _ = self.pending.try_push(self.direction, direction);
    }

    /// Advances the session by one tick.
    ///
    /// Applies at most one buffered turn, then resolves the head's move.
    /// After the session has ended this is a no-op.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        if let Some(next) = self.pending.pop() {
            self.direction = next;
        }

        let target = self.snake.head().translate(self.direction);
        match self.probe(target) {
            Hit::OutOfBounds => self.end(DeathReason::WallCollision),
            Hit::Cell(Cell::Snake) => self.end(DeathReason::SelfCollision),
            Hit::Cell(Cell::Empty) => {
                self.remove_tail();
                self.add_head(target);
            }
            Hit::Cell(Cell::Food) => {
                self.add_head(target);
                self.score += 1;
                let _ = food::spawn(&mut self.rng, &mut self.board);
            }
        }
    }

    /// Returns the cell grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns true once the session has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns what ended the session, if it has ended.
    #[must_use]
    pub fn death_cause(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Returns the direction the snake is currently travelling.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the head cell.
    #[must_use]
    pub fn head_position(&self) -> Position {
        self.snake.head()
    }

    /// Returns the tail cell.
    #[must_use]
    pub fn tail_position(&self) -> Position {
        self.snake.tail()
    }

    /// Iterates over body cells from head to tail.
    pub fn snake_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.positions()
    }

    /// Returns the snake's segment count.
    #[must_use]
    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    fn probe(&self, target: Position) -> Hit {
        match self.board.cell(target) {
            None => Hit::OutOfBounds,
            // The tail vacates its cell on this same tick, so moving
            // into it is legal, not a self-collision.
            Some(_) if target == self.snake.tail() => Hit::Cell(Cell::Empty),
            Some(cell) => Hit::Cell(cell),
        }
    }

    fn add_head(&mut self, position: Position) {
        self.snake.push_head(position);
        self.board.set(position, Cell::Snake);
    }

    fn remove_tail(&mut self) {
        let vacated = self.snake.pop_tail();
        self.board.set(vacated, Cell::Empty);
    }

    fn end(&mut self, reason: DeathReason) {
        self.game_over = true;
        self.death_reason = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::board::Cell;
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{DeathReason, GameError, GameState};

    fn size(rows: u16, cols: u16) -> GridSize {
        GridSize { rows, cols }
    }

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn food_position(state: &GameState) -> Position {
        let bounds = state.board().size();
        for row in 0..i32::from(bounds.rows) {
            for col in 0..i32::from(bounds.cols) {
                let position = pos(row, col);
                if state.board().cell(position) == Some(Cell::Food) {
                    return position;
                }
            }
        }
        panic!("no food on the board");
    }

    /// Moves the food to a known cell so a scripted run stays deterministic.
    fn place_food(state: &mut GameState, to: Position) {
        let current = food_position(state);
        state.board.set(current, Cell::Empty);
        state.board.set(to, Cell::Food);
    }

    fn assert_lockstep(state: &GameState) {
        assert_eq!(state.board().count(Cell::Snake), state.snake_len());
        for position in state.snake_positions() {
            assert_eq!(state.board().cell(position), Some(Cell::Snake));
        }
    }

    #[test]
    fn new_session_places_the_snake_mid_row_facing_right() {
        let state = GameState::with_seed(size(10, 10), 1).expect("valid size");

        assert_eq!(state.head_position(), pos(5, 3));
        assert_eq!(state.tail_position(), pos(5, 1));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.snake_len(), 3);

        let body: Vec<Position> = state.snake_positions().collect();
        assert_eq!(body, vec![pos(5, 3), pos(5, 2), pos(5, 1)]);
        assert_lockstep(&state);
    }

    #[test]
    fn new_session_starts_with_one_food_and_zero_score() {
        let state = GameState::with_seed(size(10, 10), 1).expect("valid size");

        assert_eq!(state.score(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.death_cause(), None);
        assert_eq!(state.board().count(Cell::Food), 1);

        let food = food_position(&state);
        assert!(state.snake_positions().all(|segment| segment != food));
    }

    #[test]
    fn rejects_boards_without_room_for_the_snake() {
        let err = GameState::with_seed(size(4, 3), 1).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidConfiguration { rows: 4, cols: 3 }
        ));
        assert_eq!(
            err.to_string(),
            "invalid board size 4x3: the snake needs at least 1 row and more than 3 columns"
        );

        assert!(GameState::with_seed(size(0, 10), 1).is_err());
        assert!(GameState::with_seed(size(10, 0), 1).is_err());
    }

    #[test]
    fn entropy_backed_constructor_validates_too() {
        assert!(GameState::new(size(10, 10)).is_ok());
        assert!(GameState::new(size(1, 3)).is_err());
    }

    #[test]
    fn narrowest_legal_board_is_accepted() {
        let state = GameState::with_seed(size(1, 4), 1).expect("4 columns fit the snake");

        assert_eq!(state.head_position(), pos(0, 3));
        assert_eq!(state.tail_position(), pos(0, 1));
        assert_eq!(food_position(&state), pos(0, 0));
    }

    #[test]
    fn tick_moves_the_head_one_cell_forward() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(9, 9));

        state.tick();

        assert_eq!(state.head_position(), pos(5, 4));
        assert_eq!(state.tail_position(), pos(5, 2));
        assert_eq!(state.snake_len(), 3);
        assert_lockstep(&state);
    }

    #[test]
    fn queued_turns_apply_one_per_tick() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(9, 9));

        state.change_direction(Direction::Up);
        state.change_direction(Direction::Left);

        state.tick();
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.head_position(), pos(4, 3));

        state.tick();
        assert_eq!(state.direction(), Direction::Left);
        assert_eq!(state.head_position(), pos(4, 2));
    }

    #[test]
    fn reversals_and_duplicates_are_dropped() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(9, 9));

        state.change_direction(Direction::Left);
        state.change_direction(Direction::Right);

        state.tick();

        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.head_position(), pos(5, 4));
    }

    #[test]
    fn second_turn_is_checked_against_the_first() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(9, 9));

        state.change_direction(Direction::Up);
        state.change_direction(Direction::Down);

        state.tick();
        assert_eq!(state.direction(), Direction::Up);

        state.tick();
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.head_position(), pos(3, 3));
    }

    #[test]
    fn direction_queue_holds_at_most_two_turns() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(9, 9));

        state.change_direction(Direction::Up);
        state.change_direction(Direction::Left);
        state.change_direction(Direction::Down);

        state.tick();
        state.tick();
        state.tick();

        assert_eq!(state.direction(), Direction::Left);
        assert_eq!(state.head_position(), pos(4, 1));
    }

    #[test]
    fn hitting_the_wall_ends_the_session() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(9, 9));

        for _ in 0..6 {
            state.tick();
        }
        assert!(!state.is_game_over());
        assert_eq!(state.head_position(), pos(5, 9));

        state.tick();

        assert!(state.is_game_over());
        assert_eq!(state.death_cause(), Some(DeathReason::WallCollision));
        assert_eq!(state.head_position(), pos(5, 9));
        assert_eq!(state.snake_len(), 3);
        assert_lockstep(&state);
    }

    #[test]
    fn running_into_the_body_ends_the_session() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");

        place_food(&mut state, pos(5, 4));
        state.tick();
        place_food(&mut state, pos(5, 5));
        state.tick();
        assert_eq!(state.snake_len(), 5);

        place_food(&mut state, pos(9, 9));
        state.change_direction(Direction::Up);
        state.tick();
        state.change_direction(Direction::Left);
        state.tick();
        state.change_direction(Direction::Down);
        state.tick();

        assert!(state.is_game_over());
        assert_eq!(state.death_cause(), Some(DeathReason::SelfCollision));
    }

    #[test]
    fn moving_into_the_vacating_tail_cell_is_legal() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");

        place_food(&mut state, pos(5, 4));
        state.tick();
        assert_eq!(state.snake_len(), 4);

        place_food(&mut state, pos(9, 9));
        state.change_direction(Direction::Up);
        state.tick();
        state.change_direction(Direction::Left);
        state.tick();
        state.change_direction(Direction::Down);
        state.tick();

        assert!(!state.is_game_over());
        assert_eq!(state.head_position(), pos(5, 3));
        assert_lockstep(&state);
    }

    #[test]
    fn eating_grows_the_snake_and_respawns_food() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(5, 4));

        state.tick();

        assert_eq!(state.score(), 1);
        assert_eq!(state.snake_len(), 4);
        assert_eq!(state.head_position(), pos(5, 4));
        assert_eq!(state.tail_position(), pos(5, 1));
        assert_eq!(state.board().count(Cell::Food), 1);
        assert_ne!(food_position(&state), pos(5, 4));
        assert_lockstep(&state);
    }

    #[test]
    fn tick_after_game_over_is_a_no_op() {
        let mut state = GameState::with_seed(size(10, 10), 1).expect("valid size");
        place_food(&mut state, pos(9, 9));
        for _ in 0..7 {
            state.tick();
        }
        assert!(state.is_game_over());

        let head = state.head_position();
        let score = state.score();
        state.change_direction(Direction::Up);
        state.tick();
        state.tick();

        assert_eq!(state.head_position(), head);
        assert_eq!(state.score(), score);
        assert_eq!(state.death_cause(), Some(DeathReason::WallCollision));
    }

    #[test]
    fn board_and_body_stay_in_lockstep_under_random_play() {
        let mut state = GameState::with_seed(size(8, 8), 42).expect("valid size");
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            if state.is_game_over() {
                break;
            }
            let direction = match rng.gen_range(0..4) {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            state.change_direction(direction);
            state.tick();

            assert_lockstep(&state);
            assert_eq!(state.board().count(Cell::Food), 1);
        }
    }
}
