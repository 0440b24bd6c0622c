use rand::Rng;

use crate::board::{Board, Cell};
use crate::snake::Position;

/// Places one food on a uniformly chosen empty cell.
///
/// Returns the chosen position, or `None` when the board has no empty
/// cell left. A full board is left untouched.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Option<Position> {
    let empties = board.empty_positions();
    if empties.is_empty() {
        return None;
    }

    let position = empties[rng.gen_range(0..empties.len())];
    board.set(position, Cell::Food);
    Some(position)
}
