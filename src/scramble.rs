use crate::prelude::*;

use rand::{seq::SliceRandom, Rng};

/// Random walk of `move_count` blank moves starting at `goal`.
///
/// Moves may undo each other, so the result is at most `move_count` moves
/// away from `goal` and always solvable.
pub fn scramble<R: Rng + ?Sized>(goal: &Board, move_count: usize, rng: &mut R) -> Board {
    let mut board = goal.clone();
    for _ in 0..move_count {
        let positions = board.legal_moves();
        match positions.choose(rng) {
            Some(&pos) => board = board.swap_blank(pos),
            // A 1x1 board has nowhere to go.
            None => break,
        }
    }
    log::debug!("Scrambled {} moves:\n{}", move_count, board);
    board
}
