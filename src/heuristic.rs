use crate::prelude::*;

// The engine relies on estimates being admissible:
//   h(board) <= true number of moves from board to goal
pub trait Heuristic: Sync + Send + 'static {
    fn estimate(&self, board: &Board, goal: &Board) -> u32;
}

impl<F> Heuristic for F
where
    F: Send + Sync + 'static + Fn(&Board, &Board) -> u32,
{
    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        (self)(board, goal)
    }
}

/// Number of tiles, blank excluded, that are not on their goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hamming;

impl Heuristic for Hamming {
    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        board
            .cells()
            .iter()
            .zip(goal.cells())
            .filter(|&(&have, &want)| have != BLANK && have != want)
            .count() as u32
    }
}

/// Sum over tiles of the grid distance to their goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        let mut goal_position = vec![0; goal.cells().len()];
        for (pos, &value) in goal.cells().iter().enumerate() {
            goal_position[value as usize] = pos;
        }

        board
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != BLANK)
            .map(|(pos, &value)| {
                let (row, col) = board.row_col(pos);
                let (goal_row, goal_col) = goal.row_col(goal_position[value as usize]);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// Turns A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _board: &Board, _goal: &Board) -> u32 {
        0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HeuristicKind {
    #[default]
    Hamming,
    Manhattan,
    Zero,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, board: &Board, goal: &Board) -> u32 {
        match self {
            HeuristicKind::Hamming => Hamming.estimate(board, goal),
            HeuristicKind::Manhattan => Manhattan.estimate(board, goal),
            HeuristicKind::Zero => Zero.estimate(board, goal),
        }
    }
}
