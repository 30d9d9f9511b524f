use crate::prelude::*;

use std::collections::HashSet;

/// Boards that have been popped and expanded; they are never queued again.
#[derive(Debug, Default)]
pub struct ClosedSet(HashSet<Board>);

impl ClosedSet {
    /// Returns `false` if `board` was already closed.
    pub fn insert(&mut self, board: Board) -> bool {
        self.0.insert(board)
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.0.contains(board)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
