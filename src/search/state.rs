use crate::prelude::*;

use core::hash::{Hash, Hasher};

/// A board reached during search, with the cost bookkeeping used to order it.
///
/// Equality and hashing only look at the board: the same layout reached by
/// two different paths is the same search node.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    board: Board,
    parent: Option<NodeId>,
    g: u32,
    h: u32,
}

impl PuzzleState {
    pub fn root(board: Board, goal: &Board, heuristic: &impl Heuristic) -> PuzzleState {
        let h = heuristic.estimate(&board, goal);
        PuzzleState {
            board,
            parent: None,
            g: 0,
            h,
        }
    }

    /// Neighbouring states in Left, Right, Up, Down order of blank travel.
    pub fn successors<'a, H: Heuristic>(
        &'a self,
        id: NodeId,
        goal: &'a Board,
        heuristic: &'a H,
    ) -> impl Iterator<Item = PuzzleState> + 'a {
        self.board.legal_moves().into_iter().map(move |pos| {
            let board = self.board.swap_blank(pos);
            let h = heuristic.estimate(&board, goal);
            PuzzleState {
                board,
                parent: Some(id),
                g: self.g + 1,
                h,
            }
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[u16] {
        self.board.cells()
    }

    pub fn blank(&self) -> usize {
        self.board.blank()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn g(&self) -> u32 {
        self.g
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    pub(super) fn relink(mut self, parent: Option<NodeId>) -> PuzzleState {
        self.parent = parent;
        self
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}
