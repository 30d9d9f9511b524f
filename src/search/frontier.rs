use crate::prelude::*;

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

/// Open set: pending states ordered by `f`, ties going to the earliest insertion.
///
/// Replacing a queued state leaves its old heap entry behind; `pop_min`
/// skips entries that are no longer the recorded one for their board.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    queued: HashMap<Board, Queued>,
    insertions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    f: u32,
    order: u64,
    id: NodeId,
}

#[derive(Debug, Clone, Copy)]
struct Queued {
    id: NodeId,
    f: u32,
}

impl Frontier {
    /// Queues `state` unconditionally, superseding any entry for the same board.
    pub fn insert(&mut self, arena: &mut Arena, state: PuzzleState) -> NodeId {
        let f = state.f();
        let key = state.board().clone();
        let id = arena.push(state);

        self.heap.push(Reverse(Entry {
            f,
            order: self.insertions,
            id,
        }));
        self.insertions += 1;
        self.queued.insert(key, Queued { id, f });
        id
    }

    /// Queues `candidate` unless its board is already queued at an equal or lower `f`.
    pub fn decrease_key(&mut self, arena: &mut Arena, candidate: PuzzleState) -> Option<NodeId> {
        match self.queued.get(candidate.board()).copied() {
            Some(queued) if queued.f <= candidate.f() => None,
            Some(queued) => {
                log::trace!(
                    "Cheaper route to queued state: f {} -> {}",
                    queued.f,
                    candidate.f()
                );
                Some(self.insert(arena, candidate))
            }
            None => Some(self.insert(arena, candidate)),
        }
    }

    pub fn pop_min(&mut self, arena: &Arena) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let board = arena[entry.id].board();
            match self.queued.get(board).copied() {
                Some(queued) if queued.id == entry.id => {
                    self.queued.remove(board);
                    return Some(entry.id);
                }
                _ => log::trace!("Skipping superseded entry {:?}", entry.id),
            }
        }
        None
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.queued.contains_key(board)
    }

    /// The `f` currently recorded for `board`, if it is queued.
    pub fn peek(&self, board: &Board) -> Option<u32> {
        self.queued.get(board).map(|queued| queued.f)
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(moves: &[Direction]) -> PuzzleState {
        PuzzleState::root(board_with_moves(&GOAL_3, moves), &GOAL_3, &Hamming)
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut arena = Arena::default();
        let mut frontier = Frontier::default();
        let far = frontier.insert(
            &mut arena,
            state_at(&[Direction::Left, Direction::Left, Direction::Up]),
        );
        let near = frontier.insert(&mut arena, state_at(&[Direction::Left]));

        assert_eq!(frontier.pop_min(&arena), Some(near));
        assert_eq!(frontier.pop_min(&arena), Some(far));
        assert_eq!(frontier.pop_min(&arena), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut arena = Arena::default();
        let mut frontier = Frontier::default();
        let first = frontier.insert(&mut arena, state_at(&[Direction::Left]));
        let second = frontier.insert(&mut arena, state_at(&[Direction::Up]));

        assert_eq!(arena[first].f(), arena[second].f());
        assert_eq!(frontier.pop_min(&arena), Some(first));
        assert_eq!(frontier.pop_min(&arena), Some(second));
    }

    #[test]
    fn lookup_by_board() {
        let mut arena = Arena::default();
        let mut frontier = Frontier::default();
        let state = state_at(&[Direction::Left]);
        let board = state.board().clone();

        assert!(!frontier.contains(&board));
        frontier.insert(&mut arena, state);
        assert!(frontier.contains(&board));
        assert_eq!(frontier.peek(&board), Some(1));
        assert_eq!(frontier.peek(&GOAL_3), None);
    }

    #[test]
    fn decrease_key_replaces_costlier_entry() {
        let mut arena = Arena::default();
        let mut frontier = Frontier::default();

        // Reach the same board at depth 2 first, then directly.
        let root = arena.push(PuzzleState::root(GOAL_3.clone(), &GOAL_3, &Hamming));
        let left = arena[root]
            .successors(root, &GOAL_3, &Hamming)
            .next()
            .unwrap();
        let left = arena.push(left);
        let back = arena[left]
            .successors(left, &GOAL_3, &Hamming)
            .find(|s| s.board() == &*GOAL_3)
            .unwrap();
        assert_eq!(back.g(), 2);

        let costly = frontier.decrease_key(&mut arena, back).unwrap();
        let cheap = frontier
            .decrease_key(&mut arena, PuzzleState::root(GOAL_3.clone(), &GOAL_3, &Hamming))
            .unwrap();

        assert_eq!(frontier.peek(&GOAL_3), Some(0));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_min(&arena), Some(cheap));
        assert_ne!(cheap, costly);
        // The superseded entry is skipped rather than returned.
        assert_eq!(frontier.pop_min(&arena), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn decrease_key_discards_no_better_candidate() {
        let mut arena = Arena::default();
        let mut frontier = Frontier::default();
        let kept = frontier.insert(&mut arena, state_at(&[Direction::Left]));

        assert_eq!(frontier.decrease_key(&mut arena, state_at(&[Direction::Left])), None);
        assert_eq!(frontier.pop_min(&arena), Some(kept));
        assert_eq!(arena.len(), 1);
    }
}
