use crate::prelude::*;

/// Index of a state inside the `Arena` of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Owns every state generated during one search; parents are referred to by index.
#[derive(Debug, Default)]
pub struct Arena {
    states: Vec<PuzzleState>,
}

impl Arena {
    pub fn push(&mut self, state: PuzzleState) -> NodeId {
        if let Some(parent) = state.parent() {
            assert!(parent.0 < self.states.len(), "{:?} is not in the arena", parent);
        }
        self.states.push(state);
        NodeId(self.states.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &PuzzleState {
        &self.states[id.0]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// The chain of states from `id` back to its root, nearest first.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &PuzzleState> + '_ {
        let mut next = Some(id);
        core::iter::from_fn(move || {
            let state = self.get(next?);
            next = state.parent();
            Some(state)
        })
    }
}

impl core::ops::Index<NodeId> for Arena {
    type Output = PuzzleState;

    fn index(&self, id: NodeId) -> &PuzzleState {
        self.get(id)
    }
}
