use crate::prelude::*;

/// States from the start to the goal, inclusive.
///
/// Parent links are rewritten to point at the previous element, so the path
/// stays meaningful after the search arena is gone.
#[derive(Debug, Clone)]
pub struct Path {
    states: Vec<PuzzleState>,
}

pub fn reconstruct(arena: &Arena, terminal: NodeId) -> Path {
    let mut states = arena.ancestry(terminal).cloned().collect::<Vec<_>>();
    states.reverse();

    let states = states
        .into_iter()
        .enumerate()
        .map(|(index, state)| state.relink(index.checked_sub(1).map(NodeId)))
        .collect::<Vec<_>>();

    assert_eq!(states.len(), arena[terminal].g() as usize + 1);
    Path { states }
}

impl Path {
    pub fn states(&self) -> &[PuzzleState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn start(&self) -> &PuzzleState {
        &self.states[0]
    }

    pub fn end(&self) -> &PuzzleState {
        &self.states[self.states.len() - 1]
    }

    /// Number of moves taken.
    pub fn cost(&self) -> u32 {
        self.end().g()
    }

    /// The direction the blank travels at each step.
    pub fn moves(&self) -> impl Iterator<Item = Direction> + '_ {
        self.states.windows(2).map(|pair| {
            let size = pair[0].board().size();
            Direction::between(pair[0].blank(), pair[1].blank(), size)
                .unwrap_or_else(|| unreachable!("path states are not adjacent"))
        })
    }

    /// Blank position at every step, for drawing its trail.
    pub fn blank_trail(&self) -> Vec<usize> {
        self.states.iter().map(|state| state.blank()).collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PuzzleState;
    type IntoIter = core::slice::Iter<'a, PuzzleState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
