use crate::prelude::*;

use smallvec::SmallVec;
use std::{
    sync::atomic::{AtomicBool, Ordering},
    sync::Arc,
    time::Instant,
};

pub enum Search {
    Found(Path),
    Exhausted,
    Cancelled,
}

impl Search {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Search::Found(path) => Some(path),
            Search::Exhausted | Search::Cancelled => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Search::Found(path) => Some(path),
            Search::Exhausted | Search::Cancelled => None,
        }
    }
}

impl core::fmt::Debug for Search {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Search::Found(path) => write!(f, "Found({} moves)", path.cost()),
            Search::Exhausted => write!(f, "Exhausted"),
            Search::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub generated: usize,
    pub discarded: usize,
    pub max_frontier: usize,
    pub elapsed: Duration,
}

/// A* over blank moves with unit step cost.
pub struct Engine<H: Heuristic> {
    heuristic: H,
    cancel: Option<Arc<AtomicBool>>,
}

impl<H: Heuristic> Engine<H> {
    pub fn new(heuristic: H) -> Self {
        Engine {
            heuristic,
            cancel: None,
        }
    }

    /// Once `flag` is set the next loop iteration ends the search as `Cancelled`.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn search(&self, start: Board, goal: &Board) -> Search {
        self.search_with_stats(start, goal).0
    }

    pub fn search_with_stats(&self, start: Board, goal: &Board) -> (Search, SearchStats) {
        assert_eq!(start.size(), goal.size(), "start and goal sizes differ");

        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut arena = Arena::default();
        let mut frontier = Frontier::default();
        let mut closed = ClosedSet::default();

        log::debug!("Searching from\n{}to\n{}", start, goal);
        frontier.insert(&mut arena, PuzzleState::root(start, goal, &self.heuristic));

        let outcome = loop {
            if self.is_cancelled() {
                break Search::Cancelled;
            }
            stats.max_frontier = stats.max_frontier.max(frontier.len());

            if frontier.is_empty() {
                break Search::Exhausted;
            }
            let id = frontier
                .pop_min(&arena)
                .unwrap_or_else(|| unreachable!("non-empty frontier popped nothing"));
            let state = &arena[id];
            debug_assert!(!frontier.contains(state.board()));

            if state.board() == goal {
                break Search::Found(reconstruct(&arena, id));
            }

            if !closed.insert(state.board().clone()) {
                log::trace!("Already expanded {:?}", id);
                continue;
            }
            stats.expanded += 1;

            let successors = state
                .successors(id, goal, &self.heuristic)
                .filter(|next| !closed.contains(next.board()))
                .collect::<SmallVec<[PuzzleState; 4]>>();

            for next in successors {
                stats.generated += 1;
                match frontier.decrease_key(&mut arena, next) {
                    Some(queued) => debug_assert_eq!(
                        frontier.peek(arena[queued].board()),
                        Some(arena[queued].f())
                    ),
                    None => stats.discarded += 1,
                }
            }
        };

        stats.elapsed = started.elapsed();
        log::info!(
            "Search {:?}: expanded {}, closed {}, generated {}, discarded {}, peak frontier {}, {} states stored, took {:?}",
            outcome,
            stats.expanded,
            closed.len(),
            stats.generated,
            stats.discarded,
            stats.max_frontier,
            arena.len(),
            stats.elapsed,
        );

        (outcome, stats)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}
