use crate::prelude::*;

use std::{
    sync::atomic::{AtomicBool, Ordering},
    sync::mpsc::{channel, Receiver, RecvTimeoutError},
    sync::Arc,
    thread::JoinHandle,
};

/// A search running on its own thread.
pub struct SearchHandle {
    rx: Receiver<Search>,
    cancel: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

pub fn spawn_search<H: Heuristic>(heuristic: H, start: Board, goal: Board) -> SearchHandle {
    let (tx, rx) = channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let engine = Engine::new(heuristic).with_cancel_flag(Arc::clone(&cancel));

    let before_spawn = std::time::Instant::now();
    let thread = std::thread::spawn(move || {
        log::debug!("Took {:?} to spawn search thread", before_spawn.elapsed());
        // The receiver may have given up waiting; nobody is left to tell.
        let outcome = engine.search(start, &goal);
        log::debug!(
            "Search thread done, {:?} moves",
            outcome.path().map(|path| path.cost())
        );
        let _ = tx.send(outcome);
    });

    SearchHandle { rx, cancel, thread }
}

impl SearchHandle {
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Blocks until the search finishes, cancelling it once `timeout` elapses.
    pub fn wait(self, timeout: Option<Duration>) -> anyhow::Result<Search> {
        let result = match timeout {
            None => self.rx.recv().ok(),
            Some(timeout) => match self.rx.recv_timeout(timeout) {
                Ok(result) => Some(result),
                Err(RecvTimeoutError::Timeout) => {
                    log::warn!("Search exceeded {:?}, cancelling", timeout);
                    self.cancel();
                    self.rx.recv().ok()
                }
                Err(RecvTimeoutError::Disconnected) => None,
            },
        };

        match result {
            Some(result) => {
                self.thread
                    .join()
                    .map_err(|_| anyhow::anyhow!("Search thread panicked"))?;
                Ok(result)
            }
            None => {
                let panicked = self.thread.join().is_err();
                Err(anyhow::anyhow!(
                    "Search thread exited without a result (panicked: {})",
                    panicked
                ))
            }
        }
    }
}
