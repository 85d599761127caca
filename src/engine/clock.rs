use std::future::Future;

use tokio::task::JoinHandle;
use tracing::debug;

/// Owns the two timer tasks that drive a match: the fixed-period minute tick
/// and the randomly spaced commentary tick.
///
/// Every `arm` starts a new generation. Tick handlers compare the generation
/// they were spawned with against the current one, so a tick that was already
/// waiting when the clock was cancelled can never touch the match.
#[derive(Debug, Default)]
pub struct MatchClock {
    minute_task: Option<JoinHandle<()>>,
    commentary_task: Option<JoinHandle<()>>,
    generation: u64,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_armed(&self) -> bool {
        self.minute_task.is_some() || self.commentary_task.is_some()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.is_armed() && self.generation == generation
    }

    /// Cancels any running timers and starts the generation the new
    /// timer tasks must be built for
    pub fn next_generation(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;
        self.generation
    }

    /// Spawns both timer tasks. Must run inside a tokio runtime.
    pub fn arm<M, C>(&mut self, minute_loop: M, commentary_loop: C)
    where
        M: Future<Output = ()> + Send + 'static,
        C: Future<Output = ()> + Send + 'static,
    {
        self.minute_task = Some(tokio::spawn(minute_loop));
        self.commentary_task = Some(tokio::spawn(commentary_loop));
        debug!(generation = self.generation, "Match clock armed");
    }

    /// Aborts both timer tasks; safe to call when nothing is armed
    pub fn cancel(&mut self) {
        let mut cancelled = false;
        for task in [self.minute_task.take(), self.commentary_task.take()]
            .into_iter()
            .flatten()
        {
            task.abort();
            cancelled = true;
        }

        if cancelled {
            debug!(generation = self.generation, "Match clock cancelled");
        }
    }
}

impl Drop for MatchClock {
    fn drop(&mut self) {
        self.cancel();
    }
}
