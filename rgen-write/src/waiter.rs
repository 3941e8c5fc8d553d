use std::sync::{Condvar, Mutex, MutexGuard};

use log::error;
use rgen_util::source_iter;

use crate::error::Error;

#[derive(Default)]
struct State {
    pending: usize,
    errors: Vec<Error>,
}

/// Tracks the in-flight write tasks of one generation run and collects
/// their failures.
///
/// One instance is constructed per run and handed to every
/// [`File::generate`](crate::file::File::generate) call. The aggregate is
/// only well-defined after [`wait`](GenerateWaiter::wait) has returned.
#[derive(Default)]
pub struct GenerateWaiter {
    state: Mutex<State>,
    done: Condvar,
}

impl GenerateWaiter {
    pub fn new() -> GenerateWaiter {
        GenerateWaiter::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register one task. Called before the task is spawned so a fast
    /// completion cannot race `wait`.
    pub fn begin_task(&self) {
        self.lock().pending += 1;
    }

    /// Mark one task finished. Must run exactly once per `begin_task`,
    /// on failure paths included.
    pub fn end_task(&self) {
        let mut state = self.lock();
        state.pending = state.pending.saturating_sub(1);
        if state.pending == 0 {
            self.done.notify_all();
        }
    }

    /// Record a task failure and log it immediately, so a long batch is
    /// not silent about partial failures while still running.
    pub fn record_error(&self, err: Error) {
        error!("{err}");
        for cause in source_iter(&err) {
            error!("  because: {cause}");
        }

        self.lock().errors.push(err);
    }

    /// Block until every registered task has finished. Returns
    /// immediately when nothing was dispatched.
    pub fn wait(&self) {
        let mut state = self.lock();
        while state.pending > 0 {
            state = self.done.wait(state).unwrap_or_else(|e| e.into_inner());
        }
    }

    /// One aggregate of every recorded failure, or `Ok` when the run was
    /// clean. Only valid after [`wait`](GenerateWaiter::wait) returns.
    pub fn collected_error(&self) -> Result<(), Error> {
        let mut state = self.lock();
        if state.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Aggregate(std::mem::take(&mut state.errors)))
        }
    }
}
