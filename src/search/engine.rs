//! The search coordinator: spawn workers, join them all, report the merge.

use std::thread;

use tracing::debug;

use crate::core::sequence::DnaSequence;
use crate::core::types::SearchResult;
use crate::search::partition::OffsetPartition;
use crate::search::shared::{LockPoisoned, SharedBest};
use crate::search::worker;

/// Errors from a parallel search run
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("worker count {workers} exceeds subject length {subject_len}")]
    TooManyWorkers { workers: usize, subject_len: usize },

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("{failed} of {spawned} workers terminated abnormally")]
    WorkerFailure { failed: usize, spawned: usize },

    #[error(transparent)]
    Poisoned(#[from] LockPoisoned),
}

/// A configured parallel best-match search.
///
/// The engine borrows both sequences read-only; workers never mutate them.
/// One engine instance runs one search.
///
/// ## Example
///
/// ```rust
/// use subseq_solver::core::DnaSequence;
/// use subseq_solver::search::SearchEngine;
///
/// let subject = DnaSequence::from_validated(b"GATTACA");
/// let pattern = DnaSequence::from_validated(b"ACA");
///
/// let engine = SearchEngine::new(&subject, &pattern, 2).unwrap();
/// let best = engine.run().unwrap();
/// assert_eq!((best.position, best.count), (4, 3));
/// ```
#[derive(Debug)]
pub struct SearchEngine<'a> {
    subject: &'a DnaSequence,
    pattern: &'a DnaSequence,
    worker_count: usize,
}

impl<'a> SearchEngine<'a> {
    /// Validate the configuration and build an engine.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoWorkers`] for a zero worker count and
    /// [`SearchError::TooManyWorkers`] when there are more workers than
    /// subject offsets (permitted by the protocol but wasteful, so rejected
    /// as a configuration error).
    pub fn new(
        subject: &'a DnaSequence,
        pattern: &'a DnaSequence,
        worker_count: usize,
    ) -> Result<Self, SearchError> {
        if worker_count == 0 {
            return Err(SearchError::NoWorkers);
        }
        if worker_count > subject.len() {
            return Err(SearchError::TooManyWorkers {
                workers: worker_count,
                subject_len: subject.len(),
            });
        }
        Ok(Self {
            subject,
            pattern,
            worker_count,
        })
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run the search to completion and return the global best match.
    ///
    /// Spawns `worker_count` threads, each scoring its interleaved partition
    /// of subject offsets and merging its local best into the shared record
    /// under the lock. The final value is read only after every worker has
    /// been joined, so no lock is needed for the read.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Spawn`] if a worker thread could not be
    /// created and [`SearchError::WorkerFailure`] if any worker terminated
    /// abnormally. In both cases every spawned worker has already been
    /// joined when the error is returned.
    pub fn run(&self) -> Result<SearchResult, SearchError> {
        let subject = self.subject.as_bytes();
        let pattern = self.pattern.as_bytes();
        let worker_count = self.worker_count;

        let shared = SharedBest::new();
        self.run_workers(&shared, move |worker_id, shared| {
            let partition = OffsetPartition::new(worker_id, worker_count, subject.len());
            worker::run(subject, pattern, partition, shared)
        })?;

        // All workers are joined; no writer can exist past this point.
        let result = shared.into_result()?;
        debug!(
            position = result.position,
            count = result.count,
            "search complete"
        );
        Ok(result)
    }

    /// Spawn one thread per worker, then join every thread that was spawned.
    ///
    /// Errors are surfaced only after all spawned workers have been joined:
    /// a mid-loop spawn failure stops launching but still reaps the earlier
    /// workers, and worker failures are counted across the full join pass
    /// rather than returned at the first one.
    fn run_workers<F>(&self, shared: &SharedBest, worker_fn: F) -> Result<(), SearchError>
    where
        F: Fn(usize, &SharedBest) -> Result<(), LockPoisoned> + Copy + Send + Sync,
    {
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.worker_count);
            let mut spawn_error = None;

            for worker_id in 0..self.worker_count {
                let builder = thread::Builder::new().name(format!("subseq-worker-{worker_id}"));
                match builder.spawn_scoped(scope, move || worker_fn(worker_id, shared)) {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        debug!(worker_id, "worker spawn failed");
                        spawn_error = Some(e);
                        break;
                    }
                }
            }

            let spawned = handles.len();
            let mut failed = 0usize;
            for handle in handles {
                match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(_)) | Err(_) => failed += 1,
                }
            }
            debug!(spawned, failed, "all workers joined");

            if let Some(e) = spawn_error {
                return Err(SearchError::Spawn(e));
            }
            if failed > 0 {
                return Err(SearchError::WorkerFailure { failed, spawned });
            }
            Ok(())
        })
    }
}
