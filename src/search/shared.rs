//! The cross-worker best-match record and its exclusion lock.

use std::sync::Mutex;

use crate::core::types::{SearchResult, NO_MATCH};

/// Error raised when the shared lock cannot be acquired.
///
/// With an in-process mutex this happens only when a previous holder
/// panicked. A worker that cannot merge must fail loudly; silently dropping
/// a submission could leave a non-optimal global result.
#[derive(Debug, thiserror::Error)]
#[error("shared result lock was poisoned by a failed worker")]
pub struct LockPoisoned;

/// The single cross-worker `SearchResult`, guarded by a mutex.
///
/// Allocated by the coordinator before any worker starts; workers borrow it
/// for the duration of the search and only touch the value through
/// [`SharedBest::merge`]. The final value is read lock-free via
/// [`SharedBest::into_result`] once every worker has been joined.
#[derive(Debug)]
pub struct SharedBest {
    best: Mutex<SearchResult>,
}

impl SharedBest {
    /// A fresh shared record holding the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            best: Mutex::new(NO_MATCH),
        }
    }

    /// Apply the merge rule under the lock: replace the shared value with
    /// `local` when it has a higher count, or the same count at a lower
    /// position.
    ///
    /// The critical section is exactly this compare-and-overwrite; scoring
    /// never happens under the lock.
    ///
    /// # Errors
    ///
    /// Returns [`LockPoisoned`] if the lock cannot be acquired.
    pub fn merge(&self, local: SearchResult) -> Result<(), LockPoisoned> {
        let mut best = self.best.lock().map_err(|_| LockPoisoned)?;
        if local.beats(&best) {
            *best = local;
        }
        Ok(())
    }

    /// Consume the shared record and return the final value.
    ///
    /// Callers must ensure no worker can still be running; the coordinator
    /// only calls this after joining every worker, at which point exclusive
    /// ownership makes the read lock-free.
    ///
    /// # Errors
    ///
    /// Returns [`LockPoisoned`] if a worker panicked while holding the lock.
    pub fn into_result(self) -> Result<SearchResult, LockPoisoned> {
        self.best.into_inner().map_err(|_| LockPoisoned)
    }
}

impl Default for SharedBest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_real_merge_replaces_sentinel() {
        let shared = SharedBest::new();
        shared.merge(SearchResult::at(3, 0)).unwrap();
        assert_eq!(shared.into_result().unwrap(), SearchResult::at(3, 0));
    }

    #[test]
    fn test_higher_count_replaces() {
        let shared = SharedBest::new();
        shared.merge(SearchResult::at(10, 2)).unwrap();
        shared.merge(SearchResult::at(20, 5)).unwrap();
        assert_eq!(shared.into_result().unwrap(), SearchResult::at(20, 5));
    }

    #[test]
    fn test_lower_count_is_ignored() {
        let shared = SharedBest::new();
        shared.merge(SearchResult::at(20, 5)).unwrap();
        shared.merge(SearchResult::at(0, 2)).unwrap();
        assert_eq!(shared.into_result().unwrap(), SearchResult::at(20, 5));
    }

    #[test]
    fn test_tie_resolves_to_lower_position() {
        let shared = SharedBest::new();
        shared.merge(SearchResult::at(9, 4)).unwrap();
        shared.merge(SearchResult::at(2, 4)).unwrap();
        assert_eq!(shared.into_result().unwrap(), SearchResult::at(2, 4));
    }

    #[test]
    fn test_tie_at_higher_position_does_not_replace() {
        let shared = SharedBest::new();
        shared.merge(SearchResult::at(2, 4)).unwrap();
        shared.merge(SearchResult::at(9, 4)).unwrap();
        assert_eq!(shared.into_result().unwrap(), SearchResult::at(2, 4));
    }

    #[test]
    fn test_count_is_monotonic_over_merges() {
        let shared = SharedBest::new();
        let submissions = [
            SearchResult::at(5, 1),
            SearchResult::at(1, 3),
            SearchResult::at(8, 2),
            SearchResult::at(0, 3),
        ];
        let mut last_count = -1;
        for s in submissions {
            shared.merge(s).unwrap();
            let current = *shared.best.lock().unwrap();
            assert!(current.count >= last_count);
            last_count = current.count;
        }
        assert_eq!(shared.into_result().unwrap(), SearchResult::at(0, 3));
    }
}
