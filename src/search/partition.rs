//! Interleaved partitioning of subject offsets across workers.

/// The set of starting offsets assigned to one worker.
///
/// Worker `i` of `n` owns the stride `i, i + n, i + 2n, ...` below
/// `subject_len`. Interleaving keeps load balanced regardless of where in the
/// subject the expensive comparisons fall, and the union over all workers
/// covers `[0, subject_len)` exactly once.
#[derive(Debug, Clone, Copy)]
pub struct OffsetPartition {
    worker_id: usize,
    worker_count: usize,
    subject_len: usize,
}

impl OffsetPartition {
    /// Partition for worker `worker_id` of `worker_count` over a subject of
    /// `subject_len` offsets.
    ///
    /// # Panics
    ///
    /// Panics if `worker_count` is zero or `worker_id` is out of range; the
    /// coordinator validates both before any partition is built.
    #[must_use]
    pub fn new(worker_id: usize, worker_count: usize, subject_len: usize) -> Self {
        assert!(worker_count >= 1, "worker_count must be at least 1");
        assert!(worker_id < worker_count, "worker_id out of range");
        Self {
            worker_id,
            worker_count,
            subject_len,
        }
    }

    /// The offsets owned by this worker, in increasing order.
    ///
    /// Lazy and restartable; calling this again yields the same offsets.
    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        (self.worker_id..self.subject_len).step_by(self.worker_count)
    }

    /// Whether this worker was assigned no offsets at all (more workers than
    /// offsets).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.worker_id >= self.subject_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Union over all workers must be {0..len-1} with no duplicates.
    fn assert_covers_exactly(worker_count: usize, subject_len: usize) {
        let mut seen = HashSet::new();
        let mut total = 0usize;
        for id in 0..worker_count {
            for offset in OffsetPartition::new(id, worker_count, subject_len).offsets() {
                assert!(offset < subject_len);
                assert!(seen.insert(offset), "offset {offset} assigned twice");
                total += 1;
            }
        }
        assert_eq!(total, subject_len);
    }

    #[test]
    fn test_single_worker_owns_everything() {
        let offsets: Vec<_> = OffsetPartition::new(0, 1, 5).offsets().collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_two_workers_interleave() {
        let first: Vec<_> = OffsetPartition::new(0, 2, 7).offsets().collect();
        let second: Vec<_> = OffsetPartition::new(1, 2, 7).offsets().collect();
        assert_eq!(first, vec![0, 2, 4, 6]);
        assert_eq!(second, vec![1, 3, 5]);
    }

    #[test]
    fn test_coverage_across_worker_counts() {
        for len in [1, 2, 3, 7, 16, 100] {
            for n in 1..=len {
                assert_covers_exactly(n, len);
            }
        }
    }

    #[test]
    fn test_more_workers_than_offsets_yields_empty_partitions() {
        let partition = OffsetPartition::new(5, 8, 3);
        assert!(partition.is_empty());
        assert_eq!(partition.offsets().count(), 0);
    }

    #[test]
    fn test_offsets_are_restartable() {
        let partition = OffsetPartition::new(1, 3, 10);
        let first: Vec<_> = partition.offsets().collect();
        let second: Vec<_> = partition.offsets().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_offsets_increase() {
        let offsets: Vec<_> = OffsetPartition::new(2, 3, 50).offsets().collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }
}
