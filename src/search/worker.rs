//! Per-worker search loop: score a partition, reduce to a local best, submit.

use tracing::debug;

use crate::core::types::{SearchResult, NO_MATCH};
use crate::search::partition::OffsetPartition;
use crate::search::scoring::score;
use crate::search::shared::{LockPoisoned, SharedBest};

/// Run one worker to completion.
///
/// Scores every offset in the worker's partition, keeps the local best, and
/// submits it to `shared` under the lock. Workers with an empty partition or
/// a still-sentinel local best submit nothing.
///
/// # Errors
///
/// Returns [`LockPoisoned`] if the shared lock cannot be acquired. This is
/// fatal for the worker; a skipped submission could silently produce a
/// non-optimal global result.
pub fn run(
    subject: &[u8],
    pattern: &[u8],
    partition: OffsetPartition,
    shared: &SharedBest,
) -> Result<(), LockPoisoned> {
    let local = local_best(subject, pattern, partition);

    if local.is_sentinel() {
        debug!("worker finished with an empty partition, nothing to submit");
        return Ok(());
    }

    debug!(position = local.position, count = local.count, "submitting local best");
    shared.merge(local)
}

/// Reduce a partition to its best-scoring offset.
///
/// Strict-greater-count wins: since offsets are visited in increasing order,
/// the first offset reaching the maximum count is kept, which yields the
/// lowest-position winner among local ties.
fn local_best(subject: &[u8], pattern: &[u8], partition: OffsetPartition) -> SearchResult {
    let mut best = NO_MATCH;
    for offset in partition.offsets() {
        let count = score(subject, pattern, offset);
        let candidate = SearchResult::at(offset, count);
        if candidate.count > best.count {
            best = candidate;
        }
    }
    best
}
