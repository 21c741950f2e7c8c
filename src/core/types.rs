use serde::{Deserialize, Serialize};

/// Sentinel value for "no match recorded yet".
///
/// Both fields start at -1; any real match (count >= 0 at a valid position)
/// replaces it.
pub const NO_MATCH: SearchResult = SearchResult {
    position: -1,
    count: -1,
};

/// The best match found for a pattern within a subject sequence.
///
/// `position` is the starting offset of the match in the subject and `count`
/// is the number of symbols that matched there. The sentinel `(-1, -1)`
/// compares worse than every real result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Starting offset in the subject, or -1 if no match was recorded
    pub position: i64,

    /// Number of matching symbols at `position`, or -1 if no match was recorded
    pub count: i64,
}

impl SearchResult {
    /// A real result at a known offset.
    #[must_use]
    pub fn at(position: usize, count: usize) -> Self {
        // Subject sizes are capped well below i64::MAX, so these cannot wrap.
        #[allow(clippy::cast_possible_wrap)]
        {
            Self {
                position: position as i64,
                count: count as i64,
            }
        }
    }

    /// Whether this is still the "no match yet" sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        *self == NO_MATCH
    }

    /// The global comparison rule: highest count wins, ties broken by the
    /// lowest position. Returns true when `self` should replace `current`.
    ///
    /// This total order is what makes the search deterministic regardless of
    /// worker scheduling or submission order. The sentinel loses to every
    /// real result because its count is below any valid count.
    #[must_use]
    pub fn beats(&self, current: &SearchResult) -> bool {
        self.count > current.count
            || (self.count == current.count && self.position < current.position)
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        NO_MATCH
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position {} (count {})", self.position, self.count)
    }
}
