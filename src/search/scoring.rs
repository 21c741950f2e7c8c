//! Offset scoring: count matching symbols between pattern and subject.

/// Count character-wise matches between `pattern` and the slice of `subject`
/// starting at `offset`.
///
/// Comparison truncates at the subject boundary: pattern positions that fall
/// past the end of the subject contribute nothing and are not counted as
/// mismatches. Pure and O(pattern length).
#[must_use]
pub fn score(subject: &[u8], pattern: &[u8], offset: usize) -> usize {
    if offset >= subject.len() {
        return 0;
    }
    let window = pattern.len().min(subject.len() - offset);

    subject[offset..offset + window]
        .iter()
        .zip(&pattern[..window])
        .filter(|(s, p)| s == p)
        .count()
}
