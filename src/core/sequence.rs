use std::fmt;

/// Maximum subject sequence size after filtering (1 MiB)
pub const MAX_SEQUENCE_SIZE: usize = 1_048_576;

/// Maximum pattern size after filtering (10 KiB)
pub const MAX_PATTERN_SIZE: usize = 10_240;

/// Errors constructing a [`DnaSequence`]
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("sequence is empty after filtering to A/C/G/T")]
    Empty,

    #[error("sequence has {actual} bases after filtering, maximum is {limit}")]
    TooLong { actual: usize, limit: usize },
}

/// An immutable DNA sequence over the `{A, C, G, T}` alphabet.
///
/// Construction filters arbitrary input bytes down to the alphabet:
/// lowercase bases are normalized to uppercase, everything else (newlines,
/// whitespace, FASTA-style noise) is dropped. Once built the sequence never
/// changes, so it can be shared read-only across worker threads without
/// synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaSequence {
    bases: Vec<u8>,
}

impl DnaSequence {
    /// Build a sequence from raw bytes, keeping only A/C/G/T (case folded to
    /// uppercase) and enforcing `max_len` on the filtered result.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if nothing survives filtering and
    /// [`SequenceError::TooLong`] if the filtered length exceeds `max_len`.
    pub fn from_raw(raw: &[u8], max_len: usize) -> Result<Self, SequenceError> {
        let mut bases = Vec::with_capacity(raw.len().min(max_len));
        for &b in raw {
            let upper = b.to_ascii_uppercase();
            if matches!(upper, b'A' | b'C' | b'G' | b'T') {
                if bases.len() >= max_len {
                    return Err(SequenceError::TooLong {
                        actual: raw
                            .iter()
                            .filter(|c| matches!(c.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T'))
                            .count(),
                        limit: max_len,
                    });
                }
                bases.push(upper);
            }
        }

        if bases.is_empty() {
            return Err(SequenceError::Empty);
        }

        Ok(Self { bases })
    }

    /// Build a sequence from bytes already known to be uppercase A/C/G/T.
    ///
    /// # Panics
    ///
    /// Panics if any byte is outside the alphabet. Intended for literals in
    /// tests and examples.
    #[must_use]
    pub fn from_validated(bases: &[u8]) -> Self {
        assert!(
            bases.iter().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')),
            "sequence contains bytes outside A/C/G/T"
        );
        Self {
            bases: bases.to_vec(),
        }
    }

    /// Number of bases in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// The underlying bases.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Constructors only admit ASCII, so this cannot fail.
        f.write_str(std::str::from_utf8(&self.bases).map_err(|_| fmt::Error)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_filters_non_bases() {
        let seq = DnaSequence::from_raw(b">x1\nGAT-TA CA\n", MAX_SEQUENCE_SIZE).unwrap();
        assert_eq!(seq.as_bytes(), b"GATTACA");
    }

    #[test]
    fn test_from_raw_keeps_bases_wherever_they_appear() {
        // Filtering is position-blind: base letters inside annotation text
        // survive, so ">read1" contributes its 'a'
        let seq = DnaSequence::from_raw(b">read1\nGG", MAX_SEQUENCE_SIZE).unwrap();
        assert_eq!(seq.as_bytes(), b"AGG");
    }

    #[test]
    fn test_from_raw_normalizes_case() {
        let seq = DnaSequence::from_raw(b"gAtTaCa", MAX_SEQUENCE_SIZE).unwrap();
        assert_eq!(seq.as_bytes(), b"GATTACA");
    }

    #[test]
    fn test_from_raw_rejects_empty_after_filtering() {
        let err = DnaSequence::from_raw(b"xyz 123\n", MAX_SEQUENCE_SIZE).unwrap_err();
        assert!(matches!(err, SequenceError::Empty));
    }

    #[test]
    fn test_from_raw_enforces_size_cap() {
        let raw = vec![b'A'; 11];
        let err = DnaSequence::from_raw(&raw, 10).unwrap_err();
        match err {
            SequenceError::TooLong { actual, limit } => {
                assert_eq!(actual, 11);
                assert_eq!(limit, 10);
            }
            other => panic!("expected TooLong, got {other:?}"),
        }
    }

    #[test]
    fn test_from_raw_accepts_exactly_max_len() {
        let raw = vec![b'C'; 10];
        let seq = DnaSequence::from_raw(&raw, 10).unwrap();
        assert_eq!(seq.len(), 10);
    }

    #[test]
    fn test_display_round_trips() {
        let seq = DnaSequence::from_validated(b"ACGT");
        assert_eq!(seq.to_string(), "ACGT");
    }
}
