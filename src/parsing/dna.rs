//! Reading DNA sequences from plain text files.
//!
//! Input files are free-form text: bases may be upper or lower case and may
//! be broken up by whitespace or other noise. Everything outside `A/C/G/T`
//! is dropped during filtering, so FASTA-ish files work as long as header
//! lines contain no stray bases.

use std::path::Path;

use tracing::warn;

use crate::core::sequence::{DnaSequence, SequenceError};

/// Errors reading a sequence file
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sequence in '{path}': {source}")]
    Invalid {
        path: String,
        #[source]
        source: SequenceError,
    },
}

/// Read a sequence file, filter it to `A/C/G/T`, and enforce `max_len`.
///
/// # Errors
///
/// Returns [`ReadError::Io`] if the file cannot be read and
/// [`ReadError::Invalid`] if nothing survives filtering or the filtered
/// sequence exceeds `max_len`.
pub fn read_sequence_file(path: &Path, max_len: usize) -> Result<DnaSequence, ReadError> {
    let raw = std::fs::read(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let dropped = raw
        .iter()
        .filter(|b| !matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T'))
        .count();
    if dropped > 0 {
        warn!(
            path = %path.display(),
            dropped,
            "dropped non-ACGT bytes while reading sequence"
        );
    }

    DnaSequence::from_raw(&raw, max_len).map_err(|source| ReadError::Invalid {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::core::sequence::MAX_SEQUENCE_SIZE;

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_and_filters_file() {
        let file = write_temp(b"gat\ntac a\n");
        let seq = read_sequence_file(file.path(), MAX_SEQUENCE_SIZE).unwrap();
        assert_eq!(seq.as_bytes(), b"GATTACA");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err =
            read_sequence_file(Path::new("/nonexistent/sequence.txt"), MAX_SEQUENCE_SIZE)
                .unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[test]
    fn test_file_with_no_bases_is_invalid() {
        let file = write_temp(b"0123 xyz\n");
        let err = read_sequence_file(file.path(), MAX_SEQUENCE_SIZE).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Invalid {
                source: SequenceError::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_file_is_invalid() {
        let file = write_temp(&vec![b'A'; 32]);
        let err = read_sequence_file(file.path(), 16).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Invalid {
                source: SequenceError::TooLong { .. },
                ..
            }
        ));
    }
}
