//! Import error types

use thiserror::Error;

/// Why an import produced no entries.
///
/// A file holding zero records is not an error; it imports as an empty list.
#[derive(Error, Debug)]
pub enum ImportError {
    /// A continuation line appeared before any field was opened. The whole
    /// file is rejected, including records that parsed before the bad line.
    #[error("Malformed tag file: continuation line {line} has no field to continue")]
    Structural { line: usize },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown import format: {0}")]
    UnknownFormat(String),
}

impl ImportError {
    /// True when the input itself is unparseable, as opposed to unreadable.
    pub fn is_structural(&self) -> bool {
        matches!(self, ImportError::Structural { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_message_names_line() {
        let err = ImportError::Structural { line: 7 };
        assert!(err.to_string().contains("line 7"));
        assert!(err.is_structural());
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: ImportError = io.into();
        assert!(!err.is_structural());
        assert!(err.to_string().contains("closed"));
    }
}
