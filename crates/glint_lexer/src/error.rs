//! Driver failures.
//!
//! Tokenization itself cannot fail. The only errors come from the byte
//! source the streaming driver reads, or from the sink consuming tokens.

use std::io;

/// Why a token stream stopped early.
///
/// `E` is the sink's own error type, carried through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ScanError<E> {
    /// Reading the source failed.
    #[error("failed to read source: {0}")]
    Read(#[source] io::Error),
    /// The token sink returned an error; no further tokens were produced.
    #[error("token sink failed: {0}")]
    Sink(#[source] E),
}

impl<E> ScanError<E> {
    /// The sink's error, if the sink is what failed.
    pub fn into_sink_error(self) -> Option<E> {
        match self {
            ScanError::Sink(e) => Some(e),
            ScanError::Read(_) => None,
        }
    }
}

impl ScanError<io::Error> {
    /// Collapse into a single `io::Error` when the sink also does I/O.
    pub fn into_io(self) -> io::Error {
        match self {
            ScanError::Read(e) | ScanError::Sink(e) => e,
        }
    }
}
