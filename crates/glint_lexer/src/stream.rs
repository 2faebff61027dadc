//! Token stream drivers.
//!
//! [`Tokens`] walks an in-memory buffer; its window is always final, so the
//! tokenizer never asks for more data. [`StreamScanner`] pulls bytes from a
//! reader into a growing buffer and retries the tokenizer whenever a token
//! might extend past what has been read.
//!
//! Both drivers partition the input: the emitted tokens, concatenated, are
//! exactly the input bytes.

use std::io::{self, Read};

use tracing::{debug, trace};

use crate::error::ScanError;
use crate::keywords::KeywordSet;
use crate::kind::{Token, TokenKind};
use crate::tokenizer::{Step, Tokenizer};
use crate::window::SourceWindow;

/// Initial read buffer size for [`StreamScanner`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// Tokenize an in-memory source with the default keyword set.
pub fn tokenize(source: &[u8]) -> Tokens<'_, 'static> {
    Tokens::new(source)
}

/// Iterator over the tokens of an in-memory source.
#[derive(Clone, Debug)]
pub struct Tokens<'a, 'k> {
    source: &'a [u8],
    offset: usize,
    tokenizer: Tokenizer<'k>,
}

impl<'a> Tokens<'a, 'static> {
    pub fn new(source: &'a [u8]) -> Self {
        Self::with_keywords(source, KeywordSet::shared())
    }
}

impl<'a, 'k> Tokens<'a, 'k> {
    pub fn with_keywords(source: &'a [u8], keywords: &'k KeywordSet) -> Self {
        Self {
            source,
            offset: 0,
            tokenizer: Tokenizer::new(keywords),
        }
    }

    /// Byte offset of the next token (the total length of tokens produced so far).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Pair every token with its start offset.
    pub fn with_offsets(self) -> WithOffsets<'a, 'k> {
        WithOffsets { inner: self }
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.source[self.offset..];
        match self.tokenizer.next_token(SourceWindow::complete(rest)) {
            Step::Token(token) => {
                trace!(
                    offset = self.offset,
                    len = token.len(),
                    kind = %token.kind(),
                    "token"
                );
                self.offset += token.len();
                Some(token)
            }
            // A final window never needs more data.
            Step::Done | Step::NeedMore => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}

/// Iterator adapter yielding `(start_offset, token)`.
#[derive(Clone, Debug)]
pub struct WithOffsets<'a, 'k> {
    inner: Tokens<'a, 'k>,
}

impl<'a> Iterator for WithOffsets<'a, '_> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<(usize, Token<'a>)> {
        let start = self.inner.offset();
        self.inner.next().map(|token| (start, token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Streaming driver over any [`Read`] source.
///
/// Keeps the unconsumed tail of the input in an internal buffer. When the
/// tokenizer cannot decide a token from the bytes read so far, the buffer is
/// compacted, grown if full, and refilled. A zero-byte read marks end of
/// input, after which every remaining byte is guaranteed to be tokenized.
///
/// The buffer grows to hold the longest single token, with no upper bound.
pub struct StreamScanner<'k, R> {
    reader: R,
    buf: Vec<u8>,
    /// Start of unconsumed bytes in `buf`.
    start: usize,
    /// End of valid bytes in `buf`.
    end: usize,
    at_eof: bool,
    /// Source offset of `buf[start]`.
    offset: usize,
    tokenizer: Tokenizer<'k>,
}

impl<R: Read> StreamScanner<'static, R> {
    pub fn new(reader: R) -> Self {
        Self::with_keywords(reader, KeywordSet::shared())
    }
}

impl<'k, R: Read> StreamScanner<'k, R> {
    pub fn with_keywords(reader: R, keywords: &'k KeywordSet) -> Self {
        Self::with_capacity(reader, keywords, DEFAULT_CAPACITY)
    }

    /// Create a scanner whose read buffer starts at `capacity` bytes (minimum 1).
    pub fn with_capacity(reader: R, keywords: &'k KeywordSet, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0; capacity.max(1)],
            start: 0,
            end: 0,
            at_eof: false,
            offset: 0,
            tokenizer: Tokenizer::new(keywords),
        }
    }

    /// Source offset of the next token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consume the scanner, returning the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Tokenize the whole input, handing each token and its start offset to `sink`.
    ///
    /// Stops at the first read failure or sink failure. After a sink failure
    /// the failing token counts as consumed; no further tokens are produced.
    pub fn scan<E, F>(&mut self, mut sink: F) -> Result<(), ScanError<E>>
    where
        F: FnMut(usize, Token<'_>) -> Result<(), E>,
    {
        loop {
            let window = SourceWindow::new(&self.buf[self.start..self.end], self.at_eof);
            match self.tokenizer.next_token(window) {
                Step::Token(token) => {
                    let start = self.offset;
                    let len = token.len();
                    trace!(offset = start, len, kind = %token.kind(), "token");
                    self.start += len;
                    self.offset += len;
                    if let Err(e) = sink(start, token) {
                        debug!(offset = start, "token sink failed, stopping scan");
                        return Err(ScanError::Sink(e));
                    }
                }
                Step::NeedMore => self.fill().map_err(ScanError::Read)?,
                Step::Done => return Ok(()),
            }
        }
    }

    /// Tokenize the whole input into owned `(kind, bytes)` pairs.
    pub fn collect_tokens(&mut self) -> io::Result<Vec<(TokenKind, Vec<u8>)>> {
        let mut tokens = Vec::new();
        self.scan(|_, token| {
            tokens.push((token.kind(), token.bytes().to_vec()));
            Ok::<(), std::convert::Infallible>(())
        })
        .map_err(|e| match e {
            ScanError::Read(e) => e,
            ScanError::Sink(never) => match never {},
        })?;
        Ok(tokens)
    }

    /// Read more bytes, making room first. Sets `at_eof` on a zero-byte read.
    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        if self.end == self.buf.len() {
            let new_len = self.buf.len() * 2;
            debug!(from = self.buf.len(), to = new_len, "growing scan buffer");
            self.buf.resize(new_len, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    debug!(offset = self.offset + self.end, "end of input");
                    self.at_eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    debug!(read = n, buffered = self.end + n, "refilled scan buffer");
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R> std::fmt::Debug for StreamScanner<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamScanner")
            .field("offset", &self.offset)
            .field("buffered", &(self.end - self.start))
            .field("capacity", &self.buf.len())
            .field("at_eof", &self.at_eof)
            .finish_non_exhaustive()
    }
}
