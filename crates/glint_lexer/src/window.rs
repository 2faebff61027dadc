//! Source buffer view handed to the tokenizer.

/// The unconsumed prefix of the source plus an end-of-input flag.
///
/// For in-memory input the window is the whole remaining buffer and is always
/// final. Streaming drivers hand the tokenizer a growing, non-final window
/// until the reader reports end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceWindow<'a> {
    bytes: &'a [u8],
    is_final: bool,
}

impl<'a> SourceWindow<'a> {
    pub fn new(bytes: &'a [u8], is_final: bool) -> Self {
        Self { bytes, is_final }
    }

    /// A window over input that will not grow.
    pub fn complete(bytes: &'a [u8]) -> Self {
        Self::new(bytes, true)
    }

    /// A window that may be extended with more bytes later.
    pub fn partial(bytes: &'a [u8]) -> Self {
        Self::new(bytes, false)
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns `true` once no more input will arrive.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
