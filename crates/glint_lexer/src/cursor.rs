//! Byte cursor over a [`SourceWindow`].
//!
//! The cursor walks the window one code point (or one byte) at a time. Unlike
//! a cursor over a complete source, it cannot treat the end of its slice as
//! the end of input: when the window is not final, reaching the end means
//! "the run might continue". Every scanning method therefore reports whether
//! it reached a decision, and the tokenizer turns an undecided scan into a
//! request for more data.

use memchr::memmem;

use crate::classify::decode;
use crate::window::SourceWindow;

/// What the cursor sees at its current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Peek {
    /// A code point and its width in bytes (invalid bytes appear as `U+FFFD`, width 1).
    Char(char, usize),
    /// The window is final and fully consumed.
    End,
    /// The window ends here (or mid-sequence) but more input may follow.
    Pending,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    is_final: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(window: SourceWindow<'a>) -> Self {
        Self {
            buf: window.bytes(),
            pos: 0,
            is_final: window.is_final(),
        }
    }

    /// Current byte offset from the start of the window.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_final(&self) -> bool {
        self.is_final
    }

    /// Bytes consumed so far, from the start of the window.
    #[inline]
    pub(crate) fn consumed(&self) -> &'a [u8] {
        &self.buf[..self.pos]
    }

    /// Unconsumed bytes from the current position.
    #[inline]
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns `true` if the unconsumed bytes start with `prefix`.
    #[inline]
    pub(crate) fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advance by `n` bytes, clamped to the window.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Move to the end of the window.
    #[inline]
    pub(crate) fn advance_to_end(&mut self) {
        self.pos = self.buf.len();
    }

    /// Decode the code point at the current position without consuming it.
    pub(crate) fn peek_char(&self) -> Peek {
        let rest = self.rest();
        if rest.is_empty() {
            return if self.is_final { Peek::End } else { Peek::Pending };
        }
        match decode(rest).resolve(self.is_final) {
            Some((c, width)) => Peek::Char(c, width),
            None => Peek::Pending,
        }
    }

    /// Advance while `pred` holds for the current code point.
    ///
    /// Returns `true` when the run is known to be maximal: it stopped on a
    /// code point failing `pred`, or it consumed a final window. Returns
    /// `false` when the run reached the end of a non-final window.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        loop {
            match self.peek_char() {
                Peek::Char(c, width) if pred(c) => self.pos += width,
                Peek::Char(..) | Peek::End => return true,
                Peek::Pending => return false,
            }
        }
    }

    /// Advance past the next `\n`, inclusive.
    ///
    /// Without a newline, a final window is consumed to its end; a non-final
    /// window leaves the cursor in place and returns `false`.
    pub(crate) fn eat_through_newline(&mut self) -> bool {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => {
                self.pos += offset + 1;
                true
            }
            None => self.eat_rest_if_final(),
        }
    }

    /// Advance past the first occurrence of `needle`, inclusive.
    ///
    /// Same end-of-window handling as [`eat_through_newline`](Self::eat_through_newline).
    pub(crate) fn eat_through(&mut self, needle: &[u8]) -> bool {
        match memmem::find(self.rest(), needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                true
            }
            None => self.eat_rest_if_final(),
        }
    }

    /// Advance past the first unescaped `quote` byte, inclusive.
    ///
    /// A backslash skips the byte after it unconditionally, including another
    /// backslash or the quote itself. A backslash in the last position of a
    /// non-final window is undecided, since the escaped byte has not arrived.
    pub(crate) fn eat_quoted_body(&mut self, quote: u8) -> bool {
        let mut i = self.pos;
        while i < self.buf.len() {
            match self.buf[i] {
                b'\\' => i += 2,
                b if b == quote => {
                    self.pos = i + 1;
                    return true;
                }
                _ => i += 1,
            }
        }
        self.eat_rest_if_final()
    }

    fn eat_rest_if_final(&mut self) -> bool {
        if self.is_final {
            self.advance_to_end();
        }
        self.is_final
    }
}
