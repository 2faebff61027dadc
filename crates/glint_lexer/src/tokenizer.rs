//! Incremental tokenizer: the rune-classification state machine.
//!
//! Each call to [`Tokenizer::next_token`] looks at the unconsumed prefix of
//! the source and either emits one token covering its first `n` bytes, asks
//! for more input, or reports that the input is exhausted.
//!
//! # Rules
//!
//! Tried in order against the first code point of the prefix:
//!
//! 1. quote: string through the matching unescaped quote
//! 2. letter or `_`: identifier run, reclassified as keyword or type name
//! 3. digit: decimal run (digits only, no radix or fraction)
//! 4. whitespace: whitespace run
//! 5. `//` or `#`: line comment through the newline
//! 6. `/*`: block comment through the first `*/`, no nesting
//! 7. anything else: maximal punctuation run
//!
//! None of the rules fail. Unterminated strings and comments become a single
//! token covering the rest of a final window.

use crate::classify::{
    is_alnum, is_alpha, is_digit, is_punctuation, is_quote, is_space, is_upper,
};
use crate::cursor::{Cursor, Peek};
use crate::keywords::KeywordSet;
use crate::kind::{Token, TokenKind};
use crate::window::SourceWindow;

/// Markers that open a comment running to the end of the line.
const LINE_COMMENT_OPENERS: [&[u8]; 2] = [b"//", b"#"];
const BLOCK_COMMENT_OPEN: &[u8] = b"/*";
const BLOCK_COMMENT_CLOSE: &[u8] = b"*/";

/// Outcome of one tokenizer call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    /// A token covering the first `token.len()` bytes of the window.
    Token(Token<'a>),
    /// The window is not final and does not yet hold a complete token.
    /// Nothing was consumed; retry with a longer window.
    NeedMore,
    /// The window is final and empty.
    Done,
}

/// Pending classification of the run being scanned.
///
/// Reset after every emitted token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanState {
    /// Kind assigned to the run so far, before keyword lookup.
    pub kind: TokenKind,
    /// The run started with an uppercase letter.
    pub type_candidate: bool,
    /// The run started with a lowercase letter, other letter, or `_`.
    pub name_candidate: bool,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            kind: TokenKind::PlainText,
            type_candidate: false,
            name_candidate: false,
        }
    }
}

/// Incremental, allocation-free tokenizer.
///
/// Borrows its keyword set; owns only the small [`ScanState`]. One instance
/// serves one input. Independent instances share nothing but the (immutable)
/// keyword set.
#[derive(Clone, Debug)]
pub struct Tokenizer<'k> {
    keywords: &'k KeywordSet,
    state: ScanState,
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(KeywordSet::shared())
    }
}

impl<'k> Tokenizer<'k> {
    pub fn new(keywords: &'k KeywordSet) -> Self {
        Self {
            keywords,
            state: ScanState::default(),
        }
    }

    pub fn keywords(&self) -> &'k KeywordSet {
        self.keywords
    }

    /// Classification state of the run in progress.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Classify the next token at the start of `window`.
    ///
    /// Never returns [`Step::NeedMore`] for a final window, and never returns
    /// an empty token.
    pub fn next_token<'a>(&mut self, window: SourceWindow<'a>) -> Step<'a> {
        let mut cursor = Cursor::new(window);
        let first = match cursor.peek_char() {
            Peek::Char(c, _) => c,
            Peek::End => return Step::Done,
            Peek::Pending => return Step::NeedMore,
        };

        let decided = self.scan(&mut cursor, first);
        let len = if decided { cursor.pos() } else { 0 };

        if len > 0 {
            self.emit(window, len)
        } else if cursor.is_final() {
            // No rule produced a token from a final window. Fall back to the
            // whole remainder under the tentative kind.
            self.emit(window, window.len())
        } else {
            Step::NeedMore
        }
    }

    /// Dispatch on the first code point. Returns `true` once the token's
    /// extent is decided; the cursor then sits at its end.
    fn scan(&mut self, cursor: &mut Cursor<'_>, first: char) -> bool {
        if is_quote(first) {
            return self.string(cursor, first);
        }

        let alpha = is_alpha(first);
        self.state.type_candidate = alpha && is_upper(first);
        self.state.name_candidate = alpha && !self.state.type_candidate;
        if self.state.type_candidate {
            self.state.kind = TokenKind::TypeName;
            return self.identifier(cursor);
        }
        if self.state.name_candidate {
            self.state.kind = TokenKind::PlainText;
            return self.identifier(cursor);
        }

        if is_digit(first) {
            self.state.kind = TokenKind::Decimal;
            return cursor.eat_while(is_digit);
        }

        if is_space(first) {
            self.state.kind = TokenKind::Whitespace;
            return cursor.eat_while(is_space);
        }

        if LINE_COMMENT_OPENERS.iter().any(|m| cursor.starts_with(m)) {
            self.state.kind = TokenKind::Comment;
            return cursor.eat_through_newline();
        }

        if cursor.starts_with(BLOCK_COMMENT_OPEN) {
            self.state.kind = TokenKind::Comment;
            cursor.advance_n(BLOCK_COMMENT_OPEN.len());
            return cursor.eat_through(BLOCK_COMMENT_CLOSE);
        }

        if is_punctuation(first) {
            // Comment openers inside the run do not end it: `;//` is one token.
            self.state.kind = TokenKind::Punctuation;
            return cursor.eat_while(is_punctuation);
        }

        false
    }

    /// Quoted string. The opening quote is ASCII, so it is matched bytewise.
    fn string(&mut self, cursor: &mut Cursor<'_>, quote: char) -> bool {
        self.state.kind = TokenKind::String;
        let Ok(quote) = u8::try_from(quote) else {
            return false;
        };
        cursor.advance_n(1);
        cursor.eat_quoted_body(quote)
    }

    /// Identifier run. The run's text decides between keyword and the
    /// provisional type/plain classification, so the kind is only final once
    /// the run is known to be maximal.
    fn identifier(&mut self, cursor: &mut Cursor<'_>) -> bool {
        if !cursor.eat_while(is_alnum) {
            return false;
        }
        if self.keywords.contains_bytes(cursor.consumed()) {
            self.state.kind = TokenKind::Keyword;
        } else if self.state.type_candidate {
            self.state.kind = TokenKind::TypeName;
        } else {
            self.state.kind = TokenKind::PlainText;
        }
        true
    }

    fn emit<'a>(&mut self, window: SourceWindow<'a>, len: usize) -> Step<'a> {
        let token = Token::new(&window.bytes()[..len], self.state.kind);
        self.state = ScanState::default();
        Step::Token(token)
    }
}
