//! Token kinds and the borrowed token view.

use std::fmt;

/// Classification of a token.
///
/// The enumeration is closed and shared with renderers, so a renderer's
/// kind-to-style table can be total. Five members are reserved: the generic
/// lexer never emits `Literal`, `Tag`, `HtmlTag`, `HtmlAttrName` or
/// `HtmlAttrValue`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Whitespace = 0,
    String = 1,
    Keyword = 2,
    Comment = 3,
    /// Identifier starting with an uppercase letter.
    TypeName = 4,
    Literal = 5,
    Punctuation = 6,
    /// Identifier that is neither a keyword nor a type name.
    PlainText = 7,
    Tag = 8,
    HtmlTag = 9,
    HtmlAttrName = 10,
    HtmlAttrValue = 11,
    Decimal = 12,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Whitespace,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Comment,
        TokenKind::TypeName,
        TokenKind::Literal,
        TokenKind::Punctuation,
        TokenKind::PlainText,
        TokenKind::Tag,
        TokenKind::HtmlTag,
        TokenKind::HtmlAttrName,
        TokenKind::HtmlAttrValue,
        TokenKind::Decimal,
    ];

    /// Returns `true` for kinds the generic lexer never produces.
    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Literal
                | TokenKind::Tag
                | TokenKind::HtmlTag
                | TokenKind::HtmlAttrName
                | TokenKind::HtmlAttrValue
        )
    }

    /// Human-readable name, used in traces and test output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Comment => "comment",
            TokenKind::TypeName => "type name",
            TokenKind::Literal => "literal",
            TokenKind::Punctuation => "punctuation",
            TokenKind::PlainText => "plain text",
            TokenKind::Tag => "tag",
            TokenKind::HtmlTag => "HTML tag",
            TokenKind::HtmlAttrName => "HTML attribute name",
            TokenKind::HtmlAttrValue => "HTML attribute value",
            TokenKind::Decimal => "decimal",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, contiguous span of source bytes.
///
/// Borrows from the source buffer; the bytes are never copied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    bytes: &'a [u8],
    kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(bytes: &'a [u8], kind: TokenKind) -> Self {
        Self { bytes, kind }
    }

    /// The token's source bytes.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false` for tokens produced by the tokenizer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The token text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.bytes).ok()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}:{:?}",
            String::from_utf8_lossy(self.bytes),
            self.kind
        )
    }
}
