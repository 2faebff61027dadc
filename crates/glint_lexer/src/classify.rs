//! Code point classification.
//!
//! Pure predicates over a single `char`, plus a permissive decoder that turns
//! the head of a byte window into a `char`. Invalid UTF-8 never fails: each
//! undecodable byte classifies as one `U+FFFD`, which is punctuation.

use unicode_general_category::{get_general_category, GeneralCategory};

/// `` ` ``, `'` or `"`.
#[inline]
pub fn is_quote(c: char) -> bool {
    matches!(c, '`' | '\'' | '"')
}

/// Underscore or a Unicode letter (general category `L*`).
///
/// Letter numbers such as `Ⅻ` and combining marks are not letters.
#[inline]
pub fn is_alpha(c: char) -> bool {
    if c.is_ascii() {
        return c == '_' || c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Unicode decimal digit (general category `Nd`).
///
/// Superscripts, fractions and other numeric symbols are not digits.
#[inline]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Uppercase letter (general category `Lu`).
#[inline]
pub fn is_upper(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

/// [`is_alpha`] or [`is_digit`].
#[inline]
pub fn is_alnum(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Unicode whitespace.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Anything that is not a quote, alphanumeric or whitespace.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    !is_alnum(c) && !is_space(c) && !is_quote(c)
}

/// Result of decoding the first code point of a byte slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A valid code point and its encoded width in bytes.
    Char(char, usize),
    /// The leading byte does not start a valid sequence. Width is always 1.
    Invalid,
    /// The slice ends partway through a multi-byte sequence (or is empty).
    Incomplete,
}

impl Decoded {
    /// Resolve to a `(char, width)` pair, treating invalid bytes as `U+FFFD`.
    ///
    /// `Incomplete` resolves the same way when `is_final` is set, since no
    /// further bytes can complete the sequence. Otherwise it returns `None`.
    #[inline]
    pub fn resolve(self, is_final: bool) -> Option<(char, usize)> {
        match self {
            Decoded::Char(c, width) => Some((c, width)),
            Decoded::Invalid => Some((char::REPLACEMENT_CHARACTER, 1)),
            Decoded::Incomplete if is_final => Some((char::REPLACEMENT_CHARACTER, 1)),
            Decoded::Incomplete => None,
        }
    }
}

/// Decode the first code point of `bytes`.
pub fn decode(bytes: &[u8]) -> Decoded {
    let Some(&lead) = bytes.first() else {
        return Decoded::Incomplete;
    };
    if lead.is_ascii() {
        return Decoded::Char(char::from(lead), 1);
    }

    let head = &bytes[..bytes.len().min(4)];
    match std::str::from_utf8(head) {
        Ok(s) => first_char(s),
        Err(e) if e.valid_up_to() > 0 => std::str::from_utf8(&head[..e.valid_up_to()])
            .map_or(Decoded::Invalid, first_char),
        Err(e) => match e.error_len() {
            Some(_) => Decoded::Invalid,
            None => Decoded::Incomplete,
        },
    }
}

fn first_char(s: &str) -> Decoded {
    s.chars()
        .next()
        .map_or(Decoded::Incomplete, |c| Decoded::Char(c, c.len_utf8()))
}
