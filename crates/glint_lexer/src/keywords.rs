//! Keyword membership for completed identifier runs.
//!
//! The default set is the union of reserved words across C, Go, Java,
//! JavaScript, Python and Ruby. Matching is exact and case-sensitive: Python's
//! `None` is a keyword, `NONE` is not.
//!
//! The set is data, not algorithm: callers lexing a single known language
//! can build a narrower one with [`KeywordSet::from_iter`].

use std::borrow::Cow;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;

/// Reserved words of the supported source languages, sorted.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // Python and Ruby constants that start uppercase
    "BEGIN",
    "END",
    "False",
    "None",
    "True",
    "__ENCODING__",
    "__FILE__",
    "__LINE__",
    // Everything else
    "abstract",
    "alias",
    "and",
    "as",
    "assert",
    "async",
    "auto",
    "await",
    "begin",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "chan",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "def",
    "default",
    "defer",
    "defined",
    "del",
    "delete",
    "do",
    "double",
    "elif",
    "else",
    "elsif",
    "end",
    "ensure",
    "enum",
    "except",
    "exec",
    "export",
    "extends",
    "extern",
    "fallthrough",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "from",
    "func",
    "function",
    "global",
    "go",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "inline",
    "instanceof",
    "int",
    "interface",
    "is",
    "lambda",
    "let",
    "long",
    "map",
    "module",
    "native",
    "new",
    "next",
    "nil",
    "nonlocal",
    "not",
    "null",
    "or",
    "package",
    "pass",
    "print",
    "private",
    "protected",
    "public",
    "raise",
    "range",
    "redo",
    "register",
    "rescue",
    "restrict",
    "retry",
    "return",
    "select",
    "self",
    "short",
    "signed",
    "sizeof",
    "static",
    "strictfp",
    "struct",
    "super",
    "switch",
    "synchronized",
    "then",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "type",
    "typedef",
    "typeof",
    "undef",
    "union",
    "unless",
    "unsigned",
    "until",
    "var",
    "void",
    "volatile",
    "when",
    "while",
    "with",
    "yield",
];

/// Exact-match set of keyword texts.
#[derive(Clone, Debug)]
pub struct KeywordSet {
    words: FxHashSet<Cow<'static, str>>,
}

impl KeywordSet {
    /// A set with no keywords: every identifier run is a type or plain name.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Process-wide instance of the default set, built on first use.
    pub fn shared() -> &'static KeywordSet {
        static SHARED: OnceLock<KeywordSet> = OnceLock::new();
        SHARED.get_or_init(KeywordSet::default)
    }

    /// Add a keyword. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<Cow<'static, str>>) -> bool {
        self.words.insert(word.into())
    }

    /// Returns `true` if `text` is a keyword.
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Returns `true` if `bytes` is the UTF-8 encoding of a keyword.
    #[inline]
    pub fn contains_bytes(&self, bytes: &[u8]) -> bool {
        std::str::from_utf8(bytes).is_ok_and(|text| self.contains(text))
    }

    /// Number of keywords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set has no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        DEFAULT_KEYWORDS.iter().copied().collect()
    }
}

impl<S: Into<Cow<'static, str>>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<Cow<'static, str>>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests;
