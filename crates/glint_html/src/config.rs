//! Per-kind CSS class table.

use glint_lexer::TokenKind;
use serde::{Deserialize, Serialize};

/// CSS class name for each token kind.
///
/// An empty class means "no markup": the token is emitted escaped but bare.
/// Whitespace never gets a class.
///
/// Deserializes with missing fields falling back to the defaults, so a
/// stylesheet can override a handful of classes:
///
/// ```json
/// { "keyword": "k", "comment": "c" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub string: String,
    pub keyword: String,
    pub comment: String,
    pub type_name: String,
    pub literal: String,
    pub punctuation: String,
    pub plain_text: String,
    pub tag: String,
    pub html_tag: String,
    pub html_attr_name: String,
    pub html_attr_value: String,
    pub decimal: String,
}

impl HtmlConfig {
    /// Class name for `kind`, or `""` when the kind gets no markup.
    pub fn class(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Whitespace => "",
            TokenKind::String => &self.string,
            TokenKind::Keyword => &self.keyword,
            TokenKind::Comment => &self.comment,
            TokenKind::TypeName => &self.type_name,
            TokenKind::Literal => &self.literal,
            TokenKind::Punctuation => &self.punctuation,
            TokenKind::PlainText => &self.plain_text,
            TokenKind::Tag => &self.tag,
            TokenKind::HtmlTag => &self.html_tag,
            TokenKind::HtmlAttrName => &self.html_attr_name,
            TokenKind::HtmlAttrValue => &self.html_attr_value,
            TokenKind::Decimal => &self.decimal,
        }
    }

    /// Opening markup for `kind`, or `None` when the kind has no class.
    pub(crate) fn open_tag(&self, kind: TokenKind) -> Option<String> {
        let class = self.class(kind);
        if class.is_empty() {
            None
        } else {
            Some(format!(r#"<span class="{class}">"#))
        }
    }
}

/// Closing markup matching [`HtmlConfig::open_tag`].
pub(crate) const CLOSE_TAG: &str = "</span>";

impl Default for HtmlConfig {
    /// google-code-prettify class names.
    fn default() -> Self {
        Self {
            string: "str".into(),
            keyword: "kwd".into(),
            comment: "com".into(),
            type_name: "typ".into(),
            literal: "lit".into(),
            punctuation: "pun".into(),
            plain_text: "pln".into(),
            tag: "tag".into(),
            html_tag: "htm".into(),
            html_attr_name: "atn".into(),
            html_attr_value: "atv".into(),
            decimal: "dec".into(),
        }
    }
}
