//! Offset-based annotations.
//!
//! Instead of rewriting the source, an annotator records where markup would
//! go. Consumers splice the `left`/`right` fragments in at `start`/`end`,
//! which lets the highlight layer compose with other annotation sources.

use std::convert::Infallible;

use glint_lexer::{tokenize, Token};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{HtmlConfig, CLOSE_TAG};

/// Markup to insert around the half-open byte range `start..end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    /// Inserted before `start`.
    pub left: Vec<u8>,
    /// Inserted after `end`.
    pub right: Vec<u8>,
}

/// Maps a token at a source offset to an optional annotation.
pub trait Annotator {
    type Error;

    fn annotate(
        &mut self,
        start: usize,
        token: Token<'_>,
    ) -> Result<Option<Annotation>, Self::Error>;
}

impl<A: Annotator + ?Sized> Annotator for &mut A {
    type Error = A::Error;

    fn annotate(
        &mut self,
        start: usize,
        token: Token<'_>,
    ) -> Result<Option<Annotation>, Self::Error> {
        (**self).annotate(start, token)
    }
}

/// Annotates each classed token with a `<span class="…">` pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlAnnotator {
    config: HtmlConfig,
}

impl HtmlAnnotator {
    pub fn new(config: HtmlConfig) -> Self {
        Self { config }
    }
}

impl Annotator for HtmlAnnotator {
    type Error = Infallible;

    fn annotate(
        &mut self,
        start: usize,
        token: Token<'_>,
    ) -> Result<Option<Annotation>, Infallible> {
        Ok(self.config.open_tag(token.kind()).map(|open| Annotation {
            start,
            end: start + token.len(),
            left: open.into_bytes(),
            right: CLOSE_TAG.as_bytes().to_vec(),
        }))
    }
}

/// Tokenize `source` and collect the annotations `annotator` produces.
///
/// Stops at the first annotator error.
pub fn annotate<A>(source: &[u8], annotator: A) -> Result<Vec<Annotation>, A::Error>
where
    A: Annotator,
{
    let annotations = annotate_tokens(tokenize(source).with_offsets(), annotator)?;
    debug!(
        source_len = source.len(),
        annotations = annotations.len(),
        "annotated source"
    );
    Ok(annotations)
}

/// Collect annotations over `(start_offset, token)` pairs.
pub fn annotate_tokens<'a, I, A>(
    tokens: I,
    mut annotator: A,
) -> Result<Vec<Annotation>, A::Error>
where
    I: IntoIterator<Item = (usize, Token<'a>)>,
    A: Annotator,
{
    let mut annotations = Vec::new();
    for (start, token) in tokens {
        if let Some(annotation) = annotator.annotate(start, token)? {
            annotations.push(annotation);
        }
    }
    Ok(annotations)
}
