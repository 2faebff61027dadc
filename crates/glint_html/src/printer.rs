//! Token printers.

use std::io::{self, Read, Write};

use glint_lexer::{tokenize, ScanError, StreamScanner, Token};
use tracing::debug;

use crate::config::{HtmlConfig, CLOSE_TAG};
use crate::escape::escape_html;

/// Writes one token at a time to an output.
pub trait Printer {
    fn print(&mut self, w: &mut dyn Write, token: Token<'_>) -> io::Result<()>;
}

impl<P: Printer + ?Sized> Printer for &mut P {
    fn print(&mut self, w: &mut dyn Write, token: Token<'_>) -> io::Result<()> {
        (**self).print(w, token)
    }
}

/// Prints tokens as escaped HTML, wrapping classed kinds in `<span>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlPrinter {
    config: HtmlConfig,
}

impl HtmlPrinter {
    pub fn new(config: HtmlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HtmlConfig {
        &self.config
    }
}

impl Printer for HtmlPrinter {
    fn print(&mut self, w: &mut dyn Write, token: Token<'_>) -> io::Result<()> {
        match self.config.open_tag(token.kind()) {
            Some(open) => {
                w.write_all(open.as_bytes())?;
                escape_html(w, token.bytes())?;
                w.write_all(CLOSE_TAG.as_bytes())
            }
            None => escape_html(w, token.bytes()),
        }
    }
}

/// Drive a streaming scanner into `printer`.
///
/// Write failures stop the scan and come back as [`ScanError::Sink`].
pub fn print<R, W, P>(
    scanner: &mut StreamScanner<'_, R>,
    w: &mut W,
    mut printer: P,
) -> Result<(), ScanError<io::Error>>
where
    R: Read,
    W: Write,
    P: Printer,
{
    scanner.scan(|_, token| printer.print(w, token))
}

/// Print already-tokenized input.
pub fn print_tokens<'a, I, W, P>(tokens: I, w: &mut W, mut printer: P) -> io::Result<()>
where
    I: IntoIterator<Item = Token<'a>>,
    W: Write,
    P: Printer,
{
    for token in tokens {
        printer.print(w, token)?;
    }
    Ok(())
}

/// Render `source` as HTML with the default class table.
pub fn as_html(source: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(source.len() * 2);
    print_tokens(tokenize(source), &mut out, HtmlPrinter::default())?;
    debug!(source_len = source.len(), html_len = out.len(), "rendered HTML");
    Ok(out)
}
