//! HTML rendering and span annotation over the glint token stream.
//!
//! Two consumers of [`glint_lexer`] tokens:
//!
//! - [`Printer`]: writes each token to an output, [`HtmlPrinter`] wrapping it
//!   in `<span class="…">` markup
//! - [`Annotator`]: maps `(offset, token)` to an [`Annotation`] recording a
//!   byte range plus the markup to insert around it, leaving the source intact
//!
//! Both are driven by the [`HtmlConfig`] class table. The default table uses
//! the google-code-prettify class names (`str`, `kwd`, `com`, ...), so
//! existing prettify stylesheets apply unchanged.
//!
//! ```
//! let html = glint_html::as_html(b"if x").unwrap_or_default();
//! assert_eq!(
//!     String::from_utf8_lossy(&html),
//!     r#"<span class="kwd">if</span> <span class="pln">x</span>"#
//! );
//! ```

mod annotate;
mod config;
mod escape;
mod printer;

pub use annotate::{annotate, annotate_tokens, Annotation, Annotator, HtmlAnnotator};
pub use config::HtmlConfig;
pub use escape::escape_html;
pub use printer::{as_html, print, print_tokens, HtmlPrinter, Printer};
