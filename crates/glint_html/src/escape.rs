//! HTML text escaping.

use std::io::{self, Write};

/// Write `text` with the HTML-significant bytes escaped.
///
/// `"` `'` `&` `<` `>` become character references; NUL becomes `U+FFFD`.
/// All other bytes, including invalid UTF-8, pass through unchanged.
pub fn escape_html(w: &mut dyn Write, text: &[u8]) -> io::Result<()> {
    let mut last = 0;
    for (i, &b) in text.iter().enumerate() {
        let replacement: &[u8] = match b {
            b'"' => b"&#34;",
            b'\'' => b"&#39;",
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            0 => "\u{FFFD}".as_bytes(),
            _ => continue,
        };
        w.write_all(&text[last..i])?;
        w.write_all(replacement)?;
        last = i + 1;
    }
    w.write_all(&text[last..])
}

#[cfg(test)]
mod tests;
