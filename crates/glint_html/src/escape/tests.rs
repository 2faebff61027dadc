use super::*;
use pretty_assertions::assert_eq;

fn escaped(text: &[u8]) -> String {
    let mut out = Vec::new();
    let result = escape_html(&mut out, text);
    assert!(result.is_ok());
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(escaped(b"hello world"), "hello world");
    assert_eq!(escaped(b""), "");
}

#[test]
fn html_significant_bytes() {
    assert_eq!(
        escaped(br#"<a href="x" title='y'>&</a>"#),
        "&lt;a href=&#34;x&#34; title=&#39;y&#39;&gt;&amp;&lt;/a&gt;"
    );
}

#[test]
fn nul_becomes_replacement_character() {
    assert_eq!(escaped(b"a\0b"), "a\u{FFFD}b");
}

#[test]
fn multibyte_text_is_untouched() {
    assert_eq!(escaped("名前 → <x>".as_bytes()), "名前 → &lt;x&gt;");
}

#[test]
fn write_failure_propagates() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
    let result = escape_html(&mut Broken, b"<");
    assert_eq!(result.map_err(|e| e.kind()), Err(io::ErrorKind::BrokenPipe));
}
