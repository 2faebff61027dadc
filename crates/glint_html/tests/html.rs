#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Rendering real snippets end to end.

use std::io::Cursor;

use glint_html::{
    annotate, as_html, print, Annotation, Annotator, HtmlAnnotator, HtmlConfig, HtmlPrinter,
};
use glint_lexer::{KeywordSet, StreamScanner, Token};
use pretty_assertions::assert_eq;

/// Apply annotations to `source` the way a downstream consumer would.
fn splice(source: &[u8], annotations: &[Annotation]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut pos = 0;
    for a in annotations {
        out.extend_from_slice(&source[pos..a.start]);
        out.extend_from_slice(&a.left);
        out.extend_from_slice(&source[a.start..a.end]);
        out.extend_from_slice(&a.right);
        pos = a.end;
    }
    out.extend_from_slice(&source[pos..]);
    out
}

const GO: &str = "package main\n\nimport \"fmt\"\n\n// Greet says hi.\nfunc Greet(n int) {\n\tfmt.Println(\"hi\", n < 3)\n}\n";

#[test]
fn go_snippet_renders_with_prettify_classes() {
    let html = String::from_utf8(as_html(GO.as_bytes()).unwrap()).unwrap();
    assert!(html.starts_with(r#"<span class="kwd">package</span> <span class="pln">main</span>"#));
    assert!(html.contains(r#"<span class="str">&#34;fmt&#34;</span>"#));
    assert!(html.contains("<span class=\"com\">// Greet says hi.\n</span>"));
    assert!(html.contains(r#"<span class="typ">Greet</span>"#));
    assert!(html.contains(r#"<span class="kwd">int</span>"#));
    assert!(html.contains(r#"<span class="pun">&lt;</span>"#));
    assert!(html.ends_with("<span class=\"pun\">}</span>\n"));
}

#[test]
fn annotations_splice_to_printed_html() {
    let annotations = annotate(GO.as_bytes(), HtmlAnnotator::default()).unwrap();
    let spliced = splice(GO.as_bytes(), &annotations);
    // Splicing leaves text unescaped, so compare against unescaped source only.
    let printed = as_html(b"func Greet(n int) {}").unwrap();
    let snippet = splice(
        b"func Greet(n int) {}",
        &annotate(b"func Greet(n int) {}", HtmlAnnotator::default()).unwrap(),
    );
    assert_eq!(snippet, printed);
    assert!(spliced.starts_with(br#"<span class="kwd">package</span>"#));
}

#[test]
fn annotations_are_ordered_and_disjoint() {
    let annotations = annotate(GO.as_bytes(), HtmlAnnotator::default()).unwrap();
    for pair in annotations.windows(2) {
        assert!(pair[0].start < pair[0].end);
        assert!(pair[0].end <= pair[1].start);
    }
    assert!(annotations.last().unwrap().end <= GO.len());
}

#[test]
fn streaming_print_matches_in_memory() {
    let mut scanner =
        StreamScanner::with_capacity(Cursor::new(GO), KeywordSet::shared(), 8);
    let mut out = Vec::new();
    print(&mut scanner, &mut out, HtmlPrinter::default()).unwrap();
    assert_eq!(out, as_html(GO.as_bytes()).unwrap());
}

#[test]
fn custom_stylesheet_from_json() {
    let config: HtmlConfig =
        serde_json::from_str(r#"{ "keyword": "hl-kw", "plain_text": "" }"#).unwrap();
    let mut scanner = StreamScanner::new(Cursor::new("return x"));
    let mut out = Vec::new();
    print(&mut scanner, &mut out, HtmlPrinter::new(config)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        r#"<span class="hl-kw">return</span> x"#
    );
}

#[test]
fn annotation_serializes_as_json() {
    let annotations = annotate(b"None", HtmlAnnotator::default()).unwrap();
    let json = serde_json::to_value(&annotations).unwrap();
    assert_eq!(json[0]["start"], 0);
    assert_eq!(json[0]["end"], 4);
    let back: Vec<Annotation> = serde_json::from_value(json).unwrap();
    assert_eq!(back, annotations);
}

#[test]
fn comment_only_annotator() {
    struct Comments;
    impl Annotator for Comments {
        type Error = std::convert::Infallible;

        fn annotate(
            &mut self,
            start: usize,
            token: Token<'_>,
        ) -> Result<Option<Annotation>, Self::Error> {
            Ok(
                (token.kind() == glint_lexer::TokenKind::Comment).then(|| Annotation {
                    start,
                    end: start + token.len(),
                    left: b"<i>".to_vec(),
                    right: b"</i>".to_vec(),
                }),
            )
        }
    }

    let source = b"x # note\ny";
    let annotations = annotate(source, Comments).unwrap();
    assert_eq!(splice(source, &annotations), b"x <i># note\n</i>y");
}
