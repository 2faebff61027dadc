use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_keywords_are_sorted_and_unique() {
    let mut sorted = DEFAULT_KEYWORDS.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, DEFAULT_KEYWORDS);
}

#[test]
fn default_set_covers_every_listed_word() {
    let set = KeywordSet::default();
    assert_eq!(set.len(), DEFAULT_KEYWORDS.len());
    for word in DEFAULT_KEYWORDS {
        assert!(set.contains(word), "{word:?} missing from default set");
    }
}

#[test]
fn control_flow_across_languages() {
    let set = KeywordSet::shared();
    // C / Java / JavaScript
    for word in ["if", "else", "while", "return", "switch", "typedef", "instanceof"] {
        assert!(set.contains(word), "{word:?}");
    }
    // Go
    for word in ["func", "defer", "chan", "select", "fallthrough"] {
        assert!(set.contains(word), "{word:?}");
    }
    // Python
    for word in ["def", "elif", "lambda", "nonlocal", "None", "True"] {
        assert!(set.contains(word), "{word:?}");
    }
    // Ruby
    for word in ["elsif", "unless", "ensure", "rescue", "__FILE__"] {
        assert!(set.contains(word), "{word:?}");
    }
}

#[test]
fn matching_is_case_sensitive() {
    let set = KeywordSet::shared();
    assert!(set.contains("if"));
    assert!(!set.contains("If"));
    assert!(!set.contains("IF"));
    assert!(set.contains("None"));
    assert!(!set.contains("none"));
}

#[test]
fn no_prefix_or_suffix_matches() {
    let set = KeywordSet::shared();
    assert!(!set.contains("i"));
    assert!(!set.contains("iff"));
    assert!(!set.contains("returns"));
    assert!(!set.contains(""));
}

#[test]
fn contains_bytes_rejects_invalid_utf8() {
    let set = KeywordSet::shared();
    assert!(set.contains_bytes(b"while"));
    assert!(!set.contains_bytes(b"whil\xff"));
}

#[test]
fn custom_set_replaces_default() {
    let mut set: KeywordSet = ["fn", "mut"].into_iter().collect();
    assert!(set.contains("fn"));
    assert!(!set.contains("if"));

    assert!(set.insert(String::from("impl")));
    assert!(!set.insert("fn"));
    set.extend(["pub", "crate"]);
    assert_eq!(set.len(), 5);
}

#[test]
fn empty_set() {
    let set = KeywordSet::empty();
    assert!(set.is_empty());
    assert!(!set.contains("if"));
}

#[test]
fn shared_is_one_instance() {
    assert!(std::ptr::eq(KeywordSet::shared(), KeywordSet::shared()));
}
