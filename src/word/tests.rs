use super::*;
use crate::config::DEFAULT_WORD_SEPARATORS;

fn classifier() -> WordClassifier {
    WordClassifier::new(DEFAULT_WORD_SEPARATORS)
}

#[test]
fn test_classify_basics() {
    let c = classifier();
    assert_eq!(c.classify(' '), CharClass::Whitespace);
    assert_eq!(c.classify('\t'), CharClass::Whitespace);
    assert_eq!(c.classify('a'), CharClass::Regular);
    assert_eq!(c.classify('Z'), CharClass::Regular);
    assert_eq!(c.classify('5'), CharClass::Regular);
    assert_eq!(c.classify('_'), CharClass::Regular);
    assert_eq!(c.classify(','), CharClass::Separator);
    assert_eq!(c.classify('('), CharClass::Separator);
    assert_eq!(c.classify('-'), CharClass::Separator);
}

#[test]
fn test_space_and_tab_always_whitespace() {
    // Even a separator set that names them cannot reclassify space/tab
    let c = WordClassifier::new(" \t,");
    assert_eq!(c.classify(' '), CharClass::Whitespace);
    assert_eq!(c.classify('\t'), CharClass::Whitespace);
    assert_eq!(c.classify(','), CharClass::Separator);
}

#[test]
fn test_non_ascii_separator() {
    let c = WordClassifier::new("、。");
    assert_eq!(c.classify('、'), CharClass::Separator);
    assert_eq!(c.classify('あ'), CharClass::Regular);
}

#[test]
fn test_cache_reuses_tables() {
    let mut cache = ClassifierCache::new();
    assert!(cache.is_empty());

    let a = cache.get(",.");
    let b = cache.get(",.");
    assert!(Rc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);

    let _other = cache.get(";");
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_next_word_basic() {
    let c = classifier();
    let m = find_next_word_on_line(&c, "hello world", 0).unwrap();
    assert_eq!((m.start, m.end), (0, 5));
    assert_eq!(m.kind, WordKind::Regular);

    let m = find_next_word_on_line(&c, "hello world", 5).unwrap();
    assert_eq!((m.start, m.end), (6, 11));
}

#[test]
fn test_next_word_separator_run() {
    let c = classifier();
    // "foo->bar": the arrow is its own unit
    let m = find_next_word_on_line(&c, "foo->bar", 3).unwrap();
    assert_eq!((m.start, m.end), (3, 5));
    assert_eq!(m.kind, WordKind::Separator);
}

#[test]
fn test_next_word_mixed_runs() {
    let c = classifier();
    let line = "foo  bar, baz";
    let m = find_next_word_on_line(&c, line, 0).unwrap();
    assert_eq!((m.start, m.end), (0, 3)); // foo
    let m = find_next_word_on_line(&c, line, 3).unwrap();
    assert_eq!((m.start, m.end), (5, 8)); // bar
    let m = find_next_word_on_line(&c, line, 8).unwrap();
    assert_eq!((m.start, m.end), (8, 9)); // the comma alone
    assert_eq!(m.kind, WordKind::Separator);
}

#[test]
fn test_next_word_none_after_trailing_whitespace() {
    let c = classifier();
    assert_eq!(find_next_word_on_line(&c, "word   ", 4), None);
    assert_eq!(find_next_word_on_line(&c, "", 0), None);
}

#[test]
fn test_next_word_run_touching_line_end() {
    let c = classifier();
    let m = find_next_word_on_line(&c, "tail", 1).unwrap();
    assert_eq!((m.start, m.end), (1, 4));
}

#[test]
fn test_prev_word_basic() {
    let c = classifier();
    let m = find_previous_word_on_line(&c, "hello world", 11).unwrap();
    assert_eq!((m.start, m.end), (6, 11));

    let m = find_previous_word_on_line(&c, "hello world", 6).unwrap();
    assert_eq!((m.start, m.end), (0, 5));
}

#[test]
fn test_prev_word_separator_run() {
    let c = classifier();
    let m = find_previous_word_on_line(&c, "foo->bar", 5).unwrap();
    assert_eq!((m.start, m.end), (3, 5));
    assert_eq!(m.kind, WordKind::Separator);
}

#[test]
fn test_prev_word_run_touching_offset_zero() {
    let c = classifier();
    let m = find_previous_word_on_line(&c, "word more", 4).unwrap();
    assert_eq!((m.start, m.end), (0, 4));
}

#[test]
fn test_prev_word_none_in_leading_whitespace() {
    let c = classifier();
    assert_eq!(find_previous_word_on_line(&c, "   indent", 3), None);
    assert_eq!(find_previous_word_on_line(&c, "", 0), None);
}

#[test]
fn test_word_at_prefers_char_at_offset() {
    let c = classifier();
    let m = find_word_at(&c, "foo bar baz", 5).unwrap();
    assert_eq!((m.start, m.end), (4, 7));
}

#[test]
fn test_word_at_edges_find_the_same_run() {
    let c = classifier();
    // Both edges of "bar" resolve to it
    let m = find_word_at(&c, "foo bar baz", 4).unwrap();
    assert_eq!((m.start, m.end), (4, 7));
    let m = find_word_at(&c, "foo bar baz", 7).unwrap();
    assert_eq!((m.start, m.end), (4, 7));
}

#[test]
fn test_word_at_none_in_whitespace() {
    let c = classifier();
    assert_eq!(find_word_at(&c, "a   b", 2), None);
    assert_eq!(find_word_at(&c, "", 0), None);
}

#[test]
fn test_underscore_stays_in_word() {
    let c = classifier();
    let m = find_next_word_on_line(&c, "hello_world", 0).unwrap();
    assert_eq!((m.start, m.end), (0, 11));
}
