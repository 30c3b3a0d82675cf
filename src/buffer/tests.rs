use super::*;

#[test]
fn test_line_access() {
    let model = LineArrayModel::from_lines(&["alpha", "", "gamma"]);
    assert_eq!(model.line_count(), 3);
    assert_eq!(model.line_content(1), "alpha");
    assert_eq!(model.line_content(2), "");
    assert_eq!(model.max_column(1), 6);
    assert_eq!(model.max_column(2), 1);
}

#[test]
fn test_empty_buffer_has_one_line() {
    let model = LineArrayModel::from_text("");
    assert_eq!(model.line_count(), 1);
    assert_eq!(model.line_content(1), "");
    assert_eq!(model.max_column(1), 1);
}

#[test]
fn test_from_text_splits_on_newline() {
    let model = LineArrayModel::from_text("one\ntwo\n");
    assert_eq!(model.line_count(), 3);
    assert_eq!(model.line_content(2), "two");
    assert_eq!(model.line_content(3), "");
}

#[test]
fn test_validate_position_clamps_both_axes() {
    let model = LineArrayModel::from_lines(&["abc", "d"]);
    assert_eq!(
        model.validate_position(Position::new(9, 9)),
        Position::new(2, 2)
    );
    assert_eq!(
        model.validate_position(Position::new(1, 9)),
        Position::new(1, 4)
    );
    assert_eq!(
        model.validate_position(Position::new(1, 2)),
        Position::new(1, 2)
    );
}

#[test]
fn test_validate_range_clamps_endpoints() {
    let model = LineArrayModel::from_lines(&["abc"]);
    let clamped = model.validate_range(Range::new(
        Position::new(1, 2),
        Position::new(5, 1),
    ));
    assert_eq!(
        clamped,
        Range::new(Position::new(1, 2), Position::new(1, 4))
    );
}

#[test]
fn test_editable_range_covers_whole_buffer() {
    let model = LineArrayModel::from_lines(&["abc", "de"]);
    assert_eq!(
        model.editable_range(),
        Range::new(Position::new(1, 1), Position::new(2, 3))
    );
}

#[test]
fn test_replace_within_line() {
    let mut model = LineArrayModel::from_lines(&["hello world"]);
    model.replace(
        Range::new(Position::new(1, 7), Position::new(1, 12)),
        "there",
    );
    assert_eq!(model.text(), "hello there");
}

#[test]
fn test_replace_inserts_new_lines() {
    let mut model = LineArrayModel::from_lines(&["ab"]);
    model.replace(Range::empty_at(Position::new(1, 2)), "x\ny");
    assert_eq!(model.text(), "ax\nyb");
    assert_eq!(model.line_count(), 2);
}

#[test]
fn test_replace_joins_lines() {
    let mut model = LineArrayModel::from_lines(&["ab", "cd"]);
    model.replace(Range::new(Position::new(1, 3), Position::new(2, 1)), "");
    assert_eq!(model.text(), "abcd");
    assert_eq!(model.line_count(), 1);
}

#[test]
fn test_replace_never_leaves_zero_lines() {
    let mut model = LineArrayModel::from_lines(&["only"]);
    model.replace(Range::new(Position::new(1, 1), Position::new(1, 5)), "");
    assert_eq!(model.line_count(), 1);
    assert_eq!(model.line_content(1), "");
}

#[test]
fn test_match_bracket_forward() {
    let model = LineArrayModel::from_lines(&["fn main() {", "    body();", "}"]);
    let (here, there) = model.match_bracket(Position::new(1, 8)).unwrap();
    assert_eq!(
        here,
        Range::new(Position::new(1, 8), Position::new(1, 9))
    );
    assert_eq!(
        there,
        Range::new(Position::new(1, 9), Position::new(1, 10))
    );
}

#[test]
fn test_match_bracket_across_lines() {
    let model = LineArrayModel::from_lines(&["fn main() {", "    body();", "}"]);
    let (here, there) = model.match_bracket(Position::new(1, 11)).unwrap();
    assert_eq!(
        here,
        Range::new(Position::new(1, 11), Position::new(1, 12))
    );
    assert_eq!(
        there,
        Range::new(Position::new(3, 1), Position::new(3, 2))
    );
}

#[test]
fn test_match_bracket_nested() {
    let model = LineArrayModel::from_lines(&["((a))"]);
    let (_, there) = model.match_bracket(Position::new(1, 1)).unwrap();
    assert_eq!(
        there,
        Range::new(Position::new(1, 5), Position::new(1, 6))
    );
}

#[test]
fn test_match_bracket_falls_back_to_char_before() {
    let model = LineArrayModel::from_lines(&["()"]);
    // Caret after the closer: nothing at the caret, so the closer before it
    let (here, there) = model.match_bracket(Position::new(1, 3)).unwrap();
    assert_eq!(
        here,
        Range::new(Position::new(1, 2), Position::new(1, 3))
    );
    assert_eq!(
        there,
        Range::new(Position::new(1, 1), Position::new(1, 2))
    );
}

#[test]
fn test_match_bracket_none_without_counterpart() {
    let model = LineArrayModel::from_lines(&["(a"]);
    assert!(model.match_bracket(Position::new(1, 1)).is_none());
    let model = LineArrayModel::from_lines(&["plain text"]);
    assert!(model.match_bracket(Position::new(1, 3)).is_none());
}

#[test]
fn test_marker_lifecycle() {
    let mut model = LineArrayModel::from_lines(&["abc"]);
    let id = model.add_marker(Position::new(1, 2), MarkerStickiness::StaysBefore);
    assert_eq!(model.marker_position(id), Some(Position::new(1, 2)));
    model.remove_marker(id);
    assert_eq!(model.marker_position(id), None);
}

#[test]
fn test_marker_position_is_clamped() {
    let mut model = LineArrayModel::from_lines(&["abc"]);
    let id = model.add_marker(Position::new(7, 7), MarkerStickiness::MovesAfter);
    assert_eq!(model.marker_position(id), Some(Position::new(1, 4)));
}

#[test]
fn test_change_decorations_delta() {
    let mut model = LineArrayModel::from_lines(&["abcdef"]);
    let first = Range::new(Position::new(1, 1), Position::new(1, 2));
    let second = Range::new(Position::new(1, 5), Position::new(1, 6));

    let ids = model.change_decorations(&[], &[first]);
    assert_eq!(ids.len(), 1);
    assert_eq!(model.decoration_ranges(), vec![first]);

    let ids = model.change_decorations(&ids, &[second]);
    assert_eq!(model.decoration_ranges(), vec![second]);

    model.change_decorations(&ids, &[]);
    assert!(model.decoration_ranges().is_empty());
}
