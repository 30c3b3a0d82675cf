//! Deletion operations
//!
//! Buffer-edge deletes report handled with no emitted command; the keystroke
//! is consumed either way. Deleting an empty auto-close pair removes both
//! characters atomically. Multi-line neighbor deletions request an undo
//! breakpoint before the edit.

use super::{char_after, char_before, PlannerContext};
use crate::command::{HandledOutcome, OperationOutcome, ReplaceCommand};
use crate::cursor::Cursor;
use crate::geometry::{Position, Range};
use crate::movement;
use crate::word::{find_next_word_on_line, find_previous_word_on_line, CharClass};

fn handled_noop() -> OperationOutcome {
    OperationOutcome::Handled(HandledOutcome::motion())
}

fn delete_range(range: Range) -> OperationOutcome {
    OperationOutcome::Handled(HandledOutcome::edit(ReplaceCommand::delete(range)))
}

fn delete_range_with_undo_stop(range: Range) -> OperationOutcome {
    OperationOutcome::Handled(HandledOutcome {
        undo_stop_before: true,
        ..HandledOutcome::edit(ReplaceCommand::delete(range))
    })
}

/// The empty auto-close pair around the caret, if any
fn empty_pair_around(cursor: &Cursor, ctx: &PlannerContext<'_>) -> Option<Range> {
    if cursor.has_selection() || !ctx.config.auto_closing_brackets {
        return None;
    }
    let position = cursor.position();
    let before = char_before(ctx.model, position)?;
    let after = char_after(ctx.model, position)?;
    let pair = ctx.config.language.auto_closing_pair_for_open(before)?;
    if pair.close != after {
        return None;
    }
    Some(Range::new(
        position.with_column(position.column - 1),
        position.with_column(position.column + 1),
    ))
}

/// Delete one character (or the selection) to the left
pub fn delete_left(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    if let Some(pair_range) = empty_pair_around(cursor, ctx) {
        return delete_range(pair_range);
    }

    let selection = cursor.selection();
    if !selection.is_empty() {
        return delete_range(selection.as_range());
    }

    let position = cursor.position();
    if position == Position::new(1, 1) {
        // Start of buffer: consumed, nothing to emit
        return handled_noop();
    }

    let left = movement::left(ctx.model, position);
    let range = Range::new(left, position);
    if range.is_multiline() {
        delete_range_with_undo_stop(range)
    } else {
        delete_range(range)
    }
}

/// Delete one character (or the selection) to the right
pub fn delete_right(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    if let Some(pair_range) = empty_pair_around(cursor, ctx) {
        return delete_range(pair_range);
    }

    let selection = cursor.selection();
    if !selection.is_empty() {
        return delete_range(selection.as_range());
    }

    let position = cursor.position();
    let last = ctx.model.line_count();
    if position == Position::new(last, ctx.model.max_column(last)) {
        // End of buffer: consumed, nothing to emit
        return handled_noop();
    }

    let right = movement::right(ctx.model, position);
    let range = Range::new(position, right);
    if range.is_multiline() {
        delete_range_with_undo_stop(range)
    } else {
        delete_range(range)
    }
}

/// Delete the whitespace run or word to the left
///
/// Order: a contiguous run of whitespace immediately left of the caret,
/// else back to the previous word boundary, else a single character (which
/// wraps across the line break).
pub fn delete_word_left(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let selection = cursor.selection();
    if !selection.is_empty() {
        return delete_range(selection.as_range());
    }

    let position = cursor.position();
    if position == Position::new(1, 1) {
        return handled_noop();
    }

    let line_content = ctx.model.line_content(position.line);
    let chars: Vec<char> = line_content.chars().collect();
    let offset = position.column - 1;

    // 1. Trailing whitespace run
    if offset > 0 && ctx.classifier.classify(chars[offset - 1]) == CharClass::Whitespace {
        let mut start = offset;
        while start > 0 && ctx.classifier.classify(chars[start - 1]) == CharClass::Whitespace {
            start -= 1;
        }
        return delete_range(Range::new(position.with_column(start + 1), position));
    }

    // 2. Previous word boundary on this line
    if let Some(word) = find_previous_word_on_line(ctx.classifier, line_content, offset) {
        return delete_range(Range::new(position.with_column(word.start + 1), position));
    }

    // 3. Character deletion, wrapping at the line start
    delete_left(cursor, ctx)
}

/// Delete the whitespace run or word to the right
pub fn delete_word_right(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let selection = cursor.selection();
    if !selection.is_empty() {
        return delete_range(selection.as_range());
    }

    let position = cursor.position();
    let last = ctx.model.line_count();
    if position == Position::new(last, ctx.model.max_column(last)) {
        return handled_noop();
    }

    let line_content = ctx.model.line_content(position.line);
    let chars: Vec<char> = line_content.chars().collect();
    let offset = position.column - 1;

    // 1. Leading whitespace run
    if offset < chars.len() && ctx.classifier.classify(chars[offset]) == CharClass::Whitespace {
        let mut end = offset;
        while end < chars.len() && ctx.classifier.classify(chars[end]) == CharClass::Whitespace {
            end += 1;
        }
        return delete_range(Range::new(position, position.with_column(end + 1)));
    }

    // 2. Next word boundary on this line
    if offset < chars.len() {
        if let Some(word) = find_next_word_on_line(ctx.classifier, line_content, offset) {
            return delete_range(Range::new(position, position.with_column(word.end + 1)));
        }
    }

    // 3. Character deletion, wrapping at the line end
    delete_right(cursor, ctx)
}

/// Delete from the line start to the caret; no-op at column 1
pub fn delete_all_left(cursor: &mut Cursor, _ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let selection = cursor.selection();
    if !selection.is_empty() {
        return delete_range(selection.as_range());
    }
    let position = cursor.position();
    if position.column == 1 {
        return handled_noop();
    }
    delete_range(Range::new(Position::new(position.line, 1), position))
}

/// Delete from the caret to the line end; no-op at the max column
pub fn delete_all_right(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let selection = cursor.selection();
    if !selection.is_empty() {
        return delete_range(selection.as_range());
    }
    let position = cursor.position();
    let max_column = ctx.model.max_column(position.line);
    if position.column == max_column {
        return handled_noop();
    }
    delete_range(Range::new(position, Position::new(position.line, max_column)))
}
