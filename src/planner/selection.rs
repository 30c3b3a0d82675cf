//! Selection gestures
//!
//! Line and word drag gestures anchor a whole unit (the clicked line or
//! word) and snap the caret to whichever side of it the pointer passed. The
//! caret never re-enters the anchored unit once past it; a pointer inside
//! the unit keeps the whole unit selected.

use super::PlannerContext;
use crate::command::{HandledOutcome, OperationOutcome};
use crate::cursor::Cursor;
use crate::geometry::{Position, Range};
use crate::word::find_word_at;

fn motion() -> OperationOutcome {
    OperationOutcome::Handled(HandledOutcome::motion())
}

/// Whole-line range for `line`: to column 1 of the next line, or to the
/// buffer end on the last line
fn whole_line_range(ctx: &PlannerContext<'_>, line: usize) -> Range {
    let last = ctx.model.line_count();
    if line < last {
        Range::new(Position::new(line, 1), Position::new(line + 1, 1))
    } else {
        Range::new(
            Position::new(line, 1),
            Position::new(line, ctx.model.max_column(line)),
        )
    }
}

/// Whether a range covers only whole lines
fn is_whole_line(ctx: &PlannerContext<'_>, range: Range) -> bool {
    if range.start.column != 1 {
        return false;
    }
    let last = ctx.model.line_count();
    (range.end.column == 1 && range.end.line > range.start.line)
        || (range.end.line == last && range.end.column == ctx.model.max_column(last))
}

/// Toggle between "select exactly the current line(s)" and "grow by one line"
///
/// If the selection already spans whole lines, the selection grows by one
/// more line; otherwise it snaps out to cover its lines completely.
pub fn expand_line_selection(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
) -> OperationOutcome {
    let range = cursor.selection().as_range();
    let last = ctx.model.line_count();

    let new_range = if is_whole_line(ctx, range) {
        // Already whole lines: grow by one
        if range.end.line < last {
            Range::new(range.start, Position::new(range.end.line + 1, 1))
        } else {
            Range::new(
                range.start,
                Position::new(last, ctx.model.max_column(last)),
            )
        }
    } else {
        let end_line = range.end.line;
        if end_line < last {
            Range::new(
                Position::new(range.start.line, 1),
                Position::new(end_line + 1, 1),
            )
        } else {
            Range::new(
                Position::new(range.start.line, 1),
                Position::new(last, ctx.model.max_column(last)),
            )
        }
    };

    cursor.set_selection(ctx.model, ctx.mapper, new_range.start, new_range.end);
    motion()
}

/// Begin a line drag gesture: anchor the clicked line, caret at its far end
pub fn line_select_start(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    position: Position,
) -> OperationOutcome {
    let position = ctx.model.validate_position(position);
    let unit = whole_line_range(ctx, position.line);
    cursor.set_anchored_unit(ctx.model, ctx.mapper, unit, unit.end);
    motion()
}

/// Continue a line drag gesture toward `position`
pub fn line_select_drag(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    position: Position,
) -> OperationOutcome {
    let position = ctx.model.validate_position(position);
    let unit = cursor.selection_start();

    let active = if position < unit.start {
        // Pointer above the anchored line: select back to its line start
        Position::new(position.line, 1)
    } else if position.line >= unit.end.line {
        // Pointer at or past the anchored line's end: select whole lines down
        whole_line_range(ctx, position.line).end
    } else {
        unit.end
    };

    cursor.set_anchored_unit(ctx.model, ctx.mapper, unit, active);
    motion()
}

/// Begin a word drag gesture: anchor the clicked word, caret at its end
pub fn word_select_start(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    position: Position,
) -> OperationOutcome {
    let position = ctx.model.validate_position(position);
    let line_content = ctx.model.line_content(position.line);
    let unit = match find_word_at(ctx.classifier, line_content, position.column - 1) {
        Some(word) => Range::new(
            Position::new(position.line, word.start + 1),
            Position::new(position.line, word.end + 1),
        ),
        None => Range::empty_at(position),
    };
    cursor.set_anchored_unit(ctx.model, ctx.mapper, unit, unit.end);
    motion()
}

/// Continue a word drag gesture toward `position`
///
/// Dragging left selects back to the start of the word under the pointer;
/// dragging right selects forward to the end of the word under the pointer.
pub fn word_select_drag(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    position: Position,
) -> OperationOutcome {
    let position = ctx.model.validate_position(position);
    let unit = cursor.selection_start();
    let line_content = ctx.model.line_content(position.line);
    let pointer_word = find_word_at(ctx.classifier, line_content, position.column - 1);

    let active = if position < unit.start {
        match pointer_word {
            Some(word) => {
                Position::new(position.line, word.start + 1).min(position)
            }
            None => position,
        }
    } else if position > unit.end {
        match pointer_word {
            Some(word) => Position::new(position.line, word.end + 1).max(position),
            None => position,
        }
    } else {
        // Inside the anchored word: keep the whole unit selected
        unit.end
    };

    cursor.set_anchored_unit(ctx.model, ctx.mapper, unit, active);
    motion()
}
