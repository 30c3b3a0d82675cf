//! Tab, indent, and outdent
//!
//! `indent` and `outdent` emit a batch with one shift command per selected
//! line; `outdent` computes the exact inverse of a one-unit shift, removing
//! fewer columns when a line's leading indent is shorter than one unit.

use super::{leading_whitespace, PlannerContext};
use crate::command::{HandledOutcome, OperationOutcome, ReplaceCommand};
use crate::cursor::Cursor;
use crate::geometry::{Position, Range};
use crate::movement::visible_column_of;

/// Indentation for a blank line: the nearest non-blank line above decides
///
/// Falls back to one indent unit when every line above is blank.
fn good_indent_for_line(ctx: &PlannerContext<'_>, line: usize) -> String {
    let mut above = line;
    while above > 1 {
        above -= 1;
        let content = ctx.model.line_content(above);
        if !content.trim().is_empty() {
            return leading_whitespace(content);
        }
    }
    ctx.config.indent_unit()
}

/// Plan the Tab key
///
/// With a selection, delegates to [`indent`]. On a blank line, replaces the
/// line's content with a good indent. Otherwise inserts a soft or hard tab
/// at the caret's visible column.
pub fn tab(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    if cursor.has_selection() {
        return indent(cursor, ctx);
    }

    let position = cursor.position();
    let line_content = ctx.model.line_content(position.line);

    if line_content.trim().is_empty() {
        let good = good_indent_for_line(ctx, position.line);
        let whole = Range::new(
            Position::new(position.line, 1),
            Position::new(position.line, ctx.model.max_column(position.line)),
        );
        return OperationOutcome::Handled(HandledOutcome::edit(ReplaceCommand::replace(
            whole, good,
        )));
    }

    let text = if ctx.config.insert_spaces {
        let tab_size = ctx.config.tab_size();
        let visible = visible_column_of(ctx.config, line_content, position.column);
        " ".repeat(tab_size - (visible % tab_size))
    } else {
        "\t".to_string()
    };
    OperationOutcome::Handled(HandledOutcome::edit(ReplaceCommand::replace(
        Range::empty_at(position),
        text,
    )))
}

/// Lines covered by the selection for a block shift
///
/// A selection ending at column 1 of a later line does not shift that line.
fn shift_lines(cursor: &Cursor) -> (usize, usize) {
    let range = cursor.selection().as_range();
    let mut end_line = range.end.line;
    if end_line > range.start.line && range.end.column == 1 {
        end_line -= 1;
    }
    (range.start.line, end_line)
}

/// Shift every non-empty selected line right by one indent unit
pub fn indent(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let (first, last) = shift_lines(cursor);
    let unit = ctx.config.indent_unit();

    let mut commands = Vec::new();
    for line in first..=last {
        if ctx.model.line_content(line).is_empty() {
            continue;
        }
        commands.push(ReplaceCommand::replace(
            Range::empty_at(Position::new(line, 1)),
            unit.clone(),
        ));
    }

    OperationOutcome::Handled(HandledOutcome {
        undo_stop_before: true,
        undo_stop_after: true,
        ..HandledOutcome::edits(commands)
    })
}

/// Shift every selected line left by exactly the inverse of one unit
pub fn outdent(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let (first, last) = shift_lines(cursor);
    let tab_size = ctx.config.tab_size();

    let mut commands = Vec::new();
    for line in first..=last {
        let content = ctx.model.line_content(line);
        let mut removed_chars = 0;
        let mut removed_visible = 0;
        for ch in content.chars() {
            if removed_visible >= tab_size {
                break;
            }
            let width = match ch {
                '\t' => tab_size - (removed_visible % tab_size),
                ' ' => 1,
                _ => break,
            };
            removed_chars += 1;
            removed_visible += width;
        }
        if removed_chars == 0 {
            continue;
        }
        commands.push(ReplaceCommand::delete(Range::new(
            Position::new(line, 1),
            Position::new(line, removed_chars + 1),
        )));
    }

    OperationOutcome::Handled(HandledOutcome {
        undo_stop_before: true,
        undo_stop_after: true,
        ..HandledOutcome::edits(commands)
    })
}
