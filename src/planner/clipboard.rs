//! Cut and paste planning
//!
//! The host owns the clipboard: for a cut it reads the doomed range before
//! applying the command, for a paste it supplies the text. The planner only
//! decides which range moves.

use super::PlannerContext;
use crate::command::{
    CaretRule, CursorChangeReason, HandledOutcome, OperationOutcome, ReplaceCommand,
};
use crate::cursor::Cursor;
use crate::geometry::{Position, Range};

/// Plan a cut
///
/// With an empty selection and `empty_selection_clipboard` enabled, the
/// whole logical line goes, including one adjacent line break where the
/// buffer has one.
pub fn cut(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let selection = cursor.selection();

    let range = if !selection.is_empty() {
        selection.as_range()
    } else {
        if !ctx.config.empty_selection_clipboard {
            return OperationOutcome::NotHandled;
        }
        let line = cursor.position().line;
        let last = ctx.model.line_count();
        if line < last {
            // First or middle line: take the trailing line break
            Range::new(Position::new(line, 1), Position::new(line + 1, 1))
        } else if line > 1 {
            // Last line: take the preceding line break instead
            Range::new(
                Position::new(line - 1, ctx.model.max_column(line - 1)),
                Position::new(line, ctx.model.max_column(line)),
            )
        } else {
            // Single-line buffer: clear the line, leave it in place
            Range::new(Position::new(line, 1), Position::new(line, ctx.model.max_column(line)))
        }
    };

    OperationOutcome::Handled(HandledOutcome {
        undo_stop_before: true,
        undo_stop_after: true,
        ..HandledOutcome::edit(ReplaceCommand::delete(range))
    })
}

/// Whether `text` is exactly one complete line (single trailing `\n`)
fn is_whole_single_line(text: &str) -> bool {
    match text.strip_suffix('\n') {
        Some(body) => !body.contains('\n') && !body.is_empty(),
        None => false,
    }
}

/// Plan a paste
///
/// A whole single line pasted over an empty selection re-homes to column 1
/// so it precedes the current line instead of splitting it.
pub fn paste(cursor: &mut Cursor, _ctx: &mut PlannerContext<'_>, text: &str) -> OperationOutcome {
    let selection = cursor.selection();

    let command = if selection.is_empty() && is_whole_single_line(text) {
        let line_home = Position::new(cursor.position().line, 1);
        ReplaceCommand::replace(Range::empty_at(line_home), text)
            .with_caret_rule(CaretRule::PreserveBeforeEdit)
    } else {
        ReplaceCommand::replace(selection.as_range(), text)
    };

    OperationOutcome::Handled(HandledOutcome {
        reason: CursorChangeReason::Paste,
        undo_stop_before: true,
        undo_stop_after: true,
        ..HandledOutcome::edit(command)
    })
}
