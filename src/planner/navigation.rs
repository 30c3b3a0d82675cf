//! Caret movement operations
//!
//! Every operation honors the collapse-to-edge policy: when a non-empty
//! selection exists and the move is not selection-extending, the first step
//! collapses the selection to its start edge (left/up-moving operations) or
//! end edge (right/down-moving operations) instead of computing a fresh
//! neighbor position.

use super::PlannerContext;
use crate::command::{HandledOutcome, OperationOutcome};
use crate::cursor::Cursor;
use crate::geometry::Position;
use crate::movement;
use crate::word::{find_next_word_on_line, find_previous_word_on_line};

/// Which selection edge a non-extending move collapses to
enum CollapseEdge {
    Start,
    End,
}

/// Collapse to a selection edge if the policy applies
fn collapse_if_needed(
    cursor: &mut Cursor,
    ctx: &PlannerContext<'_>,
    in_selection_mode: bool,
    edge: CollapseEdge,
) -> bool {
    if in_selection_mode || !cursor.has_selection() {
        return false;
    }
    let range = cursor.selection().as_range();
    let target = match edge {
        CollapseEdge::Start => range.start,
        CollapseEdge::End => range.end,
    };
    cursor.move_to(ctx.model, ctx.mapper, false, target, 0);
    true
}

fn motion() -> OperationOutcome {
    OperationOutcome::Handled(HandledOutcome::motion())
}

/// One character left, wrapping at line starts
pub fn move_left(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    if collapse_if_needed(cursor, ctx, in_selection_mode, CollapseEdge::Start) {
        return motion();
    }
    let target = movement::left(ctx.model, cursor.position());
    cursor.move_to(ctx.model, ctx.mapper, in_selection_mode, target, 0);
    motion()
}

/// One character right, wrapping at line ends
pub fn move_right(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    if collapse_if_needed(cursor, ctx, in_selection_mode, CollapseEdge::End) {
        return motion();
    }
    let target = movement::right(ctx.model, cursor.position());
    cursor.move_to(ctx.model, ctx.mapper, in_selection_mode, target, 0);
    motion()
}

fn vertical(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
    lines_down: isize,
    edge: CollapseEdge,
) -> OperationOutcome {
    if collapse_if_needed(cursor, ctx, in_selection_mode, edge) {
        return motion();
    }
    let leftover = cursor.leftover_visible_columns();
    let step = if lines_down < 0 {
        movement::up(
            ctx.model,
            ctx.config,
            cursor.position(),
            lines_down.unsigned_abs(),
            leftover,
        )
    } else {
        movement::down(
            ctx.model,
            ctx.config,
            cursor.position(),
            lines_down as usize,
            leftover,
        )
    };
    cursor.move_to(
        ctx.model,
        ctx.mapper,
        in_selection_mode,
        step.position,
        step.leftover_visible_columns,
    );
    motion()
}

/// One line up, preserving the visible target column
pub fn move_up(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    vertical(cursor, ctx, in_selection_mode, -1, CollapseEdge::Start)
}

/// One line down, preserving the visible target column
pub fn move_down(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    vertical(cursor, ctx, in_selection_mode, 1, CollapseEdge::End)
}

/// One page up; also requests the matching view scroll
pub fn page_up(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    let page = ctx.config.page_size() as isize;
    let outcome = vertical(cursor, ctx, in_selection_mode, -page, CollapseEdge::Start);
    with_scroll(outcome, -page)
}

/// One page down; also requests the matching view scroll
pub fn page_down(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    let page = ctx.config.page_size() as isize;
    let outcome = vertical(cursor, ctx, in_selection_mode, page, CollapseEdge::End);
    with_scroll(outcome, page)
}

fn with_scroll(outcome: OperationOutcome, view_lines: isize) -> OperationOutcome {
    match outcome {
        OperationOutcome::Handled(mut h) => {
            h.scroll_view_lines = Some(view_lines);
            OperationOutcome::Handled(h)
        }
        OperationOutcome::NotHandled => OperationOutcome::NotHandled,
    }
}

/// To the start of the previous word-like run
pub fn move_word_left(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    if collapse_if_needed(cursor, ctx, in_selection_mode, CollapseEdge::Start) {
        return motion();
    }
    let position = cursor.position();
    let mut line = position.line;
    let mut column = position.column;
    if column == 1 && line > 1 {
        line -= 1;
        column = ctx.model.max_column(line);
    }
    let target = match find_previous_word_on_line(
        ctx.classifier,
        ctx.model.line_content(line),
        column - 1,
    ) {
        Some(word) => Position::new(line, word.start + 1),
        None => Position::new(line, 1),
    };
    cursor.move_to(ctx.model, ctx.mapper, in_selection_mode, target, 0);
    motion()
}

/// To the end of the next word-like run
pub fn move_word_right(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    if collapse_if_needed(cursor, ctx, in_selection_mode, CollapseEdge::End) {
        return motion();
    }
    let position = cursor.position();
    let mut line = position.line;
    let mut column = position.column;
    if column == ctx.model.max_column(line) && line < ctx.model.line_count() {
        line += 1;
        column = 1;
    }
    let target = match find_next_word_on_line(
        ctx.classifier,
        ctx.model.line_content(line),
        column - 1,
    ) {
        Some(word) => Position::new(line, word.end + 1),
        None => Position::new(line, ctx.model.max_column(line)),
    };
    cursor.move_to(ctx.model, ctx.mapper, in_selection_mode, target, 0);
    motion()
}

/// To column 1 of the current line
pub fn move_to_line_start(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    let target = movement::line_start(cursor.position());
    cursor.move_to(ctx.model, ctx.mapper, in_selection_mode, target, 0);
    motion()
}

/// To the max column of the current line
pub fn move_to_line_end(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    let target = movement::line_end(ctx.model, cursor.position());
    cursor.move_to(ctx.model, ctx.mapper, in_selection_mode, target, 0);
    motion()
}

/// To (1,1)
pub fn move_to_buffer_start(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    cursor.move_to(
        ctx.model,
        ctx.mapper,
        in_selection_mode,
        Position::new(1, 1),
        0,
    );
    motion()
}

/// To the end of the last line
pub fn move_to_buffer_end(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    in_selection_mode: bool,
) -> OperationOutcome {
    let last = ctx.model.line_count();
    cursor.move_to(
        ctx.model,
        ctx.mapper,
        in_selection_mode,
        Position::new(last, ctx.model.max_column(last)),
        0,
    );
    motion()
}
