//! Typed-character interception
//!
//! A typed character runs through a fixed chain; the first match wins:
//!
//! 1. newline (indentation-aware)
//! 2. auto-close close character type-over
//! 3. auto-close open character
//! 4. surround selection
//! 5. electric character
//! 6. plain insertion
//!
//! Language-mode opinions (enter action, auto-close approval, electric
//! action) cross the `language::guard` boundary: a faulty hook declines the
//! feature and the chain falls through.

use super::{char_after, leading_whitespace, range_text, PlannerContext};
use crate::command::{
    CaretRule, HandledOutcome, OperationOutcome, PostOperation, ReplaceCommand,
};
use crate::cursor::Cursor;
use crate::geometry::Range;
use crate::language::{guard, ElectricAction, EnterAction, IndentAction};
use crate::word::CharClass;

/// Plan the effect of typing `ch`
pub fn type_character(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    ch: char,
) -> OperationOutcome {
    if ch == '\n' {
        return enter(cursor, ctx);
    }
    if let Some(outcome) = type_over_close(cursor, ctx, ch) {
        return outcome;
    }
    if let Some(outcome) = auto_close_open(cursor, ctx, ch) {
        return outcome;
    }
    if let Some(outcome) = surround_selection(cursor, ctx, ch) {
        return outcome;
    }
    if let Some(outcome) = electric_character(cursor, ctx, ch) {
        return outcome;
    }
    plain_insert(cursor, ctx, ch)
}

/// Indentation-aware newline
pub fn enter(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>) -> OperationOutcome {
    let range = cursor.selection().as_range();
    let position = range.start;
    let line_content = ctx.model.line_content(position.line);

    // Indentation visible at the caret: the line's leading whitespace,
    // truncated when the caret sits inside it
    let mut indent: String = leading_whitespace(line_content)
        .chars()
        .take(position.column - 1)
        .collect();

    let action = guard(ctx.sink, ctx.hooks.enter_action(position), None)
        .unwrap_or(EnterAction::plain(IndentAction::None));

    let unit = ctx.config.indent_unit();
    let command = match action.indent_action {
        IndentAction::None => {
            let text = format!("\n{indent}");
            ReplaceCommand::replace(range, text)
        }
        IndentAction::Indent => {
            let text = format!("\n{indent}{unit}");
            ReplaceCommand::replace(range, text)
        }
        IndentAction::IndentOutdent => {
            // Two lines; the caret lands at the end of the indented first one
            let text = format!("\n{indent}{unit}\n{indent}");
            ReplaceCommand::replace(range, text).with_caret_rule(CaretRule::OffsetAfterEdit {
                line_delta: -1,
                column_delta: unit.chars().count() as isize,
            })
        }
        IndentAction::Outdent => {
            for _ in 0..action.remove_chars {
                indent.pop();
            }
            let reduced = reduce_indent_one_unit(ctx, &indent);
            let text = format!("\n{reduced}");
            ReplaceCommand::replace(range, text)
        }
    };

    OperationOutcome::Handled(HandledOutcome {
        undo_stop_before: true,
        ..HandledOutcome::edit(command)
    })
}

/// Remove one indent unit's worth of visible columns from `indent`
fn reduce_indent_one_unit(ctx: &PlannerContext<'_>, indent: &str) -> String {
    let tab_size = ctx.config.tab_size();
    let chars: Vec<char> = indent.chars().collect();
    let mut visible = 0;
    for ch in &chars {
        visible += if *ch == '\t' {
            tab_size - (visible % tab_size)
        } else {
            1
        };
    }
    let target = visible.saturating_sub(tab_size);

    let mut out = String::new();
    let mut acc = 0;
    for ch in chars {
        let width = if ch == '\t' {
            tab_size - (acc % tab_size)
        } else {
            1
        };
        if acc + width > target {
            break;
        }
        acc += width;
        out.push(ch);
    }
    out
}

/// Step over an identical close character instead of duplicating it
fn type_over_close(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    ch: char,
) -> Option<OperationOutcome> {
    if cursor.has_selection() || !ctx.config.auto_closing_brackets {
        return None;
    }
    if !ctx.config.language.is_auto_closing_close(ch) {
        return None;
    }
    let position = cursor.position();
    if char_after(ctx.model, position) != Some(ch) {
        return None;
    }
    cursor.move_to(
        ctx.model,
        ctx.mapper,
        false,
        position.with_column(position.column + 1),
        0,
    );
    Some(OperationOutcome::Handled(HandledOutcome::motion()))
}

/// Insert opener and closer together, caret between them
fn auto_close_open(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    ch: char,
) -> Option<OperationOutcome> {
    if cursor.has_selection() || !ctx.config.auto_closing_brackets {
        return None;
    }
    let pair = ctx.config.language.auto_closing_pair_for_open(ch)?;
    let position = cursor.position();

    // Only before nothing, whitespace, or a configured closer
    match char_after(ctx.model, position) {
        None => {}
        Some(next) => {
            let is_whitespace = ctx.classifier.classify(next) == CharClass::Whitespace;
            if !is_whitespace && !ctx.config.language.is_auto_closing_close(next) {
                return None;
            }
        }
    }

    if !guard(
        ctx.sink,
        ctx.hooks.approve_auto_close(position, ch),
        false,
    ) {
        return None;
    }

    let text = format!("{}{}", pair.open, pair.close);
    let command = ReplaceCommand::replace(Range::empty_at(position), text).with_caret_rule(
        CaretRule::OffsetAfterEdit {
            line_delta: 0,
            column_delta: -1,
        },
    );
    Some(OperationOutcome::Handled(HandledOutcome::edit(command)))
}

/// Wrap a non-whitespace selection in a surround pair, both ends selected
fn surround_selection(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    ch: char,
) -> Option<OperationOutcome> {
    if !cursor.has_selection() {
        return None;
    }
    let pair = ctx.config.language.surrounding_pair_for(ch)?;
    let range = cursor.selection().as_range();
    let selected = range_text(ctx.model, range);
    if selected.chars().all(|c| c == ' ' || c == '\t' || c == '\n') {
        return None;
    }

    let open = ReplaceCommand::replace(Range::empty_at(range.start), pair.open.to_string())
        .with_caret_rule(CaretRule::Unchanged);
    let close = ReplaceCommand::replace(Range::empty_at(range.end), pair.close.to_string())
        .with_caret_rule(CaretRule::Unchanged);
    Some(OperationOutcome::Handled(HandledOutcome {
        undo_stop_before: true,
        undo_stop_after: true,
        ..HandledOutcome::edits(vec![open, close])
    }))
}

/// Insert an electric character and request its deferred fixup
fn electric_character(
    cursor: &mut Cursor,
    ctx: &mut PlannerContext<'_>,
    ch: char,
) -> Option<OperationOutcome> {
    if !ctx.config.language.is_electric(ch) {
        return None;
    }
    let position = cursor.position();
    let action = guard(ctx.sink, ctx.hooks.electric_action(position, ch), None)?;

    let post = match action {
        ElectricAction::MatchOpenBracket(bracket) => {
            PostOperation::MatchBracketIndent { bracket }
        }
        ElectricAction::AppendText { text, advance } => PostOperation::AppendText { text, advance },
    };
    let range = cursor.selection().as_range();
    let command = ReplaceCommand::replace(range, ch.to_string());
    Some(OperationOutcome::Handled(HandledOutcome {
        post_operation: Some(post),
        ..HandledOutcome::edit(command)
    }))
}

/// Default: replace the current selection with the typed character
fn plain_insert(cursor: &mut Cursor, ctx: &mut PlannerContext<'_>, ch: char) -> OperationOutcome {
    let range = cursor.selection().as_range();
    let command = ReplaceCommand::replace(range, ch.to_string());
    OperationOutcome::Handled(HandledOutcome::edit(command))
}
