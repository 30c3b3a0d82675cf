//! Pure neighbor-position computations
//!
//! Horizontal steps wrap across line boundaries; vertical steps preserve a
//! tab-expanded target column across lines of differing length. Nothing here
//! mutates state: every function maps a position to a position.

use unicode_width::UnicodeWidthChar;

use crate::buffer::TextModel;
use crate::config::CursorConfig;
use crate::geometry::Position;

/// Result of a vertical step: the landing position plus the visible-column
/// overflow to carry into the next vertical step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalMove {
    /// Landing position (clamped into buffer bounds)
    pub position: Position,
    /// Visible columns beyond the landing line's end, remembered so a later
    /// vertical step onto a longer line restores the original target column
    pub leftover_visible_columns: usize,
}

fn char_visible_width(ch: char, visible_column: usize, tab_size: usize) -> usize {
    if ch == '\t' {
        tab_size - (visible_column % tab_size)
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Visible column (0-based) of a 1-based column on `line_content`
///
/// Tabs advance to the next multiple of the tab size; wide characters count
/// their display width.
#[must_use]
pub fn visible_column_of(config: &CursorConfig, line_content: &str, column: usize) -> usize {
    let tab_size = config.tab_size();
    let mut visible = 0;
    for ch in line_content.chars().take(column.saturating_sub(1)) {
        visible += char_visible_width(ch, visible, tab_size);
    }
    visible
}

/// Nearest 1-based column for a visible column on `line_content`
///
/// Ties round toward the earlier column. The result is clamped to the line's
/// max column.
#[must_use]
pub fn column_from_visible_column(
    config: &CursorConfig,
    line_content: &str,
    visible_column: usize,
) -> usize {
    let tab_size = config.tab_size();
    let mut visible = 0;
    let mut column = 1;
    for ch in line_content.chars() {
        let width = char_visible_width(ch, visible, tab_size);
        if visible + width > visible_column {
            // Between the two boundaries of this character: pick the nearer
            let before = visible_column - visible;
            let after = visible + width - visible_column;
            return if before < after { column } else { column + 1 };
        }
        visible += width;
        column += 1;
    }
    column
}

/// One step left, wrapping to the previous line's max column
#[must_use]
pub fn left(model: &dyn TextModel, position: Position) -> Position {
    if position.column > 1 {
        Position::new(position.line, position.column - 1)
    } else if position.line > 1 {
        Position::new(position.line - 1, model.max_column(position.line - 1))
    } else {
        position
    }
}

/// One step right, wrapping to the next line's column 1
#[must_use]
pub fn right(model: &dyn TextModel, position: Position) -> Position {
    if position.column < model.max_column(position.line) {
        Position::new(position.line, position.column + 1)
    } else if position.line < model.line_count() {
        Position::new(position.line + 1, 1)
    } else {
        position
    }
}

/// `count` lines up, restoring the remembered visible column where possible
///
/// On the first line the caret moves to column 1 instead.
#[must_use]
pub fn up(
    model: &dyn TextModel,
    config: &CursorConfig,
    position: Position,
    count: usize,
    leftover_visible_columns: usize,
) -> VerticalMove {
    if position.line == 1 {
        return VerticalMove {
            position: Position::new(1, 1),
            leftover_visible_columns: 0,
        };
    }
    let target_line = position.line.saturating_sub(count).max(1);
    vertical_land(model, config, position, target_line, leftover_visible_columns)
}

/// `count` lines down, restoring the remembered visible column where possible
///
/// On the last line the caret moves to the line end instead.
#[must_use]
pub fn down(
    model: &dyn TextModel,
    config: &CursorConfig,
    position: Position,
    count: usize,
    leftover_visible_columns: usize,
) -> VerticalMove {
    let last = model.line_count();
    if position.line == last {
        return VerticalMove {
            position: Position::new(last, model.max_column(last)),
            leftover_visible_columns: 0,
        };
    }
    let target_line = (position.line + count).min(last);
    vertical_land(model, config, position, target_line, leftover_visible_columns)
}

fn vertical_land(
    model: &dyn TextModel,
    config: &CursorConfig,
    from: Position,
    target_line: usize,
    leftover_visible_columns: usize,
) -> VerticalMove {
    let target_visible = visible_column_of(config, model.line_content(from.line), from.column)
        + leftover_visible_columns;

    let line_content = model.line_content(target_line);
    let max_column = model.max_column(target_line);
    let mut column = column_from_visible_column(config, line_content, target_visible);
    let mut leftover = 0;
    if column >= max_column {
        column = max_column;
        // Short line: remember how far past the end the target sits
        leftover = target_visible.saturating_sub(visible_column_of(config, line_content, max_column));
    }

    VerticalMove {
        position: Position::new(target_line, column),
        leftover_visible_columns: leftover,
    }
}

/// Start of the line
#[must_use]
pub fn line_start(position: Position) -> Position {
    Position::new(position.line, 1)
}

/// End of the line
#[must_use]
pub fn line_end(model: &dyn TextModel, position: Position) -> Position {
    Position::new(position.line, model.max_column(position.line))
}

/// Column (1-based) of the first non-blank character, or 1 on a blank line
#[must_use]
pub fn first_non_blank_column(line_content: &str) -> usize {
    for (idx, ch) in line_content.chars().enumerate() {
        if ch != ' ' && ch != '\t' {
            return idx + 1;
        }
    }
    1
}
