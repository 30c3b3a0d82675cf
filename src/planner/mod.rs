//! The editing-operation catalog
//!
//! Every operation is stateless per call: it reads the cursor state and a
//! [`PlannerContext`], optionally commits one cursor transition, and returns
//! an [`OperationOutcome`](crate::command::OperationOutcome). Operations
//! never mutate the buffer.
//!
//! Contract with the executor: an outcome that carries commands leaves the
//! cursor untouched — the executor applies the edits and repositions the
//! caret per each command's caret rule. Pure motions (navigation, close-char
//! type-over, buffer-edge no-ops) commit the cursor transition directly and
//! carry no commands.
//!
//! ## Modules
//!
//! - [`navigation`] - caret movement and the collapse-to-edge policy
//! - [`selection`] - line selection expansion and drag gestures
//! - [`typing`] - typed-character interception chain
//! - [`deletion`] - character, word, and line-boundary deletion
//! - [`indentation`] - tab, indent, and outdent
//! - [`clipboard`] - cut and paste planning

pub mod clipboard;
pub mod deletion;
pub mod indentation;
pub mod navigation;
pub mod selection;
pub mod typing;

use crate::buffer::TextModel;
use crate::config::CursorConfig;
use crate::error::ErrorSink;
use crate::geometry::{Position, Range};
use crate::language::LanguageHooks;
use crate::view::ViewMapper;
use crate::word::WordClassifier;

/// Everything an operation reads besides the cursor itself
pub struct PlannerContext<'a> {
    /// The buffer being edited
    pub model: &'a dyn TextModel,
    /// Buffer/view coordinate conversion
    pub mapper: &'a dyn ViewMapper,
    /// Cursor configuration
    pub config: &'a CursorConfig,
    /// Language-mode callbacks (crossed only through `language::guard`)
    pub hooks: &'a dyn LanguageHooks,
    /// Word classification table for the configured separators
    pub classifier: &'a WordClassifier,
    /// Destination for language-hook faults
    pub sink: &'a mut dyn ErrorSink,
}

/// Character immediately before a position on its line, if any
pub(crate) fn char_before(model: &dyn TextModel, position: Position) -> Option<char> {
    if position.column < 2 {
        return None;
    }
    model
        .line_content(position.line)
        .chars()
        .nth(position.column - 2)
}

/// Character immediately after a position on its line, if any
pub(crate) fn char_after(model: &dyn TextModel, position: Position) -> Option<char> {
    model
        .line_content(position.line)
        .chars()
        .nth(position.column - 1)
}

/// Leading whitespace of a line
pub(crate) fn leading_whitespace(line_content: &str) -> String {
    line_content
        .chars()
        .take_while(|&c| c == ' ' || c == '\t')
        .collect()
}

/// Text covered by a buffer range, lines joined with `\n`
pub(crate) fn range_text(model: &dyn TextModel, range: Range) -> String {
    if range.start.line == range.end.line {
        return model
            .line_content(range.start.line)
            .chars()
            .skip(range.start.column - 1)
            .take(range.end.column - range.start.column)
            .collect();
    }
    let mut out = String::new();
    let first: String = model
        .line_content(range.start.line)
        .chars()
        .skip(range.start.column - 1)
        .collect();
    out.push_str(&first);
    for line in range.start.line + 1..range.end.line {
        out.push('\n');
        out.push_str(model.line_content(line));
    }
    out.push('\n');
    let last: String = model
        .line_content(range.end.line)
        .chars()
        .take(range.end.column - 1)
        .collect();
    out.push_str(&last);
    out
}
