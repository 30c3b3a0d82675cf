//! Abstract edit commands and operation outcomes
//!
//! The planner never mutates text. Each operation returns an
//! [`OperationOutcome`]: either `NotHandled`, or `Handled` with zero or more
//! [`ReplaceCommand`]s plus hints for the executor (caret-change reason,
//! reveal flags, undo breakpoints, an optional post-operation fixup).

use crate::geometry::Range;

/// Where the caret lands after an edit is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretRule {
    /// Leave the caret where the cursor state says it is
    Unchanged,
    /// Keep the caret at the position it had before the edit
    PreserveBeforeEdit,
    /// Place the caret relative to the end of the replacement text
    OffsetAfterEdit {
        /// Lines to add to the replacement's end line
        line_delta: isize,
        /// Columns to add to the replacement's end column
        column_delta: isize,
    },
}

/// A single abstract text replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceCommand {
    /// Buffer range to replace (may be empty for pure insertion)
    pub range: Range,
    /// Replacement text (may be empty for pure deletion)
    pub text: String,
    /// Caret placement after the edit
    pub caret_rule: CaretRule,
}

impl ReplaceCommand {
    /// Replace `range` with `text`, caret at the end of the replacement
    #[must_use]
    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        ReplaceCommand {
            range,
            text: text.into(),
            caret_rule: CaretRule::OffsetAfterEdit {
                line_delta: 0,
                column_delta: 0,
            },
        }
    }

    /// Delete `range`
    #[must_use]
    pub fn delete(range: Range) -> Self {
        Self::replace(range, "")
    }

    /// Override the caret rule
    #[must_use]
    pub fn with_caret_rule(mut self, rule: CaretRule) -> Self {
        self.caret_rule = rule;
        self
    }
}

/// Why the cursor changed, for listeners downstream of the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorChangeReason {
    /// No particular reason recorded
    NotSet,
    /// Direct consequence of a user gesture
    Explicit,
    /// Caused by a paste
    Paste,
}

/// Scroll-into-view hints for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealHint {
    /// Scroll the caret into view
    pub scroll_into_view: bool,
    /// Center the caret line vertically
    pub vertical_center: bool,
    /// Reveal the caret column horizontally
    pub horizontal: bool,
}

impl RevealHint {
    /// The common case: scroll the caret into view, no centering
    #[must_use]
    pub fn standard() -> Self {
        RevealHint {
            scroll_into_view: true,
            vertical_center: false,
            horizontal: true,
        }
    }
}

/// Deferred fixup applied by the host after the edit lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOperation {
    /// Re-indent the caret line to match the indentation of the line holding
    /// the matching open bracket for `bracket`
    MatchBracketIndent {
        /// The just-typed closing bracket
        bracket: char,
    },
    /// Insert `text` after the caret, then advance the caret `advance`
    /// columns from its pre-fixup position
    AppendText {
        /// Fragment to insert
        text: String,
        /// Columns to advance the caret into the fragment
        advance: usize,
    },
}

/// Everything the executor needs for a handled operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledOutcome {
    /// Replacements to apply atomically, in order
    pub commands: Vec<ReplaceCommand>,
    /// Caret-change reason tag
    pub reason: CursorChangeReason,
    /// Scroll hints
    pub reveal: RevealHint,
    /// Break the undo chain before applying
    pub undo_stop_before: bool,
    /// Break the undo chain after applying
    pub undo_stop_after: bool,
    /// Optional deferred fixup (electric characters)
    pub post_operation: Option<PostOperation>,
    /// Optional scroll request in view lines (paged moves)
    pub scroll_view_lines: Option<isize>,
}

impl HandledOutcome {
    /// Handled with no commands: pure cursor motion
    #[must_use]
    pub fn motion() -> Self {
        HandledOutcome {
            commands: Vec::new(),
            reason: CursorChangeReason::Explicit,
            reveal: RevealHint::standard(),
            undo_stop_before: false,
            undo_stop_after: false,
            post_operation: None,
            scroll_view_lines: None,
        }
    }

    /// Handled with a single edit command
    #[must_use]
    pub fn edit(command: ReplaceCommand) -> Self {
        HandledOutcome {
            commands: vec![command],
            ..Self::motion()
        }
    }

    /// Handled with a batch of edit commands
    #[must_use]
    pub fn edits(commands: Vec<ReplaceCommand>) -> Self {
        HandledOutcome {
            commands,
            ..Self::motion()
        }
    }
}

/// Tagged result of every planner operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The operation does not apply; the caller falls through
    NotHandled,
    /// The operation applies; commands and hints are inside
    Handled(HandledOutcome),
}

impl OperationOutcome {
    /// Whether the operation was handled
    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self, OperationOutcome::Handled(_))
    }

    /// The handled payload, if any
    #[must_use]
    pub fn handled(&self) -> Option<&HandledOutcome> {
        match self {
            OperationOutcome::Handled(h) => Some(h),
            OperationOutcome::NotHandled => None,
        }
    }
}
