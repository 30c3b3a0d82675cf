//! Language-mode hooks
//!
//! Indentation-on-enter, auto-close approval, and electric-character
//! behavior come from a language service the core does not trust. Every
//! call crosses [`guard`], which reports faults to the error sink and
//! answers "feature declined" so a broken language extension can never
//! corrupt cursor state or abort a keystroke.

use crate::error::{CoreError, ErrorSink};
use crate::geometry::Position;

/// What the language mode wants done to indentation when Enter is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentAction {
    /// Keep the current line's indentation
    None,
    /// Indent one level relative to the current line
    Indent,
    /// Indent the new line and outdent the line after it (caret between)
    IndentOutdent,
    /// Outdent relative to the current line
    Outdent,
}

/// Full enter action: indent behavior plus an indent-character trim count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterAction {
    /// Indentation behavior
    pub indent_action: IndentAction,
    /// Characters of computed indentation to drop (used with `Outdent`)
    pub remove_chars: usize,
}

impl EnterAction {
    /// Plain enter action with no trimming
    #[must_use]
    pub fn plain(indent_action: IndentAction) -> Self {
        EnterAction {
            indent_action,
            remove_chars: 0,
        }
    }
}

/// What to do after an electric character was inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElectricAction {
    /// Realign the caret line's indentation to the line holding the matching
    /// open bracket
    MatchOpenBracket(char),
    /// Insert a fragment after the caret and advance into it
    AppendText {
        /// Fragment to insert
        text: String,
        /// Columns to advance the caret into the fragment
        advance: usize,
    },
}

/// Callbacks into the language mode
///
/// All methods are fallible on purpose: implementations wrap third-party
/// extension code. A fault is never propagated past [`guard`].
pub trait LanguageHooks {
    /// Indentation action for pressing Enter at `position`
    fn enter_action(&self, position: Position) -> anyhow::Result<Option<EnterAction>>;

    /// Whether an auto-closing pair may be inserted for `opener` at `position`
    fn approve_auto_close(&self, position: Position, opener: char) -> anyhow::Result<bool>;

    /// Electric behavior for `ch` typed at `position`
    fn electric_action(
        &self,
        position: Position,
        ch: char,
    ) -> anyhow::Result<Option<ElectricAction>>;
}

/// Language mode with no opinions; every feature declines
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl LanguageHooks for NoHooks {
    fn enter_action(&self, _position: Position) -> anyhow::Result<Option<EnterAction>> {
        Ok(None)
    }

    fn approve_auto_close(&self, _position: Position, _opener: char) -> anyhow::Result<bool> {
        Ok(true)
    }

    fn electric_action(
        &self,
        _position: Position,
        _ch: char,
    ) -> anyhow::Result<Option<ElectricAction>> {
        Ok(None)
    }
}

/// Run a hook result through the defensive boundary
///
/// A fault is reported to `sink` and collapses to `fallback`.
pub fn guard<T>(sink: &mut dyn ErrorSink, result: anyhow::Result<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            sink.report(CoreError::from_hook_fault(&err));
            fallback
        }
    }
}
