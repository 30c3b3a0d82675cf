//! Centralized error handling for the cursor core
//!
//! Ordinary boundary conditions (buffer start/end, empty line, no word or
//! bracket found) are expressed as `Option`/no-op results, never as errors.
//! The error types here exist for the one defensively wrapped boundary:
//! faults raised by language-mode callbacks, which are reported to an
//! [`ErrorSink`] and treated as "feature declined".

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Warning - a feature was declined but the keystroke proceeded
    Warning,
    /// Standard error - an external collaborator misbehaved
    Error,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A language-mode hook (enter action, auto-close approval, electric
    /// character) raised instead of answering
    LanguageHook,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LanguageHook => write!(f, "LanguageHook"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error in the cursor core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "HOOK_ERROR")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl CoreError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Wrap a fault from a language-mode hook
    pub fn from_hook_fault(err: &anyhow::Error) -> Self {
        Self::new(ErrorKind::LanguageHook, "HOOK_ERROR", format!("{err:#}"))
    }

    /// Check if the message contains a substring (useful for tests)
    #[must_use]
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for CoreError {}

/// Destination for unexpected errors surfaced by the core
///
/// An explicit object owned by the host rather than a process-wide global,
/// so two editor instances never share reporting state.
pub trait ErrorSink {
    /// Report an unexpected error
    fn report(&mut self, error: CoreError);
}

/// Sink that retains every reported error, oldest first
#[derive(Debug, Default)]
pub struct CollectingSink {
    errors: Vec<CoreError>,
}

impl CollectingSink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All errors reported so far
    #[must_use]
    pub fn errors(&self) -> &[CoreError] {
        &self.errors
    }

    /// Drop all recorded errors
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl ErrorSink for CollectingSink {
    fn report(&mut self, error: CoreError) {
        self.errors.push(error);
    }
}
