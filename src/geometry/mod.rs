//! Position, range, and selection primitives
//!
//! All coordinates are 1-based: line 1 is the first line, column 1 is the
//! position before the first character of a line. Columns count characters,
//! so column `n + 1` sits after the first `n` characters.

use std::fmt;

/// A position in buffer or view space
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, character index + 1)
    pub column: usize,
}

impl Position {
    /// Create a new position
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Check whether this position comes strictly before `other`
    #[must_use]
    pub fn is_before(&self, other: Position) -> bool {
        *self < other
    }

    /// Check whether this position comes before or equals `other`
    #[must_use]
    pub fn is_before_or_equal(&self, other: Position) -> bool {
        *self <= other
    }

    /// Return a copy with a different column
    #[must_use]
    pub fn with_column(&self, column: usize) -> Self {
        Position::new(self.line, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

/// An ordered pair of positions (`start <= end`); may be empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Start of the range (never after `end`)
    pub start: Position,
    /// End of the range
    pub end: Position,
}

impl Range {
    /// Create a range, normalizing the endpoint order
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Range { start: a, end: b }
        } else {
            Range { start: b, end: a }
        }
    }

    /// Create an empty range at a single position
    #[must_use]
    pub fn empty_at(position: Position) -> Self {
        Range {
            start: position,
            end: position,
        }
    }

    /// Whether start and end coincide
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the range spans more than one line
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.start.line != self.end.line
    }

    /// Whether `position` lies within the range (endpoints included)
    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Collapse to an empty range at the start
    #[must_use]
    pub fn collapse_to_start(&self) -> Self {
        Range::empty_at(self.start)
    }

    /// Collapse to an empty range at the end
    #[must_use]
    pub fn collapse_to_end(&self) -> Self {
        Range::empty_at(self.end)
    }

    /// Smallest range covering both `self` and `other`
    #[must_use]
    pub fn union(&self, other: Range) -> Self {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}

/// Which endpoint of a selection is the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Anchor is the start; the caret sits at the end
    Ltr,
    /// Anchor is the end; the caret sits at the start
    Rtl,
}

/// A range plus the direction derived from anchor vs. active endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    range: Range,
    direction: SelectionDirection,
}

impl Selection {
    /// Build a selection from an anchor and an active (caret) position
    #[must_use]
    pub fn from_positions(anchor: Position, active: Position) -> Self {
        if anchor <= active {
            Selection {
                range: Range {
                    start: anchor,
                    end: active,
                },
                direction: SelectionDirection::Ltr,
            }
        } else {
            Selection {
                range: Range {
                    start: active,
                    end: anchor,
                },
                direction: SelectionDirection::Rtl,
            }
        }
    }

    /// The ordered range covered by the selection
    #[must_use]
    pub fn as_range(&self) -> Range {
        self.range
    }

    /// Selection direction
    #[must_use]
    pub fn direction(&self) -> SelectionDirection {
        self.direction
    }

    /// The fixed endpoint
    #[must_use]
    pub fn anchor(&self) -> Position {
        match self.direction {
            SelectionDirection::Ltr => self.range.start,
            SelectionDirection::Rtl => self.range.end,
        }
    }

    /// The caret endpoint
    #[must_use]
    pub fn active(&self) -> Position {
        match self.direction {
            SelectionDirection::Ltr => self.range.end,
            SelectionDirection::Rtl => self.range.start,
        }
    }

    /// Whether anchor and caret coincide
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
