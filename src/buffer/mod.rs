//! Narrow text-model interface consumed by the cursor core
//!
//! The core never owns text. It reads lines, validates positions, asks for
//! bracket matches, and manages the markers and decorations it is
//! responsible for, all through [`TextModel`]. Any conforming implementation
//! is substitutable; [`LineArrayModel`] is the minimal in-memory one used by
//! tests and simple hosts.

use std::collections::HashMap;

use crate::geometry::{Position, Range};

/// How a marker shifts when text is inserted exactly at its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStickiness {
    /// Marker stays before inserted text
    StaysBefore,
    /// Marker moves after inserted text
    MovesAfter,
}

/// Opaque handle for a position marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Opaque handle for a decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationId(pub u64);

/// Read and bookkeeping capabilities the cursor core needs from a buffer
pub trait TextModel {
    /// Number of lines (always >= 1; an empty buffer has one empty line)
    fn line_count(&self) -> usize;

    /// Content of a line, without its line break
    fn line_content(&self, line: usize) -> &str;

    /// Maximum column on a line (character count + 1)
    fn max_column(&self, line: usize) -> usize {
        self.line_content(line).chars().count() + 1
    }

    /// Clamp a position into buffer bounds
    fn validate_position(&self, position: Position) -> Position {
        let line = position.line.clamp(1, self.line_count());
        let column = position.column.clamp(1, self.max_column(line));
        Position::new(line, column)
    }

    /// Clamp both endpoints of a range into buffer bounds
    fn validate_range(&self, range: Range) -> Range {
        Range::new(
            self.validate_position(range.start),
            self.validate_position(range.end),
        )
    }

    /// The region edits may touch; the whole buffer unless the host narrows it
    fn editable_range(&self) -> Range {
        let last = self.line_count();
        Range::new(Position::new(1, 1), Position::new(last, self.max_column(last)))
    }

    /// Best-effort bracket match at a position
    ///
    /// Returns the ranges of the bracket under (or immediately before) the
    /// position and of its counterpart, or `None`.
    fn match_bracket(&self, position: Position) -> Option<(Range, Range)>;

    /// Track a position across edits
    fn add_marker(&mut self, position: Position, stickiness: MarkerStickiness) -> MarkerId;

    /// Current position of a marker
    fn marker_position(&self, id: MarkerId) -> Option<Position>;

    /// Stop tracking a marker
    fn remove_marker(&mut self, id: MarkerId);

    /// Apply a decoration delta; returns handles for the added ranges
    fn change_decorations(&mut self, remove: &[DecorationId], add: &[Range]) -> Vec<DecorationId>;
}

const BRACKET_PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

/// Minimal line-array text model
///
/// Lines are plain `String`s; markers and decorations are kept in maps.
/// Hosts a `replace` mutation so tests can apply emitted edit commands.
#[derive(Debug, Default)]
pub struct LineArrayModel {
    lines: Vec<String>,
    markers: HashMap<MarkerId, (Position, MarkerStickiness)>,
    decorations: HashMap<DecorationId, Range>,
    next_id: u64,
}

impl LineArrayModel {
    /// Create a model from text, splitting on `\n`
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        LineArrayModel {
            lines,
            markers: HashMap::new(),
            decorations: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create a model from individual lines
    #[must_use]
    pub fn from_lines(lines: &[&str]) -> Self {
        LineArrayModel {
            lines: lines.iter().map(|s| (*s).to_string()).collect(),
            markers: HashMap::new(),
            decorations: HashMap::new(),
            next_id: 0,
        }
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Current decoration ranges, for inspection in tests
    #[must_use]
    pub fn decoration_ranges(&self) -> Vec<Range> {
        let mut ranges: Vec<Range> = self.decorations.values().copied().collect();
        ranges.sort_by_key(|r| (r.start, r.end));
        ranges
    }

    /// Whole buffer content joined with `\n`
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace `range` with `text` (which may contain `\n`)
    ///
    /// This is host-side behavior used to apply emitted commands in tests;
    /// the cursor core itself never mutates text.
    pub fn replace(&mut self, range: Range, text: &str) {
        let range = self.validate_range(range);
        let start_line = &self.lines[range.start.line - 1];
        let end_line = &self.lines[range.end.line - 1];

        let prefix: String = start_line.chars().take(range.start.column - 1).collect();
        let suffix: String = end_line.chars().skip(range.end.column - 1).collect();

        let mut replacement_lines: Vec<String> =
            text.split('\n').map(str::to_string).collect();
        replacement_lines[0] = prefix + &replacement_lines[0];
        let last = replacement_lines.len() - 1;
        replacement_lines[last] = replacement_lines[last].clone() + &suffix;

        self.lines
            .splice(range.start.line - 1..range.end.line, replacement_lines);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
    }

    fn char_at(&self, line: usize, offset: usize) -> Option<char> {
        self.lines.get(line - 1)?.chars().nth(offset)
    }

    /// Scan for the counterpart of the bracket at `(line, offset)`
    fn scan_for_match(&self, line: usize, offset: usize, ch: char) -> Option<Position> {
        let (open, close, forward) = BRACKET_PAIRS
            .iter()
            .find_map(|&(o, c)| {
                if ch == o {
                    Some((o, c, true))
                } else if ch == c {
                    Some((o, c, false))
                } else {
                    None
                }
            })?;

        let mut depth = 0usize;
        if forward {
            let mut l = line;
            let mut idx = offset;
            while l <= self.lines.len() {
                let chars: Vec<char> = self.lines[l - 1].chars().collect();
                while idx < chars.len() {
                    let c = chars[idx];
                    if c == open {
                        depth += 1;
                    } else if c == close {
                        depth -= 1;
                        if depth == 0 {
                            return Some(Position::new(l, idx + 1));
                        }
                    }
                    idx += 1;
                }
                l += 1;
                idx = 0;
            }
        } else {
            let mut l = line;
            let mut idx = offset as isize;
            loop {
                let chars: Vec<char> = self.lines[l - 1].chars().collect();
                while idx >= 0 {
                    let c = chars[idx as usize];
                    if c == close {
                        depth += 1;
                    } else if c == open {
                        depth -= 1;
                        if depth == 0 {
                            return Some(Position::new(l, idx as usize + 1));
                        }
                    }
                    idx -= 1;
                }
                if l == 1 {
                    break;
                }
                l -= 1;
                idx = self.lines[l - 1].chars().count() as isize - 1;
            }
        }
        None
    }
}

impl TextModel for LineArrayModel {
    fn line_count(&self) -> usize {
        self.lines.len().max(1)
    }

    fn line_content(&self, line: usize) -> &str {
        self.lines.get(line - 1).map_or("", String::as_str)
    }

    fn match_bracket(&self, position: Position) -> Option<(Range, Range)> {
        let position = self.validate_position(position);
        let offset = position.column - 1;

        // Prefer the bracket after the caret, then the one before it
        let candidates = [
            (offset, self.char_at(position.line, offset)),
            (
                offset.wrapping_sub(1),
                if offset > 0 {
                    self.char_at(position.line, offset - 1)
                } else {
                    None
                },
            ),
        ];

        for (at, ch) in candidates {
            let Some(ch) = ch else { continue };
            if !BRACKET_PAIRS
                .iter()
                .any(|&(o, c)| ch == o || ch == c)
            {
                continue;
            }
            if let Some(other) = self.scan_for_match(position.line, at, ch) {
                let here = Range::new(
                    Position::new(position.line, at + 1),
                    Position::new(position.line, at + 2),
                );
                let there = Range::new(other, Position::new(other.line, other.column + 1));
                return Some((here, there));
            }
        }
        None
    }

    fn add_marker(&mut self, position: Position, stickiness: MarkerStickiness) -> MarkerId {
        let id = MarkerId(self.fresh_id());
        let position = self.validate_position(position);
        self.markers.insert(id, (position, stickiness));
        id
    }

    fn marker_position(&self, id: MarkerId) -> Option<Position> {
        self.markers.get(&id).map(|(p, _)| *p)
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
    }

    fn change_decorations(&mut self, remove: &[DecorationId], add: &[Range]) -> Vec<DecorationId> {
        for id in remove {
            self.decorations.remove(id);
        }
        let mut added = Vec::with_capacity(add.len());
        for range in add {
            let id = DecorationId(self.fresh_id());
            self.decorations.insert(id, *range);
            added.push(id);
        }
        added
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
