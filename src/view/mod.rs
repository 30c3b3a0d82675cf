//! Buffer/view coordinate conversion
//!
//! View space is the coordinate system after line wrapping and folding.
//! The layout engine owns the transformation; the cursor core only converts
//! through [`ViewMapper`] and keeps its two mirrors consistent.

use crate::buffer::TextModel;
use crate::geometry::{Position, Range};

/// Converts positions and ranges between buffer space and view space
pub trait ViewMapper {
    /// Buffer position for a view position
    fn to_buffer_position(&self, view_position: Position) -> Position;

    /// View position for a buffer position
    fn to_view_position(&self, buffer_position: Position) -> Position;

    /// Buffer range for a view range
    fn to_buffer_range(&self, view_range: Range) -> Range {
        Range::new(
            self.to_buffer_position(view_range.start),
            self.to_buffer_position(view_range.end),
        )
    }

    /// View range for a buffer range
    fn to_view_range(&self, buffer_range: Range) -> Range {
        Range::new(
            self.to_view_position(buffer_range.start),
            self.to_view_position(buffer_range.end),
        )
    }

    /// Clamp a view position into view bounds
    fn validate_view_position(&self, view_position: Position) -> Position;

    /// Number of view lines
    fn view_line_count(&self) -> usize;

    /// Maximum column on a view line
    fn view_max_column(&self, view_line: usize) -> usize;
}

/// 1:1 mapper for hosts without wrapping or folding
pub struct IdentityMapper<'a> {
    model: &'a dyn TextModel,
}

impl<'a> IdentityMapper<'a> {
    /// Wrap a text model
    #[must_use]
    pub fn new(model: &'a dyn TextModel) -> Self {
        IdentityMapper { model }
    }
}

impl ViewMapper for IdentityMapper<'_> {
    fn to_buffer_position(&self, view_position: Position) -> Position {
        self.model.validate_position(view_position)
    }

    fn to_view_position(&self, buffer_position: Position) -> Position {
        self.model.validate_position(buffer_position)
    }

    fn validate_view_position(&self, view_position: Position) -> Position {
        self.model.validate_position(view_position)
    }

    fn view_line_count(&self) -> usize {
        self.model.line_count()
    }

    fn view_max_column(&self, view_line: usize) -> usize {
        self.model.max_column(view_line)
    }
}
