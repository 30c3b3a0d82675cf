//! Single-cursor coordinate state
//!
//! A [`Cursor`] tracks the anchor ("selection start") and the caret in
//! buffer space and in view space at the same time. The two spaces always
//! describe the same logical pair: every mutation goes through one
//! whole-tuple transition that re-validates the buffer positions and
//! re-derives the view mirror, so the cached selection and its direction
//! can never go stale against the raw fields.
//!
//! The selection start is a *range*, not a position: line and word drag
//! gestures anchor a whole unit, and the caret snaps to whichever side of
//! it the pointer passed.

use crate::buffer::{DecorationId, MarkerId, MarkerStickiness, TextModel};
use crate::geometry::{Position, Range, Selection};
use crate::view::ViewMapper;

/// Snapshot of the full cursor tuple
///
/// Restoring re-validates against current buffer bounds, so a snapshot
/// taken before external edits is repaired rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Anchored unit in buffer space
    pub selection_start: Range,
    /// Caret in buffer space
    pub position: Position,
    /// Visible-column overflow carried across vertical moves
    pub leftover_visible_columns: usize,
}

/// Anchor/caret state in buffer and view coordinates
#[derive(Debug)]
pub struct Cursor {
    selection_start: Range,
    position: Position,
    view_selection_start: Range,
    view_position: Position,
    leftover_visible_columns: usize,
    bracket_decorations: Vec<DecorationId>,
    tracked_markers: Vec<MarkerId>,
}

impl Cursor {
    /// Create a cursor at (1,1)
    #[must_use]
    pub fn new(model: &dyn TextModel, mapper: &dyn ViewMapper) -> Self {
        let origin = model.validate_position(Position::new(1, 1));
        let view_origin = mapper.to_view_position(origin);
        Cursor {
            selection_start: Range::empty_at(origin),
            position: origin,
            view_selection_start: Range::empty_at(view_origin),
            view_position: view_origin,
            leftover_visible_columns: 0,
            bracket_decorations: Vec::new(),
            tracked_markers: Vec::new(),
        }
    }

    /// Caret in buffer space
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Caret in view space
    #[must_use]
    pub fn view_position(&self) -> Position {
        self.view_position
    }

    /// Anchored unit in buffer space
    #[must_use]
    pub fn selection_start(&self) -> Range {
        self.selection_start
    }

    /// Visible-column overflow carried by vertical movement
    #[must_use]
    pub fn leftover_visible_columns(&self) -> usize {
        self.leftover_visible_columns
    }

    /// Current selection in buffer space
    ///
    /// The anchor is the far side of the anchored unit relative to the caret.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::from_positions(self.anchor(), self.position)
    }

    /// Current selection in view space
    #[must_use]
    pub fn view_selection(&self) -> Selection {
        let anchor = if self.view_position <= self.view_selection_start.start {
            self.view_selection_start.end
        } else {
            self.view_selection_start.start
        };
        Selection::from_positions(anchor, self.view_position)
    }

    /// The fixed endpoint of the current selection
    #[must_use]
    pub fn anchor(&self) -> Position {
        if self.position <= self.selection_start.start {
            self.selection_start.end
        } else {
            self.selection_start.start
        }
    }

    /// Whether anchor and caret coincide
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    /// The single whole-tuple transition
    ///
    /// Validates `selection_start` and `position` against the buffer and
    /// re-derives the view mirror. All public mutations funnel through here.
    pub fn set_state(
        &mut self,
        model: &dyn TextModel,
        mapper: &dyn ViewMapper,
        selection_start: Range,
        position: Position,
        leftover_visible_columns: usize,
    ) {
        let selection_start = model.validate_range(selection_start);
        let position = model.validate_position(position);
        self.selection_start = selection_start;
        self.position = position;
        self.view_selection_start = mapper.to_view_range(selection_start);
        self.view_position = mapper.to_view_position(position);
        self.leftover_visible_columns = leftover_visible_columns;
    }

    /// Replace both endpoints: anchor collapses to a point, caret moves
    pub fn set_selection(
        &mut self,
        model: &dyn TextModel,
        mapper: &dyn ViewMapper,
        anchor: Position,
        active: Position,
    ) {
        self.set_state(model, mapper, Range::empty_at(anchor), active, 0);
    }

    /// Anchor a whole unit (line or word) and place the caret
    pub fn set_anchored_unit(
        &mut self,
        model: &dyn TextModel,
        mapper: &dyn ViewMapper,
        unit: Range,
        active: Position,
    ) {
        self.set_state(model, mapper, unit, active, 0);
    }

    /// Move the caret; outside selection mode the anchor follows it
    pub fn move_to(
        &mut self,
        model: &dyn TextModel,
        mapper: &dyn ViewMapper,
        in_selection_mode: bool,
        position: Position,
        leftover_visible_columns: usize,
    ) {
        let selection_start = if in_selection_mode {
            self.selection_start
        } else {
            Range::empty_at(position)
        };
        self.set_state(
            model,
            mapper,
            selection_start,
            position,
            leftover_visible_columns,
        );
    }

    /// Move the anchor to the caret; idempotent
    pub fn collapse(&mut self, model: &dyn TextModel, mapper: &dyn ViewMapper) {
        self.set_state(
            model,
            mapper,
            Range::empty_at(self.position),
            self.position,
            self.leftover_visible_columns,
        );
    }

    /// Snapshot the full tuple
    #[must_use]
    pub fn save_state(&self) -> CursorSnapshot {
        CursorSnapshot {
            selection_start: self.selection_start,
            position: self.position,
            leftover_visible_columns: self.leftover_visible_columns,
        }
    }

    /// Restore a snapshot, repairing positions the buffer no longer has
    pub fn restore_state(
        &mut self,
        model: &dyn TextModel,
        mapper: &dyn ViewMapper,
        snapshot: CursorSnapshot,
    ) {
        self.set_state(
            model,
            mapper,
            snapshot.selection_start,
            snapshot.position,
            snapshot.leftover_visible_columns,
        );
    }

    /// Recompute the matched-bracket decoration pair
    ///
    /// With an empty selection, asks the buffer for a best-effort bracket
    /// match at the caret and renders at most two decorations; otherwise
    /// clears them.
    pub fn update_bracket_decorations(&mut self, model: &mut dyn TextModel) {
        let add: Vec<Range> = if self.has_selection() {
            Vec::new()
        } else {
            match model.match_bracket(self.position) {
                Some((here, there)) => vec![here, there],
                None => Vec::new(),
            }
        };
        self.bracket_decorations = model.change_decorations(&self.bracket_decorations, &add);
    }

    /// Start tracking the selection endpoints with buffer markers
    pub fn track(&mut self, model: &mut dyn TextModel) {
        self.stop_tracking(model);
        self.tracked_markers = vec![
            model.add_marker(self.selection_start.start, MarkerStickiness::StaysBefore),
            model.add_marker(self.position, MarkerStickiness::MovesAfter),
        ];
    }

    /// Release tracking markers
    pub fn stop_tracking(&mut self, model: &mut dyn TextModel) {
        for id in self.tracked_markers.drain(..) {
            model.remove_marker(id);
        }
    }

    /// Release all buffer-side resources this cursor owns
    pub fn dispose(&mut self, model: &mut dyn TextModel) {
        self.stop_tracking(model);
        self.bracket_decorations = model.change_decorations(&self.bracket_decorations, &[]);
    }
}
