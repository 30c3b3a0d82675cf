//! quill-cursor - single-cursor editing core for a text editor
//!
//! Tracks one cursor's anchor and caret in buffer and view coordinates and
//! plans high-level editing operations as abstract replace commands; the
//! host applies them and manages undo.

pub mod buffer;
pub mod command;
pub mod config;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod language;
pub mod movement;
pub mod planner;
pub mod view;
pub mod word;
