//! Drag-and-drop contracts between project items and project lists.
//!
//! An item hands out a [`DragPayload`] when a drag starts; a list accepts
//! or refuses it while it hovers and applies it on drop.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::state::ProjectState;

pub const TEXT_PLAIN: &str = "text/plain";

/// Data carried by a drag: a media type and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    mime: String,
    data: String,
}

impl DragPayload {
    pub fn new(mime: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// A `text/plain` payload.
    pub fn text(data: impl Into<String>) -> Self {
        Self::new(TEXT_PLAIN, data)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn is_text(&self) -> bool {
        self.mime == TEXT_PLAIN
    }
}

pub trait Draggable {
    fn on_drag_start(&self) -> DragPayload;
    fn on_drag_end(&self);
}

pub trait DragTarget {
    /// Returns true when the target accepts the payload; it then shows as droppable.
    fn on_drag_over(&mut self, payload: &DragPayload) -> bool;

    fn on_drop(&mut self, state: &mut ProjectState, payload: &DragPayload) -> Result<CmdResult>;

    fn on_drag_leave(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_payload_has_plain_type() {
        let payload = DragPayload::text("abc");
        assert!(payload.is_text());
        assert_eq!(payload.mime(), "text/plain");
        assert_eq!(payload.data(), "abc");
    }

    #[test]
    fn other_types_are_not_text() {
        assert!(!DragPayload::new("text/uri-list", "https://example.com").is_text());
    }
}
