//! Pointer drag sessions for window frames.
//!
//! Dragging is presentation-only: a session moves the frame's visual offset and never reaches the
//! window registry or the Finder cursor. The offset lives with the mounted frame, so it resets
//! when the window closes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Translation applied to a window frame relative to its resting position.
pub struct DragOffset {
    pub dx: i32,
    pub dy: i32,
}

impl DragOffset {
    /// CSS transform for this offset.
    pub fn css_transform(self) -> String {
        format!("translate({}px, {}px)", self.dx, self.dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One pointer's drag, from pointer-down to pointer-up or cancel.
pub struct DragSession {
    pub pointer_id: i32,
    pub pointer_start: PointerPosition,
    pub offset_start: DragOffset,
}

impl DragSession {
    pub fn begin(pointer_id: i32, pointer_start: PointerPosition, offset_start: DragOffset) -> Self {
        Self {
            pointer_id,
            pointer_start,
            offset_start,
        }
    }

    /// Offset for the current pointer position, or `None` for another pointer's events.
    pub fn offset_at(&self, pointer_id: i32, pointer: PointerPosition) -> Option<DragOffset> {
        if pointer_id != self.pointer_id {
            return None;
        }
        Some(DragOffset {
            dx: self.offset_start.dx + pointer.x - self.pointer_start.x,
            dy: self.offset_start.dy + pointer.y - self.pointer_start.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_accumulates_onto_previous_drag() {
        let session = DragSession::begin(
            7,
            PointerPosition { x: 10, y: 10 },
            DragOffset { dx: 100, dy: -20 },
        );
        assert_eq!(
            session.offset_at(7, PointerPosition { x: 35, y: 50 }),
            Some(DragOffset { dx: 125, dy: 20 })
        );
    }

    #[test]
    fn other_pointers_are_ignored() {
        let session = DragSession::begin(1, PointerPosition::default(), DragOffset::default());
        assert_eq!(session.offset_at(2, PointerPosition { x: 5, y: 5 }), None);
    }

    #[test]
    fn css_transform_formats_pixels() {
        assert_eq!(
            DragOffset { dx: -3, dy: 12 }.css_transform(),
            "translate(-3px, 12px)"
        );
    }
}
