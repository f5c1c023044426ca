//! Pointer events and their routing into the canvas.

use crate::canvas::Canvas;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}

impl Canvas {
    /// Route a pointer event to the matching gesture phase.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolKind;

    #[test]
    fn test_event_from_json() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"type": "down", "position": {"x": 1.0, "y": 2.0}}"#).unwrap();
        let position = Point::new(1.0, 2.0);
        assert_eq!(event, PointerEvent::Down { position });
        assert_eq!(event.position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_routing_draws_line() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Line);
        let (start, end) = (Point::new(0.0, 0.0), Point::new(40.0, 40.0));
        for event in [
            PointerEvent::Down { position: start },
            PointerEvent::Move { position: end },
            PointerEvent::Up { position: end },
        ] {
            canvas.handle_pointer_event(event);
        }
        assert_eq!(canvas.elements().len(), 1);
        assert!(canvas.gesture().is_idle());
    }
}
