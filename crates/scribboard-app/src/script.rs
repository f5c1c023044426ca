//! Gesture scripts: the JSON the session driver replays.
//!
//! A script is a JSON array of steps, each tagged by `op`:
//!
//! ```json
//! [
//!   { "op": "tool", "tool": "rectangle" },
//!   { "op": "down", "x": 10, "y": 10 },
//!   { "op": "move", "x": 80, "y": 60 },
//!   { "op": "up", "x": 80, "y": 60 },
//!   { "op": "undo" }
//! ]
//! ```

use crate::error::AppError;
use kurbo::Point;
use scribboard_core::PointerEvent;
use scribboard_core::shapes::{FontFamily, SerializableColor, StrokeStyle, StrokeWidth};
use serde::Deserialize;

/// One user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// Tool name, including the aliases `ToolKind` accepts.
    Tool { tool: String },
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Replace the content of the open text entry.
    Text { content: String },
    Commit,
    CancelText,
    Resize { width: f64, height: f64 },
    StrokeColor { color: SerializableColor },
    StrokeWidth { width: StrokeWidth },
    StrokeStyle { style: StrokeStyle },
    Fill { color: Option<SerializableColor> },
    Font {
        #[serde(default)]
        family: Option<FontFamily>,
        #[serde(default)]
        size: Option<f64>,
    },
}

impl Step {
    /// The pointer event this step stands for, if any.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        let event = match *self {
            Step::Down { x, y } => PointerEvent::Down {
                position: Point::new(x, y),
            },
            Step::Move { x, y } => PointerEvent::Move {
                position: Point::new(x, y),
            },
            Step::Up { x, y } => PointerEvent::Up {
                position: Point::new(x, y),
            },
            _ => return None,
        };
        Some(event)
    }
}

/// Parse a script from its JSON text.
pub fn parse_script(source: &str) -> Result<Vec<Step>, AppError> {
    let steps: Vec<Step> = serde_json::from_str(source)?;
    log::debug!("Parsed script with {} steps", steps.len());
    Ok(steps)
}
