//! Canvas editor state and the per-tool gesture machine.

use crate::camera::Camera;
use crate::config::{CursorStyle, EditorConfig};
use crate::document::Document;
use crate::history::History;
use crate::shapes::{
    ApproxTextMeasure, Arrow, Element, ElementId, Ellipse, Freehand, Line, Position, Rectangle,
    Shape, ShapeKind, Text, TextMeasure, get_element_at_position,
};
use crate::tools::{DragOffsets, Gesture, TextEntry, ToolKind};
use kurbo::{Point, Rect, Size};
use std::fmt;
use std::sync::Arc;

/// Padding around the selected element's outline, in world units.
pub const SELECTION_PADDING: f64 = 5.0;

/// Runtime canvas state.
///
/// Owns the element history, the camera, the editor configuration and the
/// gesture in progress. Pointer handlers take screen coordinates and convert
/// them through the camera before any geometry call.
#[derive(Clone)]
pub struct Canvas {
    history: History<Document>,
    /// Camera for view transform.
    pub camera: Camera,
    config: EditorConfig,
    gesture: Gesture,
    selection: Option<ElementId>,
    text_entry: Option<TextEntry>,
    next_id: u64,
    measure: Arc<dyn TextMeasure + Send + Sync>,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("elements", self.elements())
            .field("cursor", &self.history.cursor())
            .field("camera", &self.camera)
            .field("tool", &self.config.tool())
            .field("gesture", &self.gesture)
            .field("selection", &self.selection)
            .field("text_entry", &self.text_entry)
            .finish_non_exhaustive()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_measure(config, Arc::new(ApproxTextMeasure))
    }

    /// Canvas measuring text with a renderer-provided capability.
    pub fn with_measure(
        mut config: EditorConfig,
        measure: Arc<dyn TextMeasure + Send + Sync>,
    ) -> Self {
        // Bring the cursor in line with a tool loaded from a file.
        config.set_tool(config.tool());
        Self {
            history: History::new(Document::new()).with_limit(config.history_limit()),
            camera: Camera::new(),
            config,
            gesture: Gesture::Idle,
            selection: None,
            text_entry: None,
            next_id: 0,
            measure,
        }
    }

    /// The visible element collection.
    pub fn elements(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Style pickers. Tool changes go through [`Canvas::set_tool`].
    pub fn config_mut(&mut self) -> &mut EditorConfig {
        &mut self.config
    }

    pub fn tool(&self) -> ToolKind {
        self.config.tool()
    }

    pub fn cursor(&self) -> CursorStyle {
        self.config.cursor()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn text_measure(&self) -> &dyn TextMeasure {
        self.measure.as_ref()
    }

    /// Currently selected element id.
    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.and_then(|id| self.elements().get(id))
    }

    /// Outline box for the selected element, padded for display.
    pub fn selection_bounds(&self) -> Option<Rect> {
        let element = self.selected_element()?;
        let bounds = match element.shape().as_text() {
            Some(text) => text.measured_box(self.text_measure()),
            None => element.shape().bounds(),
        };
        Some(bounds.inflate(SELECTION_PADDING, SELECTION_PADDING))
    }

    /// Clear selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn text_entry(&self) -> Option<&TextEntry> {
        self.text_entry.as_ref()
    }

    /// Replace the content of the open text-entry surface.
    pub fn set_text(&mut self, content: impl Into<String>) {
        if let Some(entry) = self.text_entry.as_mut() {
            entry.content = content.into();
        }
    }

    /// Close the text-entry surface without committing.
    pub fn cancel_text(&mut self) {
        self.text_entry = None;
    }

    /// Commit the open text-entry surface.
    ///
    /// Updates the element being edited, or appends a new text element.
    /// Empty content is a no-op and leaves any edited element unchanged.
    pub fn commit_text(&mut self) -> Option<ElementId> {
        let entry = self.text_entry.take()?;
        if entry.content.is_empty() {
            log::debug!("Empty text commit ignored");
            return None;
        }

        let edited = entry.editing.and_then(|id| self.elements().get(id));
        if let Some(element) = edited {
            let id = element.id();
            let content = entry.content;
            let updated = element.edited(move |shape| {
                if let Shape::Text(text) = shape {
                    text.content = content;
                }
            });
            let mut next = self.elements().clone();
            next.replace(updated);
            self.history.push(next);
            log::debug!("Updated text {id}");
            return Some(id);
        }

        let id = self.allocate_id();
        let text = Text::new(entry.anchor, entry.content)
            .with_font_family(self.config.font_family())
            .with_font_size(self.config.font_size())
            .with_style(self.config.style_for(ShapeKind::Text));
        let next = self.elements().with(Element::new(id, Shape::Text(text)));
        self.history.push(next);
        log::debug!("Added text {id}");
        Some(id)
    }

    /// Set the current tool.
    ///
    /// Pending text is committed first, any gesture in progress ends, and the
    /// selection is cleared.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.commit_text();
        self.gesture = Gesture::Idle;
        self.selection = None;
        if tool != self.config.tool() {
            log::info!("Tool: {} -> {}", self.config.tool(), tool);
        }
        self.config.set_tool(tool);
    }

    /// Undo the last action. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.commit_text();
        self.gesture = Gesture::Idle;
        let undone = self.history.undo();
        if undone {
            log::debug!("Undo to step {}", self.history.cursor());
            self.drop_stale_selection();
        }
        undone
    }

    /// Redo the last undone action. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.commit_text();
        self.gesture = Gesture::Idle;
        let redone = self.history.redo();
        if redone {
            log::debug!("Redo to step {}", self.history.cursor());
            self.drop_stale_selection();
        }
        redone
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.camera.reset_zoom();
    }

    /// Set the viewport size. Gesture state is kept.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.camera.set_viewport_size(Size::new(width, height));
    }

    /// Pointer pressed at a screen position.
    ///
    /// Runs in two phases: an open text entry is committed first, then the
    /// active tool starts its gesture against the updated collection. While
    /// text was open, only the select tool goes on to the second phase.
    pub fn pointer_down(&mut self, screen: Point) {
        if self.text_entry.is_some() {
            self.commit_text();
            if self.config.tool() != ToolKind::Select {
                return;
            }
        }

        let world = self.camera.screen_to_world(screen);
        match self.config.tool() {
            ToolKind::Pan => {
                self.gesture = Gesture::Panning { last: screen };
                self.config.set_cursor(CursorStyle::Grabbing);
            }
            ToolKind::Select => self.select_at(world),
            ToolKind::Draw => self.start_stroke(world),
            ToolKind::Rectangle => {
                self.start_shape(Shape::Rectangle(Rectangle::new(world, world, Default::default())))
            }
            ToolKind::Circle => {
                self.start_shape(Shape::Circle(Ellipse::new(world, world, Default::default())))
            }
            ToolKind::Line => {
                self.start_shape(Shape::Line(Line::new(world, world, Default::default())))
            }
            ToolKind::Arrow => {
                self.start_shape(Shape::Arrow(Arrow::new(world, world, Default::default())))
            }
            ToolKind::Erase => {
                self.erase_at(world);
            }
            ToolKind::Text => self.open_text_at(world, screen),
        }
    }

    /// Pointer moved to a screen position.
    pub fn pointer_move(&mut self, screen: Point) {
        let world = self.camera.screen_to_world(screen);
        let mut gesture = std::mem::take(&mut self.gesture);
        let keep = match &mut gesture {
            Gesture::Idle => true,
            Gesture::Panning { last } => {
                self.camera.pan_by(screen - *last);
                *last = screen;
                true
            }
            Gesture::Dragging {
                id,
                offsets,
                opened,
            } => {
                let amend = *opened;
                *opened = true;
                self.record_edit(*id, amend, |shape| offsets.apply(shape, world))
            }
            Gesture::Drawing { id } => {
                self.record_edit(*id, true, |shape| shape.set_far_corner(world))
            }
            Gesture::Stroking { id } => self.record_edit(*id, true, |shape| {
                if let Shape::Freehand(stroke) = shape {
                    stroke.add_point(world);
                }
            }),
        };
        self.gesture = if keep { gesture } else { Gesture::Idle };
    }

    /// Pointer released at a screen position.
    pub fn pointer_up(&mut self, _screen: Point) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Panning { .. } => self.config.set_cursor(ToolKind::Pan.cursor()),
            Gesture::Drawing { id } => {
                if self.elements().contains(id) {
                    self.selection = Some(id);
                }
            }
            Gesture::Dragging { .. } | Gesture::Stroking { .. } | Gesture::Idle => {}
        }
    }

    /// Erase the element whose boundary is under a world point.
    ///
    /// Returns the erased id. Interior hits do not erase.
    pub fn erase_at(&mut self, world: Point) -> Option<ElementId> {
        let hit = self.elements().element_at(world, self.text_measure());
        if hit.position != Position::Boundary {
            return None;
        }
        let id = hit.id()?;
        let next = self.elements().without(id);
        self.history.push(next);
        if self.selection == Some(id) {
            self.selection = None;
        }
        log::debug!("Erased {id}");
        Some(id)
    }

    fn select_at(&mut self, world: Point) {
        let hit = self.elements().element_at(world, self.text_measure());
        let position = hit.position;
        let target = hit
            .element
            .map(|element| (element.id(), DragOffsets::capture(element.shape(), world)));
        match target {
            Some((id, offsets)) => {
                self.selection = Some(id);
                self.gesture = Gesture::Dragging {
                    id,
                    offsets,
                    opened: false,
                };
                log::debug!("Selected {id} ({position:?})");
            }
            None => self.selection = None,
        }
    }

    /// Push a zero-size shape styled from the config and start dragging its
    /// far corner.
    fn start_shape(&mut self, mut shape: Shape) {
        let kind = shape.kind();
        *shape.style_mut() = self.config.style_for(kind);
        let id = self.allocate_id();
        let next = self.elements().with(Element::new(id, shape));
        self.history.push(next);
        self.gesture = Gesture::Drawing { id };
        log::debug!("Started {kind} {id}");
    }

    fn start_stroke(&mut self, world: Point) {
        let style = self.config.style_for(ShapeKind::Freehand);
        let id = self.allocate_id();
        let shape = Shape::Freehand(Freehand::new(world, style));
        let next = self.elements().with(Element::new(id, shape));
        self.history.push(next);
        self.gesture = Gesture::Stroking { id };
        log::debug!("Started stroke {id}");
    }

    fn open_text_at(&mut self, world: Point, screen: Point) {
        let texts = self.elements().iter().filter(|e| e.kind() == ShapeKind::Text);
        let hit = get_element_at_position(world, texts, self.text_measure());
        let entry = match hit.element.and_then(|e| Some((e.id(), e.shape().as_text()?))) {
            Some((id, text)) if hit.position == Position::Boundary => {
                TextEntry::editing(id, text.position, text.content.clone())
            }
            _ => TextEntry::new(world),
        };
        log::debug!("Text entry opened at {screen:?}");
        self.text_entry = Some(entry);
    }

    /// Apply `f` to element `id` in a copy of the collection and record it.
    ///
    /// Returns false if the element no longer exists.
    fn record_edit(&mut self, id: ElementId, amend: bool, f: impl FnOnce(&mut Shape)) -> bool {
        let mut next = self.elements().clone();
        if !next.edit(id, f) {
            log::warn!("Gesture target {id} is gone");
            return false;
        }
        if amend {
            log::trace!("Amend {id}");
        } else {
            log::debug!("Push edit of {id}");
        }
        self.history.record(next, amend);
        true
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selection {
            if !self.elements().contains(id) {
                self.selection = None;
            }
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }
}
