//! Text shape.

use super::{Position, ShapeStyle, ShapeTrait, TEXT_TOLERANCE};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Font family options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Hand-drawn style font (default).
    #[default]
    Handwritten,
    /// Clean sans-serif font.
    Sans,
    /// Fixed-width font.
    Mono,
}

impl FontFamily {
    /// Get the font family name as used by the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Handwritten => "Virgil",
            FontFamily::Sans => "Helvetica",
            FontFamily::Mono => "Cascadia",
        }
    }

    /// Get all available font families.
    pub fn all() -> &'static [FontFamily] {
        &[FontFamily::Handwritten, FontFamily::Sans, FontFamily::Mono]
    }
}

/// Text measurement capability.
///
/// The core never lays out glyphs; hit-testing asks this for the width of
/// the widest line.
pub trait TextMeasure {
    fn text_width(&self, text: &str, family: FontFamily, font_size: f64) -> f64;
}

/// Estimates width from character count and a per-family average advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproxTextMeasure;

impl TextMeasure for ApproxTextMeasure {
    fn text_width(&self, text: &str, family: FontFamily, font_size: f64) -> f64 {
        let max_line_len = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        // Empirical average advance per character, as a fraction of the em.
        let char_width_factor = match family {
            FontFamily::Handwritten => 0.55,
            FontFamily::Sans => 0.52,
            FontFamily::Mono => 0.60,
        };

        max_line_len as f64 * font_size * char_width_factor
    }
}

/// A text shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Insertion anchor (top-left of the first line).
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font family.
    pub font_family: FontFamily,
    /// Font size in pixels.
    pub font_size: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 18.0;
    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT: f64 = 1.2;

    /// Create a new text shape.
    pub fn new(position: Point, content: String) -> Self {
        Self {
            position,
            content,
            font_family: FontFamily::default(),
            font_size: Self::DEFAULT_FONT_SIZE,
            style: ShapeStyle::default(),
        }
    }

    /// Create a new text shape with font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Hit box before tolerance: measured width by one line height.
    pub fn measured_box(&self, measure: &dyn TextMeasure) -> Rect {
        let width = measure.text_width(&self.content, self.font_family, self.font_size);
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + Self::LINE_HEIGHT * self.font_size,
        )
    }
}

impl ShapeTrait for Text {
    fn corners(&self) -> (Point, Point) {
        (self.position, self.position)
    }

    fn bounds(&self) -> Rect {
        let lines = self.content.lines().count().max(1) as f64;
        let width = ApproxTextMeasure.text_width(&self.content, self.font_family, self.font_size);
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + lines * Self::LINE_HEIGHT * self.font_size,
        )
    }

    fn classify(&self, point: Point, measure: &dyn TextMeasure) -> Position {
        let hit_box = self.measured_box(measure).inflate(TEXT_TOLERANCE, TEXT_TOLERANCE);
        let within = point.x >= hit_box.x0
            && point.x <= hit_box.x1
            && point.y >= hit_box.y0
            && point.y <= hit_box.y1;
        if within {
            Position::Boundary
        } else {
            Position::Outside
        }
    }

    fn to_path(&self) -> BezPath {
        // Glyphs are laid out by the renderer.
        BezPath::new()
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is exactly one em wide.
    struct EmMeasure;

    impl TextMeasure for EmMeasure {
        fn text_width(&self, text: &str, _family: FontFamily, font_size: f64) -> f64 {
            text.chars().count() as f64 * font_size
        }
    }

    #[test]
    fn test_text_creation() {
        let text = Text::new(Point::new(10.0, 20.0), "Hello".to_string());
        assert_eq!(text.content(), "Hello");
        assert!((text.font_size - 18.0).abs() < f64::EPSILON);
        assert_eq!(text.font_family, FontFamily::Handwritten);
    }

    #[test]
    fn test_approx_width_uses_widest_line() {
        let w = ApproxTextMeasure.text_width("ab\nabcd", FontFamily::Mono, 10.0);
        assert!((w - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_uses_measure() {
        // Box is (0,0)-(40,24) with the em measure, (-5,-5)-(45,29) with tolerance.
        let text = Text::new(Point::new(0.0, 0.0), "ab".to_string()).with_font_size(20.0);
        assert_eq!(text.classify(Point::new(20.0, 10.0), &EmMeasure), Position::Boundary);
        assert_eq!(text.classify(Point::new(45.0, 10.0), &EmMeasure), Position::Boundary);
        assert_eq!(text.classify(Point::new(46.0, 10.0), &EmMeasure), Position::Outside);
        assert_eq!(text.classify(Point::new(20.0, 29.0), &EmMeasure), Position::Boundary);
        assert_eq!(text.classify(Point::new(20.0, 30.0), &EmMeasure), Position::Outside);
        assert_eq!(text.classify(Point::new(-5.0, -5.0), &EmMeasure), Position::Boundary);
    }

    #[test]
    fn test_every_family_has_a_width() {
        for family in FontFamily::all() {
            assert!(!family.name().is_empty());
            assert!(ApproxTextMeasure.text_width("abc", *family, 18.0) > 0.0);
        }
    }

    #[test]
    fn test_path_is_empty() {
        let text = Text::new(Point::new(0.0, 0.0), "x".to_string());
        assert!(text.to_path().elements().is_empty());
    }
}
