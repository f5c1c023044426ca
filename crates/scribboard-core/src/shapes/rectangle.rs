//! Rectangle shape.

use super::{Position, ShapeStyle, ShapeTrait, TOLERANCE, TextMeasure, normalize_corners};
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// A rectangle spanned by two corners.
///
/// The corners are kept as drawn; `start` may sit right of or below `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Corner where the drag started.
    pub start: Point,
    /// Corner under the pointer.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Corner radius of the rendered outline.
    pub const CORNER_RADIUS: f64 = 1.0;

    pub fn new(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self { start, end, style }
    }

    /// Get the rectangle as a normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

impl ShapeTrait for Rectangle {
    fn corners(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn classify(&self, point: Point, _measure: &dyn TextMeasure) -> Position {
        let (min, max) = normalize_corners(self.start, self.end);
        let inside = point.x > min.x + TOLERANCE
            && point.x < max.x - TOLERANCE
            && point.y > min.y + TOLERANCE
            && point.y < max.y - TOLERANCE;
        if inside {
            return Position::Inside;
        }
        let near = point.x >= min.x - TOLERANCE
            && point.x <= max.x + TOLERANCE
            && point.y >= min.y - TOLERANCE
            && point.y <= max.y + TOLERANCE;
        if near {
            Position::Boundary
        } else {
            Position::Outside
        }
    }

    fn to_path(&self) -> BezPath {
        RoundedRect::from_rect(self.as_rect(), Self::CORNER_RADIUS).to_path(0.1)
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
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
    use crate::shapes::ApproxTextMeasure;

    fn rect_from(x1: f64, y1: f64, x2: f64, y2: f64) -> Rectangle {
        Rectangle::new(Point::new(x1, y1), Point::new(x2, y2), ShapeStyle::default())
    }

    fn classify(rect: &Rectangle, x: f64, y: f64) -> Position {
        rect.classify(Point::new(x, y), &ApproxTextMeasure)
    }

    #[test]
    fn test_center_is_inside() {
        let rect = rect_from(0.0, 0.0, 100.0, 100.0);
        assert_eq!(classify(&rect, 50.0, 50.0), Position::Inside);
    }

    #[test]
    fn test_edge_band_is_boundary() {
        let rect = rect_from(0.0, 0.0, 100.0, 100.0);
        assert_eq!(classify(&rect, 5.0, 50.0), Position::Boundary);
        assert_eq!(classify(&rect, -10.0, 50.0), Position::Boundary);
        assert_eq!(classify(&rect, 110.0, 110.0), Position::Boundary);
        assert_eq!(classify(&rect, 10.0, 50.0), Position::Boundary);
        assert_eq!(classify(&rect, 110.5, 50.0), Position::Outside);
    }

    #[test]
    fn test_reversed_corners_are_normalized() {
        let rect = rect_from(100.0, 100.0, 0.0, 0.0);
        assert_eq!(classify(&rect, 50.0, 50.0), Position::Inside);
        assert_eq!(classify(&rect, 0.0, 0.0), Position::Boundary);
    }

    #[test]
    fn test_thin_rectangle_never_inside() {
        let rect = rect_from(0.0, 0.0, 100.0, 20.0);
        assert_eq!(classify(&rect, 50.0, 10.0), Position::Boundary);
    }

    #[test]
    fn test_translate_preserves_size() {
        let mut rect = rect_from(10.0, 10.0, 50.0, 30.0);
        rect.translate(Vec2::new(5.0, -5.0));
        assert_eq!(rect.start, Point::new(15.0, 5.0));
        assert_eq!(rect.end, Point::new(55.0, 25.0));
    }

    #[test]
    fn test_bounds() {
        let rect = rect_from(110.0, 70.0, 10.0, 20.0);
        let bounds = rect.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
