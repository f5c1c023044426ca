//! Line shape.

use super::{Position, ShapeStyle, ShapeTrait, TOLERANCE, TextMeasure, normalize_corners};
use kurbo::{BezPath, Line as KurboLine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight line between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    pub fn new(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self { start, end, style }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}

/// Hit test against the infinite line through two endpoints.
///
/// The endpoints are normalized coordinate-wise before the slope is taken,
/// and the test measures vertical distance to the line, unbounded by the
/// segment. A vertical line measures horizontal distance instead.
pub(crate) fn classify_infinite_line(start: Point, end: Point, point: Point) -> Position {
    let (a, b) = normalize_corners(start, end);
    let run = b.x - a.x;
    let dist = if run == 0.0 {
        (point.x - a.x).abs()
    } else {
        let slope = (b.y - a.y) / run;
        let intercept = a.y - slope * a.x;
        (point.y - (slope * point.x + intercept)).abs()
    };
    if dist < TOLERANCE {
        Position::Boundary
    } else {
        Position::Outside
    }
}

impl ShapeTrait for Line {
    fn corners(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn classify(&self, point: Point, _measure: &dyn TextMeasure) -> Position {
        classify_infinite_line(self.start, self.end, point)
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.start == self.end {
            return path;
        }
        path.move_to(self.start);
        path.line_to(self.end);
        path
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

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2), ShapeStyle::default())
    }

    #[test]
    fn test_line_creation() {
        let l = line(0.0, 0.0, 100.0, 0.0);
        assert!((l.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_on_line() {
        let l = line(0.0, 0.0, 100.0, 100.0);
        assert_eq!(l.classify(Point::new(50.0, 50.0), &ApproxTextMeasure), Position::Boundary);
        assert_eq!(l.classify(Point::new(50.0, 59.0), &ApproxTextMeasure), Position::Boundary);
        assert_eq!(l.classify(Point::new(50.0, 60.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_hit_is_not_segment_bounded() {
        // Known limitation: the test runs against the infinite line, so a
        // point far beyond the end of the segment still hits.
        let l = line(0.0, 0.0, 10.0, 10.0);
        assert_eq!(l.classify(Point::new(500.0, 500.0), &ApproxTextMeasure), Position::Boundary);
    }

    #[test]
    fn test_descending_line_is_mirrored_by_normalization() {
        // Known limitation: coordinate-wise normalization turns a descending
        // line into an ascending one before the slope is taken.
        let l = line(0.0, 100.0, 100.0, 0.0);
        assert_eq!(l.classify(Point::new(20.0, 20.0), &ApproxTextMeasure), Position::Boundary);
        assert_eq!(l.classify(Point::new(20.0, 80.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_vertical_line() {
        let l = line(10.0, 0.0, 10.0, 100.0);
        assert_eq!(l.classify(Point::new(15.0, 50.0), &ApproxTextMeasure), Position::Boundary);
        assert_eq!(l.classify(Point::new(25.0, 50.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_degenerate_path_is_empty() {
        let l = line(5.0, 5.0, 5.0, 5.0);
        assert!(l.to_path().elements().is_empty());
    }
}
