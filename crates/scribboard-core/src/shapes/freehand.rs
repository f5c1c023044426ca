//! Freehand drawing shape.

use super::stroke::{PressureOutliner, StrokeOutliner, stroke_path_from_points};
use super::{FREEHAND_TOLERANCE, Position, ShapeStyle, ShapeTrait, TextMeasure};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A freehand drawing (series of points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    /// Points in the freehand path.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Freehand {
    /// Start a stroke at `point`.
    pub fn new(point: Point, style: ShapeStyle) -> Self {
        Self {
            points: vec![point],
            style,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, style: ShapeStyle) -> Self {
        Self { points, style }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Nominal ink width handed to the outliner.
    pub fn ink_size(&self) -> f64 {
        self.style.stroke_px() * 4.0
    }

    /// Fillable outline built with the given outliner.
    pub fn outline_path(&self, outliner: &dyn StrokeOutliner) -> BezPath {
        stroke_path_from_points(&outliner.outline(&self.points, self.ink_size()))
    }
}

/// Triangle-inequality slack of `c` against segment `ab`.
///
/// Zero when `c` lies on the segment, growing as it moves away.
fn segment_slack(a: Point, b: Point, c: Point) -> f64 {
    let ab = (b - a).hypot();
    let ac = (c - a).hypot();
    let cb = (b - c).hypot();
    (ab - (ac + cb)).abs()
}

impl ShapeTrait for Freehand {
    fn corners(&self) -> (Point, Point) {
        let first = self.points.first().copied().unwrap_or(Point::ZERO);
        (first, first)
    }

    fn bounds(&self) -> Rect {
        let mut points = self.points.iter();
        let Some(&first) = points.next() else {
            return Rect::ZERO;
        };
        points.fold(Rect::from_points(first, first), |rect, &p| rect.union_pt(p))
    }

    fn classify(&self, point: Point, _measure: &dyn TextMeasure) -> Position {
        let hit = self
            .points
            .windows(2)
            .any(|pair| segment_slack(pair[0], pair[1], point) < FREEHAND_TOLERANCE);
        if hit {
            Position::Boundary
        } else {
            Position::Outside
        }
    }

    fn to_path(&self) -> BezPath {
        self.outline_path(&PressureOutliner::default())
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
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

    fn stroke() -> Freehand {
        Freehand::from_points(
            vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
            ShapeStyle::default(),
        )
    }

    #[test]
    fn test_freehand_creation() {
        let mut fh = Freehand::new(Point::new(1.0, 1.0), ShapeStyle::default());
        assert_eq!(fh.len(), 1);
        fh.add_point(Point::new(2.0, 2.0));
        assert_eq!(fh.len(), 2);
        assert!(!fh.is_empty());
    }

    #[test]
    fn test_near_segment_is_boundary() {
        let fh = stroke();
        assert_eq!(fh.classify(Point::new(5.0, 4.0), &ApproxTextMeasure), Position::Boundary);
        assert_eq!(fh.classify(Point::new(100.0, 100.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_never_inside() {
        // A closed loop still has no interior.
        let fh = Freehand::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
                Point::new(0.0, 0.0),
            ],
            ShapeStyle::default(),
        );
        assert_eq!(fh.classify(Point::new(50.0, 50.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_single_point_has_no_segments() {
        let fh = Freehand::new(Point::new(0.0, 0.0), ShapeStyle::default());
        assert_eq!(fh.classify(Point::new(0.0, 0.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_empty_stroke() {
        let fh = Freehand::from_points(Vec::new(), ShapeStyle::default());
        assert_eq!(fh.bounds(), Rect::ZERO);
        assert!(fh.to_path().elements().is_empty());
        assert_eq!(fh.classify(Point::new(0.0, 0.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_bounds() {
        let bounds = stroke().bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn test_translate_moves_every_point() {
        let mut fh = stroke();
        fh.translate(Vec2::new(10.0, 20.0));
        assert_eq!(
            fh.points,
            vec![Point::new(10.0, 20.0), Point::new(15.0, 25.0), Point::new(20.0, 20.0)]
        );
    }

    #[test]
    fn test_path_is_closed_outline() {
        let path = stroke().to_path();
        assert!(matches!(path.elements().last(), Some(kurbo::PathEl::ClosePath)));
    }
}
