use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;
use scribboard_core::shapes::{ApproxTextMeasure, Ellipse, Rectangle};
use scribboard_core::{
    Camera, Document, Element, ElementId, History, Position, Shape, ShapeStyle, classify_position,
};

fn rect_element(id: u64, a: Point, b: Point) -> Element {
    Element::new(
        ElementId(id),
        Shape::Rectangle(Rectangle::new(a, b, ShapeStyle::default())),
    )
}

fn circle_element(a: Point, b: Point) -> Element {
    Element::new(
        ElementId(0),
        Shape::Circle(Ellipse::new(a, b, ShapeStyle::default())),
    )
}

proptest! {
    #[test]
    fn rectangle_center_inside_iff_larger_than_twice_tolerance(
        x1 in -500.0f64..500.0,
        y1 in -500.0f64..500.0,
        w in 0.0f64..200.0,
        h in 0.0f64..200.0,
        flip in any::<bool>(),
    ) {
        prop_assume!((w - 20.0).abs() > 1e-6 && (h - 20.0).abs() > 1e-6);
        let (a, b) = (Point::new(x1, y1), Point::new(x1 + w, y1 + h));
        let element = if flip { rect_element(0, b, a) } else { rect_element(0, a, b) };
        let center = a.midpoint(b);
        let position = classify_position(center, &element, &ApproxTextMeasure);
        prop_assert_eq!(position == Position::Inside, w > 20.0 && h > 20.0);
        prop_assert!(position.is_hit());
    }

    #[test]
    fn circle_center_is_inside(
        x1 in -500.0f64..500.0,
        y1 in -500.0f64..500.0,
        w in 1.0f64..300.0,
        h in 1.0f64..300.0,
    ) {
        let (a, b) = (Point::new(x1, y1), Point::new(x1 + w, y1 + h));
        let element = circle_element(a, b);
        prop_assert_eq!(
            classify_position(a.midpoint(b), &element, &ApproxTextMeasure),
            Position::Inside
        );
    }

    #[test]
    fn circle_outer_edge_is_boundary(
        x1 in -500i32..500,
        y1 in -500i32..500,
        half_w in 1i32..150,
        half_h in 1i32..150,
    ) {
        // Integer geometry keeps the outer-edge test exact.
        let a = Point::new(x1 as f64, y1 as f64);
        let b = Point::new((x1 + 2 * half_w) as f64, (y1 + 2 * half_h) as f64);
        let element = circle_element(a, b);
        let center = a.midpoint(b);
        let on_edge = Point::new(center.x + half_w as f64 + 10.0, center.y);
        let beyond = Point::new(center.x + half_w as f64 + 10.5, center.y);
        prop_assert_eq!(
            classify_position(on_edge, &element, &ApproxTextMeasure),
            Position::Boundary
        );
        prop_assert_eq!(
            classify_position(beyond, &element, &ApproxTextMeasure),
            Position::Outside
        );
    }

    #[test]
    fn push_then_undo_restores_prior(values in prop::collection::vec(any::<u32>(), 1..40)) {
        let mut history = History::new(0u32);
        let mut expected = vec![0u32];
        for value in values {
            let prior = *history.current();
            history.push(value);
            prop_assert!(history.undo());
            prop_assert_eq!(*history.current(), prior);
            prop_assert!(history.redo());
            prop_assert_eq!(*history.current(), value);
            expected.push(value);
        }
        prop_assert_eq!(history.len(), expected.len());
    }

    #[test]
    fn amend_never_grows_or_enables_redo(
        pushes in prop::collection::vec(any::<u32>(), 0..20),
        amends in prop::collection::vec(any::<u32>(), 1..20),
        undos in 0usize..5,
    ) {
        let mut history = History::new(0u32);
        for value in &pushes {
            history.push(*value);
        }
        for _ in 0..undos {
            history.undo();
        }
        let len = history.len();
        let could_redo = history.can_redo();
        for value in amends {
            history.amend(value);
            prop_assert_eq!(history.len(), len);
            prop_assert_eq!(history.can_redo(), could_redo);
            prop_assert_eq!(*history.current(), value);
        }
    }

    #[test]
    fn erase_removes_exactly_one_and_keeps_order(n in 0u64..12, target in 0u64..16) {
        let mut doc = Document::new();
        for i in 0..n {
            let x = i as f64 * 10.0;
            doc.insert(rect_element(i, Point::new(x, 0.0), Point::new(x + 5.0, 5.0)));
        }
        let next = doc.without(ElementId(target));
        let expected: Vec<ElementId> =
            doc.ids().iter().copied().filter(|id| *id != ElementId(target)).collect();
        prop_assert_eq!(next.ids(), expected.as_slice());
        if target >= n {
            prop_assert_eq!(&next, &doc);
        } else {
            prop_assert_eq!(next.len() + 1, doc.len());
        }
    }

    #[test]
    fn screen_to_world_inverts_render_transform(
        pan_x in -1000.0f64..1000.0,
        pan_y in -1000.0f64..1000.0,
        steps in 5u32..=20,
        width in 1.0f64..4000.0,
        height in 1.0f64..4000.0,
        sx in -2000.0f64..2000.0,
        sy in -2000.0f64..2000.0,
    ) {
        let mut camera = Camera::with_viewport(Size::new(width, height));
        camera.pan = Vec2::new(pan_x, pan_y);
        camera.set_scale(steps as f64 / 10.0);
        let screen = Point::new(sx, sy);
        let back = camera.world_to_screen(camera.screen_to_world(screen));
        prop_assert!((back.x - screen.x).abs() < 1e-6);
        prop_assert!((back.y - screen.y).abs() < 1e-6);
    }
}
