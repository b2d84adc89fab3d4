#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_delta_from() {
    let p = Point::new(40.0, 30.0);
    assert_eq!(p.delta_from(Point::new(20.0, 20.0)), (20.0, 10.0));
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// --- Size ---

#[test]
fn contain_scale_picks_limiting_axis() {
    let image = Size::new(400.0, 400.0);
    let surface = Size::new(1000.0, 500.0);
    assert_eq!(image.contain_scale(surface), Some(1.25));
}

#[test]
fn contain_scale_shrinks_large_images() {
    let image = Size::new(2000.0, 1000.0);
    let surface = Size::new(500.0, 500.0);
    assert_eq!(image.contain_scale(surface), Some(0.25));
}

#[test]
fn contain_scale_zero_dimension_is_none() {
    assert_eq!(Size::new(0.0, 10.0).contain_scale(Size::new(10.0, 10.0)), None);
    assert_eq!(Size::new(10.0, 0.0).contain_scale(Size::new(10.0, 10.0)), None);
}

// --- Rect: containment ---

#[test]
fn contains_interior_point() {
    let r = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert!(r.contains(Point::new(20.0, 20.0)));
}

#[test]
fn contains_is_boundary_inclusive() {
    let r = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(60.0, 60.0)));
    assert!(r.contains(Point::new(60.0, 10.0)));
    assert!(r.contains(Point::new(10.0, 60.0)));
}

#[test]
fn contains_rejects_outside_points() {
    let r = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert!(!r.contains(Point::new(9.9, 20.0)));
    assert!(!r.contains(Point::new(20.0, 60.1)));
    assert!(!r.contains(Point::new(61.0, 61.0)));
}

#[test]
fn zero_size_rect_contains_only_its_corner() {
    let r = Rect::default();
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(!r.contains(Point::new(0.5, 0.0)));
}

// --- Rect: transforms ---

#[test]
fn translated_keeps_size() {
    let r = Rect::new(10.0, 10.0, 50.0, 40.0).translated(20.0, -5.0);
    assert_eq!(r, Rect::new(30.0, 5.0, 50.0, 40.0));
}

#[test]
fn inflated_grows_every_side() {
    let r = Rect::new(10.0, 10.0, 50.0, 40.0).inflated(2.0);
    assert_eq!(r, Rect::new(8.0, 8.0, 54.0, 44.0));
}

#[test]
fn scaled_is_per_axis() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0).scaled(2.0, 0.5);
    assert_eq!(r, Rect::new(20.0, 10.0, 60.0, 20.0));
}

#[test]
fn clamped_within_pulls_back_from_far_edge() {
    let r = Rect::new(180.0, 190.0, 50.0, 50.0).clamped_within(Size::new(200.0, 200.0));
    assert_eq!(r, Rect::new(150.0, 150.0, 50.0, 50.0));
}

#[test]
fn clamped_within_pulls_back_from_origin() {
    let r = Rect::new(-30.0, -1.0, 50.0, 50.0).clamped_within(Size::new(200.0, 200.0));
    assert_eq!(r, Rect::new(0.0, 0.0, 50.0, 50.0));
}

#[test]
fn clamped_within_pins_oversized_rect_to_origin() {
    let r = Rect::new(40.0, 10.0, 300.0, 50.0).clamped_within(Size::new(200.0, 200.0));
    assert_eq!(r.x, 0.0);
    assert_eq!(r.y, 10.0);
    assert_eq!(r.w, 300.0);
}

#[test]
fn clamped_within_leaves_inside_rect_alone() {
    let r = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert_eq!(r.clamped_within(Size::new(200.0, 200.0)), r);
}
