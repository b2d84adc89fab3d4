use super::*;
use crate::geometry::{Rect, Size};
use crate::id::ItemId;
use crate::testing::{tagged, RecordingSurface};

fn stack(rects: &[Rect]) -> Vec<Item<RecordingSurface>> {
    rects
        .iter()
        .zip(1..)
        .map(|(rect, id)| Item::new(ItemId(id), Size::new(500.0, 500.0), 2.0, tagged("x"), Some(*rect), None))
        .collect()
}

#[test]
fn empty_stack_misses() {
    let items: Vec<Item<RecordingSurface>> = Vec::new();
    assert_eq!(hit_test(&items, Point::new(1.0, 1.0)), None);
}

#[test]
fn point_outside_every_item_misses() {
    let items = stack(&[Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(50.0, 50.0, 10.0, 10.0)]);
    assert_eq!(hit_test(&items, Point::new(30.0, 30.0)), None);
}

#[test]
fn single_match_is_selected() {
    let items = stack(&[Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(50.0, 50.0, 10.0, 10.0)]);
    assert_eq!(hit_test(&items, Point::new(55.0, 55.0)), Some(1));
    assert_eq!(hit_test(&items, Point::new(5.0, 5.0)), Some(0));
}

#[test]
fn overlap_selects_topmost() {
    let items = stack(&[
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(20.0, 20.0, 100.0, 100.0),
        Rect::new(40.0, 40.0, 100.0, 100.0),
    ]);
    assert_eq!(hit_test(&items, Point::new(50.0, 50.0)), Some(2));
    assert_eq!(hit_test(&items, Point::new(30.0, 30.0)), Some(1));
    assert_eq!(hit_test(&items, Point::new(10.0, 10.0)), Some(0));
}

#[test]
fn shared_edge_goes_to_upper_item() {
    let items = stack(&[Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 0.0, 10.0, 10.0)]);
    assert_eq!(hit_test(&items, Point::new(10.0, 5.0)), Some(1));
}
