#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::Point;
use crate::item::Item;
use crate::surface::Surface;

/// Index of the topmost item under `pt`, if any.
///
/// Items are ordered back to front, so the scan runs from the end and the
/// first match wins.
#[must_use]
pub fn hit_test<S: Surface>(items: &[Item<S>], pt: Point) -> Option<usize> {
    items.iter().rposition(|item| item.contains_point(pt.x, pt.y))
}
