//! A single draggable rectangle.
//!
//! An [`Item`] knows its geometry, whether it is the one being dragged, and a
//! render callback supplied by whoever created it. It has no idea what the
//! callback paints; an image item simply captures the image in the closure.
//! Items are created and mutated only by [`crate::controller::Controller`].

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::geometry::{Point, Rect, Size};
use crate::id::ItemId;
use crate::surface::Surface;

/// Paints an item at the given rect.
pub type RenderFn<S> = Box<dyn Fn(&mut S, Rect) -> Result<(), CanvasError>>;

/// Caller bookkeeping attached to an item. Never read by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMeta {
    /// Name of the operation that created the item (e.g. `"drawImage"`).
    pub method: String,
    /// Arguments of that operation.
    pub args: Vec<serde_json::Value>,
}

pub struct Item<S: Surface> {
    id: ItemId,
    rect: Rect,
    is_active: bool,
    active_border_width: f64,
    render: RenderFn<S>,
    /// Surface size the rect was last valid for.
    reference_size: Size,
    meta: Option<ItemMeta>,
}

impl<S: Surface> std::fmt::Debug for Item<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("is_active", &self.is_active)
            .field("reference_size", &self.reference_size)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Item<S> {
    pub(crate) fn new(
        id: ItemId,
        surface_size: Size,
        active_border_width: f64,
        render: RenderFn<S>,
        rect: Option<Rect>,
        meta: Option<ItemMeta>,
    ) -> Self {
        Self {
            id,
            rect: rect.unwrap_or_default(),
            is_active: false,
            active_border_width,
            render,
            reference_size: surface_size,
            meta,
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn active_border_width(&self) -> f64 {
        self.active_border_width
    }

    #[must_use]
    pub fn reference_size(&self) -> Size {
        self.reference_size
    }

    #[must_use]
    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    /// Scale the rect from the reference surface size to `current`, per axis,
    /// and adopt `current` as the new reference.
    ///
    /// An axis whose reference dimension is zero is left as is.
    pub(crate) fn rescale(&mut self, current: Size) {
        let sx = axis_ratio(current.width, self.reference_size.width);
        let sy = axis_ratio(current.height, self.reference_size.height);
        self.rect = self.rect.scaled(sx, sy).clamped_within(current);
        self.reference_size = current;
    }

    /// Closed-rectangle hit test.
    #[must_use]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        self.rect.contains(Point::new(px, py))
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Translate by `(dx, dy)`, then shift back inside `bounds`.
    pub(crate) fn move_by(&mut self, dx: f64, dy: f64, bounds: Size) {
        self.rect = self.rect.translated(dx, dy).clamped_within(bounds);
    }

    /// Paint the active decoration (if active), then the item itself.
    ///
    /// # Errors
    ///
    /// Propagates whatever the render callback returns.
    pub(crate) fn render(&self, surface: &mut S, border_color: &str) -> Result<(), CanvasError> {
        if self.is_active {
            surface.fill_rect(self.rect.inflated(self.active_border_width), border_color);
        }
        (self.render)(surface, self.rect)
    }
}

fn axis_ratio(current: f64, reference: f64) -> f64 {
    if reference == 0.0 { 1.0 } else { current / reference }
}
