use crate::config::{ControllerConfig, DrawImageOptions};
use crate::consts::DRAW_IMAGE_METHOD;
use crate::debounce::Debouncer;
use crate::error::CanvasError;
use crate::geometry::{Point, Rect, Size};
use crate::hit::hit_test;
use crate::id::{IdGenerator, ItemId};
use crate::input::{Action, DragState};
use crate::item::{Item, ItemMeta, RenderFn};
use crate::surface::{ImageSource, Surface};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Request for [`Controller::add_item`].
pub struct AddItem<S: Surface> {
    /// Paints the item at its current rect.
    pub render: RenderFn<S>,
    /// Initial rect; `{0, 0, 0, 0}` when absent.
    pub rect: Option<Rect>,
    /// Opaque caller bookkeeping.
    pub meta: Option<ItemMeta>,
}

impl<S: Surface> AddItem<S> {
    #[must_use]
    pub fn new(render: RenderFn<S>) -> Self {
        Self { render, rect: None, meta: None }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Item stack, drag state, and the surface they are painted on.
///
/// Separated from [`crate::web::Editor`] so it can be tested without a browser.
/// Handlers take positions in surface pixels and timestamps in milliseconds,
/// repaint the surface themselves, and return the [`Action`]s the host must
/// carry out.
pub struct Controller<S: Surface> {
    surface: S,
    config: ControllerConfig,
    /// Back to front. The last item is painted last and hit first.
    items: Vec<Item<S>>,
    drag: DragState,
    ids: IdGenerator,
    resize_gate: Debouncer<()>,
    move_gate: Debouncer<Point>,
}

impl<S: Surface> Controller<S> {
    /// Take over `surface` and size its pixel buffer to its layout box.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if `config` fails validation.
    pub fn new(surface: S, config: ControllerConfig) -> Result<Self, CanvasError> {
        let config = config.validated()?;
        let mut controller = Self {
            surface,
            resize_gate: Debouncer::new(config.resize_debounce_ms),
            move_gate: Debouncer::new(config.pointer_move_debounce_ms),
            config,
            items: Vec::new(),
            drag: DragState::Idle,
            ids: IdGenerator::new(),
        };
        controller.fit_surface();
        Ok(controller)
    }

    /// Replace the id source. Only meaningful before the first item is added.
    #[must_use]
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    // --- Items ---

    /// Push a new item on top of the stack and paint just that item.
    ///
    /// # Errors
    ///
    /// Propagates a failure of the item's first render. The item stays in
    /// the stack.
    pub fn add_item(&mut self, request: AddItem<S>) -> Result<ItemId, CanvasError> {
        let id = self.ids.next_id();
        let item = Item::new(
            id,
            self.surface.pixel_size(),
            self.config.active_item_border_width,
            request.render,
            request.rect,
            request.meta,
        );
        log::debug!("add {id} at {:?}", item.rect());
        self.items.push(item);
        if let Some(item) = self.items.last() {
            item.render(&mut self.surface, &self.config.active_border_color)?;
        }
        Ok(id)
    }

    /// Add an item that paints `image`.
    ///
    /// Without an explicit non-zero `w` and `h` the image is fitted inside the
    /// surface keeping its aspect ratio, then scaled by `size_ratio`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_item`].
    pub fn draw_image(&mut self, image: S::Image, options: DrawImageOptions) -> Result<ItemId, CanvasError>
    where
        S: 'static,
    {
        let rect = self.image_rect(&image, &options);
        let meta = ItemMeta {
            method: DRAW_IMAGE_METHOD.to_owned(),
            args: vec![serde_json::to_value(image.natural_size())?, serde_json::to_value(options)?],
        };
        let render: RenderFn<S> = Box::new(move |surface: &mut S, rect| surface.draw_image(&image, rect));
        self.add_item(AddItem::new(render).with_rect(rect).with_meta(meta))
    }

    /// Destination rect `draw_image` would use for `image` right now.
    #[must_use]
    pub fn image_rect(&self, image: &S::Image, options: &DrawImageOptions) -> Rect {
        let (w, h) = options.explicit_size().unwrap_or_else(|| {
            let natural = image.natural_size();
            natural
                .contain_scale(self.surface.pixel_size())
                .map_or((0.0, 0.0), |scale| {
                    let k = scale * options.size_ratio;
                    (natural.width * k, natural.height * k)
                })
        });
        Rect::new(options.x, options.y, w, h)
    }

    // --- Input events ---

    /// Pick up the topmost item under `pt`, if any, and repaint.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn on_pointer_down(&mut self, pt: Point) -> Result<Vec<Action>, CanvasError> {
        let mut actions = Vec::new();
        if self.end_drag() {
            actions.push(Action::UnsubscribePointerMove);
        }

        if let Some(index) = hit_test(&self.items, pt) {
            let item = self.items.remove(index);
            self.items.push(item);
            if let Some(active) = self.items.last_mut() {
                active.set_active(true);
                log::debug!("drag start {} at ({}, {})", active.id(), pt.x, pt.y);
            }
            self.drag.begin(pt);
            actions.push(Action::SubscribePointerMove);
        }

        self.redraw()?;
        Ok(actions)
    }

    /// Feed a pointer position during a drag. Rate limited.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn on_pointer_move(&mut self, pt: Point, now_ms: f64) -> Result<Vec<Action>, CanvasError> {
        if !self.drag.is_dragging() {
            return Ok(Vec::new());
        }
        let was_armed = self.move_gate.is_armed();
        match self.move_gate.call(now_ms, pt) {
            Some(pt) => {
                self.apply_drag(pt)?;
                Ok(Vec::new())
            }
            None if !was_armed => Ok(flush_request(&self.move_gate).into_iter().collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Drop the dragged item. No-op without a drag.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn on_pointer_up(&mut self) -> Result<Vec<Action>, CanvasError> {
        self.release()
    }

    /// Same as [`Self::on_pointer_up`]: leaving the surface ends the drag.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn on_pointer_leave(&mut self) -> Result<Vec<Action>, CanvasError> {
        self.release()
    }

    /// The container was resized. Rate limited.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn on_resize(&mut self, now_ms: f64) -> Result<Vec<Action>, CanvasError> {
        let was_armed = self.resize_gate.is_armed();
        match self.resize_gate.call(now_ms, ()) {
            Some(()) => self.apply_resize(),
            None if !was_armed => Ok(flush_request(&self.resize_gate).into_iter().collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Run trailing resize and pointer-move calls whose window has elapsed.
    ///
    /// Returns a fresh [`Action::ScheduleFlush`] while anything is still pending.
    ///
    /// # Errors
    ///
    /// Propagates render failures.
    pub fn poll(&mut self, now_ms: f64) -> Result<Vec<Action>, CanvasError> {
        let mut actions = Vec::new();
        if self.resize_gate.flush(now_ms).is_some() {
            actions.extend(self.apply_resize()?);
        }
        if let Some(pt) = self.move_gate.flush(now_ms) {
            self.apply_drag(pt)?;
        }
        let next = [self.resize_gate.flush_at(), self.move_gate.flush_at()]
            .into_iter()
            .flatten()
            .reduce(f64::min);
        if let Some(at_ms) = next {
            actions.push(Action::ScheduleFlush { at_ms });
        }
        Ok(actions)
    }

    // --- Render ---

    /// Clear the surface and paint every item back to front.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first render failure.
    pub fn redraw(&mut self) -> Result<(), CanvasError> {
        self.surface.clear();
        for item in &self.items {
            item.render(&mut self.surface, &self.config.active_border_color)?;
        }
        Ok(())
    }

    // --- Queries ---

    /// Items back to front.
    #[must_use]
    pub fn items(&self) -> &[Item<S>] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item<S>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The item being dragged, if any. Always the topmost item.
    #[must_use]
    pub fn active_item(&self) -> Option<&Item<S>> {
        if self.drag.is_dragging() { self.items.last() } else { None }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Last applied pointer position of the current drag.
    #[must_use]
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag.anchor()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct surface access for hosts that need to poke the backend.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // --- Internals ---

    /// Size the pixel buffer to the layout box and return the buffer size the
    /// backend actually settled on, which may be truncated.
    fn fit_surface(&mut self) -> Size {
        let layout = self.surface.layout_size();
        self.surface.set_pixel_size(layout);
        self.surface.pixel_size()
    }

    fn apply_drag(&mut self, pt: Point) -> Result<(), CanvasError> {
        let Some((dx, dy)) = self.drag.advance(pt) else {
            return Ok(());
        };
        let bounds = self.surface.pixel_size();
        if let Some(item) = self.items.last_mut() {
            item.move_by(dx, dy, bounds);
        }
        self.redraw()
    }

    /// Resize the pixel buffer to the layout box, rescale every item, repaint.
    /// A drag in progress is aborted.
    fn apply_resize(&mut self) -> Result<Vec<Action>, CanvasError> {
        let mut actions = Vec::new();
        if self.end_drag() {
            actions.push(Action::UnsubscribePointerMove);
        }
        let size = self.fit_surface();
        for item in &mut self.items {
            item.rescale(size);
        }
        log::debug!("resize to {}x{}, {} items", size.width, size.height, self.items.len());
        self.redraw()?;
        Ok(actions)
    }

    fn release(&mut self) -> Result<Vec<Action>, CanvasError> {
        if !self.end_drag() {
            return Ok(Vec::new());
        }
        self.redraw()?;
        Ok(vec![Action::UnsubscribePointerMove])
    }

    /// Leave drag mode. Returns whether a drag was in progress.
    fn end_drag(&mut self) -> bool {
        if !self.drag.end() {
            return false;
        }
        self.move_gate.clear();
        if let Some(item) = self.items.last_mut() {
            item.set_active(false);
            log::debug!("drag end {} at {:?}", item.id(), item.rect());
        }
        true
    }
}

fn flush_request<T>(gate: &Debouncer<T>) -> Option<Action> {
    gate.flush_at().map(|at_ms| Action::ScheduleFlush { at_ms })
}
