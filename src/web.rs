//! Browser bindings: the `<canvas>` surface, image loading, and the JS-facing
//! [`Editor`].
//!
//! This is the only module that touches the DOM. [`CanvasSurface`] adapts an
//! `HtmlCanvasElement` and its 2D context to [`Surface`]. [`Editor`] owns a
//! [`Controller`] over that surface, installs the pointer and resize handlers,
//! and carries out the [`Action`]s the controller hands back: attaching and
//! detaching `mousemove`, and arming `gloo-timers` timeouts for trailing
//! debounced calls.
//!
//! Errors raised inside DOM callbacks have no caller to return to, so they are
//! logged with `log::warn!`. Everything reachable from JS returns `Result`.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Once;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent, Window};

use crate::config::{ControllerConfig, DrawImageOptions};
use crate::controller::Controller;
use crate::error::CanvasError;
use crate::geometry::{Point, Rect, Size};
use crate::input::Action;
use crate::surface::{ImageSource, Surface};

// =============================================================
// Surface
// =============================================================

/// A `<canvas>` element and its 2D rendering context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::MissingContext`] if the canvas has no 2D context
    /// (e.g. it already hands out a WebGL one).
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, CanvasError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| CanvasError::dom(&e))?
            .ok_or(CanvasError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::MissingContext)?;
        Ok(Self { canvas, ctx })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl ImageSource for HtmlImageElement {
    fn natural_size(&self) -> Size {
        Size::new(f64::from(self.natural_width()), f64::from(self.natural_height()))
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn pixel_size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn layout_size(&self) -> Size {
        let rect = self.canvas.get_bounding_client_rect();
        Size::new(rect.width(), rect.height())
    }

    fn set_pixel_size(&mut self, size: Size) {
        self.canvas.set_width(to_pixels(size.width));
        self.canvas.set_height(to_pixels(size.height));
    }

    fn clear(&mut self) {
        let size = self.pixel_size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect) -> Result<(), CanvasError> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, rect.x, rect.y, rect.w, rect.h)
            .map_err(|e| CanvasError::surface(&e))
    }
}

/// Backing-buffer dimension for a layout dimension. Truncates like the DOM does.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f64) -> u32 {
    value.max(0.0) as u32
}

// =============================================================
// Image loading
// =============================================================

/// Fetch and decode the image at `url`.
///
/// # Errors
///
/// Returns [`CanvasError::ImageLoad`] naming `url` if the browser fails to
/// load or decode it.
pub async fn load_image(url: &str) -> Result<HtmlImageElement, CanvasError> {
    let image = HtmlImageElement::new().map_err(|e| CanvasError::dom(&e))?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);

    let outcome = JsFuture::from(loaded).await;
    image.set_onload(None);
    image.set_onerror(None);
    outcome.map_err(|_| CanvasError::ImageLoad { url: url.to_owned() })?;

    log::debug!("loaded {url} ({}x{})", image.natural_width(), image.natural_height());
    Ok(image)
}

// =============================================================
// Editor
// =============================================================

/// Canvas editor bound to one `<canvas>` element.
///
/// Takes over the element's `onmousedown`, `onmouseup` and `onmouseleave`
/// handlers and the window's `onresize` for as long as it lives.
#[wasm_bindgen]
pub struct Editor {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl Editor {
    /// Mount on `canvas` with the default config and an optional border width.
    ///
    /// # Errors
    ///
    /// Fails if the canvas has no 2D context or the border width is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, active_item_border_width: Option<f64>) -> Result<Editor, JsValue> {
        let config =
            active_item_border_width.map_or_else(ControllerConfig::default, ControllerConfig::with_border_width);
        Ok(Self::mount(canvas, config)?)
    }

    /// Mount on `canvas` with a (possibly partial) JSON `ControllerConfig`.
    ///
    /// # Errors
    ///
    /// Fails on malformed or out-of-range config, or a missing 2D context.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(canvas: HtmlCanvasElement, json: &str) -> Result<Editor, JsValue> {
        Ok(Self::mount(canvas, ControllerConfig::from_json(json)?)?)
    }

    /// Add an already decoded image. `options` is a JSON `DrawImageOptions`.
    ///
    /// # Errors
    ///
    /// Fails on malformed options or if the first paint fails.
    #[wasm_bindgen(js_name = drawImage)]
    pub fn draw_image(&self, image: HtmlImageElement, options: Option<String>) -> Result<u64, JsValue> {
        let options = parse_draw_options(options.as_deref())?;
        let id = self.host.controller.borrow_mut().draw_image(image, options)?;
        Ok(id.0)
    }

    /// Load the image at `url`, then add it. Resolves to the new item id.
    #[wasm_bindgen(js_name = addImageUrl)]
    pub fn add_image_url(&self, url: String, options: Option<String>) -> js_sys::Promise {
        let host = Rc::clone(&self.host);
        future_to_promise(async move {
            let options = parse_draw_options(options.as_deref())?;
            let image = load_image(&url).await?;
            let id = host.controller.borrow_mut().draw_image(image, options)?;
            Ok(JsValue::from(id.0))
        })
    }

    /// Number of items on the canvas.
    #[wasm_bindgen(js_name = itemCount)]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.host.controller.borrow().items().len()
    }

    /// Whether an item is being dragged.
    #[wasm_bindgen(js_name = isDragging)]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.host.controller.borrow().is_dragging()
    }

    /// Repaint everything.
    ///
    /// # Errors
    ///
    /// Fails if an item cannot be painted.
    pub fn redraw(&self) -> Result<(), JsValue> {
        self.host.controller.borrow_mut().redraw()?;
        Ok(())
    }
}

impl Editor {
    fn mount(canvas: HtmlCanvasElement, config: ControllerConfig) -> Result<Self, CanvasError> {
        init_logging();
        let window = web_sys::window().ok_or_else(|| CanvasError::Dom("window unavailable".to_owned()))?;
        let controller = Controller::new(CanvasSurface::new(canvas.clone())?, config)?;
        let host = Rc::new_cyclic(|weak| Host::new(weak, canvas, window, controller));
        host.attach();
        log::info!("editor mounted");
        Ok(Self { host })
    }
}

fn parse_draw_options(json: Option<&str>) -> Result<DrawImageOptions, CanvasError> {
    match json {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(DrawImageOptions::default()),
    }
}

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if console_log::init_with_level(level).is_err() {
            log::warn!("a logger was already installed");
        }
    });
}

// =============================================================
// Host: DOM wiring
// =============================================================

type PointerListener = Closure<dyn FnMut(MouseEvent)>;

/// Controller plus the JS closures that feed it. Closures hold a `Weak` back
/// reference, so a dropped editor turns late callbacks into no-ops.
struct Host {
    canvas: HtmlCanvasElement,
    window: Window,
    controller: RefCell<Controller<CanvasSurface>>,
    on_down: PointerListener,
    on_move: PointerListener,
    on_up: PointerListener,
    on_leave: PointerListener,
    on_resize: Closure<dyn FnMut()>,
}

impl Host {
    fn new(weak: &Weak<Host>, canvas: HtmlCanvasElement, window: Window, controller: Controller<CanvasSurface>) -> Self {
        let resize_weak = weak.clone();
        Self {
            canvas,
            window,
            controller: RefCell::new(controller),
            on_down: pointer_listener(weak, |host, event| {
                let result = host.controller.borrow_mut().on_pointer_down(event_point(event));
                host.dispatch(result);
            }),
            on_move: pointer_listener(weak, |host, event| {
                let result = host.controller.borrow_mut().on_pointer_move(event_point(event), now_ms());
                host.dispatch(result);
            }),
            on_up: pointer_listener(weak, |host, _| {
                let result = host.controller.borrow_mut().on_pointer_up();
                host.dispatch(result);
            }),
            on_leave: pointer_listener(weak, |host, _| {
                let result = host.controller.borrow_mut().on_pointer_leave();
                host.dispatch(result);
            }),
            on_resize: Closure::new(move || {
                if let Some(host) = resize_weak.upgrade() {
                    let result = host.controller.borrow_mut().on_resize(now_ms());
                    host.dispatch(result);
                }
            }),
        }
    }

    fn attach(&self) {
        self.canvas.set_onmousedown(Some(self.on_down.as_ref().unchecked_ref()));
        self.canvas.set_onmouseup(Some(self.on_up.as_ref().unchecked_ref()));
        self.canvas.set_onmouseleave(Some(self.on_leave.as_ref().unchecked_ref()));
        self.window.set_onresize(Some(self.on_resize.as_ref().unchecked_ref()));
    }

    fn dispatch(self: &Rc<Self>, result: Result<Vec<Action>, CanvasError>) {
        match result {
            Ok(actions) => {
                for action in actions {
                    self.perform(action);
                }
            }
            Err(err) => log::warn!("canvas update failed: {err}"),
        }
    }

    fn perform(self: &Rc<Self>, action: Action) {
        match action {
            Action::SubscribePointerMove => {
                let listener = self.on_move.as_ref().unchecked_ref();
                if let Err(err) = self.canvas.add_event_listener_with_callback("mousemove", listener) {
                    log::warn!("mousemove subscribe failed: {}", CanvasError::dom(&err));
                }
            }
            Action::UnsubscribePointerMove => self.detach_move(),
            Action::ScheduleFlush { at_ms } => {
                let weak = Rc::downgrade(self);
                Timeout::new(delay_until(at_ms, now_ms()), move || {
                    if let Some(host) = weak.upgrade() {
                        let result = host.controller.borrow_mut().poll(now_ms());
                        host.dispatch(result);
                    }
                })
                .forget();
            }
        }
    }

    fn detach_move(&self) {
        let listener = self.on_move.as_ref().unchecked_ref();
        if let Err(err) = self.canvas.remove_event_listener_with_callback("mousemove", listener) {
            log::warn!("mousemove unsubscribe failed: {}", CanvasError::dom(&err));
        }
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.canvas.set_onmousedown(None);
        self.canvas.set_onmouseup(None);
        self.canvas.set_onmouseleave(None);
        self.window.set_onresize(None);
        self.detach_move();
    }
}

fn pointer_listener(weak: &Weak<Host>, handler: fn(&Rc<Host>, &MouseEvent)) -> PointerListener {
    let weak = weak.clone();
    Closure::new(move |event: MouseEvent| {
        if let Some(host) = weak.upgrade() {
            handler(&host, &event);
        }
    })
}

fn event_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.offset_x()), f64::from(event.offset_y()))
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Whole milliseconds from `now` until `at`, rounded up so the timer never
/// fires before the window has elapsed.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn delay_until(at: f64, now: f64) -> u32 {
    (at - now).max(0.0).ceil() as u32
}
