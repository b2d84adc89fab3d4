//! Test doubles shared by the unit tests.

use crate::error::CanvasError;
use crate::geometry::{Rect, Size};
use crate::item::RenderFn;
use crate::surface::{ImageSource, Surface};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Resize(Size),
    Fill { rect: Rect, color: String },
    Image { label: &'static str, rect: Rect },
    Mark { tag: &'static str, rect: Rect },
}

/// Image stand-in carrying only a label and a natural size.
#[derive(Debug, Clone, PartialEq)]
pub struct TestImage {
    pub label: &'static str,
    pub size: Size,
}

impl TestImage {
    pub fn new(label: &'static str, width: f64, height: f64) -> Self {
        Self { label, size: Size::new(width, height) }
    }
}

impl ImageSource for TestImage {
    fn natural_size(&self) -> Size {
        self.size
    }
}

/// Surface that records every call instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub pixel: Size,
    pub layout: Size,
    pub ops: Vec<Op>,
    pub fail_images: bool,
    /// Floor requested pixel sizes the way `<canvas>` width/height do.
    pub whole_pixels: bool,
}

impl RecordingSurface {
    /// A surface whose layout box is `width x height` and whose pixel buffer
    /// has not been sized yet.
    pub fn new(width: f64, height: f64) -> Self {
        Self { layout: Size::new(width, height), ..Self::default() }
    }

    /// Like [`Self::new`], but the pixel buffer only takes whole pixels.
    pub fn whole_pixels(width: f64, height: f64) -> Self {
        Self { whole_pixels: true, ..Self::new(width, height) }
    }

    /// Record a callback-driven paint.
    pub fn mark(&mut self, tag: &'static str, rect: Rect) {
        self.ops.push(Op::Mark { tag, rect });
    }

    /// Drain the recorded calls.
    pub fn take_ops(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    /// Tags and labels painted since the last clear, in paint order.
    pub fn painted(&self) -> Vec<&'static str> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Clear | Op::Resize(_)))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                Op::Mark { tag, .. } => Some(*tag),
                Op::Image { label, .. } => Some(*label),
                _ => None,
            })
            .collect()
    }

    /// Number of full clears recorded.
    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear)).count()
    }
}

impl Surface for RecordingSurface {
    type Image = TestImage;

    fn pixel_size(&self) -> Size {
        self.pixel
    }

    fn layout_size(&self) -> Size {
        self.layout
    }

    fn set_pixel_size(&mut self, size: Size) {
        let size = if self.whole_pixels {
            Size::new(size.width.max(0.0).floor(), size.height.max(0.0).floor())
        } else {
            size
        };
        self.pixel = size;
        self.ops.push(Op::Resize(size));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(Op::Fill { rect, color: color.to_owned() });
    }

    fn draw_image(&mut self, image: &TestImage, rect: Rect) -> Result<(), CanvasError> {
        if self.fail_images {
            return Err(CanvasError::Surface(format!("cannot draw {}", image.label)));
        }
        self.ops.push(Op::Image { label: image.label, rect });
        Ok(())
    }
}

/// Render callback that records `tag` at the item's rect.
pub fn tagged(tag: &'static str) -> RenderFn<RecordingSurface> {
    Box::new(move |surface: &mut RecordingSurface, rect| {
        surface.mark(tag, rect);
        Ok(())
    })
}
