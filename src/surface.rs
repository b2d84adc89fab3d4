//! The drawing target.
//!
//! [`Surface`] is the seam between the controller and whatever actually owns
//! pixels. The browser implementation is [`crate::web::CanvasSurface`]; tests
//! use a recording double. The controller never paints through anything else.

use crate::error::CanvasError;
use crate::geometry::{Rect, Size};

/// Anything that can be painted with [`Surface::draw_image`].
pub trait ImageSource {
    /// Intrinsic pixel size of the decoded image.
    fn natural_size(&self) -> Size;
}

/// A 2D pixel buffer with a separately sized layout box.
pub trait Surface {
    /// Decoded image type accepted by [`Self::draw_image`].
    type Image: ImageSource + Clone + 'static;

    /// Current size of the backing pixel buffer.
    fn pixel_size(&self) -> Size;

    /// Current size of the element's layout box (what the user sees).
    fn layout_size(&self) -> Size;

    /// Resize the backing pixel buffer. Clears every pixel.
    ///
    /// The backend may round `size`; [`Self::pixel_size`] reports the result.
    fn set_pixel_size(&mut self, size: Size);

    /// Clear the whole pixel buffer.
    fn clear(&mut self);

    /// Fill `rect` with a CSS colour.
    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Paint `image` scaled into `rect`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Surface`] if the backend rejects the draw.
    fn draw_image(&mut self, image: &Self::Image, rect: Rect) -> Result<(), CanvasError>;
}
