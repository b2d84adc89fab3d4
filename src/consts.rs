//! Shared defaults for the editor crate.

// ── Items ───────────────────────────────────────────────────────

/// Width in pixels of the decoration painted around the dragged item.
pub const DEFAULT_ACTIVE_BORDER_WIDTH: f64 = 2.0;

/// Fill colour of the active-item decoration.
pub const DEFAULT_ACTIVE_BORDER_COLOR: &str = "green";

/// First id handed out by a fresh [`crate::id::IdGenerator`].
pub const FIRST_ITEM_ID: u64 = 1;

// ── Rate limiting ───────────────────────────────────────────────

/// Quiet period for container-resize handling, in milliseconds.
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

/// Quiet period for pointer-move handling during a drag, in milliseconds.
pub const POINTER_MOVE_DEBOUNCE_MS: f64 = 10.0;

// ── draw_image ──────────────────────────────────────────────────

/// Uniform scale applied after the contain fit when none is given.
pub const DEFAULT_SIZE_RATIO: f64 = 1.0;

/// `ItemMeta::method` recorded for items created by `draw_image`.
pub const DRAW_IMAGE_METHOD: &str = "drawImage";
