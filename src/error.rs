use wasm_bindgen::JsValue;

/// Errors produced by the editor.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// An image could not be fetched or decoded.
    #[error("cannot load image '{url}'")]
    ImageLoad { url: String },

    /// The canvas refused to hand out a 2D rendering context.
    #[error("2d rendering context unavailable")]
    MissingContext,

    /// A drawing call on the surface failed.
    #[error("surface call failed: {0}")]
    Surface(String),

    /// A browser API call outside of drawing failed.
    #[error("dom call failed: {0}")]
    Dom(String),

    /// A configuration value was rejected at construction time.
    #[error("invalid config: {0}")]
    Config(String),

    /// Configuration or item metadata could not be (de)serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CanvasError {
    /// Wrap a JS exception thrown by a drawing call.
    #[must_use]
    pub fn surface(value: &JsValue) -> Self {
        Self::Surface(describe(value))
    }

    /// Wrap a JS exception thrown by a non-drawing DOM call.
    #[must_use]
    pub fn dom(value: &JsValue) -> Self {
        Self::Dom(describe(value))
    }
}

impl From<CanvasError> for JsValue {
    fn from(err: CanvasError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
