use wasm_bindgen::JsValue;

/// Everything that can stop a render pass.
///
/// Degenerate grid dimensions are not listed here: the renderer draws
/// zero-length lines for them instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    #[error("world module failed to initialize: {0}")]
    Initialization(String),
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` not found")]
    ElementNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<VizError> for JsValue {
    fn from(err: VizError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
