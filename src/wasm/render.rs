use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::VizError;
use crate::surface::DrawSurface;

/// A canvas element and its 2d context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas with the given element id.
    pub fn find(id: &str) -> Result<Self, VizError> {
        let document = window()
            .ok_or(VizError::NoWindow)?
            .document()
            .ok_or(VizError::NoDocument)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| VizError::ElementNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| VizError::NotACanvas(id.to_string()))?;
        Self::new(canvas)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, VizError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(VizError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| VizError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Value of the element's `data-cell-size` attribute.
    pub fn cell_size_attr(&self) -> Option<String> {
        self.canvas.get_attribute("data-cell-size")
    }
}

impl DrawSurface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_stroke_style(&mut self, style: &str) {
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(style));
    }

    fn set_fill_style(&mut self, style: &str) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(style));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }
}
