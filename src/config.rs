use crate::error::VizError;

pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_CANVAS_ID: &str = "game";

/// Render settings owned by [`crate::Bootstrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pixel edge length of one cell.
    pub cell_size: u32,
    /// Id of the canvas element the wasm entry point draws into.
    pub canvas_id: String,
    pub stroke_style: String,
    /// Paint the snake's head cell after the grid.
    pub draw_snake: bool,
    pub snake_fill: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            stroke_style: "#000000".to_string(),
            draw_snake: false,
            snake_fill: "green".to_string(),
        }
    }
}

impl Config {
    pub fn with_canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = id.into();
        self
    }

    /// Apply a `data-cell-size` attribute value, if the element carries one.
    pub fn with_cell_size_attr(mut self, attr: Option<&str>) -> Result<Self, VizError> {
        if let Some(raw) = attr {
            self.cell_size = raw
                .trim()
                .parse()
                .map_err(|_| VizError::InvalidConfig(format!("data-cell-size `{raw}`")))?;
        }
        Ok(self)
    }
}
