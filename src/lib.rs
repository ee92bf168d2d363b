pub mod bootstrap;
pub mod config;
pub mod error;
pub mod grid;
pub mod surface;
pub mod world;

pub use bootstrap::{Bootstrap, Phase};
pub use config::Config;
pub use error::VizError;
pub use grid::{Grid, Segment};
pub use surface::DrawSurface;
pub use world::{BundledWorld, World, WorldModule, WorldView};

// Only compile the DOM glue when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::{Bootstrap, BundledWorld, Config, VizError};

    mod render;

    pub use render::CanvasSurface;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A second init (e.g. from tests) leaves the first logger in place.
        console_log::init_with_level(log::Level::Info).ok();

        wasm_bindgen_futures::spawn_local(async {
            match render_with_config(Config::default()).await {
                // Already logged by the bootstrap.
                Ok(()) | Err(VizError::Initialization(_)) => {}
                Err(err) => log::error!("startup failed: {err}"),
            }
        });
        Ok(())
    }

    /// Draw the grid into the canvas with id `canvas_id` (default `game`).
    #[wasm_bindgen(js_name = render)]
    pub async fn render_canvas(canvas_id: Option<String>) -> Result<(), JsValue> {
        let mut config = Config::default();
        if let Some(id) = canvas_id {
            config = config.with_canvas_id(id);
        }
        render_with_config(config).await.map_err(JsValue::from)
    }

    /// Find the configured canvas, apply its `data-cell-size`, and render.
    pub async fn render_with_config(config: Config) -> Result<(), VizError> {
        let surface = CanvasSurface::find(&config.canvas_id)?;
        let config = config.with_cell_size_attr(surface.cell_size_attr().as_deref())?;
        Bootstrap::new(surface, config).run(&mut BundledWorld).await?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{render_canvas, render_with_config, CanvasSurface};
