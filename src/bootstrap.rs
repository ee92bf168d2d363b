//! Startup sequencing: wait for the world module, size the surface, draw once.

use crate::config::Config;
use crate::error::VizError;
use crate::grid::Grid;
use crate::surface::DrawSurface;
use crate::world::{WorldModule, WorldView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Rendered,
}

/// Owns the drawing surface and the config for one viewer.
pub struct Bootstrap<S> {
    surface: S,
    config: Config,
    phase: Phase,
}

impl<S: DrawSurface> Bootstrap<S> {
    pub fn new(surface: S, config: Config) -> Self {
        Self { surface, config, phase: Phase::Uninitialized }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Initialize `module`, then render its world.
    ///
    /// Nothing touches the surface until `init` has resolved. On failure the
    /// error is logged and returned; the phase stays `Uninitialized`.
    pub async fn run<M: WorldModule>(&mut self, module: &mut M) -> Result<Grid, VizError> {
        log::info!("initializing world module");
        if let Err(err) = module.init().await {
            log::error!("{err}");
            return Err(err);
        }

        let world = module.create_world();
        Ok(self.render(&world))
    }

    /// Size the surface to the world and draw the grid.
    pub fn render<W: WorldView + ?Sized>(&mut self, world: &W) -> Grid {
        let grid = Grid::new(world.width(), self.config.cell_size);
        let extent = grid.extent();
        log::debug!("grid {}x{} cells, surface {extent}x{extent} px", grid.width, grid.width);

        // Resizing clears the canvas, so it must come first.
        self.surface.set_size(extent, extent);
        self.surface.set_stroke_style(&self.config.stroke_style);
        grid.draw(&mut self.surface);

        if self.config.draw_snake {
            self.draw_snake_head(&grid, world);
        }

        self.phase = Phase::Rendered;
        log::info!("rendered {} gridlines", 2 * (u64::from(grid.width) + 1));
        grid
    }

    fn draw_snake_head<W: WorldView + ?Sized>(&mut self, grid: &Grid, world: &W) {
        let Some(idx) = world.snake_head_idx() else {
            return;
        };
        match grid.cell_origin(idx) {
            Some((x, y)) => {
                let cell = f64::from(grid.cell_size);
                self.surface.set_fill_style(&self.config.snake_fill);
                self.surface.fill_rect(x, y, cell, cell);
            }
            None => log::warn!("snake head {idx} outside {0}x{0} grid", grid.width),
        }
    }
}
