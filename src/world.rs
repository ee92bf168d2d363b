use wasm_bindgen::prelude::*;

use crate::error::VizError;

const WORLD_WIDTH: u32 = 16;
const SNAKE_SPAWN_IDX: u32 = 10;

/// What the viewer reads from a world.
pub trait WorldView {
    /// Cells per side.
    fn width(&self) -> u32;

    /// Row-major cell index of the snake's head, if the world has one.
    fn snake_head_idx(&self) -> Option<u32> {
        None
    }
}

/// A world module that must finish initializing before worlds can be built.
#[allow(async_fn_in_trait)]
pub trait WorldModule {
    type World: WorldView;

    async fn init(&mut self) -> Result<(), VizError>;

    fn create_world(&self) -> Self::World;
}

struct SnakeCell(u32);

struct Snake {
    body: Vec<SnakeCell>,
}

impl Snake {
    fn new(spawn_idx: u32) -> Self {
        Self { body: vec![SnakeCell(spawn_idx)] }
    }

    fn head(&self) -> Option<u32> {
        self.body.first().map(|cell| cell.0)
    }
}

#[wasm_bindgen]
pub struct World {
    width: u32,
    snake: Snake,
}

#[wasm_bindgen]
impl World {
    pub fn new() -> World {
        World { width: WORLD_WIDTH, snake: Snake::new(SNAKE_SPAWN_IDX) }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn snake_head_idx(&self) -> Option<u32> {
        self.snake.head()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldView for World {
    fn width(&self) -> u32 {
        self.width
    }

    fn snake_head_idx(&self) -> Option<u32> {
        self.snake.head()
    }
}

/// The world compiled into this crate. Ready as soon as it is polled.
#[derive(Debug, Default)]
pub struct BundledWorld;

impl WorldModule for BundledWorld {
    type World = World;

    async fn init(&mut self) -> Result<(), VizError> {
        Ok(())
    }

    fn create_world(&self) -> World {
        World::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_matches_spawn_layout() {
        let world = World::new();
        assert_eq!(WorldView::width(&world), 16);
        assert_eq!(WorldView::snake_head_idx(&world), Some(10));
    }
}
