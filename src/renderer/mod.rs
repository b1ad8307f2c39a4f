//! Rendering module
//!
//! The simulation draws through the [`Canvas`] trait: sprites are named by
//! logical path and resolved by the implementation. On the web that is an
//! HTML canvas 2D context; elsewhere a [`RecordingCanvas`] captures the
//! draw calls.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::WebCanvas;
pub use recorder::{DrawCommand, RecordingCanvas};

use glam::Vec2;

use crate::consts::*;
use crate::sim::World;

/// Font and colors for overlay text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub line_width: f32,
}

/// Score overlay: white Impact outlined in black
pub const SCORE_TEXT_STYLE: TextStyle = TextStyle {
    font: "16pt Impact",
    fill: "White",
    stroke: "Black",
    line_width: 2.0,
};

/// Drawing surface the game renders onto
pub trait Canvas {
    /// Called once before anything is drawn for a frame
    fn begin_frame(&mut self) {}

    /// Draw the sprite at `sprite` with its top-left corner at `pos`
    fn draw_image(&mut self, sprite: &str, pos: Vec2);

    /// Draw filled and outlined text with its baseline starting at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// Tile sprite for a board row: water on top, stone under it, grass below
pub fn row_tile(row: u32) -> &'static str {
    match row {
        0 => WATER_TILE,
        r if ENEMY_ROWS.contains(&r) => STONE_TILE,
        _ => GRASS_TILE,
    }
}

/// Draw the board tiles
pub fn render_board<C: Canvas + ?Sized>(world: &World, canvas: &mut C) {
    let grid = &world.state.grid;
    for row in 0..grid.total_rows {
        let tile = row_tile(row);
        for column in 0..grid.total_columns {
            canvas.draw_image(tile, grid.cell_origin(column, row));
        }
    }
}

/// Draw one frame: board, enemies, player, then the score overlay
pub fn render_world<C: Canvas + ?Sized>(world: &World, canvas: &mut C) {
    canvas.begin_frame();
    render_board(world, canvas);
    for enemy in &world.enemies {
        enemy.render(canvas);
    }
    world.player.render(&world.state.grid, canvas);
    world.state.render(canvas);
}
