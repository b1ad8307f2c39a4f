//! Bug Crossing - A grid-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, enemies, player, collisions, game state)
//! - `renderer`: Canvas drawing seam (HTML canvas 2D on web, recording canvas elsewhere)
//! - `input`: Keyboard mapping to player directions
//! - `settings`: Data-driven game tuning
//! - `demo`: Headless idle-mode runs

pub mod demo;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Grid geometry (pixels per cell, cell counts)
    pub const COLUMN_WIDTH: f32 = 101.0;
    pub const ROW_HEIGHT: f32 = 83.0;
    pub const TOTAL_COLUMNS: u32 = 5;
    pub const TOTAL_ROWS: u32 = 6;

    /// Rows enemies may spawn on (stone rows between water and grass)
    pub const ENEMY_ROWS: [u32; 3] = [1, 2, 3];
    pub const ENEMY_COUNT: usize = 3;

    /// Initial enemy speed bounds (pixels/s)
    pub const MIN_ENEMY_SPEED: f32 = 100.0;
    pub const MAX_ENEMY_SPEED: f32 = 400.0;

    /// Player start cell (center-bottom)
    pub const PLAYER_START_COLUMN: u32 = 2;
    pub const PLAYER_START_ROW: u32 = 5;

    /// Vertical sprite offsets so sprites sit on their row line
    pub const ENEMY_SPRITE_OFFSET_Y: f32 = -20.0;
    pub const PLAYER_SPRITE_OFFSET_Y: f32 = -30.0;

    /// Canvas size of the classic board
    pub const CANVAS_WIDTH: u32 = 505;
    pub const CANVAS_HEIGHT: u32 = 606;

    /// Score overlay anchor
    pub const SCORE_TEXT_X: f32 = 20.0;
    pub const SCORE_TEXT_Y: f32 = 100.0;

    /// Longest frame the web driver will simulate in one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Frame step used by the headless demo (60 Hz)
    pub const DEMO_DT: f32 = 1.0 / 60.0;

    /// Sprite paths resolved by the canvas
    pub const ENEMY_SPRITE: &str = "images/enemy-bug.png";
    pub const PLAYER_SPRITE: &str = "images/char-boy.png";
    pub const WATER_TILE: &str = "images/water-block.png";
    pub const STONE_TILE: &str = "images/stone-block.png";
    pub const GRASS_TILE: &str = "images/grass-block.png";
}
