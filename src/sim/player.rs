//! The player token
//!
//! Movement is input-driven rather than time-driven: one buffered direction
//! is applied per frame and then cleared.

use glam::Vec2;

use super::collision::Hitbox;
use super::grid::Grid;
use super::state::GameState;
use crate::consts::*;
use crate::renderer::Canvas;

/// A directional move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// The controlled token
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Current grid column
    pub column: u32,
    /// Current grid row (0 = water)
    pub row: u32,
    /// Buffered move, consumed by the next update
    pub input: Option<Direction>,
    /// Inset from both column edges forming the hitbox
    pub hit_offset: f32,
}

impl Player {
    pub fn new(hit_offset: f32) -> Self {
        Self {
            column: PLAYER_START_COLUMN,
            row: PLAYER_START_ROW,
            input: None,
            hit_offset,
        }
    }

    /// Apply the buffered move, if any
    ///
    /// Moves that would leave the board are dropped. Reaching the water row
    /// scores. The buffer is always cleared.
    pub fn update(&mut self, state: &mut GameState) {
        let Some(direction) = self.input.take() else {
            return;
        };
        let grid = state.grid;

        match direction {
            Direction::Left if self.column > 0 => self.column -= 1,
            Direction::Right if self.column < grid.last_column() => self.column += 1,
            Direction::Down if self.row < grid.last_row() => self.row += 1,
            Direction::Up if self.row > 0 => {
                self.row -= 1;
                if self.row == grid.goal_row() {
                    self.score(state);
                }
            }
            _ => {}
        }
    }

    /// Buffer a move for the next update (last write wins); `None` is ignored
    pub fn handle_input(&mut self, direction: Option<Direction>) {
        if let Some(direction) = direction {
            self.input = Some(direction);
        }
    }

    /// Horizontal hitbox, inset by `hit_offset` on both sides of the column
    pub fn hitbox(&self, grid: &Grid) -> Hitbox {
        Hitbox::new(
            self.column as f32 * grid.column_width + self.hit_offset,
            (self.column + 1) as f32 * grid.column_width - self.hit_offset,
        )
    }

    /// Reached the water
    pub fn score(&mut self, state: &mut GameState) {
        state.record_score();
        self.reset();
    }

    /// Caught by an enemy
    pub fn kill(&mut self, state: &mut GameState) {
        state.record_kill();
        self.reset();
    }

    /// Back to the start cell with no pending input
    pub fn reset(&mut self) {
        self.input = None;
        self.column = PLAYER_START_COLUMN;
        self.row = PLAYER_START_ROW;
    }

    /// Sprite position
    pub fn position(&self, grid: &Grid) -> Vec2 {
        grid.cell_origin(self.column, self.row) + Vec2::new(0.0, PLAYER_SPRITE_OFFSET_Y)
    }

    pub fn render<C: Canvas + ?Sized>(&self, grid: &Grid, canvas: &mut C) {
        canvas.draw_image(PLAYER_SPRITE, self.position(grid));
    }
}
