//! Enemy bugs crossing the stone rows left to right

use glam::Vec2;
use rand::Rng;

use super::collision::{Span, row_span_collision};
use super::grid::Grid;
use super::player::Player;
use super::state::GameState;
use crate::consts::*;
use crate::renderer::Canvas;

/// A single enemy token
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    /// Horizontal pixel position (negative while entering from the left)
    pub x: f32,
    /// Vertical pixel position, fixed per crossing
    pub y: f32,
    /// Row the enemy travels on
    pub row: u32,
    /// Pixels per second, fixed per crossing
    pub speed: f32,
}

impl Enemy {
    /// Spawn an enemy just off the left edge
    pub fn new<R: Rng>(state: &GameState, rng: &mut R) -> Self {
        let mut enemy = Self {
            x: 0.0,
            y: 0.0,
            row: ENEMY_ROWS[0],
            speed: 0.0,
        };
        enemy.reset(state, rng);
        enemy
    }

    /// Advance by `dt` seconds, respawn past the right edge, then test the player
    ///
    /// Returns true if this enemy caught the player this frame.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        state: &mut GameState,
        player: &mut Player,
        rng: &mut R,
    ) -> bool {
        self.x += dt * self.speed;

        if self.x > state.grid.width() {
            self.reset(state, rng);
        }

        if self.collides_with_player(player, &state.grid) {
            player.kill(state);
            return true;
        }
        false
    }

    /// Start a new crossing with a fresh row and a speed drawn from the current bounds
    pub fn reset<R: Rng>(&mut self, state: &GameState, rng: &mut R) {
        let grid = &state.grid;
        self.x = -grid.column_width;
        self.row = state.random_enemy_row(rng).unwrap_or(self.row);
        self.y = grid.row_height * self.row as f32 + ENEMY_SPRITE_OFFSET_Y;
        self.speed = state.random_enemy_speed(rng);

        log::debug!("Enemy respawned on row {} at {:.0}px/s", self.row, self.speed);
    }

    /// Horizontal extent covered by the sprite
    pub fn span(&self, grid: &Grid) -> Span {
        Span::from_width(self.x, grid.column_width)
    }

    /// Same row and overlapping the player's hitbox
    pub fn collides_with_player(&self, player: &Player, grid: &Grid) -> bool {
        row_span_collision(self.row, &self.span(grid), player.row, &player.hitbox(grid))
    }

    /// Sprite position
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_image(ENEMY_SPRITE, self.position());
    }
}
