//! Game state and core simulation types
//!
//! `GameState` is the shared context every entity reads and mutates during a
//! frame (score, difficulty bounds, board geometry). `World` owns it together
//! with the entities and the seeded RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::grid::Grid;
use super::player::Player;
use super::rng::{pick_random, random_between};
use crate::consts::*;
use crate::renderer::{Canvas, SCORE_TEXT_STYLE};
use crate::settings::{Settings, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
}

/// Score-changing events produced during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player reached the water; carries the new score
    Scored { score: i64 },
    /// An enemy caught the player; carries the new score
    Killed { score: i64 },
}

/// Shared, mutable game context (score and difficulty)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Board geometry
    pub grid: Grid,
    /// Score and difficulty constants
    pub tuning: Tuning,
    /// Score (may go negative)
    pub score: i64,
    /// Current lower bound for newly drawn enemy speeds (pixels/s)
    pub min_enemy_speed: f32,
    /// Current upper bound for newly drawn enemy speeds (pixels/s)
    pub max_enemy_speed: f32,
    /// Rows enemies may spawn on
    pub enemy_rows: Vec<u32>,
    /// Events produced during the current frame
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            grid: Grid::default(),
            tuning: settings.tuning,
            score: 0,
            min_enemy_speed: settings.min_enemy_speed,
            max_enemy_speed: settings.max_enemy_speed,
            enemy_rows: ENEMY_ROWS.to_vec(),
            events: Vec::new(),
        }
    }

    /// Draw a spawn row for an enemy
    pub fn random_enemy_row<R: Rng>(&self, rng: &mut R) -> Option<u32> {
        pick_random(rng, &self.enemy_rows).copied()
    }

    /// Draw an enemy speed from the current bounds
    pub fn random_enemy_speed<R: Rng>(&self, rng: &mut R) -> f32 {
        random_between(rng, self.min_enemy_speed, self.max_enemy_speed)
    }

    /// Apply a score: award points and speed enemies up
    ///
    /// The bounds grow without a gameplay cap but saturate at `f32::MAX`.
    pub fn record_score(&mut self) {
        self.score += self.tuning.score_gain;
        self.min_enemy_speed = (self.min_enemy_speed * self.tuning.speed_up_factor).min(f32::MAX);
        self.max_enemy_speed = (self.max_enemy_speed * self.tuning.speed_up_factor).min(f32::MAX);
        self.events.push(GameEvent::Scored { score: self.score });

        log::info!(
            "Scored! score={} enemy speed {:.0}..{:.0}",
            self.score,
            self.min_enemy_speed,
            self.max_enemy_speed
        );
    }

    /// Apply a kill: deduct points and slow enemies down, never below the floors
    pub fn record_kill(&mut self) {
        self.score -= self.tuning.score_penalty;
        self.min_enemy_speed =
            (self.min_enemy_speed * self.tuning.slow_down_factor).max(self.tuning.min_speed_floor);
        self.max_enemy_speed =
            (self.max_enemy_speed * self.tuning.slow_down_factor).max(self.tuning.max_speed_floor);
        self.events.push(GameEvent::Killed { score: self.score });

        log::info!(
            "Caught by a bug, score={} enemy speed {:.0}..{:.0}",
            self.score,
            self.min_enemy_speed,
            self.max_enemy_speed
        );
    }

    /// Score overlay text
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Draw the score overlay
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_text(
            &self.score_text(),
            glam::Vec2::new(SCORE_TEXT_X, SCORE_TEXT_Y),
            &SCORE_TEXT_STYLE,
        );
    }
}

/// Everything the frame driver advances: shared state, entities, RNG
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Shared score/difficulty context
    pub state: GameState,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// The player
    pub player: Player,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds until idle mode may move the player again
    pub autopilot_cooldown: f32,
    /// Seeded RNG driving enemy respawns
    pub rng: Pcg32,
}

impl World {
    /// Create a new world with the given seed
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let state = GameState::new(settings);
        let mut rng = Pcg32::seed_from_u64(seed);

        let enemies = (0..settings.enemy_count)
            .map(|_| Enemy::new(&state, &mut rng))
            .collect();
        let player = Player::new(settings.tuning.hit_offset);

        Self {
            seed,
            state,
            enemies,
            player,
            phase: GamePhase::Playing,
            time_ticks: 0,
            autopilot_cooldown: 0.0,
            rng,
        }
    }

    /// Current score
    pub fn score(&self) -> i64 {
        self.state.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(&Settings::default())
    }

    #[test]
    fn test_new_state() {
        let state = state();
        assert_eq!(state.score, 0);
        assert_eq!(state.min_enemy_speed, 100.0);
        assert_eq!(state.max_enemy_speed, 400.0);
        assert_eq!(state.enemy_rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_record_score_speeds_up() {
        let mut state = state();
        state.record_score();
        assert_eq!(state.score, 20);
        assert!((state.min_enemy_speed - 120.0).abs() < 1e-3);
        assert!((state.max_enemy_speed - 480.0).abs() < 1e-3);
        assert_eq!(state.events, vec![GameEvent::Scored { score: 20 }]);
    }

    #[test]
    fn test_record_kill_slows_down() {
        let mut state = state();
        state.record_kill();
        assert_eq!(state.score, -10);
        assert!((state.min_enemy_speed - 80.0).abs() < 1e-3);
        assert!((state.max_enemy_speed - 320.0).abs() < 1e-3);
        assert_eq!(state.events, vec![GameEvent::Killed { score: -10 }]);
    }

    #[test]
    fn test_record_kill_respects_floors() {
        let mut state = state();
        for _ in 0..50 {
            state.record_kill();
        }
        assert_eq!(state.min_enemy_speed, 10.0);
        assert_eq!(state.max_enemy_speed, 40.0);
        assert_eq!(state.score, -500);
    }

    #[test]
    fn test_speed_bounds_stay_finite_after_many_scores() {
        let mut state = state();
        for _ in 0..1000 {
            state.record_score();
        }
        assert!(state.min_enemy_speed.is_finite());
        assert!(state.max_enemy_speed.is_finite());
        assert!(state.min_enemy_speed <= state.max_enemy_speed);

        let mut rng = Pcg32::seed_from_u64(9);
        let mut enemy = Enemy::new(&GameState::new(&Settings::default()), &mut rng);
        enemy.reset(&state, &mut rng);
        assert!(enemy.speed.is_finite());
        assert!(enemy.speed >= state.min_enemy_speed);
        assert_eq!(enemy.x, -COLUMN_WIDTH);
    }

    #[test]
    fn test_enemy_speed_uses_current_bounds() {
        let mut state = state();
        state.record_score();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let speed = state.random_enemy_speed(&mut rng);
            assert!((120.0..=480.0 + 1e-3).contains(&speed));
        }
    }

    #[test]
    fn test_world_spawns_enemies_off_screen() {
        let world = World::new(&Settings::default(), 12345);
        assert_eq!(world.enemies.len(), ENEMY_COUNT);
        for enemy in &world.enemies {
            assert_eq!(enemy.x, -COLUMN_WIDTH);
            assert!(ENEMY_ROWS.contains(&enemy.row));
        }
        assert_eq!((world.player.column, world.player.row), (2, 5));
        assert_eq!(world.phase, GamePhase::Playing);
    }
}
