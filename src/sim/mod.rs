//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (enemies in spawn order, then the player)
//! - Drawing goes through the `Canvas` trait only

pub mod collision;
pub mod enemy;
pub mod grid;
pub mod player;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, Span};
pub use enemy::Enemy;
pub use grid::Grid;
pub use player::{Direction, Player};
pub use rng::{pick_random, random_int};
pub use state::{GameEvent, GamePhase, GameState, World};
pub use tick::{TickInput, cell_is_clear, tick};
