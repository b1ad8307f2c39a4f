//! Per-frame simulation step
//!
//! Each frame every enemy advances (possibly catching the player), then the
//! player applies its buffered move (possibly scoring).

use super::player::Direction;
use super::state::{GamePhase, World};

/// Seconds idle mode waits between moves
pub const AUTOPILOT_STEP_SECS: f32 = 0.25;
/// How far ahead idle mode checks a row for incoming enemies
pub const AUTOPILOT_LOOKAHEAD_SECS: f32 = 0.5;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Direction released since the last frame, if any
    pub direction: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the world by `dt` seconds of wall-clock time
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        world.phase = match world.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
        };
        log::info!("Phase: {:?}", world.phase);
    }

    if world.phase == GamePhase::Paused {
        return;
    }

    world.state.events.clear();
    world.time_ticks += 1;

    let direction = if input.idle_mode {
        autopilot(world, dt)
    } else {
        input.direction
    };
    world.player.handle_input(direction);

    for enemy in &mut world.enemies {
        enemy.update(dt, &mut world.state, &mut world.player, &mut world.rng);
    }

    world.player.update(&mut world.state);
}

/// Whether no enemy will cover `column` on `row` within `lookahead` seconds
pub fn cell_is_clear(world: &World, column: u32, row: u32, lookahead: f32) -> bool {
    let grid = &world.state.grid;
    let left = column as f32 * grid.column_width;
    let right = left + grid.column_width;

    world
        .enemies
        .iter()
        .filter(|e| e.row == row)
        .all(|e| {
            let reach = e.x + grid.column_width + e.speed * lookahead;
            reach < left || e.x > right
        })
}

/// Pick the next move for idle mode: advance when the row above is clear,
/// back off when the current row is about to be crossed.
fn autopilot(world: &mut World, dt: f32) -> Option<Direction> {
    world.autopilot_cooldown = (world.autopilot_cooldown - dt).max(0.0);
    if world.autopilot_cooldown > 0.0 {
        return None;
    }

    let grid = world.state.grid;
    let player = &world.player;
    let column = player.column;

    let choice = if player.row > 0
        && cell_is_clear(world, column, player.row - 1, AUTOPILOT_LOOKAHEAD_SECS)
    {
        Some(Direction::Up)
    } else if !cell_is_clear(world, column, player.row, AUTOPILOT_LOOKAHEAD_SECS)
        && player.row < grid.last_row()
        && cell_is_clear(world, column, player.row + 1, AUTOPILOT_LOOKAHEAD_SECS)
    {
        Some(Direction::Down)
    } else {
        None
    };

    if choice.is_some() {
        world.autopilot_cooldown = AUTOPILOT_STEP_SECS;
    }
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::state::GameEvent;

    fn world() -> World {
        World::new(&Settings::default(), 12345)
    }

    fn park_enemies(world: &mut World) {
        for enemy in &mut world.enemies {
            enemy.x = -COLUMN_WIDTH;
            enemy.speed = 0.0;
        }
    }

    #[test]
    fn test_tick_moves_enemies() {
        let mut world = world();
        let before: Vec<f32> = world.enemies.iter().map(|e| e.x).collect();
        tick(&mut world, &TickInput::default(), 1.0 / 60.0);
        for (enemy, x) in world.enemies.iter().zip(before) {
            assert!(enemy.x > x);
        }
        assert_eq!(world.time_ticks, 1);
    }

    #[test]
    fn test_tick_applies_one_direction() {
        let mut world = world();
        park_enemies(&mut world);
        let input = TickInput {
            direction: Some(Direction::Left),
            ..Default::default()
        };
        tick(&mut world, &input, 1.0 / 60.0);
        assert_eq!(world.player.column, 1);
        tick(&mut world, &TickInput::default(), 1.0 / 60.0);
        assert_eq!(world.player.column, 1);
    }

    #[test]
    fn test_tick_pause() {
        let mut world = world();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut world, &pause, 1.0 / 60.0);
        assert_eq!(world.phase, GamePhase::Paused);

        let before: Vec<f32> = world.enemies.iter().map(|e| e.x).collect();
        tick(&mut world, &TickInput::default(), 1.0);
        let after: Vec<f32> = world.enemies.iter().map(|e| e.x).collect();
        assert_eq!(before, after);

        // Unpause
        tick(&mut world, &pause, 1.0 / 60.0);
        assert_eq!(world.phase, GamePhase::Playing);
    }

    #[test]
    fn test_kill_before_player_move_in_same_frame() {
        let mut world = world();
        park_enemies(&mut world);
        world.enemies[0].row = PLAYER_START_ROW;
        world.enemies[0].x = 250.0;

        let input = TickInput {
            direction: Some(Direction::Up),
            ..Default::default()
        };
        tick(&mut world, &input, 1.0 / 60.0);

        // The kill reset clears the buffered move before the player updates
        assert_eq!(world.state.events, vec![GameEvent::Killed { score: -10 }]);
        assert_eq!((world.player.column, world.player.row), (2, 5));
    }

    #[test]
    fn test_events_cleared_each_frame() {
        let mut world = world();
        park_enemies(&mut world);
        world.player.row = 1;
        let up = TickInput {
            direction: Some(Direction::Up),
            ..Default::default()
        };
        tick(&mut world, &up, 1.0 / 60.0);
        assert_eq!(world.state.events, vec![GameEvent::Scored { score: 20 }]);
        tick(&mut world, &TickInput::default(), 1.0 / 60.0);
        assert!(world.state.events.is_empty());
    }

    #[test]
    fn test_cell_is_clear() {
        let mut world = world();
        park_enemies(&mut world);
        world.enemies[0].row = 2;
        world.enemies[0].x = 0.0;
        world.enemies[0].speed = 400.0;

        // Reaches column 2 (202..303) within half a second
        assert!(!cell_is_clear(&world, 2, 2, 0.5));
        // Other rows unaffected
        assert!(cell_is_clear(&world, 2, 4, 0.5));
        // Already past the column
        world.enemies[0].x = 310.0;
        assert!(cell_is_clear(&world, 2, 2, 0.5));
    }

    #[test]
    fn test_idle_mode_advances_when_clear() {
        let mut world = world();
        park_enemies(&mut world);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut world, &idle, 1.0 / 60.0);
        assert_eq!(world.player.row, 4);

        // Cooldown holds the next move
        tick(&mut world, &idle, 1.0 / 60.0);
        assert_eq!(world.player.row, 4);
    }

    #[test]
    fn test_determinism() {
        // Two worlds with same seed should produce identical results
        let settings = Settings::default();
        let mut world1 = World::new(&settings, 99999);
        let mut world2 = World::new(&settings, 99999);

        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut world1, &idle, DEMO_DT);
            tick(&mut world2, &idle, DEMO_DT);
        }

        assert_eq!(world1.enemies, world2.enemies);
        assert_eq!(world1.player, world2.player);
        assert_eq!(world1.score(), world2.score());
    }
}
