use bug_crossing::Settings;
use bug_crossing::consts::*;
use bug_crossing::demo::run_demo;
use bug_crossing::renderer::{RecordingCanvas, render_world};
use bug_crossing::sim::{Direction, GameEvent, TickInput, World, tick};

const DT: f32 = 1.0 / 60.0;

fn world(seed: u64) -> World {
    World::new(&Settings::default(), seed)
}

fn press(direction: Direction) -> TickInput {
    TickInput {
        direction: Some(direction),
        ..Default::default()
    }
}

/// Keep every enemy parked off-screen so only the scenario's enemy matters
fn park_enemies(world: &mut World) {
    for enemy in &mut world.enemies {
        enemy.x = -COLUMN_WIDTH;
        enemy.speed = 0.0;
    }
}

#[test]
fn test_enemy_on_player_hitbox_kills() {
    let mut world = world(1);
    park_enemies(&mut world);

    // Player at column 2: hitbox 242..263
    let hitbox = world.player.hitbox(&world.state.grid);
    assert_eq!((hitbox.left, hitbox.right), (242.0, 263.0));

    world.enemies[0].row = 5;
    world.enemies[0].x = 250.0;
    assert!(world.enemies[0].collides_with_player(&world.player, &world.state.grid));

    tick(&mut world, &TickInput::default(), DT);

    assert_eq!(world.state.events, vec![GameEvent::Killed { score: -10 }]);
    assert_eq!(world.score(), -10);
    assert!((world.state.min_enemy_speed - 80.0).abs() < 1e-3);
    assert!((world.state.max_enemy_speed - 320.0).abs() < 1e-3);
    assert_eq!((world.player.column, world.player.row), (2, 5));
}

#[test]
fn test_overlap_kills_once_per_frame() {
    let mut world = world(2);
    park_enemies(&mut world);
    world.enemies[0].row = 5;
    world.enemies[0].x = 250.0;

    for frame in 1..=3 {
        tick(&mut world, &TickInput::default(), DT);
        assert_eq!(world.state.events.len(), 1);
        assert_eq!(world.score(), -10 * frame);
    }
}

#[test]
fn test_five_ups_score_exactly_once() {
    let mut world = world(3);
    park_enemies(&mut world);

    let mut scored = 0;
    for expected_row in [4, 3, 2, 1] {
        tick(&mut world, &press(Direction::Up), DT);
        assert_eq!(world.player.row, expected_row);
        scored += world.state.events.len();
    }
    assert_eq!(scored, 0);

    tick(&mut world, &press(Direction::Up), DT);
    assert_eq!(world.state.events, vec![GameEvent::Scored { score: 20 }]);
    assert!((world.state.min_enemy_speed - 120.0).abs() < 1e-3);
    assert!((world.state.max_enemy_speed - 480.0).abs() < 1e-3);
    assert_eq!((world.player.column, world.player.row), (2, 5));
}

#[test]
fn test_enemy_crosses_then_respawns() {
    let mut world = world(4);
    let speed = world.enemies[0].speed;
    assert!(speed > 0.0);

    let width = world.state.grid.width();
    let mut last_x = world.enemies[0].x;
    let mut respawned = false;

    // Long enough for the slowest enemy to cross
    for _ in 0..(60 * 10) {
        tick(&mut world, &TickInput::default(), DT);
        let enemy = &world.enemies[0];
        if enemy.x < last_x {
            // Previous frame was the last one on screen
            assert!(last_x + speed * DT > width);
            assert_eq!(enemy.x, -COLUMN_WIDTH);
            assert!(ENEMY_ROWS.contains(&enemy.row));
            assert_eq!(enemy.y, ROW_HEIGHT * enemy.row as f32 + ENEMY_SPRITE_OFFSET_Y);
            respawned = true;
            break;
        }
        assert!(enemy.x > last_x);
        last_x = enemy.x;
    }
    assert!(respawned);
}

#[test]
fn test_render_after_score_shows_new_score() {
    let mut world = world(5);
    park_enemies(&mut world);
    world.player.row = 1;
    tick(&mut world, &press(Direction::Up), DT);

    let mut canvas = RecordingCanvas::new();
    render_world(&world, &mut canvas);
    assert!(
        canvas
            .commands()
            .iter()
            .any(|c| matches!(c, bug_crossing::renderer::DrawCommand::Text { text, .. } if text == "Score: 20"))
    );
    assert_eq!(
        canvas.positions_of(PLAYER_SPRITE),
        vec![glam::Vec2::new(202.0, 385.0)]
    );
}

#[test]
fn test_idle_demo_crosses_the_board() {
    let mut world = world(2024);
    let mut canvas = RecordingCanvas::new();
    let summary = run_demo(&mut world, 60 * 60, &mut canvas);

    assert!(summary.scores >= 1, "autopilot never crossed: {:?}", summary);
    assert!(world.state.grid.contains(world.player.column, world.player.row));
}
