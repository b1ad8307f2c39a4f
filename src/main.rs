//! Bug Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, anyhow};
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use bug_crossing::Settings;
    use bug_crossing::consts::*;
    use bug_crossing::input::{self, Command};
    use bug_crossing::renderer::{WebCanvas, render_world};
    use bug_crossing::sim::{GameEvent, GamePhase, TickInput, World, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        settings: Settings,
        canvas: WebCanvas,
        last_time: f64,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(settings: Settings, canvas: WebCanvas, seed: u64) -> Self {
            Self {
                world: World::new(&settings, seed),
                settings,
                canvas,
                last_time: 0.0,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation step
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(MAX_FRAME_DT);
            tick(&mut self.world, &self.input, dt);

            // Clear one-shot inputs after processing
            self.input.direction = None;
            self.input.pause = false;

            for event in &self.world.state.events {
                if let GameEvent::Scored { score } = event {
                    log::debug!("Crossing complete at tick {}, score {}", self.world.time_ticks, score);
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            render_world(&self.world, &mut self.canvas);

            if self.settings.show_fps {
                let label = format!("{} fps", self.fps);
                self.canvas.draw_label(&label, Vec2::new(CANVAS_WIDTH as f32 - 80.0, 70.0));
            }
            if self.world.phase == GamePhase::Paused {
                self.canvas.draw_label("Paused", Vec2::new(220.0, 300.0));
            }
        }
    }

    pub fn run() -> anyhow::Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow!("failed to init logger: {}", e))?;

        log::info!("Bug Crossing starting...");

        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .context("no canvas")?
            .dyn_into()
            .map_err(|_| anyhow!("#canvas is not a canvas"))?;
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let mut web_canvas = WebCanvas::new(&canvas)?;
        web_canvas.preload(&[
            ENEMY_SPRITE,
            PLAYER_SPRITE,
            WATER_TILE,
            STONE_TILE,
            GRASS_TILE,
        ])?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(settings, web_canvas, seed)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Bug Crossing running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Moves are taken on key release; unknown keys are ignored
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(direction) = input::direction_from_event(&event) {
                    game.borrow_mut().input.direction = Some(direction);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match input::command_from_key(&event.key()) {
                    Some(Command::Pause) => g.input.pause = true,
                    Some(Command::ToggleIdle) => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    Some(Command::ToggleFps) => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.settings.save();
                    }
                    None => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
        }

        request_animation_frame(game);
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.world.phase == GamePhase::Playing {
                        g.input.pause = true;
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.world.phase == GamePhase::Playing {
                    g.input.pause = true;
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Bug Crossing failed to start: {:#}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use bug_crossing::Settings;
    use bug_crossing::demo::run_demo;
    use bug_crossing::renderer::RecordingCanvas;
    use bug_crossing::sim::World;

    env_logger::init();
    log::info!("Bug Crossing (native) starting...");
    log::info!("Native mode runs a headless idle-mode demo - build for wasm32 to play");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::from_file(Path::new(&path))?,
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut world = World::new(&settings, seed);
    let mut canvas = RecordingCanvas::new();
    let summary = run_demo(&mut world, settings.demo_frames, &mut canvas);

    println!(
        "seed {}: {} frames, {} crossings, {} catches, final score {}",
        seed, summary.frames, summary.scores, summary.kills, summary.final_score
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
