//! Breakout entry point
//!
//! Browser builds mount the game on a canvas; native builds play a headless
//! demo game with the autopilot and report the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use breakout::platform::{FrameOutcome, GameLoop, relative_pointer_x};
    use breakout::renderer::CanvasSurface;
    use breakout::ui::{LOSE_BANNER, WIN_BANNER};
    use breakout::{Settings, Shell};

    /// Game instance holding all state
    struct Game {
        shell: Shell,
        surface: CanvasSurface,
        game_loop: GameLoop,
        /// A frame is scheduled or running
        running: bool,
    }

    impl Game {
        /// Run one frame; returns whether another should be scheduled
        fn step(&mut self) -> bool {
            let outcome = self
                .game_loop
                .frame(&mut self.shell.state, &mut (), &mut self.surface);
            self.update_hud();
            match outcome {
                FrameOutcome::Continue(_) => true,
                FrameOutcome::Finished(status) => {
                    log::info!("Game over: {:?} with {}", status, self.shell.score_label());
                    self.running = false;
                    false
                }
            }
        }

        /// Update score and banners in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.shell.score_label()));
            }

            let banner = self.shell.banner();
            for (id, text) in [("win-banner", WIN_BANNER), ("lose-banner", LOSE_BANNER)] {
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.class_list().toggle_with_force("hidden", banner != Some(text));
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Breakout starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("breakout-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Missing #breakout-canvas element");
            return;
        };

        let settings = Settings::load();
        canvas.set_width(settings.field_width as u32);
        canvas.set_height(settings.field_height as u32);

        let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game_loop = GameLoop::from_settings(&settings);
        let game = Rc::new(RefCell::new(Game {
            shell: Shell::new(seed, settings),
            surface,
            game_loop,
            running: true,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_pointer(&canvas, game.clone());
        setup_restart_buttons(game.clone());

        game.borrow().update_hud();
        schedule_frame(game);
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let left = canvas.get_bounding_client_rect().left() as f32;
            let x = relative_pointer_x(event.client_x() as f32, left);
            game.borrow_mut().shell.state.apply_pointer(x);
        });
        let _ = window
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["win-restart-btn", "lose-restart-btn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{id} element");
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let resume = {
                    let mut g = game.borrow_mut();
                    g.shell.restart();
                    g.update_hud();
                    let resume = !g.running;
                    g.running = true;
                    resume
                };
                log::info!(
                    "Game restarted ({} finished so far)",
                    game.borrow().shell.games_finished
                );
                if resume {
                    schedule_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let delay = game.borrow().game_loop.frame_interval().as_millis() as i32;
        let closure = Closure::once(move || {
            let again = game.borrow_mut().step();
            if again {
                schedule_frame(game);
            }
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        ) {
            log::error!("Failed to schedule frame: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames the headless demo plays before giving up on a looping ball
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAME_LIMIT: u64 = 200_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use breakout::platform::{Autopilot, GameLoop};
    use breakout::renderer::RecordingSurface;
    use breakout::{Settings, Shell};

    env_logger::init();
    log::info!("Breakout (native, headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut shell = Shell::new(seed, settings);
    let mut surface = RecordingSurface::new(true);
    let mut game_loop = GameLoop::new(Duration::ZERO).with_max_frames(HEADLESS_FRAME_LIMIT);

    game_loop.run(&mut shell.state, &mut Autopilot, &mut surface);

    println!(
        "{} after {} frames",
        shell.banner().unwrap_or("Still playing"),
        game_loop.frames()
    );
    println!(
        "{} ({} of {} bricks)",
        shell.score_label(),
        shell.state.bricks.destroyed_count(),
        shell.state.total_bricks()
    );
}
