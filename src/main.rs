//! Bullet Board entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use bullet_board::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use bullet_board::platform::Key;
    use bullet_board::renderer::CanvasRenderer;
    use bullet_board::{GameLoop, Tuning};

    struct Game {
        game: GameLoop,
        renderer: CanvasRenderer,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bullet Board starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let tuning = match canvas.get_attribute("data-tuning") {
            Some(json) => Tuning::from_json_or_default(&json),
            None => Tuning::default(),
        };

        let renderer = match CanvasRenderer::new(&canvas, document) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("No 2d context: {:?}", e);
                return;
            }
        };
        let tick_ms = tuning.tick_ms;
        let game = Rc::new(RefCell::new(Game {
            game: GameLoop::new(tuning),
            renderer,
        }));

        setup_input_handlers(game.clone());
        start_interval(game, tick_ms);

        log::info!("Bullet Board running ({} ms per tick)", tick_ms);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        for (event_name, held) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().game.key_event(key, held);
                }
            });
            // Capture phase so the page never scrolls on arrow keys
            if let Err(e) = window.add_event_listener_with_callback_and_bool(
                event_name,
                closure.as_ref().unchecked_ref(),
                true,
            ) {
                log::warn!("Failed to listen for {}: {:?}", event_name, e);
            }
            closure.forget();
        }
    }

    fn start_interval(game: Rc<RefCell<Game>>, tick_ms: u32) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            let Game { game: battle, renderer } = &mut *g;
            battle.tick(renderer);
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            tick_ms as i32,
        ) {
            log::error!("Failed to start game loop: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bullet Board (native) starting...");
    log::info!("Native mode runs a scripted headless battle - use `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => bullet_board::Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path, e);
                bullet_board::Tuning::default()
            }
        },
        None => bullet_board::Tuning::default(),
    };
    run_headless(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Dodge through two attacks, picking FIGHT whenever the menu comes up
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(tuning: bullet_board::Tuning) {
    use bullet_board::GameLoop;
    use bullet_board::platform::Key;
    use bullet_board::renderer::RecordingRenderer;
    use bullet_board::sim::TurnPhase;

    let mut game = GameLoop::new(tuning);
    let mut renderer = RecordingRenderer::default();
    let mut turns = 0;

    while turns < 2 && game.state.time_ticks < 10_000 {
        let enemy_turn = game.state.world.phase == TurnPhase::EnemyTurn;
        // Weave up and down while bullets fly
        let phase = (game.state.time_ticks / 40) % 2 == 0;
        game.key_event(Key::Up, enemy_turn && phase);
        game.key_event(Key::Down, enemy_turn && !phase);

        let highlighted = game
            .state
            .entities
            .get(bullet_board::sim::state::MENU_ID)
            .and_then(|e| e.as_menu())
            .is_some_and(|m| m.highlight().is_some());
        if !enemy_turn && highlighted {
            game.key_event(Key::Confirm, true);
            game.key_event(Key::Confirm, false);
            turns += 1;
        }

        game.tick(&mut renderer);
    }

    let player = &game.state.world.player;
    log::info!(
        "Finished after {} ticks: health {}/{}, {} bullets live, {} draw calls last frame",
        game.state.time_ticks,
        player.health,
        player.max_health,
        game.state.world.bullets.len(),
        renderer.commands.len()
    );
    match renderer.to_json() {
        Ok(json) => log::debug!("Last frame: {}", json),
        Err(e) => log::warn!("Could not serialize last frame: {}", e),
    }
}
