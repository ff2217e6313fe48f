//! Lane Leap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use lane_leap::audio::{AudioManager, SoundEffect};
    use lane_leap::platform::LocalStorage;
    use lane_leap::platform::input::poll_primary_gamepad;
    use lane_leap::render::{self, DomSurface, RenderSurface};
    use lane_leap::sim::{GameEvent, GameState, KeyStates, TickInput, tick};
    use lane_leap::{Leaderboard, Settings};

    /// Game instance holding simulation state and collaborators
    struct Game {
        state: GameState,
        keys: KeyStates,
        surface: DomSurface,
        audio: AudioManager,
        store: LocalStorage,
        settings: Settings,
    }

    impl Game {
        fn new(seed: u64, surface: DomSurface) -> Self {
            let store = LocalStorage::new();
            let settings = Settings::load(&store);
            let mut audio = AudioManager::new();
            audio.set_volume(settings.effective_volume());

            Self {
                state: GameState::new(seed),
                keys: KeyStates::default(),
                surface,
                audio,
                store,
                settings,
            }
        }

        /// Explicit restart: fresh state and seed, restart control hidden.
        /// The page never reloads.
        fn restart(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.state = GameState::new(seed);
            self.keys = KeyStates::default();
            self.surface.set_restart_visible(false);
            log::info!("Game restarted with seed: {seed}");
        }

        /// One animation frame: poll the pad, tick, react, draw
        fn frame(&mut self) {
            let pad = poll_primary_gamepad();

            // The pad's primary button doubles as the restart trigger
            if self.state.game_over && pad.is_some_and(|p| p.primary_pressed) {
                self.restart();
            }

            let input = TickInput {
                keys: self.keys,
                pad: pad.map(|p| p.axes),
            };

            for event in tick(&mut self.state, &input) {
                match event {
                    GameEvent::RoundWon { .. } => {
                        self.audio.play(SoundEffect::RoundWin);
                    }
                    GameEvent::GameOver { score } => {
                        self.audio.play(SoundEffect::GameOver);
                        let board = Leaderboard::record(&mut self.store, score);
                        self.surface.show_leaderboard(&board);
                        self.surface.set_restart_visible(true);
                    }
                }
            }

            render::draw(&self.state, &mut self.surface);
        }

        fn toggle_sound(&mut self) {
            self.settings.sound_enabled = !self.settings.sound_enabled;
            self.settings.save(&mut self.store);
            self.audio.set_volume(self.settings.effective_volume());
            log::info!(
                "Sound {}",
                if self.settings.sound_enabled { "on" } else { "off" }
            );
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Lane Leap starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let surface = DomSurface::new(&document)?;
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, surface)));
        log::info!("Game initialized with seed: {seed}");

        // Past scores are visible before the first game ends
        {
            let mut g = game.borrow_mut();
            let board = Leaderboard::load(&g.store);
            g.surface.show_leaderboard(&board);
            g.surface.set_restart_visible(false);
        }

        setup_key_handlers(&window, game.clone());
        setup_restart_button(&document, game.clone())?;
        setup_gamepad_logging(&window);

        request_animation_frame(game);

        log::info!("Lane Leap running!");
        Ok(())
    }

    /// Key events only flip intent flags; movement is applied in the tick
    fn setup_key_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().to_lowercase().as_str() {
                    "w" | "arrowup" => g.keys.up = true,
                    "s" | "arrowdown" => g.keys.down = true,
                    "a" | "arrowleft" => g.keys.left = true,
                    "d" | "arrowright" => g.keys.right = true,
                    "m" => g.toggle_sound(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().to_lowercase().as_str() {
                    "w" | "arrowup" => g.keys.up = false,
                    "s" | "arrowdown" => g.keys.down = false,
                    "a" | "arrowleft" => g.keys.left = false,
                    "d" | "arrowright" => g.keys.right = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let button = document
            .get_element_by_id("play-again")
            .ok_or("missing element #play-again")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut g = game.borrow_mut();
            if g.state.game_over {
                g.restart();
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_gamepad_logging(window: &web_sys::Window) {
        for (name, label) in [
            ("gamepadconnected", "Gamepad connected"),
            ("gamepaddisconnected", "Gamepad disconnected"),
        ] {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::info!("{label}");
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Reschedules itself every frame; the loop never terminates, only
    /// gameplay freezes on game over.
    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        log::error!("Startup failed: {err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: drive a scripted run and print the leaderboard.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_leap::platform::MemoryStore;
    use lane_leap::render::{self, NullSurface};
    use lane_leap::sim::{GameEvent, GameState, KeyStates, TickInput, tick};
    use lane_leap::{Leaderboard, Settings};

    env_logger::init();
    log::info!("Lane Leap (native) starting...");
    log::info!("Headless demo - run the wasm build for the playable game");

    let mut store = MemoryStore::new();
    let settings = Settings::load(&store);
    log::info!("Sound enabled: {}", settings.sound_enabled);

    let seed = 0xC0FFEE;
    let mut state = GameState::new(seed);
    let mut surface = NullSurface;
    let input = TickInput {
        keys: KeyStates {
            up: true,
            ..Default::default()
        },
        pad: None,
    };

    // Hold "up" until traffic wins or we give up
    let mut final_board = None;
    for _ in 0..2_000 {
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::RoundWon { score } => log::info!("Crossed! Score: {score}"),
                GameEvent::GameOver { score } => {
                    log::info!("Hit at score {score}");
                    final_board = Some(Leaderboard::record(&mut store, score));
                }
            }
        }
        render::draw(&state, &mut surface);
        if state.game_over {
            break;
        }
    }

    let board = final_board.unwrap_or_else(|| Leaderboard::record(&mut store, state.score));
    println!("Final score: {}", state.score);
    for (index, entry) in board.entries.iter().enumerate() {
        println!("#{}: {} ({})", index + 1, entry.score, entry.timestamp);
    }
}
