//! WebGPU client for Pong
//!
//! Owns the browser side of the game: DOM input and button callbacks write
//! into a `game_core::Session`, and an animation-frame loop advances it and
//! draws every frame with wgpu.
//!
//! Note: Canvas surfaces are only available when compiling for wasm32 target

#![cfg(target_arch = "wasm32")]

mod camera;
mod input;
mod mesh;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{ScoreSink, Session};
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent};

const CANVAS_ID: &str = "pongCanvas";
const START_BUTTON_ID: &str = "startBtn";
const RESET_BUTTON_ID: &str = "resetBtn";
const PLAYER_SCORE_ID: &str = "playerScore";
const COMPUTER_SCORE_ID: &str = "computerScore";

/// Score text on the page
struct Scoreboard {
    player: Option<Element>,
    computer: Option<Element>,
}

impl Scoreboard {
    fn find(document: &Document) -> Self {
        let player = document.get_element_by_id(PLAYER_SCORE_ID);
        let computer = document.get_element_by_id(COMPUTER_SCORE_ID);
        if player.is_none() || computer.is_none() {
            log::warn!("Score elements missing, scores will not be shown");
        }
        Self { player, computer }
    }
}

impl ScoreSink for Scoreboard {
    fn scores_changed(&mut self, player: u32, computer: u32) {
        if let Some(el) = &self.player {
            el.set_text_content(Some(&player.to_string()));
        }
        if let Some(el) = &self.computer {
            el.set_text_content(Some(&computer.to_string()));
        }
    }
}

/// Everything the frame loop and the event callbacks share
struct Game {
    session: Session,
    renderer: Renderer,
    scoreboard: Scoreboard,
    start_button: Option<Element>,
}

impl Game {
    /// One display refresh. Render errors are logged and the loop keeps going.
    fn frame(&mut self) {
        let scene = self.session.frame(&mut self.scoreboard);
        if let Err(e) = self.renderer.draw(&scene) {
            log::error!("Render error: {}", e);
        }
    }

    fn toggle(&mut self) -> &'static str {
        let label = self.session.toggle_run();
        if let Some(btn) = &self.start_button {
            btn.set_text_content(Some(label));
        }
        label
    }

    fn reset(&mut self) {
        self.session.reset(&mut self.scoreboard);
    }
}

thread_local! {
    static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
}

/// Find the canvas, set up WebGPU, wire the page and start the frame loop
#[wasm_bindgen]
pub fn start() -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        match run().await {
            Ok(()) => Ok(JsValue::UNDEFINED),
            Err(e) => {
                log::error!("Startup failed: {}", e);
                Err(JsValue::from_str(&e))
            }
        }
    })
}

/// Start or pause the game; returns the new button label
#[wasm_bindgen]
pub fn toggle_game() -> Result<String, JsValue> {
    with_game(|game| game.toggle().to_string())
}

/// Zero both scores and re-serve the ball
#[wasm_bindgen]
pub fn reset_score() -> Result<(), JsValue> {
    with_game(Game::reset)
}

fn with_game<T>(f: impl FnOnce(&mut Game) -> T) -> Result<T, JsValue> {
    GAME.with(|slot| match slot.borrow().as_ref() {
        Some(game) => Ok(f(&mut game.borrow_mut())),
        None => Err(JsValue::from_str("Game not started")),
    })
}

async fn run() -> Result<(), String> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialised");
    }

    log::info!("Pong starting...");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| format!("no #{} element", CANVAS_ID))?
        .dyn_into()
        .map_err(|_| format!("#{} is not a canvas", CANVAS_ID))?;

    // Surface size is read once; the arena never resizes
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let seed = js_sys::Date::now() as u64;
    let session = Session::new(width, height, seed);

    log::info!("Arena {}x{}, seed {}", width, height, seed);

    let renderer = Renderer::new(canvas.clone()).await?;

    let start_button = document.get_element_by_id(START_BUTTON_ID);
    if let Some(btn) = &start_button {
        btn.set_text_content(Some(session.run.label()));
    }

    let game = Rc::new(RefCell::new(Game {
        session,
        renderer,
        scoreboard: Scoreboard::find(&document),
        start_button,
    }));

    setup_input_handlers(&document, &canvas, game.clone())?;
    setup_controls(&document, game.clone())?;

    GAME.with(|slot| *slot.borrow_mut() = Some(game.clone()));

    // Start game loop
    request_animation_frame(game);

    log::info!("Pong running!");
    Ok(())
}

fn listen<T: ?Sized>(target: &EventTarget, kind: &str, closure: &Closure<T>) -> Result<(), String> {
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to listen for {}: {:?}", kind, e))
}

fn setup_input_handlers(
    document: &Document,
    canvas: &HtmlCanvasElement,
    game: Rc<RefCell<Game>>,
) -> Result<(), String> {
    // Key down
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            input::handle_key_down(&mut game.borrow_mut().session.input, &event);
        });
        listen(document, "keydown", &closure)?;
        closure.forget();
    }

    // Key up
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            input::handle_key_up(&mut game.borrow_mut().session.input, &event);
        });
        listen(document, "keyup", &closure)?;
        closure.forget();
    }

    // Pointer move, relative to the canvas
    {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            input::handle_pointer_move(&mut game.borrow_mut().session.input, &event, &canvas);
        });
        listen(document, "mousemove", &closure)?;
        closure.forget();
    }

    Ok(())
}

fn setup_controls(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), String> {
    match document.get_element_by_id(START_BUTTON_ID) {
        Some(btn) => {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().toggle();
            });
            listen(&btn, "click", &closure)?;
            closure.forget();
        }
        None => log::warn!("No #{} button, use toggle_game() instead", START_BUTTON_ID),
    }

    match document.get_element_by_id(RESET_BUTTON_ID) {
        Some(btn) => {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().reset();
            });
            listen(&btn, "click", &closure)?;
            closure.forget();
        }
        None => log::warn!("No #{} button, use reset_score() instead", RESET_BUTTON_ID),
    }

    Ok(())
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        log::error!("Window gone, frame loop stopped");
        return;
    };
    let closure = Closure::<dyn FnMut(f64)>::once(move |_time: f64| {
        game_loop(game);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
        return;
    }
    closure.forget();
}

/// Sample input, step if running, redraw, then re-arm for the next refresh
fn game_loop(game: Rc<RefCell<Game>>) {
    game.borrow_mut().frame();
    request_animation_frame(game);
}
