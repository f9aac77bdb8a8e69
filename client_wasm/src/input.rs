//! Keyboard and pointer input handling

use game_core::InputState;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

/// Handle key down event
pub fn handle_key_down(input: &mut InputState, event: &KeyboardEvent) {
    input.key_down(&event.key());
}

/// Handle key up event
pub fn handle_key_up(input: &mut InputState, event: &KeyboardEvent) {
    input.key_up(&event.key());
}

/// Record the pointer's height relative to the canvas origin
pub fn handle_pointer_move(input: &mut InputState, event: &MouseEvent, canvas: &HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    input.pointer_moved((event.client_y() as f64 - rect.top()) as f32);
}
