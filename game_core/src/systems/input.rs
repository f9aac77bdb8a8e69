use crate::resources::{Controls, InputState, Key};

/// Snapshot the latest input into the control signals for one step
pub fn sample_input(input: &InputState) -> Controls {
    Controls {
        up: input.any_held(Key::is_up),
        down: input.any_held(Key::is_down),
        pointer_y: input.pointer_y,
    }
}
