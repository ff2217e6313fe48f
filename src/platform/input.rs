//! Gamepad polling via the browser Gamepad API.
//!
//! The sampler reads at most one connected pad per frame: the first
//! non-null slot. A missing or disconnected pad is simply no snapshot.

use wasm_bindgen::JsCast;
use web_sys::Gamepad;

use crate::sim::PadAxes;

/// One frame's reading of the primary analog device
#[derive(Debug, Clone, Copy, Default)]
pub struct PadSnapshot {
    pub axes: PadAxes,
    /// Primary ("A") button state, used as the restart trigger while
    /// the game is over
    pub primary_pressed: bool,
}

/// Poll the first connected gamepad, if any. Synchronous and
/// non-blocking; returns whatever the browser last saw.
pub fn poll_primary_gamepad() -> Option<PadSnapshot> {
    let pads = web_sys::window()?.navigator().get_gamepads().ok()?;

    for slot in pads.iter() {
        let Ok(pad) = slot.dyn_into::<Gamepad>() else {
            continue;
        };

        let axes = pad.axes();
        let x = axes.get(0).as_f64().unwrap_or(0.0) as f32;
        let y = axes.get(1).as_f64().unwrap_or(0.0) as f32;

        let primary_pressed = pad
            .buttons()
            .get(0)
            .dyn_into::<web_sys::GamepadButton>()
            .map(|b| b.pressed())
            .unwrap_or(false);

        return Some(PadSnapshot {
            axes: PadAxes { x, y },
            primary_pressed,
        });
    }

    None
}
