//! Input sampling: merge digital keys and an analog stick into one
//! per-frame movement intent.

use glam::Vec2;

use crate::consts::{DEAD_ZONE, MOVE_STEP};

/// Boolean state of the four directional keys, maintained by the host's
/// key event callbacks. Callbacks only flip these flags; movement is
/// applied inside the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStates {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Raw two-axis reading from the one polled analog device, each axis in
/// [-1, 1]. Absent device means no snapshot at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PadAxes {
    pub x: f32,
    pub y: f32,
}

fn dead_zone(axis: f32) -> f32 {
    if axis.abs() < DEAD_ZONE { 0.0 } else { axis }
}

/// Merge both input sources into a pixel-delta intent for this frame.
///
/// Keys contribute a fixed step per direction; analog axes contribute
/// their raw value scaled by the same step after dead-zone filtering.
/// The two are additive and the result is not normalized, so digital
/// and analog input compound.
pub fn sample(keys: &KeyStates, pad: Option<PadAxes>) -> Vec2 {
    let mut intent = Vec2::ZERO;

    if keys.up {
        intent.y -= MOVE_STEP;
    }
    if keys.down {
        intent.y += MOVE_STEP;
    }
    if keys.left {
        intent.x -= MOVE_STEP;
    }
    if keys.right {
        intent.x += MOVE_STEP;
    }

    if let Some(axes) = pad {
        intent.x += dead_zone(axes.x) * MOVE_STEP;
        intent.y += dead_zone(axes.y) * MOVE_STEP;
    }

    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_no_intent() {
        assert_eq!(sample(&KeyStates::default(), None), Vec2::ZERO);
    }

    #[test]
    fn keys_contribute_fixed_steps() {
        let keys = KeyStates {
            up: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(sample(&keys, None), Vec2::new(-MOVE_STEP, -MOVE_STEP));
    }

    #[test]
    fn opposing_keys_cancel() {
        let keys = KeyStates {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(sample(&keys, None), Vec2::ZERO);
    }

    #[test]
    fn axes_below_dead_zone_read_as_zero() {
        let pad = PadAxes { x: 0.19, y: -0.19 };
        assert_eq!(sample(&KeyStates::default(), Some(pad)), Vec2::ZERO);
    }

    #[test]
    fn axes_past_dead_zone_scale_by_step() {
        let pad = PadAxes { x: 0.5, y: -1.0 };
        let intent = sample(&KeyStates::default(), Some(pad));
        assert_eq!(intent, Vec2::new(0.5 * MOVE_STEP, -MOVE_STEP));
    }

    #[test]
    fn digital_and_analog_compound() {
        let keys = KeyStates {
            right: true,
            ..Default::default()
        };
        let pad = PadAxes { x: 1.0, y: 0.0 };
        let intent = sample(&keys, Some(pad));
        assert_eq!(intent.x, 2.0 * MOVE_STEP);
    }
}
