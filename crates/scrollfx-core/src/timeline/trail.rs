//! Skills-section decorations that follow the geometry progress directly.

use super::entrance::Entrance;
use crate::constants::*;
use glam::Vec2;

/// Drawn length of a path of `length` at `progress`.
pub fn path_draw(progress: f32, length: f32) -> f32 {
    progress.clamp(0.0, 1.0) * length
}

/// `stroke-dasharray` of the rocket trail: one dash as long as the path, so
/// an offset of the same length hides it entirely.
#[inline]
pub fn trail_dash_array() -> f32 {
    TRAIL_PATH_LENGTH
}

/// `stroke-dashoffset` of the rocket trail. The trail leads the section by
/// the same lead-in the skill items use.
pub fn trail_dash_offset(p: f32) -> f32 {
    let drawn = (p + SKILL_LEAD_IN) * TRAIL_PATH_LENGTH * TRAIL_DRAW_RATIO;
    (TRAIL_PATH_LENGTH - drawn).clamp(0.0, TRAIL_PATH_LENGTH)
}

/// Whether the star-field backdrop is shown.
#[inline]
pub fn backdrop_visible(p: f32) -> bool {
    p > BACKDROP_REVEAL_AT
}

/// Closing message after the last skill. Sees overshoot values, so the
/// opacity is capped at 1.
pub fn journey_end(p: f32) -> Entrance {
    let opacity = if p > JOURNEY_END_AT {
        ((p - JOURNEY_END_AT) * JOURNEY_END_GAIN).min(1.0)
    } else {
        0.0
    };
    Entrance {
        opacity,
        scale: 1.0,
        translate: Vec2::new(0.0, ((1.0 - opacity) * JOURNEY_END_OFFSET_PX).max(0.0)),
    }
}
