use super::{unit, VisualState};
use crate::constants::{
    WORD_BLUR_MAX_PX, WORD_DIAGONAL_SPREAD, WORD_OFFSET_MAX_PX, WORD_REVEAL_GAIN,
};
use glam::Vec2;

/// Reveal amount in [0, 1] for word `index` of `total` at progress `p`.
///
/// Later words need proportionally more progress, which gives a diagonal
/// left-to-right wipe. The result is clamped, so overshooting progress is
/// harmless.
pub fn word_reveal_amount(index: usize, total: usize, p: f32) -> f32 {
    let diagonal = if total == 0 {
        0.0
    } else {
        index as f32 / total as f32
    };
    unit((p - diagonal * WORD_DIAGONAL_SPREAD) * WORD_REVEAL_GAIN)
}

/// Visual state of one tagline word; blur and offset shrink as it reveals.
pub fn word_reveal(index: usize, total: usize, p: f32) -> VisualState {
    let amount = word_reveal_amount(index, total, p);
    let hidden = 1.0 - amount;
    VisualState {
        visible: amount > 0.0,
        opacity: amount,
        blur_px: hidden * WORD_BLUR_MAX_PX,
        translate: Vec2::new(-hidden * WORD_OFFSET_MAX_PX, hidden * WORD_OFFSET_MAX_PX),
        explosion_active: false,
    }
}
