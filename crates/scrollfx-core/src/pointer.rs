//! Pointer position normalized to the viewport.

use crate::constants::{GLOW_CENTER_PERCENT, PORTRAIT_PARALLAX_PX};
use glam::Vec2;

/// Pointer position with both axes in [-1, 1]; (0, 0) is the viewport centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState(pub Vec2);

impl PointerState {
    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Pixel offset for the hero portrait parallax.
    pub fn portrait_offset(&self) -> Vec2 {
        self.0 * Vec2::from(PORTRAIT_PARALLAX_PX)
    }

    /// Centre of the cursor glow and aurora mask, in percent of the hero.
    pub fn glow_center_percent(&self) -> Vec2 {
        self.0 + Vec2::splat(GLOW_CENTER_PERCENT)
    }
}

/// Latency-free pointer normalization. Smoothing, if any, is left to the
/// render surface.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Returns `false` and keeps the previous position when the viewport has
    /// no area (mid-resize).
    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> bool {
        if !(viewport_width > 0.0 && viewport_height > 0.0) {
            log::trace!(
                "[pointer] skipped: viewport {}x{}",
                viewport_width,
                viewport_height
            );
            return false;
        }
        self.state = PointerState(Vec2::new(
            (client_x / viewport_width - 0.5) * 2.0,
            (client_y / viewport_height - 0.5) * 2.0,
        ));
        true
    }
}
