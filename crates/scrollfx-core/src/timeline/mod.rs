//! Progress-to-visual-state mapping.
//!
//! Every function here is pure: the same progress and item always give the
//! same state. Eased transitions between successive states belong to the
//! render surface.

pub mod entrance;
pub mod skill;
pub mod trail;
pub mod word;

pub use entrance::*;
pub use skill::*;
pub use trail::*;
pub use word::*;

use crate::error::{CoreError, Result};
use glam::Vec2;

/// Discrete visual state for one content element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualState {
    pub visible: bool,
    pub opacity: f32,
    pub blur_px: f32,
    pub translate: Vec2,
    pub explosion_active: bool,
}

impl VisualState {
    pub const HIDDEN: VisualState = VisualState {
        visible: false,
        opacity: 0.0,
        blur_px: 0.0,
        translate: Vec2::ZERO,
        explosion_active: false,
    };
}

/// Configured entry along a section's scroll range.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineItem {
    pub label: String,
    pub description: String,
    /// Trigger point as a percentage of the section range, 0..=100.
    pub pos: f32,
    /// Lateral placement, in percent of the section width.
    pub lateral_x: f32,
}

impl TimelineItem {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        pos: f32,
        lateral_x: f32,
    ) -> Result<Self> {
        let label = label.into();
        if !(0.0..=100.0).contains(&pos) {
            return Err(CoreError::TimelinePosition { label, pos });
        }
        Ok(Self {
            label,
            description: description.into(),
            pos,
            lateral_x,
        })
    }

    /// Section progress at which the item is nominally reached.
    #[inline]
    pub fn trigger(&self) -> f32 {
        self.pos / 100.0
    }
}

#[inline]
pub(crate) fn unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
