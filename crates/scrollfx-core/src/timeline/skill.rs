use super::{unit, TimelineItem, VisualState};
use crate::constants::*;
use glam::Vec2;

/// Star that forms at the item's point once its animation is past the
/// explosion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Formation {
    pub opacity: f32,
    pub scale: f32,
}

/// Everything the skills timeline renders for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillState {
    /// Unclamped local animation progress.
    pub raw_progress: f32,
    /// `raw_progress` clamped to [0, 1].
    pub progress: f32,
    /// The description card. `explosion_active` carries the burst cue.
    pub card: VisualState,
    pub formation: Option<Formation>,
}

/// Even-indexed items sit left of the trail, odd ones right.
#[inline]
pub fn is_left(index: usize) -> bool {
    index % 2 == 0
}

/// Local animation progress of `item` at section progress `p`, unclamped.
#[inline]
pub fn skill_raw_progress(item: &TimelineItem, p: f32) -> f32 {
    (p - item.trigger() + SKILL_LEAD_IN) / SKILL_ANIMATION_RANGE
}

/// Map section progress onto the `index`-th skill item.
///
/// The item appears `SKILL_LEAD_IN` of the section before its trigger point.
/// Every output is clamped independently, so progress above 1 only holds the
/// finished state.
pub fn skill_state(item: &TimelineItem, index: usize, p: f32) -> SkillState {
    let distance = p - item.trigger();
    let raw = skill_raw_progress(item, p);
    let progress = unit(raw);
    let visible = distance >= -SKILL_LEAD_IN;

    if !visible {
        return SkillState {
            raw_progress: raw,
            progress,
            card: VisualState::HIDDEN,
            formation: None,
        };
    }

    let opacity = (progress * SKILL_CARD_OPACITY_GAIN).min(1.0);
    let side = if is_left(index) {
        SKILL_CARD_OFFSET_PX
    } else {
        -SKILL_CARD_OFFSET_PX
    };
    let card = VisualState {
        visible,
        opacity,
        blur_px: 0.0,
        translate: Vec2::new((1.0 - opacity) * side, 0.0),
        explosion_active: raw > SKILL_EXPLOSION_START && raw < SKILL_EXPLOSION_END,
    };

    let formation = (progress > SKILL_FORMATION_START).then(|| {
        let t = progress - SKILL_FORMATION_START;
        Formation {
            opacity: (t * SKILL_FORMATION_OPACITY_GAIN).min(1.0),
            scale: (t * SKILL_FORMATION_SCALE_GAIN + SKILL_FORMATION_SCALE_BASE).min(1.0),
        }
    });

    SkillState {
        raw_progress: raw,
        progress,
        card,
        formation,
    }
}
