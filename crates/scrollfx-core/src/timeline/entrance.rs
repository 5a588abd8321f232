//! Whole-section entrance styles driven by intersection progress.
//!
//! Inputs are clamped first: these sections are intersection-tracked and
//! their formulas were never meant to see progress above 1.

use super::unit;
use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub opacity: f32,
    pub scale: f32,
    pub translate: Vec2,
}

/// Hero backdrop: fades in and settles from a slight zoom.
pub fn hero_backdrop(p: f32) -> Entrance {
    let p = unit(p);
    Entrance {
        opacity: p,
        scale: HERO_SCALE_BASE + p * HERO_SCALE_SPAN,
        translate: Vec2::ZERO,
    }
}

/// Hero copy: fades in while sliding in from the right.
pub fn hero_copy(p: f32) -> Entrance {
    let p = unit(p);
    Entrance {
        opacity: p,
        scale: 1.0,
        translate: Vec2::new((1.0 - p) * HERO_COPY_OFFSET_PX, 0.0),
    }
}

/// Intro heading: rises into place.
pub fn intro_heading(p: f32) -> Entrance {
    let p = unit(p);
    Entrance {
        opacity: p,
        scale: 1.0,
        translate: Vec2::new(0.0, (1.0 - p) * HEADING_OFFSET_PX),
    }
}

/// Contact backdrop: zooms out from 110% as it fades in.
pub fn contact_backdrop(p: f32) -> Entrance {
    let p = unit(p);
    Entrance {
        opacity: p,
        scale: 1.0 + (1.0 - p) * CONTACT_SCALE_SPAN,
        translate: Vec2::ZERO,
    }
}

pub fn contact_copy(p: f32) -> Entrance {
    let p = unit(p);
    Entrance {
        opacity: p,
        scale: 1.0,
        translate: Vec2::new(0.0, (1.0 - p) * CONTACT_COPY_OFFSET_PX),
    }
}
