//! Progress for the long skills section, measured from its bounding box.
//!
//! An intersection ratio cannot say "40% through a section four viewports
//! tall", so this tracker reads the section's top and height on every scroll
//! event instead.

use crate::config::MotionConfig;
use crate::section::{SectionId, SectionProgress};

/// One bounding-box read of the tracked section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    /// Section top relative to the viewport top.
    pub top: f32,
    pub height: f32,
    pub viewport_height: f32,
}

impl SectionGeometry {
    pub fn new(top: f32, height: f32, viewport_height: f32) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn phase(&self) -> Phase {
        if self.top > self.viewport_height {
            Phase::Ahead
        } else if self.bottom() < 0.0 {
            Phase::Passed
        } else {
            Phase::Inside
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not yet scrolled into view.
    Ahead,
    Inside,
    /// Scrolled completely above the viewport.
    Passed,
}

/// Progress as a pure function of one geometry read.
///
/// Inside the section, progress runs `speedup` times faster than the physical
/// scroll and is clamped to [0, 1]. Once the section has passed, `overshoot`
/// is reported unclamped so trailing animations can finish.
pub fn geometry_progress(geometry: &SectionGeometry, speedup: f32, overshoot: f32) -> f32 {
    match geometry.phase() {
        Phase::Ahead => 0.0,
        Phase::Passed => overshoot,
        Phase::Inside => {
            let scrollable = geometry.height - geometry.viewport_height;
            if scrollable <= 0.0 {
                // Shorter than the viewport: nothing to scroll through.
                return 1.0;
            }
            let scrolled = (-geometry.top).max(0.0);
            (scrolled / scrollable * speedup).clamp(0.0, 1.0)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollGeometryTracker {
    section: SectionId,
    speedup: f32,
    overshoot: f32,
    phase: Option<Phase>,
}

impl ScrollGeometryTracker {
    pub fn new(section: SectionId, config: &MotionConfig) -> Self {
        Self {
            section,
            speedup: config.geometry_speedup,
            overshoot: config.geometry_overshoot,
            phase: None,
        }
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Recompute from `geometry` and store it in `progress`.
    pub fn update(&mut self, geometry: &SectionGeometry, progress: &mut SectionProgress) -> f32 {
        let phase = geometry.phase();
        if self.phase != Some(phase) {
            log::debug!(
                "[geometry] {} {:?} -> {:?}",
                self.section.name(),
                self.phase,
                phase
            );
            self.phase = Some(phase);
        }
        if phase == Phase::Inside && geometry.height <= geometry.viewport_height {
            log::trace!(
                "[geometry] {} shorter than viewport; reporting complete",
                self.section.name()
            );
        }
        let p = geometry_progress(geometry, self.speedup, self.overshoot);
        progress.set(self.section, p);
        p
    }
}
