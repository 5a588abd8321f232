//! Smoothed scroll position.
//!
//! The smoother never moves the viewport. It keeps a `current` value that
//! chases the raw scroll offset one tick at a time so that supplementary
//! effects can follow the page with a little lag.

use crate::config::MotionConfig;
use crate::interp::Interpolator;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub target: f64,
    pub current: f64,
}

/// Result of one smoothing tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still converging; the caller must request another frame.
    Continue,
    /// Within the settle threshold; no further frame is needed.
    Settled,
}

#[derive(Clone, Debug)]
pub struct ScrollSmoother {
    state: ScrollState,
    interp: Interpolator,
    // A frame request is outstanding. There is never more than one.
    pending: bool,
}

impl ScrollSmoother {
    pub fn new(initial_offset: f64, config: &MotionConfig) -> Self {
        Self {
            state: ScrollState {
                target: initial_offset,
                current: initial_offset,
            },
            interp: Interpolator::new(config.smoothing_factor, config.settle_epsilon),
            pending: false,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Arm the loop for its first tick. Returns `true` if the caller must
    /// schedule a frame.
    pub fn start(&mut self) -> bool {
        self.request()
    }

    /// Record a raw scroll offset. No clamping: offsets past the document
    /// bounds are taken as is. Returns `true` if the caller must schedule a
    /// frame (the loop had stopped).
    pub fn on_raw_scroll(&mut self, offset: f64) -> bool {
        self.state.target = offset;
        self.request()
    }

    /// Advance `current` one step. Consumes the outstanding request and
    /// re-arms it while unconverged.
    pub fn tick(&mut self) -> Tick {
        self.pending = false;
        let ScrollState { target, current } = self.state;
        let next = self.interp.step(current, target);
        self.state.current = next;
        if self.interp.has_converged(current, next, target) {
            log::trace!("[scroll] settled at {:.1}", self.state.current);
            Tick::Settled
        } else {
            self.pending = true;
            Tick::Continue
        }
    }

    /// Drop any outstanding request, e.g. on teardown.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }
}
