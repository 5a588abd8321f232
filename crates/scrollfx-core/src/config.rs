use crate::constants::*;
use crate::error::{CoreError, Result};

/// Runtime knobs for the trackers. `Default` matches the tuned page.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub smoothing_factor: f64,
    pub settle_epsilon: f64,
    pub threshold_steps: usize,
    pub geometry_speedup: f32,
    pub geometry_overshoot: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: SCROLL_SMOOTHING_FACTOR,
            settle_epsilon: SCROLL_SETTLE_EPSILON,
            threshold_steps: INTERSECTION_THRESHOLD_STEPS,
            geometry_speedup: GEOMETRY_SPEEDUP,
            geometry_overshoot: GEOMETRY_OVERSHOOT,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor < 1.0) {
            return Err(CoreError::SmoothingFactor(self.smoothing_factor));
        }
        if !(self.settle_epsilon > 0.0) {
            return Err(CoreError::SettleEpsilon(self.settle_epsilon));
        }
        if self.threshold_steps == 0 {
            return Err(CoreError::ThresholdSteps);
        }
        if !(self.geometry_speedup > 0.0) {
            return Err(CoreError::Speedup(self.geometry_speedup));
        }
        if !(self.geometry_overshoot >= 1.0) {
            return Err(CoreError::Overshoot(self.geometry_overshoot));
        }
        Ok(())
    }
}
