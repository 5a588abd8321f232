//! Exponential smoothing primitive.

/// Close `factor` of the remaining gap between `current` and `target`.
#[inline]
pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// A fixed-factor exponential chaser with a settle threshold.
///
/// Each [`step`](Interpolator::step) closes the same fraction of the gap, so
/// motion eases out and never overshoots the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolator {
    pub factor: f64,
    pub epsilon: f64,
}

impl Interpolator {
    pub fn new(factor: f64, epsilon: f64) -> Self {
        Self { factor, epsilon }
    }

    #[inline]
    pub fn step(&self, current: f64, target: f64) -> f64 {
        lerp(current, target, self.factor)
    }

    #[inline]
    pub fn is_settled(&self, current: f64, target: f64) -> bool {
        (target - current).abs() <= self.epsilon
    }

    /// Whether moving from `previous` to `next` ends the chase: either within
    /// `epsilon`, or the step no longer moves at this magnitude.
    #[inline]
    pub fn has_converged(&self, previous: f64, next: f64, target: f64) -> bool {
        self.is_settled(next, target) || next == previous || !next.is_finite()
    }

    /// Number of steps needed to get within `epsilon` of `target`, or to the
    /// point where a step stops making progress.
    pub fn steps_to_settle(&self, mut current: f64, target: f64) -> usize {
        let mut steps = 0;
        while !self.is_settled(current, target) {
            let next = self.step(current, target);
            steps += 1;
            if self.has_converged(current, next, target) {
                break;
            }
            current = next;
        }
        steps
    }
}
