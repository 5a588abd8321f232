use thiserror::Error;

/// Configuration errors. Numeric updates themselves never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("smoothing factor must be in (0, 1), got {0}")]
    SmoothingFactor(f64),
    #[error("settle epsilon must be positive, got {0}")]
    SettleEpsilon(f64),
    #[error("threshold resolution must be at least 1 step")]
    ThresholdSteps,
    #[error("speed-up factor must be positive, got {0}")]
    Speedup(f32),
    #[error("overshoot cap must be at least 1, got {0}")]
    Overshoot(f32),
    #[error("timeline position for {label:?} must be within 0..=100, got {pos}")]
    TimelinePosition { label: String, pos: f32 },
}

pub type Result<T> = std::result::Result<T, CoreError>;
