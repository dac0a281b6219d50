#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    #[error("A gradient needs at least 2 colors, got {count}")]
    TooFewColors { count: usize },

    #[error("Gradient resolution must be at least 2, got {resolution}")]
    ResolutionTooLow { resolution: usize },

    #[error("Gradient resolution {resolution} is too large to allocate")]
    ResolutionTooHigh { resolution: usize },
}
