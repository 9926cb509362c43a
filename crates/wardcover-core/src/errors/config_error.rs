/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("failed to serialize config: {reason}")]
    Serialize { reason: String },

    #[error("reliability target {value} must lie strictly between 0 and 1")]
    TargetOutOfRange { value: f64 },

    #[error("sickness rate {value} must lie in [0, 1)")]
    SicknessRateOutOfRange { value: f64 },

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}
