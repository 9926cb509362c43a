mod config_error;
mod simulation_error;

pub use config_error::ConfigError;
pub use simulation_error::SimulationError;

/// Top-level error for every fallible wardcover operation.
///
/// Degenerate inputs (no cover required, empty population, out-of-range
/// probabilities) are not errors: they resolve to well-defined outcomes.
/// An exhausted reliability search is not an error either; see
/// [`SearchOutcome`](crate::models::SearchOutcome).
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type CoverResult<T> = Result<T, CoverError>;
