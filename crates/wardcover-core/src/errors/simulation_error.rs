/// Monte-Carlo simulator errors.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("trial count must be greater than zero")]
    NoTrials,

    #[error("trials per shard must be greater than zero")]
    EmptyShard,
}
