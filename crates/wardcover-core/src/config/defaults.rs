// Single source of truth for all default values.

// --- Reliability ---
pub const DEFAULT_TARGET_PROBABILITY: f64 = 0.95;
pub const DEFAULT_SEARCH_CEILING: u32 = 200;

// --- Simulation ---
pub const DEFAULT_TRIAL_COUNT: u64 = 20_000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_TRIALS_PER_SHARD: u64 = 4_096;
pub const DEFAULT_PARALLEL: bool = true;

// --- Forecast ---
pub const DEFAULT_PERIODS_PER_CYCLE: f64 = 260.0; // weekday day shifts per year

// --- Availability ---
pub const DEFAULT_SICKNESS_RATE: f64 = 0.05;
pub const DEFAULT_DEVELOPMENT_DAY_BASIS: f64 = 260.0; // approx working days/year

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
