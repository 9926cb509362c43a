/// wardcover version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest pool size evaluated with exact `u128` binomial coefficients.
///
/// `C(120, 60)` is about `9.7e34`; the multiplicative build-up multiplies it
/// by at most 120 more, which stays well inside `u128::MAX` (`3.4e38`).
/// Larger pools are evaluated in log space.
pub const EXACT_COEFFICIENT_MAX_N: u32 = 120;

/// Slack added before flooring or ceiling a real capacity figure, so that
/// values like `8.999999999` produced by multiplier chains resolve to 9.
pub const CAPACITY_ROUNDING_EPSILON: f64 = 1e-9;

/// Absolute tolerance used when deciding whether two unit probabilities are equal.
pub const HOMOGENEITY_TOLERANCE: f64 = 1e-12;

/// Staff groups that make up each closed category.
pub const FOUNDATION_GROUPS: &[&str] = &["FY1", "FY2"];
pub const SENIOR_HOUSE_OFFICER_GROUPS: &[&str] = &["IMT", "LIMT", "CEF", "CFn", "CFoc", "GPST"];
pub const ADVANCED_PRACTITIONER_GROUPS: &[&str] = &["ACP"];
