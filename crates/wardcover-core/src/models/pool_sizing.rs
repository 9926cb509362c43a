use serde::{Deserialize, Serialize};

use crate::constants::CAPACITY_ROUNDING_EPSILON;

/// Policy for turning aggregate scheduled capacity (a real WTE figure) into
/// the integer pool size the exact kernel needs.
///
/// `Floor` never overstates reliability: cutting staff can never make the
/// pool larger. `Nearest` rounds half away from zero and can report a pool
/// up to half a unit larger than the capacity that exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSizing {
    #[default]
    Floor,
    Nearest,
}

impl PoolSizing {
    /// Integer pool size for the given scheduled capacity.
    /// Non-positive or non-finite capacity yields 0.
    pub fn pool_size(self, scheduled_capacity: f64) -> u32 {
        if !scheduled_capacity.is_finite() || scheduled_capacity <= 0.0 {
            return 0;
        }
        let sized = match self {
            Self::Floor => (scheduled_capacity + CAPACITY_ROUNDING_EPSILON).floor(),
            Self::Nearest => scheduled_capacity.round(),
        };
        sized.min(f64::from(u32::MAX)) as u32
    }
}
