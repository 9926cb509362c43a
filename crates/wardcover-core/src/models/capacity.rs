use serde::{Deserialize, Serialize};

use super::{PoolSizing, Probability};
use crate::constants::HOMOGENEITY_TOLERANCE;

/// One independently available source of cover: its contribution when
/// present and the probability that it is present on a given period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "UnitFields")]
pub struct CapacityUnit {
    weight: f64,
    availability_probability: Probability,
}

#[derive(Deserialize)]
struct UnitFields {
    weight: f64,
    availability_probability: f64,
}

impl From<UnitFields> for CapacityUnit {
    fn from(raw: UnitFields) -> Self {
        Self::new(raw.weight, raw.availability_probability)
    }
}

impl CapacityUnit {
    /// Create a unit. Negative or NaN weights become 0; the probability is clamped.
    pub fn new(weight: f64, availability_probability: impl Into<Probability>) -> Self {
        let weight = if weight.is_nan() { 0.0 } else { weight.max(0.0) };
        Self {
            weight,
            availability_probability: availability_probability.into(),
        }
    }

    /// A weight-1 unit, the building block of a homogeneous pool.
    pub fn whole(availability_probability: impl Into<Probability>) -> Self {
        Self::new(1.0, availability_probability)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn availability_probability(&self) -> Probability {
        self.availability_probability
    }

    /// Mean contribution per period.
    pub fn expected_weight(&self) -> f64 {
        self.weight * self.availability_probability.value()
    }
}

/// Homogeneous `(n, p)` view of a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PooledSummary {
    pub pool_size: u32,
    pub probability: Probability,
}

/// Multiset of capacity units. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Population {
    units: Vec<CapacityUnit>,
}

impl Population {
    pub fn new(units: Vec<CapacityUnit>) -> Self {
        Self { units }
    }

    /// `n` weight-1 units sharing probability `p`.
    pub fn homogeneous(pool_size: u32, probability: impl Into<Probability>) -> Self {
        let unit = CapacityUnit::whole(probability);
        Self {
            units: vec![unit; pool_size as usize],
        }
    }

    pub fn push(&mut self, unit: CapacityUnit) {
        self.units.push(unit);
    }

    pub fn units(&self) -> &[CapacityUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Capacity present when every unit turns up.
    pub fn scheduled_capacity(&self) -> f64 {
        self.units.iter().map(CapacityUnit::weight).sum()
    }

    /// Mean capacity present per period.
    pub fn expected_capacity(&self) -> f64 {
        self.units.iter().map(CapacityUnit::expected_weight).sum()
    }

    /// Exact `(n, p)` form when every unit has weight 1 and the same probability.
    ///
    /// Only such populations follow a binomial distribution; anything else is
    /// Poisson-binomial (or weighted) and needs the simulator. An empty
    /// population is homogeneous with `n = 0`.
    pub fn as_homogeneous(&self) -> Option<PooledSummary> {
        let Some(first) = self.units.first() else {
            return Some(PooledSummary {
                pool_size: 0,
                probability: Probability::ZERO,
            });
        };
        let p = first.availability_probability.value();
        let uniform = self.units.iter().all(|u| {
            (u.weight - 1.0).abs() <= HOMOGENEITY_TOLERANCE
                && (u.availability_probability.value() - p).abs() <= HOMOGENEITY_TOLERANCE
        });
        let pool_size = u32::try_from(self.units.len()).ok()?;
        uniform.then_some(PooledSummary {
            pool_size,
            probability: first.availability_probability,
        })
    }

    pub fn is_homogeneous(&self) -> bool {
        self.as_homogeneous().is_some()
    }

    /// Collapse to a pooled `(n, p_eff)` approximation: `n` from scheduled
    /// capacity under `sizing`, `p_eff = expected / scheduled`.
    pub fn pooled_summary(&self, sizing: PoolSizing) -> PooledSummary {
        let scheduled = self.scheduled_capacity();
        PooledSummary {
            pool_size: sizing.pool_size(scheduled),
            probability: Probability::from_ratio(self.expected_capacity(), scheduled),
        }
    }
}

impl FromIterator<CapacityUnit> for Population {
    fn from_iter<I: IntoIterator<Item = CapacityUnit>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}
