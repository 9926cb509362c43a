//! Roster aggregation: per-group multipliers → pooled totals, category
//! breakdowns, and the heterogeneous population the simulator consumes.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use wardcover_core::config::AvailabilityConfig;
use wardcover_core::models::{CapacityUnit, PoolSizing, PooledSummary, Population, Probability};
use wardcover_core::staff::{StaffCategory, StaffGroupRecord};

/// Totals for one staff category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub headcount: u32,
    pub scheduled_ward_wte: f64,
    pub expected_ward_wte: f64,
    pub oncall_commitment_wte: f64,
    pub oncall_lost_wte: f64,
}

impl CategoryTotals {
    fn add(&mut self, record: &StaffGroupRecord, assumptions: &AvailabilityConfig) {
        self.headcount += record.headcount;
        self.scheduled_ward_wte += record.scheduled_ward_wte_total();
        self.expected_ward_wte += record.expected_ward_wte_total(assumptions);
        self.oncall_commitment_wte += record.oncall_commitment_wte();
        self.oncall_lost_wte += record.oncall_lost_wte();
    }

    fn combine(mut self, other: &Self) -> Self {
        self.headcount += other.headcount;
        self.scheduled_ward_wte += other.scheduled_ward_wte;
        self.expected_ward_wte += other.expected_ward_wte;
        self.oncall_commitment_wte += other.oncall_commitment_wte;
        self.oncall_lost_wte += other.oncall_lost_wte;
        self
    }
}

/// Pooled roster totals with a breakdown for every [`StaffCategory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub totals: CategoryTotals,
    /// Always holds all four categories, zero-filled where the roster has none.
    pub by_category: BTreeMap<StaffCategory, CategoryTotals>,
}

impl RosterSummary {
    pub fn from_records(records: &[StaffGroupRecord], assumptions: &AvailabilityConfig) -> Self {
        let mut by_category: BTreeMap<StaffCategory, CategoryTotals> = StaffCategory::ALL
            .iter()
            .map(|&c| (c, CategoryTotals::default()))
            .collect();
        for record in records {
            by_category
                .entry(record.category())
                .or_default()
                .add(record, assumptions);
        }
        let totals = by_category
            .values()
            .fold(CategoryTotals::default(), CategoryTotals::combine);
        Self {
            totals,
            by_category,
        }
    }

    /// Aggregate with per-group headcount overrides (scenario planning).
    /// Groups missing from `headcounts` keep their roster headcount.
    pub fn from_records_with_headcounts(
        records: &[StaffGroupRecord],
        headcounts: &HashMap<String, u32>,
        assumptions: &AvailabilityConfig,
    ) -> Self {
        let adjusted = apply_headcounts(records, headcounts);
        Self::from_records(&adjusted, assumptions)
    }

    pub fn category(&self, category: StaffCategory) -> CategoryTotals {
        self.by_category
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Expected over scheduled ward WTE, clamped to [0, 1]; 0 for an empty roster.
    pub fn effective_probability(&self) -> Probability {
        Probability::from_ratio(self.totals.expected_ward_wte, self.totals.scheduled_ward_wte)
    }

    /// Homogeneous `(n, p)` view under the given pool sizing policy.
    pub fn pooled_summary(&self, sizing: PoolSizing) -> PooledSummary {
        PooledSummary {
            pool_size: sizing.pool_size(self.totals.scheduled_ward_wte),
            probability: self.effective_probability(),
        }
    }
}

/// Copy of `records` with headcounts replaced from `headcounts`.
pub fn apply_headcounts(
    records: &[StaffGroupRecord],
    headcounts: &HashMap<String, u32>,
) -> Vec<StaffGroupRecord> {
    records
        .iter()
        .map(|record| {
            let mut record = record.clone();
            if let Some(&headcount) = headcounts.get(record.staff_group.trim()) {
                record.headcount = headcount;
            }
            record
        })
        .collect()
}

/// One capacity unit per person: weight is the person's scheduled ward WTE,
/// probability their availability factor.
pub fn roster_population(
    records: &[StaffGroupRecord],
    assumptions: &AvailabilityConfig,
) -> Population {
    records
        .iter()
        .flat_map(|record| {
            let unit = CapacityUnit::new(
                record.scheduled_ward_wte_per_person(),
                record.availability_factor(assumptions),
            );
            std::iter::repeat(unit).take(record.headcount as usize)
        })
        .collect()
}
