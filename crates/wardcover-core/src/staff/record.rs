use serde::{Deserialize, Serialize};

use super::StaffCategory;
use crate::config::AvailabilityConfig;
use crate::models::Probability;

/// One staff group from a roster with its deterministic availability multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffGroupRecord {
    pub staff_group: String,
    pub headcount: u32,
    /// Contracted whole-time equivalent per person.
    #[serde(rename = "base_WTE", alias = "base_wte")]
    pub base_wte: f64,
    pub pattern_factor: f64,
    pub days_factor: f64,
    pub leave_factor: f64,
    /// Fraction of establishment time lost to on-call duties.
    #[serde(default)]
    pub oncall_loss: f64,
    /// Development days per year taken away from ward work.
    #[serde(default)]
    pub development_days: f64,
}

impl StaffGroupRecord {
    pub fn category(&self) -> StaffCategory {
        StaffCategory::classify(&self.staff_group)
    }

    /// Establishment WTE per person before on-call loss.
    pub fn scheduled_establishment_wte_per_person(&self) -> f64 {
        self.base_wte * self.pattern_factor * self.days_factor * self.leave_factor
    }

    /// Ward-facing WTE per person with no sickness or development time.
    pub fn scheduled_ward_wte_per_person(&self) -> f64 {
        self.scheduled_establishment_wte_per_person() * (1.0 - self.oncall_loss)
    }

    /// Probability that one person is present on a given day.
    pub fn availability_factor(&self, assumptions: &AvailabilityConfig) -> Probability {
        let development_fraction = if assumptions.development_day_basis > 0.0 {
            self.development_days / assumptions.development_day_basis
        } else {
            0.0
        };
        Probability::new((1.0 - assumptions.sickness_rate) * (1.0 - development_fraction))
    }

    /// Mean ward-facing WTE per person after sickness and development time.
    pub fn expected_ward_wte_per_person(&self, assumptions: &AvailabilityConfig) -> f64 {
        self.scheduled_ward_wte_per_person() * self.availability_factor(assumptions).value()
    }

    pub fn scheduled_establishment_wte_total(&self) -> f64 {
        f64::from(self.headcount) * self.scheduled_establishment_wte_per_person()
    }

    pub fn scheduled_ward_wte_total(&self) -> f64 {
        f64::from(self.headcount) * self.scheduled_ward_wte_per_person()
    }

    pub fn expected_ward_wte_total(&self, assumptions: &AvailabilityConfig) -> f64 {
        f64::from(self.headcount) * self.expected_ward_wte_per_person(assumptions)
    }

    /// Establishment WTE committed to the on-call rota (0 for groups with no on-call loss).
    pub fn oncall_commitment_wte(&self) -> f64 {
        if self.oncall_loss > 0.0 {
            self.scheduled_establishment_wte_total()
        } else {
            0.0
        }
    }

    /// Ward WTE lost to on-call duties.
    pub fn oncall_lost_wte(&self) -> f64 {
        if self.oncall_loss > 0.0 {
            self.scheduled_establishment_wte_total() * self.oncall_loss
        } else {
            0.0
        }
    }
}
