use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    ADVANCED_PRACTITIONER_GROUPS, FOUNDATION_GROUPS, SENIOR_HOUSE_OFFICER_GROUPS,
};

/// Closed set of grade categories used for reporting.
/// Staff groups outside the known lists fall into `Unclassified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    Foundation,
    SeniorHouseOfficer,
    AdvancedPractitioner,
    Unclassified,
}

impl StaffCategory {
    /// Every category, in reporting order.
    pub const ALL: [StaffCategory; 4] = [
        Self::Foundation,
        Self::SeniorHouseOfficer,
        Self::AdvancedPractitioner,
        Self::Unclassified,
    ];

    /// Map a staff group label (e.g. "FY1", "IMT", "ACP") to its category.
    /// Surrounding whitespace is ignored; matching is case-sensitive.
    pub fn classify(staff_group: &str) -> Self {
        let group = staff_group.trim();
        if FOUNDATION_GROUPS.contains(&group) {
            Self::Foundation
        } else if SENIOR_HOUSE_OFFICER_GROUPS.contains(&group) {
            Self::SeniorHouseOfficer
        } else if ADVANCED_PRACTITIONER_GROUPS.contains(&group) {
            Self::AdvancedPractitioner
        } else {
            Self::Unclassified
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation-grade",
            Self::SeniorHouseOfficer => "SHO-grade",
            Self::AdvancedPractitioner => "ACP",
            Self::Unclassified => "Other",
        }
    }
}

impl fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
