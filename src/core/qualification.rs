use serde::Serialize;

use super::formulas::{min_disabled_for_workers, severe_min};
use super::policy::{REQUIRED_SHARE_DENOMINATOR, REQUIRED_SHARE_NUMERATOR};

/// Headcounts listed in the quick-reference table.
pub const REFERENCE_HEADCOUNTS: [u32; 19] = [
    5, 10, 15, 20, 23, 24, 25, 30, 40, 50, 60, 70, 80, 90, 100, 150, 200, 250, 300,
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SevereTier {
    /// Under 100 workers: 15%.
    Small,
    /// 100 to 299 workers: 10% + 5.
    Medium,
    /// 300 workers and up: 5% + 20.
    Large,
}

impl SevereTier {
    pub fn for_total(total_workers: u32) -> Self {
        if total_workers < 100 {
            SevereTier::Small
        } else if total_workers < 300 {
            SevereTier::Medium
        } else {
            SevereTier::Large
        }
    }

    pub fn rule(self) -> &'static str {
        match self {
            SevereTier::Small => "15%",
            SevereTier::Medium => "10% + 5",
            SevereTier::Large => "5% + 20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    pub non_disabled: u32,
    /// ceil(3N/7) before the 10-person floor.
    pub by_formula: u32,
    pub min_disabled: u32,
    pub total_workers: u32,
    pub disabled_ratio_percent: f64,
    pub severe_required: u32,
    pub severe_tier: SevereTier,
}

pub fn qualify(non_disabled: u32) -> Qualification {
    let by_formula = (REQUIRED_SHARE_NUMERATOR * non_disabled).div_ceil(REQUIRED_SHARE_DENOMINATOR);
    let min_disabled = min_disabled_for_workers(non_disabled);
    let total_workers = non_disabled + min_disabled;
    let disabled_ratio_percent = if total_workers == 0 {
        0.0
    } else {
        min_disabled as f64 / total_workers as f64 * 100.0
    };
    Qualification {
        non_disabled,
        by_formula,
        min_disabled,
        total_workers,
        disabled_ratio_percent,
        severe_required: severe_min(total_workers),
        severe_tier: SevereTier::for_total(total_workers),
    }
}

pub fn reference_table() -> Vec<Qualification> {
    REFERENCE_HEADCOUNTS.iter().map(|&n| qualify(n)).collect()
}
