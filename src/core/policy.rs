//! Fixed policy snapshot (2026 rules). All currency values are in won.

use super::types::{CompanySize, Region};

pub const MIN_WAGE: i64 = 10_320;

/// Average weeks in a month (365 / 7 / 12).
pub const WEEKS_PER_MONTH: f64 = 365.0 / 7.0 / 12.0;

/// Grown hourly wages are floored to this increment.
pub const WAGE_STEP: i64 = 10;

pub const FULL_TIME_WEEKLY_HOURS: u32 = 40;
pub const PART_TIME_WEEKLY_HOURS: u32 = 15;
/// Part-timers paid at least this percentage of the minimum wage count as 0.75 FTE.
pub const PREMIUM_PART_TIME_WAGE_PERCENT: i64 = 120;

pub const PENSION_RATE: f64 = 0.0475;
pub const HEALTH_RATE: f64 = 0.03595;
/// Applied to the health-insurance contribution, not to the wage.
pub const LONG_TERM_CARE_RATE: f64 = 0.1314;
pub const EMPLOYMENT_INSURANCE_RATE: f64 = 0.0115;
pub const ACCIDENT_INSURANCE_RATE: f64 = 0.0082;

pub const INCENTIVE_MILD_MALE: i64 = 350_000;
pub const INCENTIVE_MILD_FEMALE: i64 = 500_000;
pub const INCENTIVE_SEVERE_MALE: i64 = 700_000;
pub const INCENTIVE_SEVERE_FEMALE: i64 = 900_000;
pub const INCENTIVE_WAGE_CAP_RATIO: f64 = 0.6;

/// Mandatory employment ratio, expressed per mille (3.1%).
pub const OBLIGATION_PER_MILLE: u32 = 31;

/// Minimum disabled share of all workers is 30%, i.e. x >= 3N/7 for N non-disabled workers.
pub const REQUIRED_SHARE_NUMERATOR: u32 = 3;
pub const REQUIRED_SHARE_DENOMINATOR: u32 = 7;
pub const MIN_DISABLED_HEADCOUNT: u32 = 10;

pub const TAX_RELIEF_BASE_LIMIT: i64 = 100_000_000;
pub const TAX_RELIEF_PER_HEAD_LIMIT: i64 = 20_000_000;

pub const GRANT_PER_HEAD: i64 = 40_000_000;
pub const GRANT_MAX: i64 = 1_000_000_000;

pub const CONSULTING_BASE: i64 = 10_000_000;
pub const CONSULTING_PER_HEAD: i64 = 2_000_000;
pub const CONSULTING_MIN: i64 = 30_000_000;
pub const MANAGEMENT_FEE_PER_HEAD_MONTHLY: i64 = 500_000;

/// Credit schedules are quoted in units of 10,000 won.
pub const CREDIT_UNIT: i64 = 10_000;
pub const CREDIT_CARRY_FORWARD_YEARS: u32 = 10;

const CREDIT_SME_METRO: [i64; 3] = [700, 1_600, 1_700];
const CREDIT_SME_NON_METRO: [i64; 3] = [1_000, 1_900, 2_000];
const CREDIT_MID_SIZE: [i64; 3] = [500, 900, 900];
const CREDIT_LARGE: [i64; 2] = [300, 500];

pub const MIN_OPERATING_YEARS: u32 = 5;
pub const MIN_OPERATING_YEARS_WITH_GRANT: u32 = 7;

pub const MAX_EXISTING_WORKERS: u32 = 500;
/// Statutory minimum for the largest workforce plus one full search sweep.
pub const MAX_DISABLED_COUNT: u32 = 1_000;
/// Annual tax ceiling of the input form, in 10,000-won units.
pub const MAX_ANNUAL_TAX_MANWON: i64 = 1_000_000;
/// Monthly service cost ceiling, in 10,000-won units.
pub const MAX_SERVICE_COST_MANWON: i64 = 100_000;
pub const OPERATION_YEARS_MAX: u32 = 10;
pub const DAILY_HOURS_RANGE: (u32, u32) = (3, 8);
pub const WEEKLY_DAYS_RANGE: (u32, u32) = (2, 5);
pub const SERVICE_REDUCTION_RANGE: (u32, u32) = (10, 100);

/// Form inputs for tax and service cost are entered in 10,000-won units.
pub const MANWON: i64 = 10_000;

/// Per-head employment tax credit by year (1-based position), in [`CREDIT_UNIT`]s.
pub fn employment_credit_schedule(size: CompanySize, region: Region) -> &'static [i64] {
    match (size, region) {
        (CompanySize::Sme, Region::Metro) => &CREDIT_SME_METRO,
        (CompanySize::Sme, Region::NonMetro) => &CREDIT_SME_NON_METRO,
        (CompanySize::MidSize, _) => &CREDIT_MID_SIZE,
        (CompanySize::Large, _) => &CREDIT_LARGE,
    }
}

/// Headcount increase that must be exceeded before the credit applies.
pub fn minimum_headcount_increase(size: CompanySize) -> u32 {
    match size {
        CompanySize::Sme => 0,
        CompanySize::MidSize => 5,
        CompanySize::Large => 10,
    }
}

pub fn minimum_operating_years(use_grant: bool) -> u32 {
    if use_grant {
        MIN_OPERATING_YEARS_WITH_GRANT
    } else {
        MIN_OPERATING_YEARS
    }
}
