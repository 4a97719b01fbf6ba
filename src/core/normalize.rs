//! Raw form values and the cross-field corrections that turn them into a
//! [`SimulationInput`] satisfying every statutory floor.

use tracing::debug;

use super::formulas::{min_disabled_for_workers, severe_min};
use super::policy::{
    DAILY_HOURS_RANGE, MANWON, MAX_ANNUAL_TAX_MANWON, MAX_DISABLED_COUNT, MAX_EXISTING_WORKERS,
    MAX_SERVICE_COST_MANWON, OPERATION_YEARS_MAX, PART_TIME_WEEKLY_HOURS, SERVICE_REDUCTION_RANGE,
    WEEKLY_DAYS_RANGE, minimum_operating_years,
};
use super::types::{CompanySize, Gender, Region, SimulationInput};
use super::units::round_won;

/// Form values as entered: tax and service cost in 10,000-won units, rates in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub existing_workers: u32,
    pub disabled_count: u32,
    pub severe_count: u32,
    pub daily_hours: u32,
    pub weekly_days: u32,
    pub gender: Gender,
    pub company_size: CompanySize,
    pub region: Region,
    pub annual_tax_manwon: i64,
    pub wage_growth_percent: f64,
    pub use_grant: bool,
    pub operation_years: u32,
    pub service_cost_manwon: i64,
    pub service_reduction_percent: u32,
}

impl FormInput {
    /// Changing the existing workforce resets both disabled counts to their minimums.
    pub fn with_existing_workers(mut self, existing_workers: u32) -> Self {
        self.existing_workers = existing_workers.min(MAX_EXISTING_WORKERS);
        self.disabled_count = min_disabled_for_workers(self.existing_workers);
        self.severe_count = severe_min(self.existing_workers + self.disabled_count);
        self
    }

    pub fn with_disabled_count(mut self, disabled_count: u32) -> Self {
        self.disabled_count = disabled_count;
        let floor = severe_min(self.existing_workers + disabled_count);
        if self.severe_count < floor {
            self.severe_count = floor;
        }
        self
    }

    pub fn with_daily_hours(mut self, daily_hours: u32) -> Self {
        self.daily_hours = clamp_range(daily_hours, DAILY_HOURS_RANGE);
        if self.daily_hours * self.weekly_days < PART_TIME_WEEKLY_HOURS {
            self.weekly_days = days_for_part_time(self.daily_hours);
        }
        self
    }

    pub fn with_weekly_days(mut self, weekly_days: u32) -> Self {
        self.weekly_days = clamp_range(weekly_days, WEEKLY_DAYS_RANGE);
        if self.daily_hours * self.weekly_days < PART_TIME_WEEKLY_HOURS {
            self.daily_hours = clamp_range(
                PART_TIME_WEEKLY_HOURS.div_ceil(self.weekly_days),
                DAILY_HOURS_RANGE,
            );
        }
        self
    }
}

fn clamp_range(value: u32, (lo, hi): (u32, u32)) -> u32 {
    value.clamp(lo, hi)
}

fn days_for_part_time(daily_hours: u32) -> u32 {
    clamp_range(
        PART_TIME_WEEKLY_HOURS.div_ceil(daily_hours.max(1)),
        WEEKLY_DAYS_RANGE,
    )
}

/// Clamps every field into its legal range and converts form units to won.
pub fn normalize(form: &FormInput) -> SimulationInput {
    let existing_workers = form.existing_workers.min(MAX_EXISTING_WORKERS);

    let min_disabled = min_disabled_for_workers(existing_workers);
    let disabled_count = form.disabled_count.clamp(min_disabled, MAX_DISABLED_COUNT);
    if disabled_count != form.disabled_count {
        debug!(
            from = form.disabled_count,
            to = disabled_count,
            "disabled count raised to statutory minimum"
        );
    }

    let severe_floor = severe_min(existing_workers + disabled_count);
    let severe_count = form.severe_count.max(severe_floor).min(disabled_count);
    if severe_count != form.severe_count {
        debug!(from = form.severe_count, to = severe_count, "severe count clamped");
    }

    let daily_hours = clamp_range(form.daily_hours, DAILY_HOURS_RANGE);
    let mut weekly_days = clamp_range(form.weekly_days, WEEKLY_DAYS_RANGE);
    if daily_hours * weekly_days < PART_TIME_WEEKLY_HOURS {
        weekly_days = days_for_part_time(daily_hours);
        debug!(daily_hours, weekly_days, "weekly days raised to reach 15 hours");
    }

    let years = form
        .operation_years
        .clamp(minimum_operating_years(form.use_grant), OPERATION_YEARS_MAX);

    let wage_growth_rate = if form.wage_growth_percent.is_finite() {
        form.wage_growth_percent / 100.0
    } else {
        0.0
    };

    let reduction = clamp_range(form.service_reduction_percent, SERVICE_REDUCTION_RANGE);
    let service_cost = form.service_cost_manwon.clamp(0, MAX_SERVICE_COST_MANWON) * MANWON;
    let monthly_service_saving = round_won(service_cost as f64 * reduction as f64 / 100.0);

    SimulationInput {
        existing_workers,
        disabled_count,
        severe_count,
        daily_hours,
        weekly_days,
        gender: form.gender,
        company_size: form.company_size,
        region: form.region,
        annual_tax: form.annual_tax_manwon.clamp(0, MAX_ANNUAL_TAX_MANWON) * MANWON,
        wage_growth_rate,
        years,
        use_grant: form.use_grant,
        monthly_service_saving,
    }
}
