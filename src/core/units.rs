use serde::Serialize;

use super::policy::{
    ACCIDENT_INSURANCE_RATE, EMPLOYMENT_INSURANCE_RATE, FULL_TIME_WEEKLY_HOURS, HEALTH_RATE,
    LONG_TERM_CARE_RATE, MIN_WAGE, PART_TIME_WEEKLY_HOURS, PENSION_RATE,
    PREMIUM_PART_TIME_WAGE_PERCENT, WEEKS_PER_MONTH,
};

/// Employer-side social insurance contributions for one monthly wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub pension: i64,
    pub health: i64,
    pub long_term_care: i64,
    pub employment: i64,
    pub accident: i64,
    pub total: i64,
}

/// Rounds a non-negative currency amount to the nearest won.
pub(crate) fn round_won(value: f64) -> i64 {
    value.round() as i64
}

pub fn weekly_hours(daily_hours: u32, weekly_days: u32) -> u32 {
    daily_hours * weekly_days
}

/// Full-time-equivalent weight of one worker for the employment tax credit.
///
/// - 40h/week or more: 1
/// - 15h to 39h: 0.75 when paid at least 120% of the minimum wage, else 0.5
/// - under 15h: 0, the worker is not counted at all
pub fn fte_ratio(daily_hours: u32, weekly_days: u32, hourly_wage: i64) -> f64 {
    let weekly = weekly_hours(daily_hours, weekly_days);
    if weekly >= FULL_TIME_WEEKLY_HOURS {
        return 1.0;
    }
    if weekly >= PART_TIME_WEEKLY_HOURS {
        if hourly_wage * 100 >= MIN_WAGE * PREMIUM_PART_TIME_WAGE_PERCENT {
            return 0.75;
        }
        return 0.5;
    }
    0.0
}

/// Paid hours per month, including weekly paid leave (weekly hours / 5) once the
/// worker reaches 15h a week.
pub fn monthly_hours(daily_hours: u32, weekly_days: u32) -> f64 {
    let weekly = weekly_hours(daily_hours, weekly_days) as f64;
    let paid = if weekly_hours(daily_hours, weekly_days) >= PART_TIME_WEEKLY_HOURS {
        weekly + weekly / 5.0
    } else {
        weekly
    };
    paid * WEEKS_PER_MONTH
}

pub fn monthly_wage(hourly_wage: i64, daily_hours: u32, weekly_days: u32) -> i64 {
    round_won(hourly_wage as f64 * monthly_hours(daily_hours, weekly_days))
}

/// Each contribution is rounded on its own before summing. Long-term care is
/// levied on the rounded health contribution.
pub fn calc_insurance(wage: i64) -> Insurance {
    let wage = wage.max(0) as f64;
    let pension = round_won(wage * PENSION_RATE);
    let health = round_won(wage * HEALTH_RATE);
    let long_term_care = round_won(health as f64 * LONG_TERM_CARE_RATE);
    let employment = round_won(wage * EMPLOYMENT_INSURANCE_RATE);
    let accident = round_won(wage * ACCIDENT_INSURANCE_RATE);
    Insurance {
        pension,
        health,
        long_term_care,
        employment,
        accident,
        total: pension + health + long_term_care + employment + accident,
    }
}
