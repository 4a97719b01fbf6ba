use serde::Serialize;

use super::engine::{final_cumulative, fte_count, simulate};
use super::formulas::{
    MonthlyIncentive, annual_management_fee, consulting_fee, credit_eligible_headcount,
    employment_credit, grant, monthly_incentive, obligation_count, tax_reduction,
};
use super::policy::{
    CREDIT_UNIT, MIN_WAGE, PART_TIME_WEEKLY_HOURS, employment_credit_schedule,
    minimum_operating_years,
};
use super::solver::{SearchConfig, find_optimal_headcount};
use super::types::{OptimalSearchResult, SimulationInput, YearRow};
use super::units::{Insurance, calc_insurance, fte_ratio, monthly_hours, monthly_wage, round_won};

/// Month-one view of the workplace at the base minimum wage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstYearBreakdown {
    pub monthly_hours: f64,
    pub hourly_wage: i64,
    pub monthly_wage: i64,
    pub insurance: Insurance,
    pub cost_per_head: i64,
    pub monthly_employment_cost: i64,
    pub consulting_fee: i64,
    pub monthly_management_fee: i64,
    pub obligation: u32,
    pub incentive: MonthlyIncentive,
    pub monthly_tax_relief: i64,
    pub grant: i64,
    /// Employment credit accrued over the whole operating term.
    pub credit_total: i64,
    pub monthly_service_saving: i64,
    pub fte_ratio: f64,
    pub fte_count: f64,
    pub credit_eligible: f64,
    /// Recurring monthly balance; the one-time grant and the credit are left out.
    pub monthly_net: i64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSum {
    pub from_year: u32,
    /// `None` for the open-ended band.
    pub to_year: Option<u32>,
    pub relief_percent: u32,
    pub total: i64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementEstimate {
    pub last_year_monthly_wage: i64,
    pub retirement_pay: i64,
    pub cumulative_after: i64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditScheduleRow {
    pub year: u32,
    pub per_head: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub min_operating_years: u32,
    pub breakdown: FirstYearBreakdown,
    pub rows: Vec<YearRow>,
    pub final_cumulative: i64,
    pub period_sums: Vec<PeriodSum>,
    pub retirement: Option<RetirementEstimate>,
    pub credit_schedule: Vec<CreditScheduleRow>,
    pub search: OptimalSearchResult,
}

const PERIOD_BANDS: [(u32, Option<u32>, u32); 4] = [
    (1, Some(3), 100),
    (4, Some(5), 50),
    (6, Some(10), 30),
    (11, None, 0),
];

pub fn first_year_breakdown(input: &SimulationInput) -> FirstYearBreakdown {
    let dc = input.disabled_count;
    let wage = monthly_wage(MIN_WAGE, input.daily_hours, input.weekly_days);
    let insurance = calc_insurance(wage);
    let cost_per_head = wage + insurance.total;
    let monthly_employment_cost = cost_per_head * dc as i64;
    let monthly_management_fee = annual_management_fee(dc) / 12;

    let obligation = obligation_count(input.total_workers());
    let incentive = monthly_incentive(
        input.severe_count,
        input.mild_count(),
        input.gender,
        wage,
        obligation,
    );
    let monthly_tax_relief = round_won(tax_reduction(input.annual_tax, dc, 1) as f64 / 12.0);

    let fte = fte_count(input);
    let credit_total = (1..=input.years)
        .map(|year| employment_credit(fte, input.company_size, input.region, year))
        .sum();

    let monthly_net = incentive.total + monthly_tax_relief + input.monthly_service_saving
        - monthly_employment_cost
        - monthly_management_fee;

    FirstYearBreakdown {
        monthly_hours: monthly_hours(input.daily_hours, input.weekly_days),
        hourly_wage: MIN_WAGE,
        monthly_wage: wage,
        insurance,
        cost_per_head,
        monthly_employment_cost,
        consulting_fee: consulting_fee(dc),
        monthly_management_fee,
        obligation,
        incentive,
        monthly_tax_relief,
        grant: if input.use_grant { grant(dc) } else { 0 },
        credit_total,
        monthly_service_saving: input.monthly_service_saving,
        fte_ratio: fte_ratio(input.daily_hours, input.weekly_days, MIN_WAGE),
        fte_count: fte,
        credit_eligible: credit_eligible_headcount(fte, input.company_size),
        monthly_net,
    }
}

/// Net totals per relief band; bands the operating term never reaches are omitted.
pub fn period_sums(rows: &[YearRow]) -> Vec<PeriodSum> {
    let last_year = rows.last().map(|row| row.year).unwrap_or(0);
    PERIOD_BANDS
        .iter()
        .filter(|(from, _, _)| *from <= last_year)
        .map(|&(from_year, to_year, relief_percent)| {
            let total = rows
                .iter()
                .filter(|row| row.year >= from_year && to_year.is_none_or(|to| row.year <= to))
                .map(|row| row.annual_net)
                .sum();
            PeriodSum {
                from_year,
                to_year,
                relief_percent,
                total,
            }
        })
        .collect()
}

/// Severance owed at the end of the term: one month's final-year wage per year
/// served, for every disabled worker. Workers under 15h a week are not entitled.
pub fn retirement_estimate(input: &SimulationInput, rows: &[YearRow]) -> Option<RetirementEstimate> {
    if input.weekly_hours() < PART_TIME_WEEKLY_HOURS {
        return None;
    }
    let last = rows.last()?;
    let last_year_monthly_wage = monthly_wage(last.hourly_wage, input.daily_hours, input.weekly_days);
    let retirement_pay =
        last_year_monthly_wage * input.years as i64 * input.disabled_count as i64;
    Some(RetirementEstimate {
        last_year_monthly_wage,
        retirement_pay,
        cumulative_after: last.cumulative - retirement_pay,
    })
}

pub fn credit_schedule(input: &SimulationInput) -> Vec<CreditScheduleRow> {
    let fte = fte_count(input);
    employment_credit_schedule(input.company_size, input.region)
        .iter()
        .zip(1..)
        .map(|(&units, year)| CreditScheduleRow {
            year,
            per_head: units * CREDIT_UNIT,
            amount: employment_credit(fte, input.company_size, input.region, year),
        })
        .collect()
}

pub fn build_report(input: &SimulationInput, config: SearchConfig) -> Report {
    let rows = simulate(input);
    Report {
        min_operating_years: minimum_operating_years(input.use_grant),
        breakdown: first_year_breakdown(input),
        period_sums: period_sums(&rows),
        retirement: retirement_estimate(input, &rows),
        credit_schedule: credit_schedule(input),
        search: find_optimal_headcount(input, config),
        final_cumulative: final_cumulative(&rows),
        rows,
    }
}
