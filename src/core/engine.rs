use super::formulas::{
    annual_management_fee, consulting_fee, employment_credit, grant, monthly_incentive,
    obligation_count, relief_rate_label, tax_reduction,
};
use super::policy::{MIN_WAGE, WAGE_STEP};
use super::types::{SimulationInput, YearRow};
use super::units::{calc_insurance, fte_ratio, monthly_wage};

/// Carry-forward balance of the employment tax credit for one simulation run.
///
/// Accruals only become drawable in later years: callers draw first, then accrue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaxCreditLedger {
    balance: i64,
}

impl TaxCreditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Draws up to `remaining_tax` from the balance and returns the amount drawn.
    pub fn draw(&mut self, remaining_tax: i64) -> i64 {
        let drawn = remaining_tax.max(0).min(self.balance);
        self.balance -= drawn;
        drawn
    }

    pub fn accrue(&mut self, amount: i64) {
        self.balance += amount.max(0);
    }
}

/// Hourly wage for `year` (1-based): compound growth off `base`, floored to 10 won.
pub fn grown_hourly_wage(base: i64, growth_rate: f64, year: u32) -> i64 {
    let exponent = year.saturating_sub(1) as i32;
    let grown = base as f64 * (1.0 + growth_rate).powi(exponent);
    (grown / WAGE_STEP as f64).floor() as i64 * WAGE_STEP
}

/// FTE headcount of the disabled workforce, rated at the year-1 hourly wage.
pub fn fte_count(input: &SimulationInput) -> f64 {
    input.disabled_count as f64 * fte_ratio(input.daily_hours, input.weekly_days, MIN_WAGE)
}

/// Runs the multi-year cash-flow projection, one row per operating year.
pub fn simulate(input: &SimulationInput) -> Vec<YearRow> {
    let dc = input.disabled_count;
    let mild = input.mild_count();
    let obligation = obligation_count(input.total_workers());
    let fte = fte_count(input);
    let one_time_grant = if input.use_grant { grant(dc) } else { 0 };
    let setup_fee = consulting_fee(dc);
    let management = annual_management_fee(dc);
    let annual_service_saving = input.monthly_service_saving * 12;

    let mut ledger = TaxCreditLedger::new();
    let mut cumulative = 0_i64;
    let mut rows = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        let hourly_wage = grown_hourly_wage(MIN_WAGE, input.wage_growth_rate, year);
        let wage = monthly_wage(hourly_wage, input.daily_hours, input.weekly_days);
        let monthly_cost_per_head = wage + calc_insurance(wage).total;
        let annual_employment_cost = monthly_cost_per_head * dc as i64 * 12;

        let setup = if year == 1 { setup_fee } else { 0 };
        let annual_consulting = setup + management;

        let incentive = monthly_incentive(input.severe_count, mild, input.gender, wage, obligation);
        let annual_incentive = incentive.total * 12;
        let annual_tax_relief = tax_reduction(input.annual_tax, dc, year);
        let annual_grant = if year == 1 { one_time_grant } else { 0 };

        let credit_earned = employment_credit(fte, input.company_size, input.region, year);
        let remaining_tax = (input.annual_tax - annual_tax_relief).max(0);
        let credit_used = ledger.draw(remaining_tax);
        ledger.accrue(credit_earned);

        let annual_net = annual_incentive
            + annual_tax_relief
            + credit_used
            + annual_grant
            + annual_service_saving
            - annual_employment_cost
            - annual_consulting;
        cumulative += annual_net;

        rows.push(YearRow {
            year,
            rate_label: relief_rate_label(year),
            hourly_wage,
            monthly_cost_per_head,
            annual_employment_cost,
            annual_consulting,
            annual_incentive,
            annual_tax_relief,
            credit_earned,
            credit_used,
            credit_balance: ledger.balance(),
            annual_grant,
            annual_service_saving,
            annual_net,
            cumulative,
        });
    }

    rows
}

/// Cumulative net after the last simulated year, zero for an empty run.
pub fn final_cumulative(rows: &[YearRow]) -> i64 {
    rows.last().map(|row| row.cumulative).unwrap_or(0)
}
