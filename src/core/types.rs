use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Mixed,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    Severe,
    Mild,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Sme,
    MidSize,
    Large,
}

/// Only meaningful for [`CompanySize::Sme`]; the credit schedule ignores it otherwise.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Metro,
    NonMetro,
}

/// A validated, immutable snapshot of everything one simulation run needs.
///
/// Currency fields are in won. Build one through `normalize` rather than by hand
/// so the statutory floors hold.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub existing_workers: u32,
    pub disabled_count: u32,
    pub severe_count: u32,
    pub daily_hours: u32,
    pub weekly_days: u32,
    pub gender: Gender,
    pub company_size: CompanySize,
    pub region: Region,
    pub annual_tax: i64,
    pub wage_growth_rate: f64,
    pub years: u32,
    pub use_grant: bool,
    pub monthly_service_saving: i64,
}

impl SimulationInput {
    pub fn mild_count(&self) -> u32 {
        self.disabled_count.saturating_sub(self.severe_count)
    }

    pub fn total_workers(&self) -> u32 {
        self.existing_workers.saturating_add(self.disabled_count)
    }

    pub fn weekly_hours(&self) -> u32 {
        self.daily_hours * self.weekly_days
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRow {
    pub year: u32,
    pub rate_label: String,
    pub hourly_wage: i64,
    pub monthly_cost_per_head: i64,
    pub annual_employment_cost: i64,
    /// Consulting fee (year 1 only) plus the yearly management fee.
    pub annual_consulting: i64,
    pub annual_incentive: i64,
    pub annual_tax_relief: i64,
    pub credit_earned: i64,
    pub credit_used: i64,
    pub credit_balance: i64,
    pub annual_grant: i64,
    pub annual_service_saving: i64,
    pub annual_net: i64,
    pub cumulative: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalPoint {
    pub disabled_count: u32,
    pub severe_count: u32,
    pub mild_count: u32,
    pub cumulative: i64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchEnd {
    DeficitOnset,
    Exhausted,
}

impl SearchEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchEnd::DeficitOnset => "deficit onset",
            SearchEnd::Exhausted => "search exhausted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalSearchResult {
    pub min_point: OptimalPoint,
    pub best_point: OptimalPoint,
    pub end_point: Option<OptimalPoint>,
    pub end_reason: Option<SearchEnd>,
    /// Disabled headcount of the last evaluated candidate.
    pub search_end_count: u32,
    pub evaluated: u32,
}
