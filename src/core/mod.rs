mod engine;
mod formulas;
mod normalize;
pub mod policy;
mod qualification;
mod report;
mod solver;
mod types;
mod units;

pub use engine::{TaxCreditLedger, final_cumulative, fte_count, grown_hourly_wage, simulate};
pub use formulas::{
    MonthlyIncentive, annual_management_fee, consulting_fee, credit_eligible_headcount,
    employment_credit, grant, incentive_per_person, min_disabled_for_workers, monthly_incentive,
    obligation_count, relief_percent, relief_rate_label, severe_min, tax_reduction,
};
pub use normalize::{FormInput, normalize};
pub use qualification::{Qualification, REFERENCE_HEADCOUNTS, SevereTier, qualify, reference_table};
pub use report::{
    CreditScheduleRow, FirstYearBreakdown, PeriodSum, Report, RetirementEstimate, build_report,
    credit_schedule, first_year_breakdown, period_sums, retirement_estimate,
};
pub use solver::{
    DEFICIT_STREAK_LIMIT, MAX_SEARCH_CANDIDATES, SEARCH_SEVERE_SHARE_PERCENT, SearchConfig,
    candidate_severe_count, find_optimal_headcount,
};
pub use types::{
    CompanySize, Gender, OptimalPoint, OptimalSearchResult, Region, SearchEnd, Severity,
    SimulationInput, YearRow,
};
pub use units::{Insurance, calc_insurance, fte_ratio, monthly_hours, monthly_wage, weekly_hours};
