use serde::Serialize;

use super::policy::{
    CONSULTING_BASE, CONSULTING_MIN, CONSULTING_PER_HEAD, CREDIT_UNIT, GRANT_MAX, GRANT_PER_HEAD,
    INCENTIVE_MILD_FEMALE, INCENTIVE_MILD_MALE, INCENTIVE_SEVERE_FEMALE, INCENTIVE_SEVERE_MALE,
    INCENTIVE_WAGE_CAP_RATIO, MANAGEMENT_FEE_PER_HEAD_MONTHLY, MIN_DISABLED_HEADCOUNT,
    OBLIGATION_PER_MILLE, REQUIRED_SHARE_DENOMINATOR, REQUIRED_SHARE_NUMERATOR,
    TAX_RELIEF_BASE_LIMIT, TAX_RELIEF_PER_HEAD_LIMIT, employment_credit_schedule,
    minimum_headcount_increase,
};
use super::types::{CompanySize, Gender, Region, Severity};
use super::units::round_won;

/// Incentive split for one month, after the mandatory headcount is deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIncentive {
    pub severe_rate: i64,
    pub mild_rate: i64,
    pub severe_eligible: u32,
    pub mild_eligible: u32,
    pub total: i64,
}

/// Severe-disability headcount a standard workplace of `total_workers` must employ.
pub fn severe_min(total_workers: u32) -> u32 {
    let total = u64::from(total_workers);
    let required = if total_workers < 100 {
        (total * 15).div_ceil(100)
    } else if total_workers < 300 {
        (total * 10).div_ceil(100) + 5
    } else {
        (total * 5).div_ceil(100) + 20
    };
    narrow(required)
}

fn narrow(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Smallest disabled headcount `x` with `x / (non_disabled + x) >= 30%`, never below 10.
pub fn min_disabled_for_workers(non_disabled: u32) -> u32 {
    let required = (u64::from(REQUIRED_SHARE_NUMERATOR) * u64::from(non_disabled))
        .div_ceil(u64::from(REQUIRED_SHARE_DENOMINATOR));
    narrow(required).max(MIN_DISABLED_HEADCOUNT)
}

/// Headcount covered by the mandatory employment quota; incentives start above it.
pub fn obligation_count(total_workers: u32) -> u32 {
    narrow((u64::from(total_workers) * u64::from(OBLIGATION_PER_MILLE)).div_ceil(1_000))
}

fn base_incentive(severity: Severity, female: bool) -> i64 {
    match (severity, female) {
        (Severity::Severe, false) => INCENTIVE_SEVERE_MALE,
        (Severity::Severe, true) => INCENTIVE_SEVERE_FEMALE,
        (Severity::Mild, false) => INCENTIVE_MILD_MALE,
        (Severity::Mild, true) => INCENTIVE_MILD_FEMALE,
    }
}

/// Monthly incentive for one eligible worker, capped at 60% of the monthly wage.
/// A mixed workforce averages the capped male and female amounts.
pub fn incentive_per_person(severity: Severity, gender: Gender, wage: i64) -> i64 {
    let cap = round_won(wage.max(0) as f64 * INCENTIVE_WAGE_CAP_RATIO);
    match gender {
        Gender::Male => base_incentive(severity, false).min(cap),
        Gender::Female => base_incentive(severity, true).min(cap),
        Gender::Mixed => {
            let male = base_incentive(severity, false).min(cap);
            let female = base_incentive(severity, true).min(cap);
            round_won((male + female) as f64 / 2.0)
        }
    }
}

/// The obligation is deducted from mild workers first and only the remainder from
/// severe workers, which keeps the higher-paying severe headcount eligible.
pub fn monthly_incentive(
    severe_count: u32,
    mild_count: u32,
    gender: Gender,
    wage: i64,
    obligation: u32,
) -> MonthlyIncentive {
    let severe_rate = incentive_per_person(Severity::Severe, gender, wage);
    let mild_rate = incentive_per_person(Severity::Mild, gender, wage);

    let mild_deducted = obligation.min(mild_count);
    let severe_deducted = obligation.saturating_sub(mild_count);
    let severe_eligible = severe_count.saturating_sub(severe_deducted);
    let mild_eligible = mild_count - mild_deducted;

    MonthlyIncentive {
        severe_rate,
        mild_rate,
        severe_eligible,
        mild_eligible,
        total: severe_eligible as i64 * severe_rate + mild_eligible as i64 * mild_rate,
    }
}

/// Share of the annual tax relieved in a given operating year, in percent.
pub fn relief_percent(year: u32) -> u32 {
    match year {
        1..=3 => 100,
        4..=5 => 50,
        6..=10 => 30,
        _ => 0,
    }
}

/// Label of the relief tier actually applied, so years past 10 read "0%".
pub fn relief_rate_label(year: u32) -> String {
    format!("{}%", relief_percent(year))
}

/// Corporate/income tax relief for `year`, capped at the base limit plus a per-head limit.
pub fn tax_reduction(annual_tax: i64, disabled_count: u32, year: u32) -> i64 {
    let limit = TAX_RELIEF_BASE_LIMIT + disabled_count as i64 * TAX_RELIEF_PER_HEAD_LIMIT;
    let relieved = annual_tax.max(0) as f64 * relief_percent(year) as f64 / 100.0;
    round_won(relieved.min(limit as f64))
}

pub fn grant(disabled_count: u32) -> i64 {
    (disabled_count as i64 * GRANT_PER_HEAD).min(GRANT_MAX)
}

/// One-time set-up consulting fee, charged in year 1 only.
pub fn consulting_fee(disabled_count: u32) -> i64 {
    (CONSULTING_BASE + disabled_count as i64 * CONSULTING_PER_HEAD).max(CONSULTING_MIN)
}

pub fn annual_management_fee(disabled_count: u32) -> i64 {
    disabled_count as i64 * MANAGEMENT_FEE_PER_HEAD_MONTHLY * 12
}

/// FTE headcount above the size-dependent minimum increase.
pub fn credit_eligible_headcount(fte_count: f64, size: CompanySize) -> f64 {
    (fte_count - minimum_headcount_increase(size) as f64).max(0.0)
}

/// Employment tax credit accrued in `year` (1-based). Zero once the schedule runs out.
pub fn employment_credit(fte_count: f64, size: CompanySize, region: Region, year: u32) -> i64 {
    let schedule = employment_credit_schedule(size, region);
    if year == 0 || year as usize > schedule.len() {
        return 0;
    }
    let per_head = schedule[year as usize - 1];
    let eligible = credit_eligible_headcount(fte_count, size);
    round_won(eligible * per_head as f64 * CREDIT_UNIT as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn severe_min_uses_tiered_rates() {
        assert_eq!(severe_min(15), 3);
        assert_eq!(severe_min(99), 15);
        assert_eq!(severe_min(100), 15);
        assert_eq!(severe_min(110), 16);
        assert_eq!(severe_min(143), 20);
        assert_eq!(severe_min(299), 35);
        assert_eq!(severe_min(300), 35);
        assert_eq!(severe_min(430), 42);
    }

    #[test]
    fn headcount_formulas_saturate_on_huge_workforces() {
        assert_eq!(severe_min(u32::MAX), 214_748_385);
        assert_eq!(obligation_count(u32::MAX), 133_143_987);
        assert_eq!(min_disabled_for_workers(u32::MAX), 1_840_700_270);
    }

    #[test]
    fn min_disabled_has_floor_of_ten() {
        assert_eq!(min_disabled_for_workers(0), 10);
        assert_eq!(min_disabled_for_workers(5), 10);
        assert_eq!(min_disabled_for_workers(23), 10);
        assert_eq!(min_disabled_for_workers(24), 11);
        assert_eq!(min_disabled_for_workers(100), 43);
    }

    #[test]
    fn min_disabled_reaches_thirty_percent_share() {
        for n in 0..=500 {
            let x = min_disabled_for_workers(n);
            assert!(x * 10 >= (n + x) * 3, "n={n} x={x}");
            if x > 10 {
                let fewer = x - 1;
                assert!(fewer * 10 < (n + fewer) * 3, "n={n} x={x} not minimal");
            }
        }
    }

    #[test]
    fn obligation_rounds_up() {
        assert_eq!(obligation_count(15), 1);
        assert_eq!(obligation_count(50), 2);
        assert_eq!(obligation_count(100), 4);
        assert_eq!(obligation_count(0), 0);
    }

    #[test]
    fn incentive_is_capped_at_sixty_percent_of_wage() {
        let wage = 1_076_229;
        let cap = 645_737;
        assert_eq!(incentive_per_person(Severity::Severe, Gender::Male, wage), cap);
        assert_eq!(incentive_per_person(Severity::Severe, Gender::Female, wage), cap);
        assert_eq!(incentive_per_person(Severity::Mild, Gender::Male, wage), 350_000);
        assert_eq!(incentive_per_person(Severity::Mild, Gender::Female, wage), 500_000);
    }

    #[test]
    fn mixed_gender_averages_capped_amounts() {
        assert_eq!(
            incentive_per_person(Severity::Mild, Gender::Mixed, 2_000_000),
            425_000
        );
        assert_eq!(
            incentive_per_person(Severity::Severe, Gender::Mixed, 2_000_000),
            800_000
        );
        assert_eq!(
            incentive_per_person(Severity::Severe, Gender::Mixed, 1_076_229),
            645_737
        );
    }

    #[test]
    fn monthly_incentive_deducts_mild_first() {
        let inc = monthly_incentive(3, 7, Gender::Mixed, 1_076_229, 1);
        assert_eq!(inc.severe_eligible, 3);
        assert_eq!(inc.mild_eligible, 6);
        assert_eq!(inc.total, 3 * 645_737 + 6 * 425_000);
    }

    #[test]
    fn monthly_incentive_spills_obligation_into_severe() {
        let inc = monthly_incentive(5, 2, Gender::Male, 3_000_000, 4);
        assert_eq!(inc.mild_eligible, 0);
        assert_eq!(inc.severe_eligible, 3);
        assert_eq!(inc.total, 3 * 700_000);

        let none = monthly_incentive(1, 1, Gender::Male, 3_000_000, 5);
        assert_eq!(none.severe_eligible + none.mild_eligible, 0);
        assert_eq!(none.total, 0);
    }

    #[test]
    fn tax_reduction_follows_year_tiers() {
        let tax = 100_000_000;
        assert_eq!(tax_reduction(tax, 10, 1), 100_000_000);
        assert_eq!(tax_reduction(tax, 10, 3), 100_000_000);
        assert_eq!(tax_reduction(tax, 10, 4), 50_000_000);
        assert_eq!(tax_reduction(tax, 10, 5), 50_000_000);
        assert_eq!(tax_reduction(tax, 10, 6), 30_000_000);
        assert_eq!(tax_reduction(tax, 10, 10), 30_000_000);
        assert_eq!(tax_reduction(tax, 10, 11), 0);
    }

    #[test]
    fn tax_reduction_is_capped_by_headcount_limit() {
        // limit = 100M + 10 * 20M
        assert_eq!(tax_reduction(1_000_000_000, 10, 1), 300_000_000);
        assert_eq!(tax_reduction(1_000_000_000, 10, 4), 300_000_000);
        assert_eq!(tax_reduction(1_000_000_000, 10, 6), 300_000_000);
        assert_eq!(tax_reduction(-5, 10, 1), 0);
    }

    #[test]
    fn relief_labels_match_rates() {
        assert_eq!(relief_rate_label(1), "100%");
        assert_eq!(relief_rate_label(5), "50%");
        assert_eq!(relief_rate_label(7), "30%");
        assert_eq!(relief_rate_label(12), "0%");
    }

    #[test]
    fn grant_and_consulting_fee_bounds() {
        assert_eq!(grant(10), 400_000_000);
        assert_eq!(grant(25), 1_000_000_000);
        assert_eq!(grant(40), 1_000_000_000);
        assert_eq!(consulting_fee(10), 30_000_000);
        assert_eq!(consulting_fee(5), 30_000_000);
        assert_eq!(consulting_fee(20), 50_000_000);
        assert_eq!(annual_management_fee(10), 60_000_000);
    }

    #[test]
    fn employment_credit_reads_schedule_by_year() {
        let sme = |year| employment_credit(5.0, CompanySize::Sme, Region::Metro, year);
        assert_eq!(sme(0), 0);
        assert_eq!(sme(1), 35_000_000);
        assert_eq!(sme(2), 80_000_000);
        assert_eq!(sme(3), 85_000_000);
        assert_eq!(sme(4), 0);

        assert_eq!(
            employment_credit(20.0, CompanySize::Sme, Region::NonMetro, 1),
            200_000_000
        );
        assert_eq!(
            employment_credit(20.0, CompanySize::Large, Region::NonMetro, 3),
            0
        );
    }

    #[test]
    fn employment_credit_requires_minimum_increase() {
        assert_eq!(
            employment_credit(5.0, CompanySize::MidSize, Region::Metro, 1),
            0
        );
        assert_eq!(
            employment_credit(7.5, CompanySize::MidSize, Region::Metro, 1),
            12_500_000
        );
        assert_eq!(
            employment_credit(8.0, CompanySize::Large, Region::Metro, 2),
            0
        );
        assert_eq!(
            employment_credit(12.0, CompanySize::Large, Region::Metro, 2),
            10_000_000
        );
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_obligation_deduction_preserves_excess_and_order(
            severe in 0u32..200,
            mild in 0u32..200,
            obligation in 0u32..400,
        ) {
            let inc = monthly_incentive(severe, mild, Gender::Female, 2_500_000, obligation);
            let excess = (severe + mild).saturating_sub(obligation);
            prop_assert_eq!(inc.severe_eligible + inc.mild_eligible, excess);
            prop_assert_eq!(mild - inc.mild_eligible, obligation.min(mild));
            if obligation <= mild {
                prop_assert_eq!(inc.severe_eligible, severe);
            }
            prop_assert!(inc.total >= 0);
        }

        #[test]
        fn prop_tax_reduction_never_exceeds_tax_or_limit(
            tax in 0i64..5_000_000_000,
            disabled in 0u32..300,
            year in 0u32..15,
        ) {
            let relief = tax_reduction(tax, disabled, year);
            prop_assert!(relief >= 0);
            prop_assert!(relief <= tax);
            prop_assert!(relief <= TAX_RELIEF_BASE_LIMIT + disabled as i64 * TAX_RELIEF_PER_HEAD_LIMIT);
        }
    }
}
