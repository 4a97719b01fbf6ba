//! Korean won formatting and the plain-text report printed by the CLI.

use crate::core::{
    CompanySize, Gender, OptimalPoint, PeriodSum, Region, Report, SearchEnd, SimulationInput,
    YearRow,
};

const EOK: i64 = 100_000_000;
const MAN: i64 = 10_000;

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Picks the largest unit that fits: 억원 with two decimals, whole 만원, or 원.
pub fn fmt_won(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    if abs >= EOK as u64 {
        format!("{sign}{:.2}억원", abs as f64 / EOK as f64)
    } else if abs >= MAN as u64 {
        let man = (abs as f64 / MAN as f64).round() as u64;
        format!("{sign}{}만원", group_thousands(man))
    } else {
        format!("{sign}{}원", group_thousands(abs))
    }
}

pub fn fmt_eok(amount: i64) -> String {
    format!("{:.2}억원", amount as f64 / EOK as f64)
}

pub fn signed_eok(amount: i64) -> String {
    if amount >= 0 {
        format!("+{}", fmt_eok(amount))
    } else {
        fmt_eok(amount)
    }
}

pub fn period_label(period: &PeriodSum) -> String {
    match period.to_year {
        Some(to) => format!("{}~{}년차 ({}%)", period.from_year, to, period.relief_percent),
        None => format!("{}년차~ ({}%)", period.from_year, period.relief_percent),
    }
}

pub fn search_end_label(end: SearchEnd) -> &'static str {
    match end {
        SearchEnd::DeficitOnset => "적자 시작",
        SearchEnd::Exhausted => "탐색 종료",
    }
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "남성",
        Gender::Female => "여성",
        Gender::Mixed => "혼합",
    }
}

fn company_label(size: CompanySize, region: Region) -> &'static str {
    match (size, region) {
        (CompanySize::Sme, Region::Metro) => "중소기업 (수도권)",
        (CompanySize::Sme, Region::NonMetro) => "중소기업 (지방)",
        (CompanySize::MidSize, _) => "중견기업",
        (CompanySize::Large, _) => "대기업",
    }
}

fn point_line(label: &str, point: &OptimalPoint) -> String {
    format!(
        "  {label}: 장애인 {}명 (중증 {} / 경증 {}), 누적 {}",
        point.disabled_count,
        point.severe_count,
        point.mild_count,
        signed_eok(point.cumulative)
    )
}

fn year_line(row: &YearRow) -> String {
    format!(
        "{:>4} {:>6} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        row.year,
        row.rate_label,
        group_thousands(row.hourly_wage.max(0) as u64),
        fmt_won(row.annual_employment_cost),
        fmt_won(row.annual_incentive),
        fmt_won(row.annual_tax_relief),
        fmt_won(row.credit_used),
        fmt_won(row.annual_grant),
        fmt_won(row.annual_net),
        fmt_won(row.cumulative),
    )
}

pub fn render_report(input: &SimulationInput, report: &Report) -> String {
    let b = &report.breakdown;
    let mut lines = vec![
        "표준사업장 비용·편익 시뮬레이션".to_string(),
        format!(
            "근로자: 비장애인 {}명 + 장애인 {}명 (중증 {} / 경증 {}), {}",
            input.existing_workers,
            input.disabled_count,
            input.severe_count,
            input.mild_count(),
            gender_label(input.gender)
        ),
        format!(
            "근무: 주 {}일 x {}시간 (주 {}시간), {}, 운영 {}년 (최소 {}년)",
            input.weekly_days,
            input.daily_hours,
            input.weekly_hours(),
            company_label(input.company_size, input.region),
            input.years,
            report.min_operating_years
        ),
        String::new(),
        "[1년차 월 기준]".to_string(),
        format!("  월 임금/인: {} (보험 {})", fmt_won(b.monthly_wage), fmt_won(b.insurance.total)),
        format!("  월 인건비: {}", fmt_won(b.monthly_employment_cost)),
        format!(
            "  월 고용장려금: {} (중증 {}명 x {}, 경증 {}명 x {})",
            fmt_won(b.incentive.total),
            b.incentive.severe_eligible,
            fmt_won(b.incentive.severe_rate),
            b.incentive.mild_eligible,
            fmt_won(b.incentive.mild_rate)
        ),
        format!("  월 세액감면: {}", fmt_won(b.monthly_tax_relief)),
        format!("  월 관리비: {}", fmt_won(b.monthly_management_fee)),
        format!("  월 서비스 절감: {}", fmt_won(b.monthly_service_saving)),
        format!("  월 순익: {}", fmt_won(b.monthly_net)),
        format!("  컨설팅비 (1년차): {}", fmt_won(b.consulting_fee)),
        format!("  지원금: {}", fmt_won(b.grant)),
        format!(
            "  고용증대 세액공제 합계: {} (FTE {:.2}, 공제대상 {:.2})",
            fmt_won(b.credit_total),
            b.fte_count,
            b.credit_eligible
        ),
        String::new(),
        format!(
            "{:>4} {:>6} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "연차", "감면율", "시급", "인건비", "장려금", "세액감면", "공제사용", "지원금", "순익",
            "누적"
        ),
    ];
    lines.extend(report.rows.iter().map(year_line));

    lines.push(String::new());
    lines.push("[구간별 합계]".to_string());
    lines.extend(
        report
            .period_sums
            .iter()
            .map(|p| format!("  {}: {}", period_label(p), signed_eok(p.total))),
    );

    if let Some(retirement) = &report.retirement {
        lines.push(format!(
            "  퇴직금 추정: {} (누적 반영 후 {})",
            fmt_eok(retirement.retirement_pay),
            signed_eok(retirement.cumulative_after)
        ));
    }

    let search = &report.search;
    lines.push(String::new());
    lines.push(format!("[최적 인원 탐색] {}개 후보 평가", search.evaluated));
    lines.push(point_line("최소 인원", &search.min_point));
    lines.push(point_line("최대 수익", &search.best_point));
    if let (Some(point), Some(reason)) = (&search.end_point, search.end_reason) {
        lines.push(point_line(search_end_label(reason), point));
    }

    lines.join("\n")
}
