use tracing::debug;

use super::engine::{final_cumulative, simulate};
use super::formulas::{min_disabled_for_workers, severe_min};
use super::types::{OptimalPoint, OptimalSearchResult, SearchEnd, SimulationInput};

pub const MAX_SEARCH_CANDIDATES: u32 = 500;
pub const DEFICIT_STREAK_LIMIT: u32 = 20;
pub const SEARCH_SEVERE_SHARE_PERCENT: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Hard ceiling on evaluated headcounts.
    pub max_candidates: u32,
    /// Consecutive net-negative candidates that end the scan.
    pub deficit_streak: u32,
    /// Severe share applied to every candidate, on top of the statutory floor.
    pub severe_share_percent: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_candidates: MAX_SEARCH_CANDIDATES,
            deficit_streak: DEFICIT_STREAK_LIMIT,
            severe_share_percent: SEARCH_SEVERE_SHARE_PERCENT,
        }
    }
}

/// Severe headcount used for a search candidate: the statutory floor for the total
/// workforce, or the configured share of `disabled` when that is larger.
pub fn candidate_severe_count(existing_workers: u32, disabled: u32, share_percent: u32) -> u32 {
    let by_share = (u64::from(disabled) * u64::from(share_percent)).div_ceil(100);
    let by_share = u32::try_from(by_share).unwrap_or(u32::MAX).min(disabled);
    severe_min(existing_workers.saturating_add(disabled)).max(by_share)
}

fn evaluate_candidate(base: &SimulationInput, disabled: u32, config: SearchConfig) -> OptimalPoint {
    let severe = candidate_severe_count(base.existing_workers, disabled, config.severe_share_percent);
    let candidate = SimulationInput {
        disabled_count: disabled,
        severe_count: severe,
        ..base.clone()
    };
    let rows = simulate(&candidate);
    OptimalPoint {
        disabled_count: disabled,
        severe_count: severe,
        mild_count: candidate.mild_count(),
        cumulative: final_cumulative(&rows),
    }
}

/// Scans disabled headcounts upward from the statutory minimum for
/// `base.existing_workers`, keeping the first, the most profitable and the
/// deficit-onset candidates.
///
/// The scan makes no unimodality assumption. A deficit streak only starts once some
/// candidate has broken even; a workforce that never breaks even runs to the
/// ceiling and ends as [`SearchEnd::Exhausted`].
pub fn find_optimal_headcount(base: &SimulationInput, config: SearchConfig) -> OptimalSearchResult {
    let start = min_disabled_for_workers(base.existing_workers);
    let max_candidates = config.max_candidates.max(1);
    let streak_limit = config.deficit_streak.max(1);

    let min_point = evaluate_candidate(base, start, config);
    let mut best_point = min_point;
    let mut last_point = min_point;
    let mut evaluated = 1;

    let mut seen_break_even = min_point.cumulative >= 0;
    let mut streak_start: Option<OptimalPoint> = None;
    let mut streak_len = 0;

    while evaluated < max_candidates {
        let point = evaluate_candidate(base, start + evaluated, config);
        evaluated += 1;
        last_point = point;

        if point.cumulative > best_point.cumulative {
            best_point = point;
        }

        if point.cumulative >= 0 {
            seen_break_even = true;
            streak_start = None;
            streak_len = 0;
            continue;
        }
        if !seen_break_even {
            continue;
        }

        streak_start.get_or_insert(point);
        streak_len += 1;
        if streak_len >= streak_limit {
            break;
        }
    }

    // A streak cut short by the ceiling still marks where the deficit began.
    let (end_point, end_reason) = match streak_start {
        _ if !seen_break_even => (Some(last_point), Some(SearchEnd::Exhausted)),
        Some(first) => (Some(first), Some(SearchEnd::DeficitOnset)),
        None => (None, None),
    };

    debug!(
        start,
        evaluated,
        best = best_point.disabled_count,
        end = end_reason.map(SearchEnd::as_str).unwrap_or("none"),
        "optimal headcount search finished"
    );

    OptimalSearchResult {
        min_point,
        best_point,
        end_point,
        end_reason,
        search_end_count: last_point.disabled_count,
        evaluated,
    }
}
