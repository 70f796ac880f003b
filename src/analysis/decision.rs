//! Per-category decision computation.
//!
//! Collapses one beach's recent reports for a category into a single
//! dominant level plus a reliability tier, the shape every detail
//! screen displays. Earlier app variants each re-implemented this with
//! slightly different windows; here the window is a parameter and the
//! screens all call the same function.

use crate::model::{Decision, Reliability, Report};

use super::windows::{self, count_levels, in_window, window_label};

/// Reliability tier for a given in-window report count.
///
/// Thresholds: 0–1 → low, 2–3 → medium, 4+ → high.
pub fn reliability_for_count(count: usize) -> Reliability {
    if count >= 4 {
        Reliability::High
    } else if count >= 2 {
        Reliability::Medium
    } else {
        Reliability::Low
    }
}

/// Computes the decision for one category over one beach's reports,
/// with the window ending at `now_ms`.
///
/// `beach_reports` is expected to be already scoped to a single beach;
/// any category filter is applied here. No in-window reports of the
/// category — including an unknown tag — yields the no-data decision
/// (level 0, low reliability) rather than an error.
///
/// The dominant level uses a conservative tie-break: severity 3 wins
/// ties against both other levels, and severity 2 wins ties against 1.
/// A single report of any level is trivially dominant.
pub fn compute_decision_at(
    beach_reports: &[Report],
    category: &str,
    window_ms: i64,
    now_ms: i64,
) -> Decision {
    let recent: Vec<&Report> = beach_reports
        .iter()
        .filter(|r| r.category == category && in_window(r, window_ms, now_ms))
        .collect();

    let window_label = window_label(window_ms);

    if recent.is_empty() {
        return Decision {
            level: 0,
            reliability: Reliability::Low,
            count: 0,
            window_label,
        };
    }

    let counts = count_levels(recent.iter().copied());
    let level = if counts.red >= counts.orange && counts.red >= counts.green {
        3
    } else if counts.orange >= counts.green {
        2
    } else {
        1
    };

    Decision {
        level,
        reliability: reliability_for_count(recent.len()),
        count: recent.len(),
        window_label,
    }
}

/// Convenience wrapper anchored at the real clock. Use
/// [`compute_decision_at`] in tests to keep them deterministic.
pub fn compute_decision(beach_reports: &[Report], category: &str, window_ms: i64) -> Decision {
    compute_decision_at(beach_reports, category, window_ms, windows::now_ms())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
