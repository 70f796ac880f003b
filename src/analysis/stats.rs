//! Daily tallies for beach detail screens.
//!
//! Where [`super::decision`] answers "what is the status right now",
//! this module answers "what has been reported over the last day":
//! raw per-level counts for each category, plus how long ago the latest
//! report arrived. The category list is a parameter — the set of tags
//! has changed across app variants and must never be hardcoded here.

use crate::model::{LevelCounts, Report};

use super::windows::{count_levels, in_window, time_ago, windowed_counts};

/// Per-category tallies for one beach over one window.
#[derive(Debug, Clone, PartialEq)]
pub struct BeachStats {
    /// "Time since the latest in-window report", e.g. "12 min";
    /// "—" when no report falls in the window.
    pub updated_ago: String,
    /// One entry per requested category, in request order.
    pub categories: Vec<(String, LevelCounts)>,
}

/// Computes per-category level tallies for a beach, with the window
/// ending at `now_ms`. Pass [`crate::model::DAY_MS`] and
/// [`crate::model::DEFAULT_CATEGORIES`] for the stock detail screen.
pub fn beach_stats_at(
    reports: &[Report],
    beach_id: i64,
    categories: &[&str],
    window_ms: i64,
    now_ms: i64,
) -> BeachStats {
    let recent: Vec<&Report> = reports
        .iter()
        .filter(|r| r.beach_id == beach_id && in_window(r, window_ms, now_ms))
        .collect();

    let updated_ago = recent
        .iter()
        .map(|r| r.ts)
        .max()
        .map(|ts| time_ago(ts, now_ms))
        .unwrap_or_else(|| "—".to_string());

    let categories = categories
        .iter()
        .map(|&category| {
            let counts = count_levels(recent.iter().copied().filter(|r| r.category == category));
            (category.to_string(), counts)
        })
        .collect();

    BeachStats {
        updated_ago,
        categories,
    }
}

/// Number of in-window reports for one exact (beach, category, level)
/// cell. The report form shows this next to each option button.
pub fn vote_count(
    reports: &[Report],
    beach_id: i64,
    category: &str,
    level: u8,
    window_ms: i64,
    now_ms: i64,
) -> usize {
    let counts = windowed_counts(reports, Some(beach_id), Some(category), window_ms, now_ms);
    match level {
        1 => counts.green as usize,
        2 => counts.orange as usize,
        3 => counts.red as usize,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
