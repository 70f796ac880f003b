//! Windowed report selection and counting.
//!
//! "Recent" always means a trailing duration ending at a caller-supplied
//! `now_ms`, never a stored field — so the same report collection gives
//! different answers as real time passes, and staleness is automatic
//! with no expiry job.
//!
//! # Clock injection
//! Functions here take `now_ms` rather than reading the wall clock, so
//! windowing is deterministic in tests. [`now_ms`] is the one place the
//! real clock is read.

use chrono::Utc;

use crate::model::{LevelCounts, Report, HOUR_MS};

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Returns `true` if the report falls within the trailing window:
/// `now - ts <= window_ms`.
///
/// The boundary is inclusive — a report exactly `window_ms` old still
/// counts. A future `ts` (client clock skew) gives a negative age that
/// trivially satisfies the bound; this inclusion is the long-observed
/// behavior and is kept as-is.
pub fn in_window(report: &Report, window_ms: i64, now_ms: i64) -> bool {
    now_ms - report.ts <= window_ms
}

/// Tallies reports by level. Levels outside 1–3 cannot occur in
/// normalized input and are ignored.
pub fn count_levels<'a>(reports: impl IntoIterator<Item = &'a Report>) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for report in reports {
        match report.level {
            1 => counts.green += 1,
            2 => counts.orange += 1,
            3 => counts.red += 1,
            _ => {}
        }
    }
    counts
}

/// Per-level counts over a window, with optional beach and category
/// filters. `None` for a filter means "all".
pub fn windowed_counts(
    reports: &[Report],
    beach_id: Option<i64>,
    category: Option<&str>,
    window_ms: i64,
    now_ms: i64,
) -> LevelCounts {
    count_levels(reports.iter().filter(|r| {
        in_window(r, window_ms, now_ms)
            && beach_id.is_none_or(|id| r.beach_id == id)
            && category.is_none_or(|c| r.category == c)
    }))
}

/// All in-window reports for one beach, any category.
pub fn recent_for_beach<'a>(
    reports: &'a [Report],
    beach_id: i64,
    window_ms: i64,
    now_ms: i64,
) -> Vec<&'a Report> {
    reports
        .iter()
        .filter(|r| r.beach_id == beach_id && in_window(r, window_ms, now_ms))
        .collect()
}

/// Human-readable label for a window duration, rounded to whole hours:
/// "1 h", "3 h", "24 h". Display only.
pub fn window_label(window_ms: i64) -> String {
    let hours = (window_ms as f64 / HOUR_MS as f64).round() as i64;
    format!("{} h", hours)
}

/// "Time since" label for a report timestamp: "à l'instant", "12 min",
/// "2 h", "3 j". A timestamp in the future yields "—".
pub fn time_ago(ts: i64, now_ms: i64) -> String {
    // Floor division keeps sub-minute future skew negative instead of
    // truncating it to "à l'instant".
    let min = (now_ms - ts).div_euclid(60_000);

    if min < 0 {
        return "—".to_string();
    }
    if min < 1 {
        return "à l'instant".to_string();
    }
    if min < 60 {
        return format!("{} min", min);
    }

    let hours = min / 60;
    if hours < 48 {
        return format!("{} h", hours);
    }

    format!("{} j", hours / 24)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
