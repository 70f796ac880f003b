//! Map marker status resolution.
//!
//! One summary color per beach across all categories, for the map
//! overview: "is anything wrong here". Per-category detail belongs to
//! [`super::decision`]; this resolver deliberately conflates categories,
//! so a severe swim report and a severe sargassum report paint the pin
//! the same red.

use crate::model::{MarkerStatus, Report};

use super::windows::{self, recent_for_beach};

/// Resolves the marker status for one beach over all reports, any
/// category, with the window ending at `now_ms`.
///
/// Rules, in order:
/// - no in-window reports → [`MarkerStatus::NoData`]
/// - any in-window report at level 3 → [`MarkerStatus::Red`] — a single
///   severe report of any kind flips the marker
/// - otherwise the mean level (all 1s and 2s at this point): below 1.5
///   → green, else orange
pub fn marker_status_at(
    all_reports: &[Report],
    beach_id: i64,
    window_ms: i64,
    now_ms: i64,
) -> MarkerStatus {
    let recent = recent_for_beach(all_reports, beach_id, window_ms, now_ms);

    if recent.is_empty() {
        return MarkerStatus::NoData;
    }
    if recent.iter().any(|r| r.level == 3) {
        return MarkerStatus::Red;
    }

    let mean = recent.iter().map(|r| f64::from(r.level)).sum::<f64>() / recent.len() as f64;
    if mean < 1.5 {
        MarkerStatus::Green
    } else {
        MarkerStatus::Orange
    }
}

/// The pin color hex for a beach. Same rules as [`marker_status_at`].
pub fn marker_color_at(
    all_reports: &[Report],
    beach_id: i64,
    window_ms: i64,
    now_ms: i64,
) -> &'static str {
    marker_status_at(all_reports, beach_id, window_ms, now_ms).hex()
}

/// Convenience wrapper anchored at the real clock. Use
/// [`marker_status_at`] in tests to keep them deterministic.
pub fn marker_status(all_reports: &[Report], beach_id: i64, window_ms: i64) -> MarkerStatus {
    marker_status_at(all_reports, beach_id, window_ms, windows::now_ms())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RECENT_WINDOW_MS;

    const NOW: i64 = 1_700_000_000_000;
    const MIN_MS: i64 = 60_000;

    fn report(beach_id: i64, category: &str, level: u8, age_min: i64) -> Report {
        Report::new(beach_id, category, level, NOW - age_min * MIN_MS)
    }

    #[test]
    fn test_no_recent_reports_is_gray() {
        let reports = vec![report(1, "swim", 3, 120)]; // outside 1 h window
        let status = marker_status_at(&reports, 1, RECENT_WINDOW_MS, NOW);
        assert_eq!(status, MarkerStatus::NoData);
        assert_eq!(status.hex(), "#bdbdbd");
    }

    #[test]
    fn test_single_severe_report_overrides_average() {
        // Nine calm reports and one severe one: the severe report wins.
        let mut reports: Vec<Report> = (0..9).map(|i| report(1, "swim", 1, i + 1)).collect();
        reports.push(report(1, "sargasses", 3, 10));
        let status = marker_status_at(&reports, 1, RECENT_WINDOW_MS, NOW);
        assert_eq!(status, MarkerStatus::Red);
    }

    #[test]
    fn test_mean_below_threshold_is_green() {
        // Levels [1,1,2]: mean 1.33.
        let reports = vec![
            report(1, "swim", 1, 5),
            report(1, "sargasses", 1, 10),
            report(1, "crowd", 2, 15),
        ];
        assert_eq!(
            marker_status_at(&reports, 1, RECENT_WINDOW_MS, NOW),
            MarkerStatus::Green
        );
    }

    #[test]
    fn test_mean_at_or_above_threshold_is_orange() {
        // Levels [2,2,1]: mean 1.67.
        let reports = vec![
            report(1, "swim", 2, 5),
            report(1, "sargasses", 2, 10),
            report(1, "crowd", 1, 15),
        ];
        assert_eq!(
            marker_status_at(&reports, 1, RECENT_WINDOW_MS, NOW),
            MarkerStatus::Orange
        );

        // Exact mean 1.5 is not green.
        let reports = vec![report(1, "swim", 1, 5), report(1, "swim", 2, 10)];
        assert_eq!(
            marker_status_at(&reports, 1, RECENT_WINDOW_MS, NOW),
            MarkerStatus::Orange
        );
    }

    #[test]
    fn test_marker_is_category_blind() {
        // A severe crowd report colors the pin exactly like a severe
        // swim report would.
        let reports = vec![report(1, "crowd", 3, 5)];
        assert_eq!(
            marker_status_at(&reports, 1, RECENT_WINDOW_MS, NOW),
            MarkerStatus::Red
        );
    }

    #[test]
    fn test_other_beaches_do_not_affect_marker() {
        let reports = vec![report(2, "swim", 3, 5)];
        assert_eq!(
            marker_status_at(&reports, 1, RECENT_WINDOW_MS, NOW),
            MarkerStatus::NoData
        );
    }

    #[test]
    fn test_marker_color_hex_mapping() {
        let reports = vec![report(1, "swim", 1, 5)];
        assert_eq!(marker_color_at(&reports, 1, RECENT_WINDOW_MS, NOW), "#2e7d32");
        assert_eq!(marker_color_at(&reports, 2, RECENT_WINDOW_MS, NOW), "#bdbdbd");
    }
}
