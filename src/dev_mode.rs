/// Seeded sample reports for development.
///
/// When no real submissions exist yet — fresh install, or the store
/// file failed to load — the app can run against a fixed set of sample
/// reports instead of an empty map. Offsets are relative to the caller's
/// `now_ms` so the samples always land inside the live windows the
/// screens use.

use crate::model::{Report, CATEGORY_RAIN, CATEGORY_SARGASSUM, CATEGORY_SWIM};

const MIN_MS: i64 = 60_000;

/// A fixed spread of reports across a few well-known beaches: La Perle
/// with activity in three categories, Malendure quiet, La Caravelle
/// with fresh heavy sargassum.
pub fn sample_reports(now_ms: i64) -> Vec<Report> {
    vec![
        // La Perle: sargassum reported at all three levels
        Report::new(2, CATEGORY_SARGASSUM, 1, now_ms - 20 * MIN_MS),
        Report::new(2, CATEGORY_SARGASSUM, 2, now_ms - 35 * MIN_MS),
        Report::new(2, CATEGORY_SARGASSUM, 3, now_ms - 70 * MIN_MS),
        // La Perle: rain
        Report::new(2, CATEGORY_RAIN, 1, now_ms - 25 * MIN_MS),
        Report::new(2, CATEGORY_RAIN, 2, now_ms - 90 * MIN_MS),
        // La Perle: swim
        Report::new(2, CATEGORY_SWIM, 1, now_ms - 15 * MIN_MS),
        Report::new(2, CATEGORY_SWIM, 2, now_ms - 120 * MIN_MS),
        // Malendure: quiet sargassum
        Report::new(5, CATEGORY_SARGASSUM, 1, now_ms - 40 * MIN_MS),
        Report::new(5, CATEGORY_SARGASSUM, 1, now_ms - 120 * MIN_MS),
        // La Caravelle: fresh heavy sargassum
        Report::new(14, CATEGORY_SARGASSUM, 3, now_ms - 10 * MIN_MS),
        Report::new(14, CATEGORY_SARGASSUM, 3, now_ms - 18 * MIN_MS),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::decision::compute_decision_at;
    use crate::beaches::find_beach;
    use crate::model::{Reliability, CATEGORY_SARGASSUM, RECENT_WINDOW_MS};
    use crate::normalize::normalize_reports;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_samples_survive_normalization_unchanged() {
        let samples = sample_reports(NOW);
        let value = serde_json::to_value(&samples).expect("samples serialize");
        assert_eq!(
            normalize_reports(&value),
            samples,
            "sample reports must already be in canonical shape"
        );
    }

    #[test]
    fn test_samples_reference_catalog_beaches() {
        for report in sample_reports(NOW) {
            assert!(
                find_beach(report.beach_id).is_some(),
                "sample report targets unknown beach id {}",
                report.beach_id
            );
        }
    }

    #[test]
    fn test_samples_are_in_the_past() {
        assert!(sample_reports(NOW).iter().all(|r| r.ts < NOW));
    }

    #[test]
    fn test_perle_sargassum_decision_from_samples() {
        // Within 1 h of seeding: one level-1 and one level-2 sargassum
        // report at La Perle; the tie resolves to 2.
        let samples = sample_reports(NOW);
        let decision = compute_decision_at(&samples, CATEGORY_SARGASSUM, RECENT_WINDOW_MS, NOW);
        // samples span several beaches; scope to La Perle first
        let perle: Vec<Report> = samples.into_iter().filter(|r| r.beach_id == 2).collect();
        let decision_perle = compute_decision_at(&perle, CATEGORY_SARGASSUM, RECENT_WINDOW_MS, NOW);
        assert_eq!(decision_perle.level, 2);
        assert_eq!(decision_perle.count, 2);
        assert_eq!(decision_perle.reliability, Reliability::Medium);
        // Unscoped, La Caravelle's fresh level-3 pair dominates.
        assert_eq!(decision.level, 3);
    }
}
