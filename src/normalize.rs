//! Report normalization.
//!
//! Raw report records reach memory from untrusted places — the local
//! store file, remote documents — with no type guarantees: numeric
//! fields may arrive as decimal strings, levels may be out of range,
//! fields may be missing entirely. This module sanitizes such
//! collections into strict [`Report`] values.
//!
//! This is a best-effort filter, not a validating parser: malformed
//! candidates are dropped silently, non-collection input yields an
//! empty result, and nothing here errors or logs. Aggregation must only
//! ever see normalized reports.

use serde_json::Value;

use crate::model::Report;

/// Accepts a JSON number or a decimal string, rejecting everything else
/// (booleans, nulls, objects) and non-finite parses.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Normalizes one candidate record, or `None` if it is malformed.
///
/// Keep rules, applied after coercion:
/// - `beachId` is a finite integral number (catalog ids are integers;
///   a fractional id can never match an entry)
/// - `ts` is a finite number (fractional milliseconds truncate)
/// - `level` is exactly 1, 2, or 3
/// - `type` is a non-empty string
fn normalize_record(candidate: &Value) -> Option<Report> {
    let obj = candidate.as_object()?;

    let beach_id = coerce_number(obj.get("beachId")?)?;
    if beach_id.fract() != 0.0 {
        return None;
    }

    let ts = coerce_number(obj.get("ts")?)?;

    let level = coerce_number(obj.get("level")?)?;
    let level = if level == 1.0 {
        1u8
    } else if level == 2.0 {
        2
    } else if level == 3.0 {
        3
    } else {
        return None;
    };

    let category = obj.get("type")?.as_str()?;
    if category.is_empty() {
        return None;
    }

    Some(Report {
        beach_id: beach_id as i64,
        category: category.to_string(),
        level,
        ts: ts as i64,
    })
}

/// Normalizes an arbitrary JSON value into valid reports.
///
/// Anything other than an array yields an empty vec. Within an array,
/// invalid candidates are dropped without error; valid ones are coerced
/// to the canonical shape. Normalizing already-normalized output is a
/// no-op.
pub fn normalize_reports(input: &Value) -> Vec<Report> {
    match input.as_array() {
        Some(items) => items.iter().filter_map(normalize_record).collect(),
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_record_is_kept() {
        let input = json!([{"beachId": 2, "type": "sargasses", "level": 1, "ts": 1700000000000i64}]);
        let reports = normalize_reports(&input);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].beach_id, 2);
        assert_eq!(reports[0].category, "sargasses");
        assert_eq!(reports[0].level, 1);
        assert_eq!(reports[0].ts, 1_700_000_000_000);
    }

    #[test]
    fn test_string_beach_id_is_converted_to_numeric() {
        let input = json!([{"beachId": "12", "type": "swim", "level": 2, "ts": 1000}]);
        let reports = normalize_reports(&input);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].beach_id, 12, "decimal-string id should coerce to numeric 12");
    }

    #[test]
    fn test_string_ts_and_level_are_converted() {
        let input = json!([{"beachId": 1, "type": "swim", "level": "3", "ts": "5000"}]);
        let reports = normalize_reports(&input);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].level, 3);
        assert_eq!(reports[0].ts, 5000);
    }

    #[test]
    fn test_out_of_range_level_is_dropped() {
        let input = json!([
            {"beachId": 1, "type": "swim", "level": 0, "ts": 1000},
            {"beachId": 1, "type": "swim", "level": 4, "ts": 1000},
            {"beachId": 1, "type": "swim", "level": -1, "ts": 1000},
        ]);
        assert!(normalize_reports(&input).is_empty());
    }

    #[test]
    fn test_non_numeric_level_is_dropped() {
        let input = json!([{"beachId": 1, "type": "swim", "level": "x", "ts": 1000}]);
        assert!(normalize_reports(&input).is_empty());
    }

    #[test]
    fn test_missing_ts_is_dropped() {
        let input = json!([{"beachId": 1, "type": "swim", "level": 2}]);
        assert!(normalize_reports(&input).is_empty());
    }

    #[test]
    fn test_missing_beach_id_is_dropped() {
        let input = json!([{"type": "swim", "level": 2, "ts": 1000}]);
        assert!(normalize_reports(&input).is_empty());
    }

    #[test]
    fn test_empty_category_is_dropped() {
        let input = json!([{"beachId": 1, "type": "", "level": 2, "ts": 1000}]);
        assert!(normalize_reports(&input).is_empty());
    }

    #[test]
    fn test_non_string_category_is_dropped() {
        let input = json!([{"beachId": 1, "type": 7, "level": 2, "ts": 1000}]);
        assert!(normalize_reports(&input).is_empty());
    }

    #[test]
    fn test_unknown_category_tag_is_tolerated() {
        // The engine is category-agnostic; unknown tags pass through.
        let input = json!([{"beachId": 1, "type": "jellyfish", "level": 2, "ts": 1000}]);
        assert_eq!(normalize_reports(&input).len(), 1);
    }

    #[test]
    fn test_fractional_beach_id_is_dropped() {
        let input = json!([{"beachId": 12.5, "type": "swim", "level": 2, "ts": 1000}]);
        assert!(normalize_reports(&input).is_empty());
    }

    #[test]
    fn test_non_array_input_yields_empty() {
        assert!(normalize_reports(&json!(null)).is_empty());
        assert!(normalize_reports(&json!({"beachId": 1})).is_empty());
        assert!(normalize_reports(&json!("reports")).is_empty());
    }

    #[test]
    fn test_non_object_elements_are_dropped() {
        let input = json!([null, 42, "x", {"beachId": 1, "type": "swim", "level": 1, "ts": 1}]);
        assert_eq!(normalize_reports(&input).len(), 1);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let input = json!([
            {"beachId": "3", "type": "sargasses", "level": "2", "ts": "9000"},
            {"beachId": 4, "type": "crowd", "level": 1, "ts": 9500},
            {"beachId": 4, "type": "crowd", "level": 9, "ts": 9500},
        ]);
        let first = normalize_reports(&input);
        assert_eq!(first.len(), 2);

        let reserialized = serde_json::to_value(&first).expect("reports serialize");
        let second = normalize_reports(&reserialized);
        assert_eq!(first, second, "second normalization pass must be a no-op");
    }

    #[test]
    fn test_whitespace_padded_strings_parse() {
        let input = json!([{"beachId": " 7 ", "type": "swim", "level": " 1 ", "ts": " 100 "}]);
        let reports = normalize_reports(&input);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].beach_id, 7);
    }
}
