/// Core data types for the beach conditions reporting engine.
///
/// This module defines the shared domain model imported by all other
/// modules. It contains no logic and no I/O — only types, constants,
/// and their serialization shape.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category tags
// ---------------------------------------------------------------------------
//
// Categories are open, uninterpreted strings: the set has changed across
// app variants ("rain" became "sun", "crowd" arrived later), so the
// engine filters and groups by whatever tag it is asked about and never
// closes the set into an enum. The constants below are the tags the
// current report form submits.

/// Sargassum seaweed coverage. 1 = none, 3 = heavy.
pub const CATEGORY_SARGASSUM: &str = "sargasses";

/// Weather. 1 = sunny, 3 = rain. Replaces the older `rain` tag.
pub const CATEGORY_SUN: &str = "sun";

/// Legacy weather tag from earlier variants; still valid in stored data.
pub const CATEGORY_RAIN: &str = "rain";

/// Swim safety. 1 = allowed, 3 = forbidden.
pub const CATEGORY_SWIM: &str = "swim";

/// Crowd level. 1 = calm, 3 = packed.
pub const CATEGORY_CROWD: &str = "crowd";

/// The categories the current report form submits, in display order.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    CATEGORY_SARGASSUM,
    CATEGORY_SUN,
    CATEGORY_SWIM,
    CATEGORY_CROWD,
];

// ---------------------------------------------------------------------------
// Time windows
// ---------------------------------------------------------------------------

pub const HOUR_MS: i64 = 60 * 60 * 1000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Default trailing window for decisions and map markers.
pub const RECENT_WINDOW_MS: i64 = HOUR_MS;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One user-submitted observation: a severity level for one category at
/// one beach, stamped at submission time.
///
/// Reports are immutable once created. They are never updated or
/// deleted; they simply age out of the aggregation windows.
///
/// The serde shape matches the store's wire format:
/// `{"beachId": 2, "type": "sargasses", "level": 1, "ts": 1712345678901}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Canonical numeric beach identifier. Matches a catalog entry when
    /// the report is meaningful; the engine does not enforce membership.
    #[serde(rename = "beachId")]
    pub beach_id: i64,
    /// Open category tag, e.g. `sargasses`, `sun`, `swim`, `crowd`.
    #[serde(rename = "type")]
    pub category: String,
    /// Severity, exactly 1 (best/calmest) to 3 (worst). Meaning is
    /// category-specific.
    pub level: u8,
    /// Creation timestamp, milliseconds since the Unix epoch.
    pub ts: i64,
}

impl Report {
    pub fn new(beach_id: i64, category: &str, level: u8, ts: i64) -> Self {
        Report {
            beach_id,
            category: category.to_string(),
            level,
            ts,
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// The computed current status for one category at one beach over one
/// window: dominant level, coverage-based reliability, and the raw count
/// for display ("X signalements").
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// 0 when no in-window reports exist; otherwise the dominant level
    /// among 1–3.
    pub level: u8,
    pub reliability: Reliability,
    /// Number of in-window reports for the category.
    pub count: usize,
    /// Human-readable window duration, e.g. "1 h". Display only.
    pub window_label: String,
}

/// Qualitative confidence tier derived purely from the in-window report
/// count. A coverage proxy, not a statistical confidence interval: it
/// says nothing about how much the reports agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Reliability {
    /// 0 or 1 report.
    Low,
    /// 2 or 3 reports.
    Medium,
    /// 4 or more reports.
    High,
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reliability::Low => write!(f, "low"),
            Reliability::Medium => write!(f, "medium"),
            Reliability::High => write!(f, "high"),
        }
    }
}

// ---------------------------------------------------------------------------
// Marker status
// ---------------------------------------------------------------------------

/// Cross-category severity summary for one beach, used to color its map
/// pin. Answers "is anything wrong here", not "what specifically".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStatus {
    /// No report of any category in the window.
    NoData,
    Green,
    Orange,
    Red,
}

impl MarkerStatus {
    /// The fixed pin color for this status.
    pub fn hex(self) -> &'static str {
        match self {
            MarkerStatus::NoData => "#bdbdbd",
            MarkerStatus::Green => "#2e7d32",
            MarkerStatus::Orange => "#f9a825",
            MarkerStatus::Red => "#d32f2f",
        }
    }
}

impl fmt::Display for MarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerStatus::NoData => write!(f, "none"),
            MarkerStatus::Green => write!(f, "green"),
            MarkerStatus::Orange => write!(f, "orange"),
            MarkerStatus::Red => write!(f, "red"),
        }
    }
}

// ---------------------------------------------------------------------------
// Level counts
// ---------------------------------------------------------------------------

/// Per-level report tallies over some window, named by the colors the
/// detail screens display them with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    /// Level 1 reports.
    pub green: u32,
    /// Level 2 reports.
    pub orange: u32,
    /// Level 3 reports.
    pub red: u32,
}

impl LevelCounts {
    pub fn total(&self) -> u32 {
        self.green + self.orange + self.red
    }
}
