//! Display labels for the presentation layer.
//!
//! The app's UI is French; these tables map engine output (category
//! tags, levels, reliability tiers) to the strings the screens show.
//! Unknown category tags fall back to neutral color words rather than
//! erroring — the engine treats the tag set as open and so does this
//! module.

use crate::model::{
    Reliability, CATEGORY_CROWD, CATEGORY_RAIN, CATEGORY_SARGASSUM, CATEGORY_SUN, CATEGORY_SWIM,
};

const SARGASSUM_LABELS: [&str; 3] = ["Aucune", "Modérée", "Importante"];
const SWIM_LABELS: [&str; 3] = ["Autorisée", "Déconseillée", "Interdite"];
const SUN_LABELS: [&str; 3] = ["Soleil", "Couvert", "Pluie"];
const CROWD_LABELS: [&str; 3] = ["Calme", "Modéré", "Foule"];
const FALLBACK_LABELS: [&str; 3] = ["Vert", "Orange", "Rouge"];

/// Summary text for a decision: "Importante", "Interdite", ….
/// Level 0 (no data) reads "Pas assez d'infos"; an unknown category at
/// a real level yields an empty string and the screen shows the level
/// color alone.
pub fn decision_text(category: &str, level: u8) -> &'static str {
    if !(1..=3).contains(&level) {
        return "Pas assez d'infos";
    }
    let idx = (level - 1) as usize;
    match category {
        CATEGORY_SARGASSUM => SARGASSUM_LABELS[idx],
        CATEGORY_SWIM => SWIM_LABELS[idx],
        CATEGORY_SUN => SUN_LABELS[idx],
        CATEGORY_CROWD => CROWD_LABELS[idx],
        _ => "",
    }
}

/// The three option labels for a category's report buttons, levels
/// 1 to 3 in order.
pub fn level_labels(category: &str) -> [&'static str; 3] {
    match category {
        CATEGORY_SARGASSUM => SARGASSUM_LABELS,
        CATEGORY_SWIM => SWIM_LABELS,
        CATEGORY_SUN => SUN_LABELS,
        CATEGORY_CROWD => CROWD_LABELS,
        _ => FALLBACK_LABELS,
    }
}

/// Section title for a category on the report form.
pub fn category_title(category: &str) -> &'static str {
    match category {
        CATEGORY_SARGASSUM => "Sargasses",
        CATEGORY_SUN => "Météo",
        CATEGORY_RAIN => "Pluie",
        CATEGORY_SWIM => "Baignade",
        CATEGORY_CROWD => "Affluence",
        _ => "",
    }
}

/// French reliability wording: "faible", "moyenne", "élevée".
pub fn reliability_label(reliability: Reliability) -> &'static str {
    match reliability {
        Reliability::Low => "faible",
        Reliability::Medium => "moyenne",
        Reliability::High => "élevée",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
