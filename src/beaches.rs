/// Beach catalog for the Guadeloupe beach reporting service.
///
/// Defines the canonical list of beaches reports can target, along with
/// their metadata: location, display radius, map-overlay coordinates,
/// and amenities. This is the single source of truth for beach ids —
/// all other modules should reference beaches from here rather than
/// hardcoding ids.
///
/// The catalog is read-only to the engine: beaches are an identifier
/// space, never transformed. Reports referencing an id not present here
/// are not rejected by the engine; checking membership is the
/// presentation layer's job.

// ---------------------------------------------------------------------------
// Beach metadata
// ---------------------------------------------------------------------------

/// Default display radius around a beach, in meters. Used both for map
/// display and for "is this position on the beach" checks.
pub const BEACH_RADIUS_M: f64 = 500.0;

/// Position of a beach pin on the stylized map overlay, as percentages
/// of the image dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// Parking availability at a beach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parking {
    Yes,
    /// Exists but small; fills up early.
    Limited,
    No,
}

/// Metadata for a single beach.
pub struct Beach {
    /// Canonical numeric id. Report records reference this.
    pub id: i64,
    /// URL-friendly identifier, unique across the catalog.
    pub slug: &'static str,
    /// Official display name.
    pub name: &'static str,
    pub town: &'static str,
    pub island: &'static str,
    /// WGS84 latitude.
    pub lat: f64,
    /// WGS84 longitude.
    pub lng: f64,
    /// Display radius in meters.
    pub radius_m: f64,
    /// Pin position on the map overlay. `None` for beaches not yet
    /// calibrated on the map image.
    pub map: Option<MapPoint>,
    pub parking: Parking,
    pub shower: bool,
}

/// All beaches known to the service, grouped by island and ordered
/// roughly along the coast within each group.
pub static BEACH_REGISTRY: &[Beach] = &[
    // Basse-Terre, côte sous le vent
    Beach {
        id: 1,
        slug: "clugny",
        name: "Plage de Clugny",
        town: "Sainte-Rose",
        island: "Basse-Terre",
        lat: 16.3352,
        lng: -61.7215,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 17.03, y: 31.9 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 2,
        slug: "perle",
        name: "Plage de la Perle",
        town: "Sainte-Rose",
        island: "Basse-Terre",
        lat: 16.3346,
        lng: -61.7142,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 13.78, y: 37.3 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 3,
        slug: "grande-anse-deshaies",
        name: "Plage de Grande Anse",
        town: "Deshaies",
        island: "Basse-Terre",
        lat: 16.3059,
        lng: -61.7976,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 13.3, y: 42.86 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 4,
        slug: "leroux",
        name: "Plage de Leroux",
        town: "Deshaies",
        island: "Basse-Terre",
        lat: 16.3137,
        lng: -61.7894,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 14.27, y: 48.41 }),
        parking: Parking::Limited,
        shower: false,
    },
    Beach {
        id: 5,
        slug: "malendure",
        name: "Plage de Malendure",
        town: "Bouillante",
        island: "Basse-Terre",
        lat: 16.1519,
        lng: -61.7763,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 15.71, y: 54.93 }),
        parking: Parking::Yes,
        shower: true,
    },
    // Grande-Terre, côte nord
    Beach {
        id: 6,
        slug: "anse-du-souffleur",
        name: "Plage de l'Anse du Souffleur",
        town: "Port-Louis",
        island: "Grande-Terre",
        lat: 16.4244,
        lng: -61.5314,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 40.53, y: 25.19 }),
        parking: Parking::Yes,
        shower: true,
    },
    Beach {
        id: 7,
        slug: "chapelle",
        name: "Plage de la Chapelle",
        town: "Anse-Bertrand",
        island: "Grande-Terre",
        lat: 16.4733,
        lng: -61.5098,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 40.95, y: 23.09 }),
        parking: Parking::Yes,
        shower: true,
    },
    Beach {
        id: 8,
        slug: "anse-laborde",
        name: "Plage de l'Anse Laborde",
        town: "Anse-Bertrand",
        island: "Grande-Terre",
        lat: 16.4616,
        lng: -61.5033,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 43.32, y: 18.43 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 9,
        slug: "porte-d-enfer",
        name: "Plage de la Porte d'Enfer",
        town: "Anse-Bertrand",
        island: "Grande-Terre",
        lat: 16.4791,
        lng: -61.5162,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 49.79, y: 16.93 }),
        parking: Parking::Yes,
        shower: false,
    },
    // Grande-Terre, côte sud
    Beach {
        id: 10,
        slug: "salines-saint-francois",
        name: "Plage des Salines",
        town: "Saint-François",
        island: "Grande-Terre",
        lat: 16.2139,
        lng: -61.2606,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 75.06, y: 42.04 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 11,
        slug: "anse-a-la-gourde",
        name: "Plage de l'Anse à la Gourde",
        town: "Saint-François",
        island: "Grande-Terre",
        lat: 16.2454,
        lng: -61.2049,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 73.17, y: 41.09 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 12,
        slug: "raisins-clairs",
        name: "Plage des Raisins Clairs",
        town: "Saint-François",
        island: "Grande-Terre",
        lat: 16.2497,
        lng: -61.2687,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 67.40, y: 42.59 }),
        parking: Parking::Yes,
        shower: true,
    },
    Beach {
        id: 13,
        slug: "bois-jolan",
        name: "Plage de Bois Jolan",
        town: "Sainte-Anne",
        island: "Grande-Terre",
        lat: 16.2197,
        lng: -61.3228,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 60.69, y: 43.70 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 14,
        slug: "caravelle",
        name: "Plage de la Caravelle",
        town: "Sainte-Anne",
        island: "Grande-Terre",
        lat: 16.2068,
        lng: -61.3366,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 55.40, y: 45.59 }),
        parking: Parking::Yes,
        shower: true,
    },
    // Basse-Terre, côte au vent
    Beach {
        id: 15,
        slug: "grande-anse-trois-rivieres",
        name: "Plage de Grande Anse (Trois-Rivières)",
        town: "Trois-Rivières",
        island: "Basse-Terre",
        lat: 15.9656,
        lng: -61.6472,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 26.50, y: 73.70 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 16,
        slug: "rouleaux",
        name: "Plage des Rouleaux",
        town: "Capesterre-Belle-Eau",
        island: "Basse-Terre",
        lat: 16.0487,
        lng: -61.5634,
        radius_m: BEACH_RADIUS_M,
        map: None,
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 17,
        slug: "bananier",
        name: "Plage du Bananier",
        town: "Capesterre-Belle-Eau",
        island: "Basse-Terre",
        lat: 16.0453,
        lng: -61.5658,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 34.32, y: 69.04 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 18,
        slug: "roseau",
        name: "Plage de Roseau",
        town: "Capesterre-Belle-Eau",
        island: "Basse-Terre",
        lat: 16.0424,
        lng: -61.5679,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 37.64, y: 57.51 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 19,
        slug: "saint-claire",
        name: "Plage de Saint-Claire",
        town: "Gourbeyre",
        island: "Basse-Terre",
        lat: 15.9912,
        lng: -61.7013,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 37.32, y: 56.57 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 20,
        slug: "riviere-sens",
        name: "Plage de Rivière Sens",
        town: "Gourbeyre",
        island: "Basse-Terre",
        lat: 15.9886,
        lng: -61.6958,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 22.32, y: 72.52 }),
        parking: Parking::Yes,
        shower: true,
    },
    Beach {
        id: 21,
        slug: "viard",
        name: "Plage de Viard",
        town: "Petit-Bourg",
        island: "Basse-Terre",
        lat: 16.1917,
        lng: -61.6008,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 35.74, y: 50.49 }),
        parking: Parking::Yes,
        shower: false,
    },
    // Grande-Terre, côte est
    Beach {
        id: 22,
        slug: "grand-baie",
        name: "Plage de Grand Baie",
        town: "Le Moule",
        island: "Grande-Terre",
        lat: 16.3374,
        lng: -61.3519,
        radius_m: BEACH_RADIUS_M,
        map: None,
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 23,
        slug: "autre-bord",
        name: "Plage de l'Autre Bord",
        town: "Le Moule",
        island: "Grande-Terre",
        lat: 16.3338,
        lng: -61.3481,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 61.80, y: 33.91 }),
        parking: Parking::Yes,
        shower: true,
    },
    // Le Gosier
    Beach {
        id: 24,
        slug: "bas-du-fort",
        name: "Plage de Bas-du-Fort",
        town: "Le Gosier",
        island: "Grande-Terre",
        lat: 16.2161,
        lng: -61.5269,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 42.88, y: 46.38 }),
        parking: Parking::Yes,
        shower: true,
    },
    Beach {
        id: 25,
        slug: "ilet-du-gosier",
        name: "Plage de l'Îlet du Gosier",
        town: "Le Gosier",
        island: "Grande-Terre",
        lat: 16.2096,
        lng: -61.5006,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 44.44, y: 47.86 }),
        parking: Parking::No,
        shower: false,
    },
    Beach {
        id: 26,
        slug: "saint-felix",
        name: "Plage de Saint-Félix",
        town: "Le Gosier",
        island: "Grande-Terre",
        lat: 16.1947,
        lng: -61.4938,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 47.13, y: 47.08 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 27,
        slug: "petit-havre",
        name: "Plage de Petit-Havre",
        town: "Le Gosier",
        island: "Grande-Terre",
        lat: 16.1931,
        lng: -61.4912,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 49.65, y: 47.34 }),
        parking: Parking::Limited,
        shower: true,
    },
    Beach {
        id: 28,
        slug: "datcha",
        name: "Plage de la Datcha",
        town: "Le Gosier",
        island: "Grande-Terre",
        lat: 16.2069,
        lng: -61.4921,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 44.79, y: 47.16 }),
        parking: Parking::Yes,
        shower: true,
    },
    // Les Saintes
    Beach {
        id: 29,
        slug: "crawen",
        name: "Plage de Crawen",
        town: "Terre-de-Haut",
        island: "Les Saintes",
        lat: 15.8648,
        lng: -61.5802,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 33.85, y: 84.34 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 30,
        slug: "pompierre",
        name: "Plage de Pompierre",
        town: "Terre-de-Haut",
        island: "Les Saintes",
        lat: 15.8709,
        lng: -61.5856,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 35.67, y: 82.95 }),
        parking: Parking::Yes,
        shower: true,
    },
    Beach {
        id: 31,
        slug: "pain-de-sucre",
        name: "Plage du Pain de Sucre",
        town: "Terre-de-Haut",
        island: "Les Saintes",
        lat: 15.8726,
        lng: -61.5791,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 34.19, y: 83.12 }),
        parking: Parking::Limited,
        shower: false,
    },
    Beach {
        id: 32,
        slug: "petite-anse-terre-de-bas",
        name: "Plage de Petite Anse",
        town: "Terre-de-Bas",
        island: "Les Saintes",
        lat: 15.8469,
        lng: -61.6212,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 29.33, y: 85.64 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 33,
        slug: "anse-a-dos",
        name: "Plage de l'Anse à Dos",
        town: "Terre-de-Bas",
        island: "Les Saintes",
        lat: 15.8447,
        lng: -61.6174,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 29.00, y: 84.07 }),
        parking: Parking::Yes,
        shower: false,
    },
    // Marie-Galante
    Beach {
        id: 34,
        slug: "anse-feuillard",
        name: "Plage de l'Anse Feuillard",
        town: "Grand-Bourg",
        island: "Marie-Galante",
        lat: 15.8846,
        lng: -61.2893,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 73.45, y: 78.34 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 35,
        slug: "anse-canot",
        name: "Plage de l'Anse Canot",
        town: "Saint-Louis",
        island: "Marie-Galante",
        lat: 15.9614,
        lng: -61.3319,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 61.54, y: 73.04 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 36,
        slug: "vieux-fort",
        name: "Plage de Vieux-Fort",
        town: "Vieux-Fort",
        island: "Marie-Galante",
        lat: 15.9706,
        lng: -61.6509,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 64.76, y: 69.92 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 37,
        slug: "feuillere",
        name: "Plage de la Feuillère",
        town: "Capesterre-de-Marie-Galante",
        island: "Marie-Galante",
        lat: 15.9124,
        lng: -61.2287,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 72.93, y: 80.43 }),
        parking: Parking::Yes,
        shower: true,
    },
    // La Désirade
    Beach {
        id: 38,
        slug: "fifi",
        name: "Plage de Fifi",
        town: "La Désirade",
        island: "La Désirade",
        lat: 16.3164,
        lng: -61.0614,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 86.47, y: 38.0 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 39,
        slug: "souffleur-desirade",
        name: "Plage du Souffleur",
        town: "La Désirade",
        island: "La Désirade",
        lat: 16.3216,
        lng: -61.0547,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 88.21, y: 37.09 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 40,
        slug: "fanfan",
        name: "Plage de Fanfan",
        town: "La Désirade",
        island: "La Désirade",
        lat: 16.3198,
        lng: -61.0583,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 85.44, y: 38.04 }),
        parking: Parking::Yes,
        shower: false,
    },
    Beach {
        id: 41,
        slug: "petite-riviere-desirade",
        name: "Plage de Petite Rivière",
        town: "La Désirade",
        island: "La Désirade",
        lat: 16.3251,
        lng: -61.0492,
        radius_m: BEACH_RADIUS_M,
        map: Some(MapPoint { x: 90.65, y: 35.44 }),
        parking: Parking::Yes,
        shower: false,
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Looks up a beach by catalog id. Returns `None` if not found.
pub fn find_beach(id: i64) -> Option<&'static Beach> {
    BEACH_REGISTRY.iter().find(|b| b.id == id)
}

/// Looks up a beach by slug. Returns `None` if not found.
pub fn find_beach_by_slug(slug: &str) -> Option<&'static Beach> {
    BEACH_REGISTRY.iter().find(|b| b.slug == slug)
}

/// Returns all catalog ids, in registry order.
pub fn all_beach_ids() -> Vec<i64> {
    BEACH_REGISTRY.iter().map(|b| b.id).collect()
}

/// Maximum number of results returned by [`search_beaches`], matching
/// the search dropdown size.
pub const SEARCH_LIMIT: usize = 5;

/// Case-insensitive substring search over beach name and town.
/// A blank query yields no results.
pub fn search_beaches(query: &str) -> Vec<&'static Beach> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    BEACH_REGISTRY
        .iter()
        .filter(|b| b.name.to_lowercase().contains(&q) || b.town.to_lowercase().contains(&q))
        .take(SEARCH_LIMIT)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_ids() {
        let mut seen = std::collections::HashSet::new();
        for beach in BEACH_REGISTRY {
            assert!(
                seen.insert(beach.id),
                "duplicate beach id {} found in BEACH_REGISTRY",
                beach.id
            );
        }
    }

    #[test]
    fn test_no_duplicate_slugs() {
        let mut seen = std::collections::HashSet::new();
        for beach in BEACH_REGISTRY {
            assert!(
                seen.insert(beach.slug),
                "duplicate slug '{}' found in BEACH_REGISTRY",
                beach.slug
            );
        }
    }

    #[test]
    fn test_slugs_are_url_safe() {
        for beach in BEACH_REGISTRY {
            assert!(
                beach
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug '{}' for '{}' should be lowercase ascii with dashes",
                beach.slug,
                beach.name
            );
        }
    }

    #[test]
    fn test_find_beach_returns_correct_entry() {
        let beach = find_beach(5).expect("Malendure should be in the catalog");
        assert_eq!(beach.slug, "malendure");
        assert!(beach.name.contains("Malendure"));
    }

    #[test]
    fn test_find_beach_returns_none_for_unknown_id() {
        assert!(find_beach(0).is_none());
        assert!(find_beach(9999).is_none());
    }

    #[test]
    fn test_find_beach_by_slug() {
        let beach = find_beach_by_slug("caravelle").expect("Caravelle should be in the catalog");
        assert_eq!(beach.id, 14);
        assert!(find_beach_by_slug("no-such-beach").is_none());
    }

    #[test]
    fn test_all_beach_ids_matches_registry_length() {
        assert_eq!(all_beach_ids().len(), BEACH_REGISTRY.len());
    }

    #[test]
    fn test_search_matches_name_and_town() {
        // "gosier" appears only in town names
        let by_town = search_beaches("gosier");
        assert!(!by_town.is_empty());
        assert!(by_town.iter().all(|b| b.town == "Le Gosier"));

        let by_name = search_beaches("Caravelle");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 14);
    }

    #[test]
    fn test_search_is_capped() {
        // "plage" matches every name; the dropdown shows at most 5
        assert_eq!(search_beaches("plage").len(), SEARCH_LIMIT);
    }

    #[test]
    fn test_search_blank_query_returns_nothing() {
        assert!(search_beaches("").is_empty());
        assert!(search_beaches("   ").is_empty());
    }

    #[test]
    fn test_all_radii_positive() {
        for beach in BEACH_REGISTRY {
            assert!(
                beach.radius_m > 0.0,
                "beach '{}' must have a positive radius",
                beach.name
            );
        }
    }
}
