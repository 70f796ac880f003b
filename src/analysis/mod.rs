/// Report aggregation engine.
///
/// Pure functions over snapshot collections of normalized reports. Every
/// function takes an explicit `now_ms` so results are deterministic in
/// tests; thin `*_now` wrappers anchor at the wall clock for callers.
/// Nothing here holds state, performs I/O, or logs — the engine computes
/// a fresh, consistent answer from exactly the snapshot it is handed.
///
/// Submodules:
/// - `windows` — in-window selection, per-level counting, time labels.
/// - `decision` — per-category dominant-level decision with reliability.
/// - `marker` — per-beach cross-category map marker status.
/// - `stats` — daily per-category tallies for detail screens.

pub mod decision;
pub mod marker;
pub mod stats;
pub mod windows;
