//! plagemon — community beach-conditions reporting engine.
//!
//! Users submit categorized observations (sargassum level, weather,
//! swim safety, crowding) for Guadeloupe beaches. This crate normalizes
//! the raw submissions and aggregates recent ones into a per-category
//! decision with a reliability estimate, and a single marker status per
//! beach for map display.
//!
//! Data flow: report store → normalizer → aggregation engine →
//! presentation layer. The engine itself is pure and storage-agnostic:
//! it consumes an in-memory snapshot of reports plus an explicit clock
//! value and computes a fresh answer from exactly that snapshot.
//! Screen rendering, routing, and GPS acquisition are external
//! collaborators and do not live here.

pub mod analysis;
pub mod beaches;
pub mod config;
pub mod dev_mode;
pub mod geo;
pub mod labels;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod store;
