//! Common type definitions.
//!
//! Entity IDs are the integer primary keys of the externally-owned tables, wrapped in type
//! aliases so signatures say which table they key:
//!
//! - [`WellId`]: `wells.well_id`
//! - [`StimulationId`]: `stimulations.stimulation_id`

/// Primary key of the `wells` table
pub type WellId = i64;

/// Primary key of the `stimulations` table
pub type StimulationId = i64;
