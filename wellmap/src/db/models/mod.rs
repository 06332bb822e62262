//! Database record models for the tables this service reads.
//!
//! - [`wells`]: the map-marker projection of a well and the full well row
//! - [`stimulations`]: full stimulation rows
//!
//! Full rows are carried as JSON objects rather than fixed structs. The tables belong to the
//! ingestion tooling and gain columns over time; detail responses pass every column through, so
//! the only columns this crate names are the ones it filters or orders on.
//!
//! Database models are distinct from API models in [`crate::api::models`], which convert from
//! them with `From`.

pub mod stimulations;
pub mod wells;
