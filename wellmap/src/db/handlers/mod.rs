//! Repository implementations for database access.
//!
//! Each repository wraps a borrowed [`sqlx::PgPool`] and exposes the read queries for one table.
//! Queries run directly against the pool, so a connection is checked out for the duration of
//! a single statement and returned afterwards, including when the statement fails.
//!
//! # Available Repositories
//!
//! - [`Wells`]: mappable-well listing and single-well lookup
//! - [`Stimulations`]: ordered stimulation history for a well
//!
//! ```ignore
//! use wellmap::db::handlers::{Stimulations, Wells};
//!
//! async fn example(pool: &sqlx::PgPool) -> wellmap::db::errors::Result<()> {
//!     if let Some(well) = Wells::new(pool).get_by_id(1).await? {
//!         let history = Stimulations::new(pool).list_for_well(1).await?;
//!         println!("{:?} has {} stimulations", well.0.get("well_name"), history.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod stimulations;
pub mod wells;

pub use stimulations::Stimulations;
pub use wells::Wells;
