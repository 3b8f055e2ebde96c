//! Executed strategy positions.
//!
//! Executing an analyzed strategy produces a flat, JSON-serializable
//! [`PositionRecord`] - the same shape the dashboard keeps in client-side
//! storage. No schema versioning; the record is a plain map.

mod record;
mod repository;

pub use record::{PositionRecord, PositionStatus};
pub use repository::{InMemoryPositionRepository, PositionError, PositionRepositoryPort};
