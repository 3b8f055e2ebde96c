//! Position repository port and the in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

use super::record::{PositionRecord, PositionStatus};

/// Position store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// No position with the given id.
    #[error("position {0} not found")]
    NotFound(String),
}

/// Port for position persistence.
#[async_trait]
pub trait PositionRepositoryPort: Send + Sync {
    /// Save a position.
    async fn save(&self, position: &PositionRecord) -> Result<(), PositionError>;

    /// Find a position by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<PositionRecord>, PositionError>;

    /// List all positions, newest first.
    async fn list(&self) -> Result<Vec<PositionRecord>, PositionError>;

    /// Mark a position closed, returning the updated record.
    async fn close(&self, id: &str) -> Result<PositionRecord, PositionError>;
}

/// In-memory implementation of [`PositionRepositoryPort`].
///
/// Stands in for the dashboard's client-side storage; nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct InMemoryPositionRepository {
    positions: RwLock<HashMap<String, PositionRecord>>,
}

impl InMemoryPositionRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.read().unwrap().len()
    }

    /// Whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.read().unwrap().is_empty()
    }
}

#[async_trait]
impl PositionRepositoryPort for InMemoryPositionRepository {
    async fn save(&self, position: &PositionRecord) -> Result<(), PositionError> {
        let mut positions = self.positions.write().unwrap();
        positions.insert(position.id.clone(), position.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PositionRecord>, PositionError> {
        let positions = self.positions.read().unwrap();
        Ok(positions.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<PositionRecord>, PositionError> {
        let positions = self.positions.read().unwrap();
        let mut all: Vec<PositionRecord> = positions.values().cloned().collect();
        all.sort_by(|a, b| b.entry_time.cmp(&a.entry_time));
        Ok(all)
    }

    async fn close(&self, id: &str) -> Result<PositionRecord, PositionError> {
        let mut positions = self.positions.write().unwrap();
        let position = positions
            .get_mut(id)
            .ok_or_else(|| PositionError::NotFound(id.to_string()))?;
        position.status = PositionStatus::Closed;
        Ok(position.clone())
    }
}
