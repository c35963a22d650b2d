//! In-process employee store

use std::sync::Arc;

use async_trait::async_trait;
use shared::Employee;
use tokio::sync::RwLock;

use super::{ConstraintKind, EmployeeStore, StoreError};

/// Rows kept in memory; handles start at 1 like an AUTO_INCREMENT column.
/// Enforces the same unique-id rule as the table.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeStore {
    rows: Arc<RwLock<Vec<Employee>>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn insert(&self, employee: &Employee) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == employee.id) {
            return Err(StoreError::ConstraintViolation {
                kind: ConstraintKind::Unique,
                source: format!("Duplicate entry '{}' for key 'id'", employee.id).into(),
            });
        }
        rows.push(employee.clone());
        Ok(rows.len() as u64)
    }
}
