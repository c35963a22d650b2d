//! Database access layer
//!
//! The record store is reached only through [`EmployeeStore`]. Production
//! uses [`MySqlEmployeeStore`] over a bounded pool; [`MemoryEmployeeStore`]
//! keeps rows in process for tests and local runs.

pub mod employees;
pub mod memory;
pub mod pool;

use async_trait::async_trait;
use shared::Employee;
use thiserror::Error;

pub use employees::MySqlEmployeeStore;
pub use memory::MemoryEmployeeStore;
pub use pool::{connect_options, create_pool};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Which integrity rule the store enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    NotNull,
    ForeignKey,
    Check,
    /// Value too long or out of range for its column (SQLSTATE class 22)
    DataRange,
}

/// Gateway failure
///
/// - `Unavailable`: no connection within the acquire timeout, transport or
///   TLS failure, statement or row decoding error
/// - `ConstraintViolation`: the store refused the row
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(#[source] BoxError),

    #[error("constraint violation ({kind:?}): {source}")]
    ConstraintViolation {
        kind: ConstraintKind,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::ConstraintViolation {
                kind: ConstraintKind::Unique,
                ..
            }
        )
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db_err) => constraint_kind(db_err.kind())
                .or_else(|| data_exception(db_err.code().as_deref())),
            _ => None,
        };
        match kind {
            Some(kind) => StoreError::ConstraintViolation {
                kind,
                source: err.into(),
            },
            None => StoreError::Unavailable(err.into()),
        }
    }
}

fn constraint_kind(kind: sqlx::error::ErrorKind) -> Option<ConstraintKind> {
    use sqlx::error::ErrorKind;

    match kind {
        ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
        ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
        ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
        ErrorKind::CheckViolation => Some(ConstraintKind::Check),
        _ => None,
    }
}

fn data_exception(sqlstate: Option<&str>) -> Option<ConstraintKind> {
    sqlstate
        .filter(|code| code.starts_with("22"))
        .map(|_| ConstraintKind::DataRange)
}

/// Persistence gateway over the employees table
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every row, in insertion order, no filtering
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Insert one row atomically, returning the store-generated handle
    async fn insert(&self, employee: &Employee) -> Result<u64, StoreError>;
}
