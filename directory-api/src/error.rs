//! Store-to-API error mapping
//!
//! `StoreError` carries the database cause; `AppError` carries what the
//! client is allowed to see. The conversion logs the cause so handlers can
//! use `?` directly on gateway calls.

use shared::error::{AppError, ErrorCode};

use crate::db::{ConstraintKind, StoreError};

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(source) => {
                tracing::error!(error = %source, "Record store unavailable");
                AppError::new(ErrorCode::StoreUnavailable)
            }
            StoreError::ConstraintViolation {
                kind: ConstraintKind::Unique,
                source,
            } => {
                tracing::warn!(error = %source, "Duplicate employee id");
                AppError::new(ErrorCode::EmployeeIdExists)
            }
            StoreError::ConstraintViolation { kind, source } => {
                tracing::warn!(?kind, error = %source, "Employee rejected by store constraint");
                AppError::new(ErrorCode::EmployeeConstraintViolation)
            }
        }
    }
}
