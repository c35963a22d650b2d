//! Shared types for the employee directory
//!
//! Employee model and payload validation, error codes and error bodies,
//! response bodies, and the department/position catalog. Used by both
//! `directory-api` and `directory-client`.

pub mod catalog;
pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{Employee, EmployeeCreate, EmployeeStatus};
pub use response::{EmployeeCreated, HealthResponse};
