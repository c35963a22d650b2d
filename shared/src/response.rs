//! API Response types
//!
//! Bodies returned by the directory API on success. Failures use
//! [`crate::error::ErrorBody`].

use serde::{Deserialize, Serialize};

/// Liveness check body: `{"status":"ok"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of a successful `POST /employees`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreated {
    pub message: String,
    /// Store-generated row handle, distinct from the business id
    pub id: u64,
}

impl EmployeeCreated {
    pub fn new(handle: u64) -> Self {
        Self {
            message: "Employé créé".to_string(),
            id: handle,
        }
    }
}
