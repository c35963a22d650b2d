//! Transport seam between the form and the directory API

use async_trait::async_trait;
use shared::{Employee, EmployeeCreate, EmployeeCreated, HealthResponse};

use crate::ClientResult;

/// Operations the client needs from the directory API
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn health(&self) -> ClientResult<HealthResponse>;

    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;

    /// One `POST /employees`; never retried
    async fn create_employee(&self, payload: &EmployeeCreate) -> ClientResult<EmployeeCreated>;
}
