use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use http::StatusCode;
use shared::error::{AppError, AppResult};
use shared::{Employee, EmployeeCreate, EmployeeCreated};

use crate::state::AppState;

pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.store.list_all().await?;
    Ok(Json(employees))
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EmployeeCreated>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected employee body");
        AppError::invalid_request("Corps de requête JSON invalide")
            .with_detail("reason", rejection.body_text())
    })?;

    let employee = payload.validate().inspect_err(|err| {
        tracing::info!(code = %err.code, details = ?err.details, "Employee payload refused");
    })?;

    let handle = state.store.insert(&employee).await?;
    tracing::info!(employee_id = %employee.id, handle, "Employee created");

    Ok((StatusCode::CREATED, Json(EmployeeCreated::new(handle))))
}
