//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 409 Conflict
            Self::EmployeeIdExists | Self::EmployeeConstraintViolation => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation errors)
            Self::InvalidRequest
            | Self::EmployeeDataMissing
            | Self::EmployeeStatusInvalid
            | Self::EmployeeHireDateInvalid
            | Self::EmployeeFieldTooLong
            | Self::EmployeeSalaryInvalid => StatusCode::BAD_REQUEST,
        }
    }
}
