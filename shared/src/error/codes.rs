//! Unified error codes for the employee directory
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the API, the client
/// and any browser front end agree on a single numeric vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,
    /// Invalid request (malformed body, bad content type)
    InvalidRequest = 5,
    /// Route exists but not for this HTTP method
    MethodNotAllowed = 6,

    // ==================== 8xxx: Employee ====================
    /// One or more required employee fields are missing
    EmployeeDataMissing = 8001,
    /// An employee with the same business id already exists
    EmployeeIdExists = 8002,
    /// Status is not one of active / inactive / remote
    EmployeeStatusInvalid = 8003,
    /// Hire date is not an ISO-8601 calendar date
    EmployeeHireDateInvalid = 8004,
    /// The store rejected the row (NOT NULL, foreign key, check, range)
    EmployeeConstraintViolation = 8005,
    /// A text field exceeds its column width
    EmployeeFieldTooLong = 8006,
    /// Salary has more than two decimals or exceeds the column range
    EmployeeSalaryInvalid = 8007,

    // ==================== 9xxx: System ====================
    /// Record store unreachable or statement failed
    StoreUnavailable = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the user-facing message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::NotFound => "Ressource introuvable",
            ErrorCode::InvalidRequest => "Requête invalide",
            ErrorCode::MethodNotAllowed => "Méthode non autorisée",

            // Employee
            ErrorCode::EmployeeDataMissing => "Données employé manquantes",
            ErrorCode::EmployeeIdExists => "Employé déjà existant",
            ErrorCode::EmployeeStatusInvalid => "Statut employé invalide",
            ErrorCode::EmployeeHireDateInvalid => "Date d'embauche invalide",
            ErrorCode::EmployeeConstraintViolation => "Employé refusé par la base de données",
            ErrorCode::EmployeeFieldTooLong => "Champ employé trop long",
            ErrorCode::EmployeeSalaryInvalid => "Salaire invalide",

            // System
            ErrorCode::StoreUnavailable => "Erreur serveur",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::MethodNotAllowed),

            // Employee
            8001 => Ok(ErrorCode::EmployeeDataMissing),
            8002 => Ok(ErrorCode::EmployeeIdExists),
            8003 => Ok(ErrorCode::EmployeeStatusInvalid),
            8004 => Ok(ErrorCode::EmployeeHireDateInvalid),
            8005 => Ok(ErrorCode::EmployeeConstraintViolation),
            8006 => Ok(ErrorCode::EmployeeFieldTooLong),
            8007 => Ok(ErrorCode::EmployeeSalaryInvalid),

            // System
            9002 => Ok(ErrorCode::StoreUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
