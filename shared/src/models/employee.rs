//! Employee Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    Remote,
}

impl EmployeeStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status string outside active / inactive / remote
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for EmployeeStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "remote" => Ok(Self::Remote),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Employee record as stored and listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Business id, supplied by the caller (e.g. `EMP123456`)
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub hire_date: NaiveDate,
    /// Annual salary, sent as a JSON number
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub salary: Decimal,
    pub avatar: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create employee payload
///
/// Every field is optional on the wire so that an incomplete body reaches
/// [`EmployeeCreate::validate`] instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hire_date: Option<String>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub salary: Option<Decimal>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl EmployeeCreate {
    /// Check required fields and convert into a storable [`Employee`].
    ///
    /// Empty strings count as missing. `salary` only has to be present;
    /// zero is accepted. `phone` and `avatar` collapse to `None` when empty.
    pub fn validate(self) -> AppResult<Employee> {
        let mut missing = Vec::new();

        let id = required(self.id, "id", &mut missing);
        let first_name = required(self.first_name, "firstName", &mut missing);
        let last_name = required(self.last_name, "lastName", &mut missing);
        let email = required(self.email, "email", &mut missing);
        let department = required(self.department, "department", &mut missing);
        let position = required(self.position, "position", &mut missing);
        let status = required(self.status, "status", &mut missing);
        let hire_date = required(self.hire_date, "hireDate", &mut missing);
        if self.salary.is_none() {
            missing.push("salary");
        }

        let (
            Some(id),
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(department),
            Some(position),
            Some(status),
            Some(hire_date),
            Some(salary),
        ) = (
            id,
            first_name,
            last_name,
            email,
            department,
            position,
            status,
            hire_date,
            self.salary,
        )
        else {
            return Err(AppError::new(ErrorCode::EmployeeDataMissing).with_detail("fields", missing));
        };

        let status: EmployeeStatus = status.parse().map_err(|e: UnknownStatus| {
            AppError::new(ErrorCode::EmployeeStatusInvalid).with_detail("status", e.0)
        })?;

        let hire_date = parse_hire_date(&hire_date).ok_or_else(|| {
            AppError::new(ErrorCode::EmployeeHireDateInvalid).with_detail("hireDate", hire_date)
        })?;

        let employee = Employee {
            id,
            first_name,
            last_name,
            email,
            phone: non_empty(self.phone),
            department,
            position,
            status,
            hire_date,
            salary,
            avatar: non_empty(self.avatar),
        };

        let too_long = employee.oversized_fields();
        if !too_long.is_empty() {
            return Err(AppError::new(ErrorCode::EmployeeFieldTooLong).with_detail("fields", too_long));
        }

        if !salary_fits(&employee.salary) {
            return Err(AppError::new(ErrorCode::EmployeeSalaryInvalid)
                .with_detail("salary", employee.salary.to_string()));
        }

        Ok(employee)
    }
}

impl Employee {
    /// Wire names of the text fields wider than their column
    fn oversized_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("id", Some(self.id.as_str()), ID_MAX_CHARS),
            ("firstName", Some(self.first_name.as_str()), NAME_MAX_CHARS),
            ("lastName", Some(self.last_name.as_str()), NAME_MAX_CHARS),
            ("email", Some(self.email.as_str()), EMAIL_MAX_CHARS),
            ("phone", self.phone.as_deref(), PHONE_MAX_CHARS),
            ("department", Some(self.department.as_str()), NAME_MAX_CHARS),
            ("position", Some(self.position.as_str()), NAME_MAX_CHARS),
            ("avatar", self.avatar.as_deref(), AVATAR_MAX_CHARS),
        ];
        checks
            .into_iter()
            .filter(|(_, value, max)| value.is_some_and(|v| v.chars().count() > *max))
            .map(|(name, _, _)| name)
            .collect()
    }
}

// Column widths of the `employees` table (sql/schema.sql), in characters
const ID_MAX_CHARS: usize = 32;
const NAME_MAX_CHARS: usize = 100;
const EMAIL_MAX_CHARS: usize = 255;
const PHONE_MAX_CHARS: usize = 32;
const AVATAR_MAX_CHARS: usize = 512;

// salary DECIMAL(12, 2)
const SALARY_SCALE: u32 = 2;
const SALARY_LIMIT: i64 = 10_000_000_000;

/// Stored exactly: at most two decimals and ten integer digits.
fn salary_fits(salary: &Decimal) -> bool {
    salary.normalize().scale() <= SALARY_SCALE && salary.abs() < Decimal::from(SALARY_LIMIT)
}

impl From<&Employee> for EmployeeCreate {
    fn from(e: &Employee) -> Self {
        Self {
            id: Some(e.id.clone()),
            first_name: Some(e.first_name.clone()),
            last_name: Some(e.last_name.clone()),
            email: Some(e.email.clone()),
            phone: e.phone.clone(),
            department: Some(e.department.clone()),
            position: Some(e.position.clone()),
            status: Some(e.status.to_string()),
            hire_date: Some(e.hire_date.format("%Y-%m-%d").to_string()),
            salary: Some(e.salary),
            avatar: e.avatar.clone(),
        }
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = non_empty(value);
    if value.is_none() {
        missing.push(field);
    }
    value
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Accepts `YYYY-MM-DD`, or a full RFC 3339 timestamp reduced to its date.
fn parse_hire_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

#[cfg(feature = "db")]
impl<'r> sqlx::FromRow<'r, sqlx::mysql::MySqlRow> for Employee {
    fn from_row(row: &'r sqlx::mysql::MySqlRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let status: String = row.try_get("status")?;
        let status = status.parse().map_err(|e: UnknownStatus| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("firstName")?,
            last_name: row.try_get("lastName")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            department: row.try_get("department")?,
            position: row.try_get("position")?,
            status,
            hire_date: row.try_get("hireDate")?,
            salary: row.try_get("salary")?,
            avatar: row.try_get("avatar")?,
        })
    }
}
