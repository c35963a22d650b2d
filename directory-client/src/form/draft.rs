use std::str::FromStr;

use rust_decimal::Decimal;
use shared::catalog::{DEPARTMENTS, POSITIONS};
use shared::{EmployeeCreate, EmployeeStatus};

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    HireDate,
    Salary,
}

impl DraftField {
    /// Choices for fields rendered as a select; free text otherwise
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            DraftField::Department => Some(DEPARTMENTS),
            DraftField::Position => Some(POSITIONS),
            _ => None,
        }
    }
}

/// Raw form input, kept as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
    pub salary: String,
}

impl Draft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
            DraftField::Department => self.department = value,
            DraftField::Position => self.position = value,
            DraftField::HireDate => self.hire_date = value,
            DraftField::Salary => self.salary = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Department => &self.department,
            DraftField::Position => &self.position,
            DraftField::HireDate => &self.hire_date,
            DraftField::Salary => &self.salary,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    /// Salary as a number; `None` when blank or not a number, which the API
    /// answers with 400.
    pub fn parsed_salary(&self) -> Option<Decimal> {
        let raw = self.salary.trim();
        if raw.is_empty() {
            return None;
        }
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .ok()
    }

    /// Request body for `POST /employees`: new hires are `active` with no avatar.
    pub fn to_payload(&self, id: String) -> EmployeeCreate {
        EmployeeCreate {
            id: Some(id),
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()).filter(|p| !p.trim().is_empty()),
            department: Some(self.department.clone()),
            position: Some(self.position.clone()),
            status: Some(EmployeeStatus::Active.as_str().to_string()),
            hire_date: Some(self.hire_date.clone()),
            salary: self.parsed_salary(),
            avatar: None,
        }
    }
}
