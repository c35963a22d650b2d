//! Employee database operations (MySQL)

use async_trait::async_trait;
use shared::Employee;
use sqlx::MySqlPool;

use super::{EmployeeStore, StoreError};

const SELECT_ALL: &str = r#"
    SELECT id, firstName, lastName, email, phone, department,
           position, status, hireDate, salary, avatar
    FROM employees
    ORDER BY handle
"#;

const INSERT: &str = r#"
    INSERT INTO employees (
        id, firstName, lastName, email, phone, department,
        position, status, hireDate, salary, avatar
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// [`EmployeeStore`] backed by the `employees` table
#[derive(Debug, Clone)]
pub struct MySqlEmployeeStore {
    pool: MySqlPool,
}

impl MySqlEmployeeStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let rows: Vec<Employee> = sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn insert(&self, employee: &Employee) -> Result<u64, StoreError> {
        let result = sqlx::query(INSERT)
            .bind(&employee.id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .bind(&employee.phone)
            .bind(&employee.department)
            .bind(&employee.position)
            .bind(employee.status.as_str())
            .bind(employee.hire_date)
            .bind(employee.salary)
            .bind(&employee.avatar)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }
}
