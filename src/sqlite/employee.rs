use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use super::{db_error, db_error_or};
use crate::{AppError, Employee, EmployeeRepository, NewEmployee};

#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct EmployeeRecord {
    id: i64,
    last_name: String,
    first_name: String,
    middle_name: Option<String>,
    position: String,
    phone: Option<String>,
    email: Option<String>,
    is_active: bool,
}

impl From<EmployeeRecord> for Employee {
    fn from(row: EmployeeRecord) -> Self {
        Employee {
            id: row.id,
            last_name: row.last_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            position: row.position,
            phone: row.phone,
            email: row.email,
            is_active: row.is_active,
        }
    }
}

const COLUMNS: &str = "id, last_name, first_name, middle_name, position, phone, email, is_active";

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let row: Option<EmployeeRecord> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM employees WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find_employee_by_id"))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        let rows: Vec<EmployeeRecord> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM employees ORDER BY last_name, first_name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list_employees"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn create(&self, data: &NewEmployee) -> Result<Employee, AppError> {
        let row: EmployeeRecord = sqlx::query_as(&format!(
            "INSERT INTO employees (last_name, first_name, middle_name, position, phone, email, is_active) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&data.last_name)
        .bind(&data.first_name)
        .bind(&data.middle_name)
        .bind(&data.position)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create_employee"))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn update(&self, id: i64, data: &NewEmployee) -> Result<Employee, AppError> {
        let row: EmployeeRecord = sqlx::query_as(&format!(
            "UPDATE employees SET last_name = ?, first_name = ?, middle_name = ?, position = ?, \
             phone = ?, email = ?, is_active = ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(&data.last_name)
        .bind(&data.first_name)
        .bind(&data.middle_name)
        .bind(&data.position)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(data.is_active)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error_or("update_employee", AppError::EmployeeNotFound))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete_employee"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::EmployeeNotFound);
        }

        Ok(())
    }
}
