use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};

use super::{db_error, db_error_or};
use crate::{AppError, NewTask, Task, TaskRepository, TaskStatus, TaskView};

#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TaskRecord {
    id: i64,
    project_id: i64,
    employee_id: Option<i64>,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    due_date: NaiveDate,
    completed_at: Option<DateTime<Utc>>,
    status: String,
}

impl From<TaskRecord> for Task {
    fn from(row: TaskRecord) -> Self {
        Task {
            id: row.id,
            project_id: row.project_id,
            employee_id: row.employee_id,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
            due_date: row.due_date,
            completed_at: row.completed_at,
            status: TaskStatus::parse(&row.status).unwrap_or_default(),
        }
    }
}

#[derive(FromRow)]
struct TaskViewRecord {
    id: i64,
    project_name: String,
    employee_name: Option<String>,
    title: String,
    due_date: NaiveDate,
    status: String,
}

impl From<TaskViewRecord> for TaskView {
    fn from(row: TaskViewRecord) -> Self {
        TaskView {
            id: row.id,
            project_name: row.project_name,
            employee_name: row
                .employee_name
                .unwrap_or_else(|| TaskView::UNASSIGNED.to_owned()),
            title: row.title,
            due_date: row.due_date,
            status: TaskStatus::parse(&row.status).unwrap_or_default(),
        }
    }
}

const COLUMNS: &str =
    "id, project_id, employee_id, title, description, created_at, due_date, completed_at, status";

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let row: Option<TaskRecord> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM tasks WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find_task_by_id"))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_all(&self) -> Result<Vec<Task>, AppError> {
        let rows: Vec<TaskRecord> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM tasks ORDER BY due_date ASC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list_tasks"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_with_names(&self) -> Result<Vec<TaskView>, AppError> {
        let rows: Vec<TaskViewRecord> = sqlx::query_as(
            r"
            SELECT
              t.id,
              p.name AS project_name,
              e.last_name || ' ' || e.first_name || COALESCE(' ' || e.middle_name, '') AS employee_name,
              t.title,
              t.due_date,
              t.status
            FROM tasks t
            JOIN projects p ON p.id = t.project_id
            LEFT JOIN employees e ON e.id = t.employee_id
            ORDER BY t.due_date ASC, t.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list_tasks_with_names"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn create(&self, data: &NewTask) -> Result<Task, AppError> {
        let now = Utc::now();
        let row: TaskRecord = sqlx::query_as(&format!(
            "INSERT INTO tasks (project_id, employee_id, title, description, created_at, due_date, completed_at, status) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(data.project_id)
        .bind(data.employee_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(now)
        .bind(data.due_date)
        .bind(data.completed_at)
        .bind(data.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create_task"))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn update(&self, id: i64, data: &NewTask) -> Result<Task, AppError> {
        let row: TaskRecord = sqlx::query_as(&format!(
            "UPDATE tasks SET project_id = ?, employee_id = ?, title = ?, description = ?, \
             due_date = ?, completed_at = ?, status = ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(data.project_id)
        .bind(data.employee_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.due_date)
        .bind(data.completed_at)
        .bind(data.status.as_str())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error_or("update_task", AppError::TaskNotFound))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete_task"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::TaskNotFound);
        }

        Ok(())
    }
}
