use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use super::db_error;
use crate::{
    AppError, ClientProjectRow, EmployeeWorkloadRow, OverdueProjectRow, ProjectEmployeeRow,
    ProjectStatus, ReportRepository, TaskStatus,
};

#[derive(Clone)]
pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ClientProjectRecord {
    id: i64,
    name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: String,
}

impl From<ClientProjectRecord> for ClientProjectRow {
    fn from(row: ClientProjectRecord) -> Self {
        ClientProjectRow {
            id: row.id,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            status: ProjectStatus::parse(&row.status).unwrap_or_default(),
        }
    }
}

#[derive(FromRow)]
struct WorkloadRecord {
    project_id: i64,
    project_name: String,
    task_id: i64,
    task_title: String,
    due_date: NaiveDate,
    status: String,
}

impl From<WorkloadRecord> for EmployeeWorkloadRow {
    fn from(row: WorkloadRecord) -> Self {
        EmployeeWorkloadRow {
            project_id: row.project_id,
            project_name: row.project_name,
            task_id: row.task_id,
            task_title: row.task_title,
            due_date: row.due_date,
            status: TaskStatus::parse(&row.status).unwrap_or_default(),
        }
    }
}

// Overdue and project-employee rows carry no enums and map field for field.
#[derive(FromRow)]
struct OverdueRecord {
    id: i64,
    name: String,
    client_name: String,
    first_overdue_due_date: NaiveDate,
    overdue_tasks: i64,
}

#[derive(FromRow)]
struct ProjectEmployeeRecord {
    employee_id: i64,
    employee_name: String,
    position: String,
    role: String,
    since_date: NaiveDate,
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn projects_by_client(&self, client_id: i64) -> Result<Vec<ClientProjectRow>, AppError> {
        let rows: Vec<ClientProjectRecord> = sqlx::query_as(
            r"
            SELECT p.id, p.name, p.start_date, p.end_date, p.status
            FROM projects p
            WHERE p.client_id = ?
            ORDER BY p.start_date DESC, p.id DESC
            ",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("report_projects_by_client"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn overdue_projects(&self, today: NaiveDate) -> Result<Vec<OverdueProjectRow>, AppError> {
        let rows: Vec<OverdueRecord> = sqlx::query_as(
            r"
            SELECT
              p.id,
              p.name,
              c.name AS client_name,
              MIN(t.due_date) AS first_overdue_due_date,
              COUNT(*) AS overdue_tasks
            FROM projects p
            JOIN clients c ON c.id = p.client_id
            JOIN tasks t ON t.project_id = p.id
            WHERE t.due_date < ?
              AND t.status NOT IN ('Done', 'Canceled')
            GROUP BY p.id, p.name, c.name
            ORDER BY first_overdue_due_date ASC, overdue_tasks DESC
            ",
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("report_overdue_projects"))?;

        Ok(rows
            .into_iter()
            .map(|row| OverdueProjectRow {
                id: row.id,
                name: row.name,
                client_name: row.client_name,
                first_overdue_due_date: row.first_overdue_due_date,
                overdue_tasks: row.overdue_tasks,
            })
            .collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn employees_by_project(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectEmployeeRow>, AppError> {
        let rows: Vec<ProjectEmployeeRecord> = sqlx::query_as(
            r"
            SELECT
              e.id AS employee_id,
              e.last_name || ' ' || e.first_name || COALESCE(' ' || e.middle_name, '') AS employee_name,
              e.position,
              pm.role,
              pm.since_date
            FROM project_members pm
            JOIN employees e ON e.id = pm.employee_id
            WHERE pm.project_id = ?
            ORDER BY e.last_name, e.first_name
            ",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("report_employees_by_project"))?;

        Ok(rows
            .into_iter()
            .map(|row| ProjectEmployeeRow {
                employee_id: row.employee_id,
                employee_name: row.employee_name,
                position: row.position,
                role: row.role,
                since_date: row.since_date,
            })
            .collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn employee_workload(
        &self,
        employee_id: i64,
    ) -> Result<Vec<EmployeeWorkloadRow>, AppError> {
        let rows: Vec<WorkloadRecord> = sqlx::query_as(
            r"
            SELECT
              p.id AS project_id,
              p.name AS project_name,
              t.id AS task_id,
              t.title AS task_title,
              t.due_date,
              t.status
            FROM tasks t
            JOIN projects p ON p.id = t.project_id
            WHERE t.employee_id = ?
              AND t.status IN ('New', 'InProgress')
            ORDER BY t.due_date ASC, t.id DESC
            ",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("report_employee_workload"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
