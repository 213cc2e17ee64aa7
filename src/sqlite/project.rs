use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use super::{db_error, db_error_or};
use crate::{AppError, NewProject, Project, ProjectRepository, ProjectStatus, ProjectView};

#[derive(Clone)]
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProjectRecord {
    id: i64,
    client_id: i64,
    name: String,
    description: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: String,
}

impl From<ProjectRecord> for Project {
    fn from(row: ProjectRecord) -> Self {
        Project {
            id: row.id,
            client_id: row.client_id,
            name: row.name,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            status: ProjectStatus::parse(&row.status).unwrap_or_default(),
        }
    }
}

#[derive(FromRow)]
struct ProjectViewRecord {
    id: i64,
    name: String,
    client_name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: String,
}

impl From<ProjectViewRecord> for ProjectView {
    fn from(row: ProjectViewRecord) -> Self {
        ProjectView {
            id: row.id,
            name: row.name,
            client_name: row.client_name,
            start_date: row.start_date,
            end_date: row.end_date,
            status: ProjectStatus::parse(&row.status).unwrap_or_default(),
        }
    }
}

const COLUMNS: &str = "id, client_id, name, description, start_date, end_date, status";

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let row: Option<ProjectRecord> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM projects WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find_project_by_id"))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_all(&self) -> Result<Vec<Project>, AppError> {
        let rows: Vec<ProjectRecord> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM projects ORDER BY start_date DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list_projects"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_with_client_name(&self) -> Result<Vec<ProjectView>, AppError> {
        let rows: Vec<ProjectViewRecord> = sqlx::query_as(
            r"
            SELECT p.id, p.name, c.name AS client_name, p.start_date, p.end_date, p.status
            FROM projects p
            JOIN clients c ON c.id = p.client_id
            ORDER BY p.start_date DESC, p.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list_projects_with_client_name"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn create(&self, data: &NewProject) -> Result<Project, AppError> {
        let row: ProjectRecord = sqlx::query_as(&format!(
            "INSERT INTO projects (client_id, name, description, start_date, end_date, status) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(data.client_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create_project"))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn update(&self, id: i64, data: &NewProject) -> Result<Project, AppError> {
        let row: ProjectRecord = sqlx::query_as(&format!(
            "UPDATE projects SET client_id = ?, name = ?, description = ?, start_date = ?, \
             end_date = ?, status = ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(data.client_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status.as_str())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error_or("update_project", AppError::ProjectNotFound))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete_project"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::ProjectNotFound);
        }

        Ok(())
    }
}
