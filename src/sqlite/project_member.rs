use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use super::db_error;
use crate::{AppError, ProjectMember, ProjectMemberRepository};

#[derive(Clone)]
pub struct SqliteProjectMemberRepository {
    pool: SqlitePool,
}

impl SqliteProjectMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MemberRecord {
    project_id: i64,
    employee_id: i64,
    role: String,
    since_date: NaiveDate,
    last_name: String,
    first_name: String,
    middle_name: Option<String>,
    position: String,
}

impl From<MemberRecord> for ProjectMember {
    fn from(row: MemberRecord) -> Self {
        ProjectMember {
            project_id: row.project_id,
            employee_id: row.employee_id,
            role: row.role,
            since_date: row.since_date,
            last_name: row.last_name,
            first_name: row.first_name,
            middle_name: row.middle_name,
            position: row.position,
        }
    }
}

#[async_trait]
impl ProjectMemberRepository for SqliteProjectMemberRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_members(&self, project_id: i64) -> Result<Vec<ProjectMember>, AppError> {
        let rows: Vec<MemberRecord> = sqlx::query_as(
            r"
            SELECT
              pm.project_id,
              pm.employee_id,
              pm.role,
              pm.since_date,
              e.last_name,
              e.first_name,
              e.middle_name,
              e.position
            FROM project_members pm
            JOIN employees e ON e.id = pm.employee_id
            WHERE pm.project_id = ?
            ORDER BY e.last_name, e.first_name
            ",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list_project_members"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn add_member(
        &self,
        project_id: i64,
        employee_id: i64,
        role: &str,
        since_date: NaiveDate,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO project_members (project_id, employee_id, role, since_date) VALUES (?, ?, ?, ?)",
        )
        .bind(project_id)
        .bind(employee_id)
        .bind(role)
        .bind(since_date)
        .execute(&self.pool)
        .await
        .map_err(db_error("add_project_member"))?;

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn remove_member(&self, project_id: i64, employee_id: i64) -> Result<(), AppError> {
        let result =
            sqlx::query("DELETE FROM project_members WHERE project_id = ? AND employee_id = ?")
                .bind(project_id)
                .bind(employee_id)
                .execute(&self.pool)
                .await
                .map_err(db_error("remove_project_member"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::MemberNotFound);
        }

        Ok(())
    }
}
