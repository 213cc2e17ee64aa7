use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ProjectStatus, TaskStatus};
use crate::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProjectRow {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueProjectRow {
    pub id: i64,
    pub name: String,
    pub client_name: String,
    pub first_overdue_due_date: NaiveDate,
    pub overdue_tasks: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEmployeeRow {
    pub employee_id: i64,
    pub employee_name: String,
    pub position: String,
    pub role: String,
    pub since_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWorkloadRow {
    pub project_id: i64,
    pub project_name: String,
    pub task_id: i64,
    pub task_title: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Projects of one client, newest first.
    async fn projects_by_client(&self, client_id: i64) -> Result<Vec<ClientProjectRow>, AppError>;

    /// Projects with at least one task that is past due on `today` and is
    /// neither done nor canceled. Ordered by the earliest overdue date, then
    /// by the number of overdue tasks descending.
    async fn overdue_projects(&self, today: NaiveDate) -> Result<Vec<OverdueProjectRow>, AppError>;

    async fn employees_by_project(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectEmployeeRow>, AppError>;

    /// Open tasks (`New` or `InProgress`) assigned to an employee.
    async fn employee_workload(
        &self,
        employee_id: i64,
    ) -> Result<Vec<EmployeeWorkloadRow>, AppError>;
}
