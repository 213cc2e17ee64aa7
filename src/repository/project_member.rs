use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Links an employee to a project with a role.
///
/// Listings also carry the employee's name and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub project_id: i64,
    pub employee_id: i64,
    pub role: String,
    pub since_date: NaiveDate,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub position: String,
}

#[async_trait]
pub trait ProjectMemberRepository: Send + Sync {
    /// Members of a project ordered by surname, then given name.
    async fn list_members(&self, project_id: i64) -> Result<Vec<ProjectMember>, AppError>;
    async fn add_member(
        &self,
        project_id: i64,
        employee_id: i64,
        role: &str,
        since_date: NaiveDate,
    ) -> Result<(), AppError>;
    async fn remove_member(&self, project_id: i64, employee_id: i64) -> Result<(), AppError>;
}
