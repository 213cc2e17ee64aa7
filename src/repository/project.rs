use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planned,
    #[default]
    Active,
    Completed,
    OnHold,
    Canceled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        Self::Planned,
        Self::Active,
        Self::Completed,
        Self::OnHold,
        Self::Canceled,
    ];

    /// Convert to string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "OnHold",
            Self::Canceled => "Canceled",
        }
    }

    /// Parse from database string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
}

/// A project row joined with the name of its client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectView {
    pub id: i64,
    pub name: String,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
}

/// Project fields as entered by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub client_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

/// Validated project fields handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub client_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;
    /// Newest first: start date descending, then id descending.
    async fn list_all(&self) -> Result<Vec<Project>, AppError>;
    async fn list_with_client_name(&self) -> Result<Vec<ProjectView>, AppError>;
    async fn create(&self, data: &NewProject) -> Result<Project, AppError>;
    async fn update(&self, id: i64, data: &NewProject) -> Result<Project, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
