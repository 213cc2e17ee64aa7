use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    New,
    InProgress,
    Done,
    Canceled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [Self::New, Self::InProgress, Self::Done, Self::Canceled];

    /// Convert to string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "InProgress",
            Self::Done => "Done",
            Self::Canceled => "Canceled",
        }
    }

    /// Parse from database string.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Whether a task in this status still needs work.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::New | Self::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub employee_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub due_date: NaiveDate,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: TaskStatus,
}

impl Task {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// A task row joined with its project and assignee names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: i64,
    pub project_name: String,
    /// Full name of the assignee, or `(unassigned)`.
    pub employee_name: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

impl TaskView {
    pub const UNASSIGNED: &'static str = "(unassigned)";
}

/// Task fields as entered by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    pub project_id: i64,
    pub employee_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: String,
}

/// Validated task fields handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub project_id: i64,
    pub employee_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: TaskStatus,
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;
    /// Earliest due date first, then id descending.
    async fn list_all(&self) -> Result<Vec<Task>, AppError>;
    async fn list_with_names(&self) -> Result<Vec<TaskView>, AppError>;
    async fn create(&self, data: &NewTask) -> Result<Task, AppError>;
    async fn update(&self, id: i64, data: &NewTask) -> Result<Task, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
