//! Record keeping for clients, employees, projects and tasks.
//!
//! The interesting part of this crate is [`validators::validate_full_name`],
//! which enforces a strict grammar on the surname, given name and patronymic
//! of an employee. Everything else is a thin layer of storage traits,
//! services that validate then persist, and a handful of reports.
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `sqlx_sqlite` | `SQLite` repositories, migrations and [`AppContext`] |
//! | `mocks` | In-memory repositories for tests |
//! | `tracing` | `tracing` spans around repository and service calls |

pub mod config;
#[cfg(feature = "sqlx_sqlite")]
mod context;
pub mod repository;
pub mod services;
#[cfg(feature = "sqlx_sqlite")]
pub mod sqlite;
pub mod validators;

#[cfg(feature = "sqlx_sqlite")]
pub use context::AppContext;

pub use config::{DatabaseConfig, StaffdeskConfig};
pub use repository::{
    Client, ClientProjectRow, ClientRepository, Employee, EmployeeRepository,
    EmployeeWorkloadRow, NewClient, NewEmployee, NewProject, NewTask, OverdueProjectRow, Project,
    ProjectEmployeeRow, ProjectInput, ProjectMember, ProjectMemberRepository, ProjectRepository,
    ProjectStatus, ProjectView, ReportRepository, Task, TaskInput, TaskRepository, TaskStatus,
    TaskView,
};
#[cfg(any(test, feature = "mocks"))]
pub use repository::{
    MockClientRepository, MockEmployeeRepository, MockProjectMemberRepository,
    MockProjectRepository, MockReportRepository, MockTaskRepository,
};
pub use services::{ClientService, EmployeeService, ProjectService, ReportService, TaskService};
pub use validators::ValidationError;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ClientNotFound,
    EmployeeNotFound,
    ProjectNotFound,
    TaskNotFound,
    MemberNotFound,
    Validation(ValidationError),
    DatabaseError(String),
    Config(String),
    Internal(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ClientNotFound => write!(f, "Client not found"),
            AppError::EmployeeNotFound => write!(f, "Employee not found"),
            AppError::ProjectNotFound => write!(f, "Project not found"),
            AppError::TaskNotFound => write!(f, "Task not found"),
            AppError::MemberNotFound => write!(f, "Project member not found"),
            // shown to the user verbatim
            AppError::Validation(err) => write!(f, "{err}"),
            AppError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration error: {msg}"),
            AppError::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}
