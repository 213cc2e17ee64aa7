//! Repository traits and data types.
//!
//! This module defines the storage abstractions used by the services.
//! Implement these traits to plug in a different database.
//!
//! # Traits
//!
//! | Trait | Description |
//! |-------|-------------|
//! | [`ClientRepository`] | Client CRUD |
//! | [`EmployeeRepository`] | Employee CRUD |
//! | [`ProjectRepository`] | Project CRUD and the project list view |
//! | [`TaskRepository`] | Task CRUD and the task list view |
//! | [`ProjectMemberRepository`] | Employees assigned to a project |
//! | [`ReportRepository`] | Read-only reports |
//!
//! # Mock Implementations
//!
//! Enable the `mocks` feature for in-memory implementations useful for testing:
//!
//! - [`MockClientRepository`]
//! - [`MockEmployeeRepository`]
//! - [`MockProjectRepository`]
//! - [`MockTaskRepository`]
//! - [`MockProjectMemberRepository`]
//! - [`MockReportRepository`]

mod client;
mod employee;
mod project;
mod project_member;
mod report;
mod task;

#[cfg(any(test, feature = "mocks"))]
mod client_mock;
#[cfg(any(test, feature = "mocks"))]
mod employee_mock;
#[cfg(any(test, feature = "mocks"))]
mod project_member_mock;
#[cfg(any(test, feature = "mocks"))]
mod project_mock;
#[cfg(any(test, feature = "mocks"))]
mod report_mock;
#[cfg(any(test, feature = "mocks"))]
mod task_mock;

pub use client::{Client, ClientRepository, NewClient};
pub use employee::{Employee, EmployeeRepository, NewEmployee};
pub use project::{NewProject, Project, ProjectInput, ProjectRepository, ProjectStatus, ProjectView};
pub use project_member::{ProjectMember, ProjectMemberRepository};
pub use report::{
    ClientProjectRow, EmployeeWorkloadRow, OverdueProjectRow, ProjectEmployeeRow,
    ReportRepository,
};
pub use task::{NewTask, Task, TaskInput, TaskRepository, TaskStatus, TaskView};

#[cfg(any(test, feature = "mocks"))]
pub use client_mock::MockClientRepository;
#[cfg(any(test, feature = "mocks"))]
pub use employee_mock::MockEmployeeRepository;
#[cfg(any(test, feature = "mocks"))]
pub use project_member_mock::MockProjectMemberRepository;
#[cfg(any(test, feature = "mocks"))]
pub use project_mock::MockProjectRepository;
#[cfg(any(test, feature = "mocks"))]
pub use report_mock::MockReportRepository;
#[cfg(any(test, feature = "mocks"))]
pub use task_mock::MockTaskRepository;
