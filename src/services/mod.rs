//! Services: validate user input, then call one repository method.
//!
//! A validation failure returns before storage is touched. Its message is
//! meant to be shown to the end user as is.

mod client;
mod employee;
mod project;
mod report;
mod task;

pub use client::{CLIENT_NAME_LABEL, ClientService};
pub use employee::{EmployeeService, POSITION_LABEL};
pub use project::{PROJECT_NAME_LABEL, ProjectService, ROLE_LABEL};
pub use report::ReportService;
pub use task::{TASK_TITLE_LABEL, TaskService};
