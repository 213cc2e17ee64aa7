//! `SQLite` database backend implementations.
//!
//! This module provides `SQLite`-backed implementations for all repository traits.
//! Enable the `sqlx_sqlite` feature to use these implementations.

mod client;
mod employee;
pub mod migrations;
mod project;
mod project_member;
mod report;
mod task;

pub use client::SqliteClientRepository;
pub use employee::SqliteEmployeeRepository;
pub use project::SqliteProjectRepository;
pub use project_member::SqliteProjectMemberRepository;
pub use report::SqliteReportRepository;
use sqlx::SqlitePool;
pub use task::SqliteTaskRepository;

use crate::AppError;

/// Creates all `SQLite` repository instances from a connection pool.
pub fn create_repositories(
    pool: SqlitePool,
) -> (
    SqliteClientRepository,
    SqliteEmployeeRepository,
    SqliteProjectRepository,
    SqliteProjectMemberRepository,
    SqliteTaskRepository,
    SqliteReportRepository,
) {
    (
        SqliteClientRepository::new(pool.clone()),
        SqliteEmployeeRepository::new(pool.clone()),
        SqliteProjectRepository::new(pool.clone()),
        SqliteProjectMemberRepository::new(pool.clone()),
        SqliteTaskRepository::new(pool.clone()),
        SqliteReportRepository::new(pool),
    )
}

/// Logs a sqlx failure and turns it into [`AppError::DatabaseError`].
fn db_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        log::error!(target: "staffdesk", "msg=\"database error\", operation=\"{operation}\", error=\"{e}\"");
        AppError::DatabaseError(e.to_string())
    }
}

/// Like [`db_error`], but `RowNotFound` becomes `not_found`.
fn db_error_or(
    operation: &'static str,
    not_found: AppError,
) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| match e {
        sqlx::Error::RowNotFound => not_found,
        _ => db_error(operation)(e),
    }
}
