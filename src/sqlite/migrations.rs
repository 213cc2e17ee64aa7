//! Embedded schema for the `SQLite` backend.
//!
//! Migrations are embedded at compile time, run in order and tracked in the
//! `_staffdesk_migrations` table, so running them twice is harmless.
//!
//! # Example
//!
//! ```rust,ignore
//! use staffdesk::sqlite::migrations;
//! use sqlx::SqlitePool;
//!
//! async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
//!     migrations::run(pool).await?;
//!     Ok(())
//! }
//! ```

use sqlx::{Executor, SqlitePool};

const CORE_MIGRATIONS: &[(&str, &str)] = &[
    (
        "20250301000001_create_clients_table",
        include_str!("../../migrations_sqlite/core/20250301000001_create_clients_table.sql"),
    ),
    (
        "20250301000002_create_employees_table",
        include_str!("../../migrations_sqlite/core/20250301000002_create_employees_table.sql"),
    ),
    (
        "20250301000003_create_projects_table",
        include_str!("../../migrations_sqlite/core/20250301000003_create_projects_table.sql"),
    ),
    (
        "20250301000004_create_project_members_table",
        include_str!(
            "../../migrations_sqlite/core/20250301000004_create_project_members_table.sql"
        ),
    ),
    (
        "20250301000005_create_tasks_table",
        include_str!("../../migrations_sqlite/core/20250301000005_create_tasks_table.sql"),
    ),
];

/// Runs every migration that has not been applied yet.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    pool.execute(
        r"
        CREATE TABLE IF NOT EXISTS _staffdesk_migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        ",
    )
    .await?;

    run_migrations(pool, CORE_MIGRATIONS).await
}

/// Applies each pending migration in its own transaction, together with
/// its bookkeeping row.
///
/// # Limitations
///
/// Statements are split on `;`, so a migration must not contain a semicolon
/// inside a string literal.
async fn run_migrations(pool: &SqlitePool, migrations: &[(&str, &str)]) -> Result<(), sqlx::Error> {
    for (name, sql) in migrations {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _staffdesk_migrations WHERE name = ?)")
                .bind(*name)
                .fetch_one(pool)
                .await?;

        if applied {
            continue;
        }

        let mut tx = pool.begin().await?;
        for statement in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            (&mut *tx).execute(statement).await?;
        }
        sqlx::query("INSERT INTO _staffdesk_migrations (name) VALUES (?)")
            .bind(*name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        log::debug!(target: "staffdesk", "msg=\"migration applied\", name=\"{name}\"");
    }
    Ok(())
}
