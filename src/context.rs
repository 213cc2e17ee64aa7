//! Wires the `SQLite` repositories into the services.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::sqlite::{
    SqliteClientRepository, SqliteEmployeeRepository, SqliteProjectMemberRepository,
    SqliteProjectRepository, SqliteReportRepository, SqliteTaskRepository, create_repositories,
    migrations,
};
use crate::{
    AppError, ClientService, EmployeeService, ProjectService, ReportService, StaffdeskConfig,
    TaskService,
};

/// Every service backed by one connection pool.
///
/// ```rust,ignore
/// let ctx = AppContext::connect(&StaffdeskConfig::load("staffdesk.toml")?).await?;
/// let clients = ctx.clients.list_clients().await?;
/// ctx.close().await;
/// ```
pub struct AppContext {
    pool: SqlitePool,
    pub clients: ClientService<SqliteClientRepository>,
    pub employees: EmployeeService<SqliteEmployeeRepository>,
    pub projects: ProjectService<SqliteProjectRepository, SqliteProjectMemberRepository>,
    pub tasks: TaskService<SqliteTaskRepository>,
    pub reports: ReportService<SqliteReportRepository>,
}

impl AppContext {
    /// Opens the database, applies pending migrations and builds the services.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for an unparseable database URL and
    /// `AppError::DatabaseError` when the database cannot be opened or migrated.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(config), err))]
    pub async fn connect(config: &StaffdeskConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database.url)
            .map_err(|e| AppError::Config(format!("invalid database url: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                log::error!(target: "staffdesk", "msg=\"database connection failed\", error=\"{e}\"");
                AppError::DatabaseError(e.to_string())
            })?;

        migrations::run(&pool).await.map_err(|e| {
            log::error!(target: "staffdesk", "msg=\"migrations failed\", error=\"{e}\"");
            AppError::DatabaseError(e.to_string())
        })?;

        log::info!(
            target: "staffdesk",
            "msg=\"database ready\", max_connections={}",
            config.database.max_connections
        );

        Ok(Self::from_pool(pool))
    }

    /// Builds the services on an already migrated pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        let (clients, employees, projects, members, tasks, reports) =
            create_repositories(pool.clone());

        Self {
            pool,
            clients: ClientService::new(clients),
            employees: EmployeeService::new(employees),
            projects: ProjectService::new(projects, members),
            tasks: TaskService::new(tasks),
            reports: ReportService::new(reports),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        log::info!(target: "staffdesk", "msg=\"database closed\"");
    }
}
