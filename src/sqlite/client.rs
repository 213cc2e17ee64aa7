use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use super::{db_error, db_error_or};
use crate::{AppError, Client, ClientRepository, NewClient};

#[derive(Clone)]
pub struct SqliteClientRepository {
    pool: SqlitePool,
}

impl SqliteClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ClientRecord {
    id: i64,
    name: String,
    phone: Option<String>,
    email: Option<String>,
    note: Option<String>,
}

impl From<ClientRecord> for Client {
    fn from(row: ClientRecord) -> Self {
        Client {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            note: row.note,
        }
    }
}

#[async_trait]
impl ClientRepository for SqliteClientRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let row: Option<ClientRecord> =
            sqlx::query_as("SELECT id, name, phone, email, note FROM clients WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("find_client_by_id"))?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_all(&self) -> Result<Vec<Client>, AppError> {
        let rows: Vec<ClientRecord> =
            sqlx::query_as("SELECT id, name, phone, email, note FROM clients ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("list_clients"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn create(&self, data: &NewClient) -> Result<Client, AppError> {
        let row: ClientRecord = sqlx::query_as(
            "INSERT INTO clients (name, phone, email, note) VALUES (?, ?, ?, ?) RETURNING id, name, phone, email, note",
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.note)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create_client"))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn update(&self, id: i64, data: &NewClient) -> Result<Client, AppError> {
        let row: ClientRecord = sqlx::query_as(
            "UPDATE clients SET name = ?, phone = ?, email = ?, note = ? WHERE id = ? RETURNING id, name, phone, email, note",
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.note)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error_or("update_client", AppError::ClientNotFound))?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete_client"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::ClientNotFound);
        }

        Ok(())
    }
}
