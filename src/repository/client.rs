use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
}

/// Field values for creating or updating a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub note: Option<String>,
}

#[cfg(any(test, feature = "mocks"))]
impl NewClient {
    pub fn mock(name: &str) -> Self {
        NewClient {
            name: name.to_owned(),
            phone: Some("+7 495 000-00-00".to_owned()),
            email: Some("office@example.com".to_owned()),
            note: None,
        }
    }
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError>;
    /// All clients ordered by name.
    async fn list_all(&self) -> Result<Vec<Client>, AppError>;
    async fn create(&self, data: &NewClient) -> Result<Client, AppError>;
    async fn update(&self, id: i64, data: &NewClient) -> Result<Client, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
