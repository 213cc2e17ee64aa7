#![allow(clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use super::client::{Client, ClientRepository, NewClient};
use crate::AppError;

pub struct MockClientRepository {
    clients: RwLock<HashMap<i64, Client>>,
    next_id: AtomicI64,
}

impl MockClientRepository {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.clients.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MockClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("lock poisoned".into())
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let clients = self.clients.read().map_err(poisoned)?;
        Ok(clients.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Client>, AppError> {
        let clients = self.clients.read().map_err(poisoned)?;
        let mut list: Vec<Client> = clients.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    async fn create(&self, data: &NewClient) -> Result<Client, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let client = Client {
            id,
            name: data.name.clone(),
            phone: data.phone.clone(),
            email: data.email.clone(),
            note: data.note.clone(),
        };

        let mut clients = self.clients.write().map_err(poisoned)?;
        clients.insert(id, client.clone());
        Ok(client)
    }

    async fn update(&self, id: i64, data: &NewClient) -> Result<Client, AppError> {
        let mut clients = self.clients.write().map_err(poisoned)?;
        let client = clients.get_mut(&id).ok_or(AppError::ClientNotFound)?;
        data.name.clone_into(&mut client.name);
        client.phone.clone_from(&data.phone);
        client.email.clone_from(&data.email);
        client.note.clone_from(&data.note);
        Ok(client.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut clients = self.clients.write().map_err(poisoned)?;
        clients
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::ClientNotFound)
    }
}
