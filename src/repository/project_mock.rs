#![allow(clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use super::project::{NewProject, Project, ProjectRepository, ProjectView};
use crate::AppError;

/// In-memory projects.
///
/// There is no client table here, so client names for the list view are
/// registered up front with [`MockProjectRepository::with_client`].
pub struct MockProjectRepository {
    projects: RwLock<HashMap<i64, Project>>,
    client_names: RwLock<HashMap<i64, String>>,
    next_id: AtomicI64,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(HashMap::new()),
            client_names: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    #[must_use]
    pub fn with_client(self, client_id: i64, name: &str) -> Self {
        if let Ok(mut names) = self.client_names.write() {
            names.insert(client_id, name.to_owned());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.projects.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MockProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("lock poisoned".into())
}

fn newest_first(a: &Project, b: &Project) -> std::cmp::Ordering {
    b.start_date.cmp(&a.start_date).then_with(|| b.id.cmp(&a.id))
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let projects = self.projects.read().map_err(poisoned)?;
        Ok(projects.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.projects.read().map_err(poisoned)?;
        let mut list: Vec<Project> = projects.values().cloned().collect();
        list.sort_by(newest_first);
        Ok(list)
    }

    async fn list_with_client_name(&self) -> Result<Vec<ProjectView>, AppError> {
        let projects = self.list_all().await?;
        let names = self.client_names.read().map_err(poisoned)?;

        // inner join: projects of unknown clients are dropped
        Ok(projects
            .into_iter()
            .filter_map(|p| {
                names.get(&p.client_id).map(|client_name| ProjectView {
                    id: p.id,
                    name: p.name,
                    client_name: client_name.clone(),
                    start_date: p.start_date,
                    end_date: p.end_date,
                    status: p.status,
                })
            })
            .collect())
    }

    async fn create(&self, data: &NewProject) -> Result<Project, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let project = Project {
            id,
            client_id: data.client_id,
            name: data.name.clone(),
            description: data.description.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
        };

        let mut projects = self.projects.write().map_err(poisoned)?;
        projects.insert(id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: i64, data: &NewProject) -> Result<Project, AppError> {
        let mut projects = self.projects.write().map_err(poisoned)?;
        let project = projects.get_mut(&id).ok_or(AppError::ProjectNotFound)?;
        project.client_id = data.client_id;
        data.name.clone_into(&mut project.name);
        project.description.clone_from(&data.description);
        project.start_date = data.start_date;
        project.end_date = data.end_date;
        project.status = data.status;
        Ok(project.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut projects = self.projects.write().map_err(poisoned)?;
        projects
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::ProjectNotFound)
    }
}
