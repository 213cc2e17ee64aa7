#![allow(clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::task::{NewTask, Task, TaskRepository, TaskView};
use crate::AppError;

/// In-memory tasks.
///
/// Project and employee names for the list view are registered with
/// [`MockTaskRepository::with_project`] and [`MockTaskRepository::with_employee`].
pub struct MockTaskRepository {
    tasks: RwLock<HashMap<i64, Task>>,
    project_names: RwLock<HashMap<i64, String>>,
    employee_names: RwLock<HashMap<i64, String>>,
    next_id: AtomicI64,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
            project_names: RwLock::new(HashMap::new()),
            employee_names: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    #[must_use]
    pub fn with_project(self, project_id: i64, name: &str) -> Self {
        if let Ok(mut names) = self.project_names.write() {
            names.insert(project_id, name.to_owned());
        }
        self
    }

    #[must_use]
    pub fn with_employee(self, employee_id: i64, full_name: &str) -> Self {
        if let Ok(mut names) = self.employee_names.write() {
            names.insert(employee_id, full_name.to_owned());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.tasks.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("lock poisoned".into())
}

fn apply(task: &mut Task, data: &NewTask) {
    task.project_id = data.project_id;
    task.employee_id = data.employee_id;
    data.title.clone_into(&mut task.title);
    task.description.clone_from(&data.description);
    task.due_date = data.due_date;
    task.completed_at = data.completed_at;
    task.status = data.status;
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        let mut list: Vec<Task> = tasks.values().cloned().collect();
        list.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| b.id.cmp(&a.id)));
        Ok(list)
    }

    async fn list_with_names(&self) -> Result<Vec<TaskView>, AppError> {
        let tasks = self.list_all().await?;
        let projects = self.project_names.read().map_err(poisoned)?;
        let employees = self.employee_names.read().map_err(poisoned)?;

        Ok(tasks
            .into_iter()
            .filter_map(|t| {
                let project_name = projects.get(&t.project_id)?.clone();
                let employee_name = t
                    .employee_id
                    .and_then(|id| employees.get(&id).cloned())
                    .unwrap_or_else(|| TaskView::UNASSIGNED.to_owned());
                Some(TaskView {
                    id: t.id,
                    project_name,
                    employee_name,
                    title: t.title,
                    due_date: t.due_date,
                    status: t.status,
                })
            })
            .collect())
    }

    async fn create(&self, data: &NewTask) -> Result<Task, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut task = Task {
            id,
            project_id: data.project_id,
            employee_id: None,
            title: String::new(),
            description: None,
            created_at: Utc::now(),
            due_date: data.due_date,
            completed_at: None,
            status: data.status,
        };
        apply(&mut task, data);

        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: i64, data: &NewTask) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let task = tasks.get_mut(&id).ok_or(AppError::TaskNotFound)?;
        apply(task, data);
        Ok(task.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks.remove(&id).map(|_| ()).ok_or(AppError::TaskNotFound)
    }
}
