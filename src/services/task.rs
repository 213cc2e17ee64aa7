use crate::validators::{ValidationError, require_non_empty, validate_completed_at_not_future};
use crate::{AppError, NewTask, Task, TaskInput, TaskRepository, TaskStatus, TaskView};

pub const TASK_TITLE_LABEL: &str = "Task title";

pub struct TaskService<R: TaskRepository> {
    repository: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        TaskService { repository }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "get_task", skip(self), err)
    )]
    pub async fn get_task(&self, task_id: i64) -> Result<Option<Task>, AppError> {
        self.repository.find_by_id(task_id).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_tasks_view", skip_all, err)
    )]
    pub async fn list_tasks_view(&self) -> Result<Vec<TaskView>, AppError> {
        self.repository.list_with_names().await
    }

    /// Validates and stores a new task.
    ///
    /// An unknown status string falls back to [`TaskStatus::New`]. A
    /// completion time later than now is rejected.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_task", skip_all, err)
    )]
    pub async fn create_task(&self, input: TaskInput) -> Result<Task, AppError> {
        let data = clean(input)?;
        let task = self.repository.create(&data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"task created\", task_id={}, project_id={}",
            task.id,
            task.project_id
        );

        Ok(task)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_task", skip(self, input), err)
    )]
    pub async fn update_task(&self, task_id: i64, input: TaskInput) -> Result<Task, AppError> {
        let data = clean(input)?;
        let task = self.repository.update(task_id, &data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"task updated\", task_id={task_id}, status=\"{}\"",
            task.status.as_str()
        );

        Ok(task)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_task", skip(self), err)
    )]
    pub async fn delete_task(&self, task_id: i64) -> Result<(), AppError> {
        self.repository.delete(task_id).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"task deleted\", task_id={task_id}"
        );

        Ok(())
    }
}

fn clean(input: TaskInput) -> Result<NewTask, ValidationError> {
    let title = require_non_empty(&input.title, TASK_TITLE_LABEL)?.to_owned();
    if input.project_id <= 0 {
        return Err(ValidationError::ProjectNotSelected);
    }
    let due_date = input.due_date.ok_or(ValidationError::DueDateMissing)?;
    let status = TaskStatus::parse(&input.status).unwrap_or_default();
    validate_completed_at_not_future(input.completed_at)?;

    Ok(NewTask {
        project_id: input.project_id,
        employee_id: input.employee_id,
        title,
        description: input.description,
        due_date,
        completed_at: input.completed_at,
        status,
    })
}
