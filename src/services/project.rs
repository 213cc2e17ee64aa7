use chrono::{NaiveDate, Utc};

use crate::validators::{ValidationError, require_non_empty};
use crate::{
    AppError, NewProject, Project, ProjectInput, ProjectMember, ProjectMemberRepository,
    ProjectRepository, ProjectStatus, ProjectView,
};

pub const PROJECT_NAME_LABEL: &str = "Project name";
pub const ROLE_LABEL: &str = "Role";

/// Projects and their members.
pub struct ProjectService<P: ProjectRepository, M: ProjectMemberRepository> {
    projects: P,
    members: M,
}

impl<P: ProjectRepository, M: ProjectMemberRepository> ProjectService<P, M> {
    pub fn new(projects: P, members: M) -> Self {
        ProjectService { projects, members }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_projects", skip_all, err)
    )]
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.projects.list_all().await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_projects_view", skip_all, err)
    )]
    pub async fn list_projects_view(&self) -> Result<Vec<ProjectView>, AppError> {
        self.projects.list_with_client_name().await
    }

    /// Validates and stores a new project.
    ///
    /// An unknown status string falls back to [`ProjectStatus::Active`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_project", skip_all, err)
    )]
    pub async fn create_project(&self, input: ProjectInput) -> Result<Project, AppError> {
        let data = clean(input)?;
        let project = self.projects.create(&data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"project created\", project_id={}, client_id={}",
            project.id,
            project.client_id
        );

        Ok(project)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_project", skip(self, input), err)
    )]
    pub async fn update_project(
        &self,
        project_id: i64,
        input: ProjectInput,
    ) -> Result<Project, AppError> {
        let data = clean(input)?;
        let project = self.projects.update(project_id, &data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"project updated\", project_id={project_id}"
        );

        Ok(project)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_project", skip(self), err)
    )]
    pub async fn delete_project(&self, project_id: i64) -> Result<(), AppError> {
        self.projects.delete(project_id).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"project deleted\", project_id={project_id}"
        );

        Ok(())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_project_members", skip(self), err)
    )]
    pub async fn list_project_members(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectMember>, AppError> {
        self.members.list_members(project_id).await
    }

    /// Adds an employee to a project, starting today.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "add_project_member_today", skip(self, role), err)
    )]
    pub async fn add_project_member(
        &self,
        project_id: i64,
        employee_id: i64,
        role: &str,
    ) -> Result<(), AppError> {
        self.add_project_member_since(project_id, employee_id, role, Utc::now().date_naive())
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "add_project_member", skip(self, role), err)
    )]
    pub async fn add_project_member_since(
        &self,
        project_id: i64,
        employee_id: i64,
        role: &str,
        since_date: NaiveDate,
    ) -> Result<(), AppError> {
        let role = require_non_empty(role, ROLE_LABEL)?;
        self.members
            .add_member(project_id, employee_id, role, since_date)
            .await?;

        log::info!(
            target: "staffdesk",
            "msg=\"project member added\", project_id={project_id}, employee_id={employee_id}"
        );

        Ok(())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "remove_project_member", skip(self), err)
    )]
    pub async fn remove_project_member(
        &self,
        project_id: i64,
        employee_id: i64,
    ) -> Result<(), AppError> {
        self.members.remove_member(project_id, employee_id).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"project member removed\", project_id={project_id}, employee_id={employee_id}"
        );

        Ok(())
    }
}

fn clean(input: ProjectInput) -> Result<NewProject, ValidationError> {
    let name = require_non_empty(&input.name, PROJECT_NAME_LABEL)?.to_owned();
    if input.client_id <= 0 {
        return Err(ValidationError::ClientNotSelected);
    }
    let start_date = input.start_date.ok_or(ValidationError::StartDateMissing)?;

    Ok(NewProject {
        client_id: input.client_id,
        name,
        description: input.description,
        start_date,
        end_date: input.end_date,
        status: ProjectStatus::parse(&input.status).unwrap_or_default(),
    })
}
