use chrono::Utc;

use crate::{
    AppError, ClientProjectRow, EmployeeWorkloadRow, OverdueProjectRow, ProjectEmployeeRow,
    ReportRepository,
};

/// Read-only reports.
pub struct ReportService<R: ReportRepository> {
    repository: R,
}

impl<R: ReportRepository> ReportService<R> {
    pub fn new(repository: R) -> Self {
        ReportService { repository }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "report_projects_by_client", skip(self), err)
    )]
    pub async fn projects_by_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<ClientProjectRow>, AppError> {
        self.repository.projects_by_client(client_id).await
    }

    /// Projects with tasks past due as of today.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "report_overdue_projects", skip_all, err)
    )]
    pub async fn overdue_projects(&self) -> Result<Vec<OverdueProjectRow>, AppError> {
        self.repository
            .overdue_projects(Utc::now().date_naive())
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "report_employees_by_project", skip(self), err)
    )]
    pub async fn employees_by_project(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectEmployeeRow>, AppError> {
        self.repository.employees_by_project(project_id).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "report_employee_workload", skip(self), err)
    )]
    pub async fn employee_workload(
        &self,
        employee_id: i64,
    ) -> Result<Vec<EmployeeWorkloadRow>, AppError> {
        self.repository.employee_workload(employee_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::{MockReportRepository, TaskStatus};

    #[tokio::test]
    async fn test_overdue_projects_uses_today() {
        let today = Utc::now().date_naive();
        let repo = MockReportRepository::new()
            .with_overdue_project(OverdueProjectRow {
                id: 1,
                name: "Портал".to_owned(),
                client_name: "Acme".to_owned(),
                first_overdue_due_date: today - Duration::days(10),
                overdue_tasks: 2,
            })
            .with_overdue_project(OverdueProjectRow {
                id: 2,
                name: "CRM".to_owned(),
                client_name: "Acme".to_owned(),
                first_overdue_due_date: today,
                overdue_tasks: 1,
            });
        let service = ReportService::new(repo);

        let rows = service.overdue_projects().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[tokio::test]
    async fn test_overdue_same_first_date_orders_by_count() {
        let today = Utc::now().date_naive();
        let first_due = today - Duration::days(5);
        let row = |id, name: &str, overdue_tasks| OverdueProjectRow {
            id,
            name: name.to_owned(),
            client_name: "Acme".to_owned(),
            first_overdue_due_date: first_due,
            overdue_tasks,
        };
        let repo = MockReportRepository::new()
            .with_overdue_project(row(1, "Склад", 1))
            .with_overdue_project(row(2, "Портал", 2));
        let service = ReportService::new(repo);

        let rows = service.overdue_projects().await.unwrap();
        let order: Vec<(i64, i64)> = rows.iter().map(|r| (r.id, r.overdue_tasks)).collect();

        assert_eq!(order, vec![(2, 2), (1, 1)]);
    }

    #[tokio::test]
    async fn test_employee_workload_only_open_tasks() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let row = |task_id, status| EmployeeWorkloadRow {
            project_id: 1,
            project_name: "Портал".to_owned(),
            task_id,
            task_title: "Макет".to_owned(),
            due_date: due,
            status,
        };
        let repo = MockReportRepository::new()
            .with_workload(5, row(1, TaskStatus::New))
            .with_workload(5, row(2, TaskStatus::Done))
            .with_workload(5, row(3, TaskStatus::InProgress));
        let service = ReportService::new(repo);

        let rows = service.employee_workload(5).await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.task_id).collect();

        assert_eq!(ids, vec![1, 3]);
        assert!(service.employee_workload(6).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_client_has_no_projects() {
        let service = ReportService::new(MockReportRepository::new());

        assert!(service.projects_by_client(1).await.unwrap().is_empty());
        assert!(service.employees_by_project(1).await.unwrap().is_empty());
    }
}
