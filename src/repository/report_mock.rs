#![allow(clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::report::{
    ClientProjectRow, EmployeeWorkloadRow, OverdueProjectRow, ProjectEmployeeRow,
    ReportRepository,
};
use crate::AppError;

/// Canned report rows.
///
/// Overdue rows are stored together with the earliest due date; the query
/// keeps those strictly before `today`.
#[derive(Default)]
pub struct MockReportRepository {
    client_projects: RwLock<HashMap<i64, Vec<ClientProjectRow>>>,
    overdue: RwLock<Vec<OverdueProjectRow>>,
    project_employees: RwLock<HashMap<i64, Vec<ProjectEmployeeRow>>>,
    workloads: RwLock<HashMap<i64, Vec<EmployeeWorkloadRow>>>,
}

impl MockReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client_project(self, client_id: i64, row: ClientProjectRow) -> Self {
        if let Ok(mut rows) = self.client_projects.write() {
            rows.entry(client_id).or_default().push(row);
        }
        self
    }

    #[must_use]
    pub fn with_overdue_project(self, row: OverdueProjectRow) -> Self {
        if let Ok(mut rows) = self.overdue.write() {
            rows.push(row);
        }
        self
    }

    #[must_use]
    pub fn with_project_employee(self, project_id: i64, row: ProjectEmployeeRow) -> Self {
        if let Ok(mut rows) = self.project_employees.write() {
            rows.entry(project_id).or_default().push(row);
        }
        self
    }

    #[must_use]
    pub fn with_workload(self, employee_id: i64, row: EmployeeWorkloadRow) -> Self {
        if let Ok(mut rows) = self.workloads.write() {
            rows.entry(employee_id).or_default().push(row);
        }
        self
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("lock poisoned".into())
}

#[async_trait]
impl ReportRepository for MockReportRepository {
    async fn projects_by_client(&self, client_id: i64) -> Result<Vec<ClientProjectRow>, AppError> {
        let rows = self.client_projects.read().map_err(poisoned)?;
        Ok(rows.get(&client_id).cloned().unwrap_or_default())
    }

    async fn overdue_projects(&self, today: NaiveDate) -> Result<Vec<OverdueProjectRow>, AppError> {
        let rows = self.overdue.read().map_err(poisoned)?;
        let mut list: Vec<OverdueProjectRow> = rows
            .iter()
            .filter(|r| r.first_overdue_due_date < today)
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            a.first_overdue_due_date
                .cmp(&b.first_overdue_due_date)
                .then_with(|| b.overdue_tasks.cmp(&a.overdue_tasks))
        });
        Ok(list)
    }

    async fn employees_by_project(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectEmployeeRow>, AppError> {
        let rows = self.project_employees.read().map_err(poisoned)?;
        Ok(rows.get(&project_id).cloned().unwrap_or_default())
    }

    async fn employee_workload(
        &self,
        employee_id: i64,
    ) -> Result<Vec<EmployeeWorkloadRow>, AppError> {
        let rows = self.workloads.read().map_err(poisoned)?;
        Ok(rows
            .get(&employee_id)
            .map(|r| r.iter().filter(|w| w.status.is_active()).cloned().collect())
            .unwrap_or_default())
    }
}
