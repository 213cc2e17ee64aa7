#![allow(clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::employee::Employee;
use super::project_member::{ProjectMember, ProjectMemberRepository};
use crate::AppError;

/// In-memory project membership.
///
/// Employees must be registered with [`MockProjectMemberRepository::with_employee`]
/// before they can be added to a project.
pub struct MockProjectMemberRepository {
    members: RwLock<Vec<ProjectMember>>,
    employees: RwLock<HashMap<i64, Employee>>,
}

impl MockProjectMemberRepository {
    pub fn new() -> Self {
        Self {
            members: RwLock::new(Vec::new()),
            employees: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn with_employee(self, employee: Employee) -> Self {
        if let Ok(mut employees) = self.employees.write() {
            employees.insert(employee.id, employee);
        }
        self
    }
}

impl Default for MockProjectMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("lock poisoned".into())
}

#[async_trait]
impl ProjectMemberRepository for MockProjectMemberRepository {
    async fn list_members(&self, project_id: i64) -> Result<Vec<ProjectMember>, AppError> {
        let members = self.members.read().map_err(poisoned)?;
        let mut list: Vec<ProjectMember> = members
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        Ok(list)
    }

    async fn add_member(
        &self,
        project_id: i64,
        employee_id: i64,
        role: &str,
        since_date: NaiveDate,
    ) -> Result<(), AppError> {
        let employee = {
            let employees = self.employees.read().map_err(poisoned)?;
            employees
                .get(&employee_id)
                .cloned()
                .ok_or(AppError::EmployeeNotFound)?
        };

        let mut members = self.members.write().map_err(poisoned)?;
        if members
            .iter()
            .any(|m| m.project_id == project_id && m.employee_id == employee_id)
        {
            return Err(AppError::DatabaseError(
                "employee is already a member of this project".into(),
            ));
        }

        members.push(ProjectMember {
            project_id,
            employee_id,
            role: role.to_owned(),
            since_date,
            last_name: employee.last_name,
            first_name: employee.first_name,
            middle_name: employee.middle_name,
            position: employee.position,
        });
        Ok(())
    }

    async fn remove_member(&self, project_id: i64, employee_id: i64) -> Result<(), AppError> {
        let mut members = self.members.write().map_err(poisoned)?;
        let len_before = members.len();
        members.retain(|m| !(m.project_id == project_id && m.employee_id == employee_id));
        if members.len() < len_before {
            Ok(())
        } else {
            Err(AppError::MemberNotFound)
        }
    }
}
