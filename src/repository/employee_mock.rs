#![allow(clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use super::employee::{Employee, EmployeeRepository, NewEmployee};
use crate::AppError;

pub struct MockEmployeeRepository {
    employees: RwLock<HashMap<i64, Employee>>,
    next_id: AtomicI64,
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored employees, for asserting that nothing was written.
    pub fn len(&self) -> usize {
        self.employees.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MockEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("lock poisoned".into())
}

fn apply(employee: &mut Employee, data: &NewEmployee) {
    data.last_name.clone_into(&mut employee.last_name);
    data.first_name.clone_into(&mut employee.first_name);
    employee.middle_name.clone_from(&data.middle_name);
    data.position.clone_into(&mut employee.position);
    employee.phone.clone_from(&data.phone);
    employee.email.clone_from(&data.email);
    employee.is_active = data.is_active;
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employees = self.employees.read().map_err(poisoned)?;
        Ok(employees.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = self.employees.read().map_err(poisoned)?;
        let mut list: Vec<Employee> = employees.values().cloned().collect();
        list.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        Ok(list)
    }

    async fn create(&self, data: &NewEmployee) -> Result<Employee, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut employee = Employee {
            id,
            last_name: String::new(),
            first_name: String::new(),
            middle_name: None,
            position: String::new(),
            phone: None,
            email: None,
            is_active: true,
        };
        apply(&mut employee, data);

        let mut employees = self.employees.write().map_err(poisoned)?;
        employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, data: &NewEmployee) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().map_err(poisoned)?;
        let employee = employees.get_mut(&id).ok_or(AppError::EmployeeNotFound)?;
        apply(employee, data);
        Ok(employee.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut employees = self.employees.write().map_err(poisoned)?;
        employees
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::EmployeeNotFound)
    }
}
