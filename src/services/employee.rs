use crate::validators::{
    ValidationError, require_non_empty, validate_email_optional, validate_full_name,
};
use crate::{AppError, Employee, EmployeeRepository, NewEmployee};

pub const POSITION_LABEL: &str = "Position";

/// Employee records. Every write runs the full-name rules first and stores
/// the trimmed name parts.
pub struct EmployeeService<R: EmployeeRepository> {
    repository: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: R) -> Self {
        EmployeeService { repository }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_employees", skip_all, err)
    )]
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.list_all().await
    }

    /// Validates and stores a new employee.
    ///
    /// # Returns
    ///
    /// - `Ok(Employee)` - the stored employee with trimmed name parts
    /// - `Err(AppError::Validation(_))` - a field was rejected; nothing is stored
    /// - `Err(_)` - database or other errors
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_employee", skip_all, err)
    )]
    pub async fn create_employee(&self, data: NewEmployee) -> Result<Employee, AppError> {
        let data = clean(data)?;
        let employee = self.repository.create(&data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"employee created\", employee_id={}",
            employee.id
        );

        Ok(employee)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_employee", skip(self, data), err)
    )]
    pub async fn update_employee(
        &self,
        employee_id: i64,
        data: NewEmployee,
    ) -> Result<Employee, AppError> {
        let data = clean(data)?;
        let employee = self.repository.update(employee_id, &data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"employee updated\", employee_id={employee_id}"
        );

        Ok(employee)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_employee", skip(self), err)
    )]
    pub async fn delete_employee(&self, employee_id: i64) -> Result<(), AppError> {
        self.repository.delete(employee_id).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"employee deleted\", employee_id={employee_id}"
        );

        Ok(())
    }
}

fn clean(mut data: NewEmployee) -> Result<NewEmployee, ValidationError> {
    data.position = require_non_empty(&data.position, POSITION_LABEL)?.to_owned();

    let name = validate_full_name(
        &data.last_name,
        &data.first_name,
        data.middle_name.as_deref(),
    )?;
    data.last_name = name.surname;
    data.first_name = name.given_name;
    data.middle_name = name.patronymic;

    validate_email_optional(data.email.as_deref())?;
    Ok(data)
}
