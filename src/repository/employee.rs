use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub position: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

impl Employee {
    /// Surname, given name and patronymic joined by single spaces.
    pub fn full_name(&self) -> String {
        [
            Some(self.last_name.as_str()),
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Field values for creating or updating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub position: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

impl Default for NewEmployee {
    fn default() -> Self {
        Self {
            last_name: String::new(),
            first_name: String::new(),
            middle_name: None,
            position: String::new(),
            phone: None,
            email: None,
            is_active: true,
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
impl NewEmployee {
    pub fn mock(last_name: &str, first_name: &str, middle_name: Option<&str>) -> Self {
        NewEmployee {
            last_name: last_name.to_owned(),
            first_name: first_name.to_owned(),
            middle_name: middle_name.map(str::to_owned),
            position: "Engineer".to_owned(),
            phone: None,
            email: Some("staff@example.com".to_owned()),
            is_active: true,
        }
    }
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;
    /// All employees ordered by surname, then given name.
    async fn list_all(&self) -> Result<Vec<Employee>, AppError>;
    async fn create(&self, data: &NewEmployee) -> Result<Employee, AppError>;
    async fn update(&self, id: i64, data: &NewEmployee) -> Result<Employee, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(middle_name: Option<&str>) -> Employee {
        Employee {
            id: 1,
            last_name: "Иванов".to_owned(),
            first_name: "Иван".to_owned(),
            middle_name: middle_name.map(str::to_owned),
            position: "Engineer".to_owned(),
            phone: None,
            email: None,
            is_active: true,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(employee(Some("Петрович")).full_name(), "Иванов Иван Петрович");
        assert_eq!(employee(None).full_name(), "Иванов Иван");
        assert_eq!(employee(Some("")).full_name(), "Иванов Иван");
    }
}
