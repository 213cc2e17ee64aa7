use crate::validators::{ValidationError, require_non_empty, validate_email_optional};
use crate::{AppError, Client, ClientRepository, NewClient};

pub const CLIENT_NAME_LABEL: &str = "Client name";

pub struct ClientService<R: ClientRepository> {
    repository: R,
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repository: R) -> Self {
        ClientService { repository }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_clients", skip_all, err)
    )]
    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.repository.list_all().await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_client", skip_all, err)
    )]
    pub async fn create_client(&self, data: NewClient) -> Result<Client, AppError> {
        let data = clean(data)?;
        let client = self.repository.create(&data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"client created\", client_id={}",
            client.id
        );

        Ok(client)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_client", skip(self, data), err)
    )]
    pub async fn update_client(&self, client_id: i64, data: NewClient) -> Result<Client, AppError> {
        let data = clean(data)?;
        let client = self.repository.update(client_id, &data).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"client updated\", client_id={client_id}"
        );

        Ok(client)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_client", skip(self), err)
    )]
    pub async fn delete_client(&self, client_id: i64) -> Result<(), AppError> {
        self.repository.delete(client_id).await?;

        log::info!(
            target: "staffdesk",
            "msg=\"client deleted\", client_id={client_id}"
        );

        Ok(())
    }
}

fn clean(mut data: NewClient) -> Result<NewClient, ValidationError> {
    data.name = require_non_empty(&data.name, CLIENT_NAME_LABEL)?.to_owned();
    validate_email_optional(data.email.as_deref())?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockClientRepository;

    #[tokio::test]
    async fn test_create_client_trims_name() {
        let service = ClientService::new(MockClientRepository::new());

        let mut data = NewClient::mock("  ООО Ромашка  ");
        data.email = None;
        let client = service.create_client(data).await.unwrap();

        assert_eq!(client.name, "ООО Ромашка");
        assert!(client.id > 0);
    }

    #[tokio::test]
    async fn test_create_client_requires_name() {
        let service = ClientService::new(MockClientRepository::new());

        let result = service.create_client(NewClient::mock("   ")).await;

        assert_eq!(
            result.unwrap_err(),
            AppError::Validation(ValidationError::Required {
                field: CLIENT_NAME_LABEL.to_owned()
            })
        );
        assert!(service.repository.is_empty());
    }

    #[tokio::test]
    async fn test_create_client_rejects_bad_email() {
        let service = ClientService::new(MockClientRepository::new());

        let mut data = NewClient::mock("Acme");
        data.email = Some("acme-at-example".to_owned());
        let result = service.create_client(data).await;

        assert_eq!(
            result.unwrap_err(),
            AppError::Validation(ValidationError::EmailInvalid)
        );
        assert!(service.repository.is_empty());
    }

    #[tokio::test]
    async fn test_list_clients_by_name() {
        let service = ClientService::new(MockClientRepository::new());
        service.create_client(NewClient::mock("Beta")).await.unwrap();
        service.create_client(NewClient::mock("Alpha")).await.unwrap();

        let names: Vec<String> = service
            .list_clients()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_client() {
        let service = ClientService::new(MockClientRepository::new());
        let client = service.create_client(NewClient::mock("Acme")).await.unwrap();

        let updated = service
            .update_client(client.id, NewClient::mock("Acme Corp"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Acme Corp");

        service.delete_client(client.id).await.unwrap();
        assert_eq!(
            service.delete_client(client.id).await.unwrap_err(),
            AppError::ClientNotFound
        );
    }

    #[tokio::test]
    async fn test_update_missing_client() {
        let service = ClientService::new(MockClientRepository::new());

        let result = service.update_client(42, NewClient::mock("Acme")).await;

        assert_eq!(result.unwrap_err(), AppError::ClientNotFound);
    }
}
