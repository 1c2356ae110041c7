//! Client record service: CRUD over a repository with error translation and
//! DTO conversion.

use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::ClientId;
use crate::dto::client::ClientDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Logs a failed repository call and translates its error.
fn log_failure(action: &'static str) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |err| {
        log::error!("Failed to {action}: {err}");
        ServiceError::from(err)
    }
}

pub struct ClientService<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R> ClientService<'a, R>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Removes the client, failing with [`ServiceError::NotFound`] for an
    /// unknown id and [`ServiceError::DependencyConflict`] when other records
    /// still reference it.
    pub fn delete(&self, id: ClientId) -> ServiceResult<()> {
        self.repo
            .delete_client(id)
            .map_err(log_failure("delete client"))
    }

    pub fn find_all_paged(&self, request: &PageRequest) -> ServiceResult<Page<ClientDto>> {
        let page = self
            .repo
            .list_clients(request)
            .map_err(log_failure("list clients"))?;

        Ok(page.map(ClientDto::from))
    }

    /// Pages through clients with an income of at least `income`.
    pub fn find_by_income(
        &self,
        income: f64,
        request: &PageRequest,
    ) -> ServiceResult<Page<ClientDto>> {
        let page = self
            .repo
            .list_clients_by_income(income, request)
            .map_err(log_failure("list clients by income"))?;

        Ok(page.map(ClientDto::from))
    }

    pub fn find_by_id(&self, id: ClientId) -> ServiceResult<ClientDto> {
        let client = self
            .repo
            .find_client_by_id(id)
            .map_err(log_failure("fetch client"))?
            .ok_or(ServiceError::NotFound)?;

        Ok(client.into())
    }

    /// Loads the client, overwrites its fields from `dto` and saves it.
    pub fn update(&self, id: ClientId, dto: &ClientDto) -> ServiceResult<ClientDto> {
        dto.validate()?;

        let mut client = self
            .repo
            .get_client(id)
            .map_err(log_failure("load client for update"))?;
        dto.apply_to(&mut client)?;

        let saved = self
            .repo
            .save_client(&client)
            .map_err(log_failure("save client"))?;

        Ok(saved.into())
    }

    pub fn insert(&self, dto: &ClientDto) -> ServiceResult<ClientDto> {
        dto.validate()?;

        let new_client = NewClient::try_from(dto)?;
        let created = self
            .repo
            .create_client(&new_client)
            .map_err(log_failure("create client"))?;

        log::info!("Created client {}", created.id);
        Ok(created.into())
    }
}
