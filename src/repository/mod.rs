use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::pagination::{Page, PageRequest};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read access to stored client records.
pub trait ClientReader {
    fn find_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Like [`ClientReader::find_client_by_id`] but an absent record is
    /// reported as [`errors::RepositoryError::NotFound`].
    fn get_client(&self, id: ClientId) -> RepositoryResult<Client>;
    fn list_clients(&self, request: &PageRequest) -> RepositoryResult<Page<Client>>;
    /// Pages through clients whose income is at least `income`.
    fn list_clients_by_income(
        &self,
        income: f64,
        request: &PageRequest,
    ) -> RepositoryResult<Page<Client>>;
}

/// Write access to stored client records.
pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    /// Overwrites every column of an existing record.
    fn save_client(&self, client: &Client) -> RepositoryResult<Client>;
    fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
}

/// Diesel-backed repository shared between HTTP workers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
