use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::models::client::{
    Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
};
use crate::pagination::{ClientSort, Page, PageRequest, SortDirection, SortField};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter, DieselRepository};
use crate::schema::clients;

type BoxedClientQuery<'a> = clients::BoxedQuery<'a, Sqlite>;

/// Orders by the requested column, then by id so that pages are stable.
fn sorted(query: BoxedClientQuery<'_>, sort: ClientSort) -> BoxedClientQuery<'_> {
    use SortDirection::{Asc, Desc};

    let query = match (sort.field, sort.direction) {
        (SortField::Id, Asc) => query.order(clients::id.asc()),
        (SortField::Id, Desc) => query.order(clients::id.desc()),
        (SortField::Name, Asc) => query.order(clients::name.asc()),
        (SortField::Name, Desc) => query.order(clients::name.desc()),
        (SortField::Cpf, Asc) => query.order(clients::cpf.asc()),
        (SortField::Cpf, Desc) => query.order(clients::cpf.desc()),
        (SortField::Income, Asc) => query.order(clients::income.asc()),
        (SortField::Income, Desc) => query.order(clients::income.desc()),
        (SortField::BirthDate, Asc) => query.order(clients::birth_date.asc()),
        (SortField::BirthDate, Desc) => query.order(clients::birth_date.desc()),
        (SortField::Children, Asc) => query.order(clients::children.asc()),
        (SortField::Children, Desc) => query.order(clients::children.desc()),
    };

    query.then_order_by(clients::id.asc())
}

fn into_domain(rows: Vec<DbClient>) -> RepositoryResult<Vec<Client>> {
    rows.into_iter()
        .map(|row| Client::try_from(row).map_err(RepositoryError::from))
        .collect()
}

fn limit_offset(request: &PageRequest) -> (i64, i64) {
    let limit = i64::try_from(request.size).unwrap_or(i64::MAX);
    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

fn total(count: i64) -> usize {
    usize::try_from(count).unwrap_or_default()
}

impl ClientReader for DieselRepository {
    fn find_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;
        let client = clients::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Client::try_from).transpose()?)
    }

    fn get_client(&self, id: ClientId) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let client = clients::table
            .find(id.get())
            .first::<DbClient>(&mut conn)?;

        Ok(client.try_into()?)
    }

    fn list_clients(&self, request: &PageRequest) -> RepositoryResult<Page<Client>> {
        let mut conn = self.conn()?;
        let (limit, offset) = limit_offset(request);

        let count: i64 = clients::table.count().get_result(&mut conn)?;

        let rows = sorted(clients::table.into_boxed(), request.sort)
            .limit(limit)
            .offset(offset)
            .load::<DbClient>(&mut conn)?;

        Ok(Page::new(into_domain(rows)?, request, total(count)))
    }

    fn list_clients_by_income(
        &self,
        income: f64,
        request: &PageRequest,
    ) -> RepositoryResult<Page<Client>> {
        let mut conn = self.conn()?;
        let (limit, offset) = limit_offset(request);

        let count: i64 = clients::table
            .filter(clients::income.ge(income))
            .count()
            .get_result(&mut conn)?;

        let query = clients::table
            .filter(clients::income.ge(income))
            .into_boxed();
        let rows = sorted(query, request.sort)
            .limit(limit)
            .offset(offset)
            .load::<DbClient>(&mut conn)?;

        Ok(Page::new(into_domain(rows)?, request, total(count)))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn save_client(&self, client: &Client) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let changes: DbUpdateClient = client.into();

        let saved = diesel::update(clients::table.find(client.id.get()))
            .set(&changes)
            .get_result::<DbClient>(&mut conn)?;

        Ok(saved.try_into()?)
    }

    fn delete_client(&self, id: ClientId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(clients::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
