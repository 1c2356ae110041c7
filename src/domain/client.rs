use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, ClientName, Cpf};

/// Persisted client record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    /// Number of dependent persons.
    pub children: i32,
}

/// Client record that has not been assigned an identifier yet.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: i32,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        cpf: Cpf,
        income: f64,
        birth_date: DateTime<Utc>,
        children: i32,
    ) -> Self {
        Self {
            name,
            cpf,
            income,
            birth_date,
            children,
        }
    }

    /// Attaches the identifier assigned by storage.
    #[must_use]
    pub fn with_id(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            cpf: self.cpf,
            income: self.income,
            birth_date: self.birth_date,
            children: self.children,
        }
    }
}
