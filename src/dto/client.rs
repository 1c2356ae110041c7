//! Transfer representation of a client record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::{ClientName, Cpf, TypeConstraintError};

/// Client as exchanged with API callers.
///
/// `id` is absent on requests that create a record and ignored on updates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 11, max = 14))]
    pub cpf: String,
    #[validate(range(min = 0.0))]
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub children: i32,
}

impl ClientDto {
    /// Copies every field except the identifier onto `client`.
    ///
    /// `client` is left untouched when any field is rejected.
    pub fn apply_to(&self, client: &mut Client) -> Result<(), TypeConstraintError> {
        let NewClient {
            name,
            cpf,
            income,
            birth_date,
            children,
        } = NewClient::try_from(self)?;

        client.name = name;
        client.cpf = cpf;
        client.income = income;
        client.birth_date = birth_date;
        client.children = children;
        Ok(())
    }
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: Some(client.id.get()),
            name: client.name.into_inner(),
            cpf: client.cpf.into_inner(),
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}

impl TryFrom<&ClientDto> for NewClient {
    type Error = TypeConstraintError;

    fn try_from(dto: &ClientDto) -> Result<Self, Self::Error> {
        if !dto.income.is_finite() || dto.income < 0.0 {
            return Err(TypeConstraintError::InvalidValue(format!(
                "income must be a non-negative number, got {}",
                dto.income
            )));
        }
        if dto.children < 0 {
            return Err(TypeConstraintError::InvalidValue(format!(
                "children must not be negative, got {}",
                dto.children
            )));
        }

        Ok(NewClient::new(
            ClientName::new(dto.name.as_str())?,
            Cpf::new(&dto.cpf)?,
            dto.income,
            dto.birth_date,
            dto.children,
        ))
    }
}
