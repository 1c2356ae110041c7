//! Domain aggregates exposed by the client records service layer.

pub mod client;
pub mod types;
