//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use client_records::db::{DbPool, establish_connection_pool, run_migrations};
use client_records::dto::client::ClientDto;
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory that is removed
/// on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub fn client_dto(name: &str, cpf: &str, income: f64, children: i32) -> ClientDto {
    ClientDto {
        id: None,
        name: name.to_string(),
        cpf: cpf.to_string(),
        income,
        birth_date: Utc.with_ymd_and_hms(1980, 5, 17, 12, 0, 0).unwrap(),
        children,
    }
}
