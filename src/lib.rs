use std::env;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, PoolError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use dotenvy::dotenv;

pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod store;
pub mod views;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub type Pool = diesel::r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub fn database_url() -> String {
    dotenv().ok();

    env::var("DATABASE_URL").unwrap_or_else(|_| "app.db".to_string())
}

/// SQLite leaves foreign keys off unless every connection opts in.
#[derive(Debug, Clone, Copy)]
pub struct ForeignKeyEnforcer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ForeignKeyEnforcer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map(drop)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn establish_pool(database_url: &str) -> Result<Pool, PoolError> {
    diesel::r2d2::Pool::builder()
        .connection_customizer(Box::new(ForeignKeyEnforcer))
        .build(ConnectionManager::new(database_url))
}
