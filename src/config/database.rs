//! Database configuration and connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is not set or the connection
//! cannot be established; it is called once during startup and the server
//! cannot do anything useful without a database.

use sqlx::PgPool;
use std::env;

/// Initializes a PostgreSQL connection pool.
///
/// The returned [`PgPool`] is cheaply cloneable and is stored in the
/// application state for use in request handlers.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
