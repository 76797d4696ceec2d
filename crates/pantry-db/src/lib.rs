//! # pantry-db
//!
//! libSQL database operations for Pantry.
//!
//! Handles all relational state: users, the follow graph, recipes, likes and
//! comments. [`service::PantryService`] hosts the repository methods and
//! implements the storage accessor traits from `pantry_core::store`.
//!
//! Uniqueness of follow edges and likes is enforced by `UNIQUE` constraints;
//! inserts use `ON CONFLICT DO NOTHING` and report whether a row changed, so
//! concurrent requests cannot both create the same edge.

mod accessors;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Pantry state operations.
///
/// Wraps a libSQL database and connection and provides ID generation.
pub struct PantryDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PantryDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let pantry_db = Self { db, conn };
        pantry_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(pantry_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rcp-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Generate a 32-char hex bearer token.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_token(&self) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(16)))", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
