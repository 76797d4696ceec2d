//! Service layer hosting the repository methods.
//!
//! `PantryService` wraps `PantryDb` (raw database access). All repo methods
//! are implemented as `impl PantryService` blocks under `repos/`, and the
//! storage accessor traits from `pantry_core::store` are implemented on top of
//! them.

use crate::PantryDb;
use crate::error::DatabaseError;

/// Owns the database handle shared by every repository.
pub struct PantryService {
    db: PantryDb,
}

impl PantryService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = PantryDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `PantryDb`.
    #[must_use]
    pub const fn from_db(db: PantryDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &PantryDb {
        &self.db
    }
}
