//! Follow repository: directed edges of the social graph.

use pantry_core::entities::{Follow, User};
use pantry_core::ids::PREFIX_FOLLOW;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, now, parse_datetime};
use crate::service::PantryService;

fn row_to_followee(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl PantryService {
    /// Create the edge `follower_id -> followee_id`.
    ///
    /// Returns `None` when the edge already exists. Both users must exist.
    pub async fn follow(
        &self,
        follower_id: &str,
        followee_id: &str,
    ) -> Result<Option<Follow>, DatabaseError> {
        let now = now();
        let id = self.db().generate_id(PREFIX_FOLLOW).await?;

        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO follows (id, follower_id, followee_id, created_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(follower_id, followee_id) DO NOTHING",
                libsql::params![id.as_str(), follower_id, followee_id, format_datetime(&now)],
            )
            .await?;

        if inserted == 0 {
            return Ok(None);
        }

        tracing::debug!(follower_id, followee_id, "follow created");
        Ok(Some(Follow {
            id,
            follower_id: follower_id.to_string(),
            followee_id: followee_id.to_string(),
            created_at: now,
        }))
    }

    /// Users that `follower_id` follows, oldest edge first.
    pub async fn list_followees(&self, follower_id: &str) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT u.id, u.username, u.created_at FROM follows f
                 JOIN users u ON u.id = f.followee_id
                 WHERE f.follower_id = ?1
                 ORDER BY f.created_at ASC, u.id ASC",
                [follower_id],
            )
            .await?;

        let mut followees = Vec::new();
        while let Some(row) = rows.next().await? {
            followees.push(row_to_followee(&row)?);
        }
        Ok(followees)
    }

    /// Ids of the users `follower_id` follows.
    pub async fn followee_ids(&self, follower_id: &str) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT followee_id FROM follows WHERE follower_id = ?1",
                [follower_id],
            )
            .await?;

        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<String>(0)?);
        }
        Ok(ids)
    }
}
