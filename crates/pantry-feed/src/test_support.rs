//! In-memory accessor implementations for feed tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use pantry_core::entities::Recipe;
use pantry_core::errors::CoreError;
use pantry_core::store::{FollowGraph, LikeLedger, RecipeSource};

/// Timestamp on a fixed day at `hour`:00 UTC.
pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap()
}

pub fn recipe(id: &str, author_id: &str, created_at: DateTime<Utc>) -> Recipe {
    Recipe {
        id: id.into(),
        author_id: author_id.into(),
        title: format!("Recipe {id}"),
        category: "main".into(),
        description: String::new(),
        ingredients: Vec::new(),
        instructions: String::new(),
        created_at,
        updated_at: created_at,
    }
}

#[derive(Default)]
pub struct MemoryStore {
    users: HashSet<String>,
    follows: HashSet<(String, String)>,
    recipes: Vec<Recipe>,
    likes: Mutex<HashSet<(String, String)>>,
    recipe_queries: AtomicUsize,
    fail_recipes: bool,
}

impl MemoryStore {
    pub fn with_users(users: &[&str]) -> Self {
        Self {
            users: users.iter().map(|u| (*u).to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn follow(mut self, follower: &str, followee: &str) -> Self {
        self.follows.insert((follower.into(), followee.into()));
        self
    }

    pub fn recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = recipes;
        self
    }

    pub fn failing_recipes(mut self) -> Self {
        self.fail_recipes = true;
        self
    }

    /// How many times `recipes_by_authors` was called.
    pub fn recipe_queries(&self) -> usize {
        self.recipe_queries.load(Ordering::SeqCst)
    }
}

impl FollowGraph for MemoryStore {
    async fn user_exists(&self, user_id: &str) -> Result<bool, CoreError> {
        Ok(self.users.contains(user_id))
    }

    async fn followees(&self, user_id: &str) -> Result<HashSet<String>, CoreError> {
        Ok(self
            .follows
            .iter()
            .filter(|(follower, _)| follower == user_id)
            .map(|(_, followee)| followee.clone())
            .collect())
    }
}

impl RecipeSource for MemoryStore {
    async fn recipes_by_authors(&self, author_ids: &[String]) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_recipes {
            return Err(CoreError::Storage(anyhow::anyhow!("recipe store offline")));
        }
        Ok(self
            .recipes
            .iter()
            .filter(|r| author_ids.contains(&r.author_id))
            .cloned()
            .collect())
    }

    async fn recipe_exists(&self, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(self.recipes.iter().any(|r| r.id == recipe_id))
    }
}

impl LikeLedger for MemoryStore {
    async fn insert_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .insert((user_id.into(), recipe_id.into())))
    }

    async fn delete_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .remove(&(user_id.to_string(), recipe_id.to_string())))
    }

    async fn has_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, CoreError> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .contains(&(user_id.to_string(), recipe_id.to_string())))
    }

    async fn count_likes(&self, recipe_id: &str) -> Result<u64, CoreError> {
        let count = self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, r)| r == recipe_id)
            .count();
        Ok(count as u64)
    }
}
