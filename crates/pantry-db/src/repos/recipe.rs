//! Recipe repository: CRUD, filtered listing and author search.

use pantry_core::entities::{NewRecipe, Recipe};
use pantry_core::ids::PREFIX_RECIPE;

use crate::error::DatabaseError;
use crate::helpers::{
    escape_like, format_datetime, now, parse_datetime, parse_string_list, placeholders,
    to_string_list,
};
use crate::service::PantryService;
use crate::updates::recipe::RecipeUpdate;

const SELECT_COLS: &str = "r.id, r.author_id, r.title, r.category, r.description, r.ingredients, r.instructions, r.created_at, r.updated_at";

/// Newest first, ties broken by id so listings are stable.
const ORDER_BY: &str = "ORDER BY r.created_at DESC, r.id ASC";

fn row_to_recipe(row: &libsql::Row) -> Result<Recipe, DatabaseError> {
    Ok(Recipe {
        id: row.get(0)?,
        author_id: row.get(1)?,
        title: row.get(2)?,
        category: row.get(3)?,
        description: row.get(4)?,
        ingredients: parse_string_list(&row.get::<String>(5)?)?,
        instructions: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

/// Optional filters for [`PantryService::list_recipes`]. `None` matches all.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub category: Option<String>,
    pub author_username: Option<String>,
}

impl PantryService {
    async fn query_recipes(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<Recipe>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(sql, libsql::params_from_iter(params))
            .await?;
        let mut recipes = Vec::new();
        while let Some(row) = rows.next().await? {
            recipes.push(row_to_recipe(&row)?);
        }
        Ok(recipes)
    }

    /// Publish a recipe authored by `author_id`.
    pub async fn create_recipe(
        &self,
        author_id: &str,
        recipe: &NewRecipe,
    ) -> Result<Recipe, DatabaseError> {
        let now = now();
        let id = self.db().generate_id(PREFIX_RECIPE).await?;
        let ingredients = to_string_list(&recipe.ingredients)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO recipes (id, author_id, title, category, description, ingredients, instructions, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    author_id,
                    recipe.title.as_str(),
                    recipe.category.as_str(),
                    recipe.description.as_str(),
                    ingredients,
                    recipe.instructions.as_str(),
                    format_datetime(&now),
                    format_datetime(&now)
                ],
            )
            .await?;

        tracing::debug!(recipe_id = %id, author_id, "recipe created");
        Ok(Recipe {
            id,
            author_id: author_id.to_string(),
            title: recipe.title.clone(),
            category: recipe.category.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM recipes r WHERE r.id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_recipe(&row)
    }

    /// Apply the `Some` fields of `update` and bump `updated_at`.
    ///
    /// Returns `DatabaseError::NoResult` if the recipe does not exist.
    pub async fn update_recipe(
        &self,
        recipe_id: &str,
        update: RecipeUpdate,
    ) -> Result<Recipe, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.into());
            idx += 1;
        }
        if let Some(category) = update.category {
            sets.push(format!("category = ?{idx}"));
            params.push(category.into());
            idx += 1;
        }
        if let Some(description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.into());
            idx += 1;
        }
        if let Some(ref ingredients) = update.ingredients {
            sets.push(format!("ingredients = ?{idx}"));
            params.push(to_string_list(ingredients)?.into());
            idx += 1;
        }
        if let Some(instructions) = update.instructions {
            sets.push(format!("instructions = ?{idx}"));
            params.push(instructions.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_recipe(recipe_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_datetime(&now()).into());
        idx += 1;

        params.push(recipe_id.into());
        let sql = format!("UPDATE recipes SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        self.get_recipe(recipe_id).await
    }

    /// Delete a recipe with its likes and comments. Returns `true` if it existed.
    pub async fn delete_recipe(&self, recipe_id: &str) -> Result<bool, DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM recipes WHERE id = ?1", [recipe_id])
            .await?;
        Ok(deleted > 0)
    }

    /// All recipes matching `filter`, newest first.
    pub async fn list_recipes(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref category) = filter.category {
            params.push(category.clone().into());
            conditions.push(format!("r.category = ?{}", params.len()));
        }
        if let Some(ref username) = filter.author_username {
            params.push(username.clone().into());
            conditions.push(format!("u.username = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let sql = format!(
            "SELECT {SELECT_COLS} FROM recipes r JOIN users u ON u.id = r.author_id {where_clause} {ORDER_BY}"
        );
        self.query_recipes(&sql, params).await
    }

    /// Recipes authored by `author_id`, optionally narrowed to those whose
    /// title or category contains `search` (case-insensitive).
    pub async fn list_recipes_by_author(
        &self,
        author_id: &str,
        search: Option<&str>,
    ) -> Result<Vec<Recipe>, DatabaseError> {
        let mut params: Vec<libsql::Value> = vec![author_id.into()];
        let search_clause = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                params.push(format!("%{}%", escape_like(term)).into());
                "AND (r.title LIKE ?2 ESCAPE '\\' OR r.category LIKE ?2 ESCAPE '\\')"
            }
            None => "",
        };
        let sql = format!(
            "SELECT {SELECT_COLS} FROM recipes r WHERE r.author_id = ?1 {search_clause} {ORDER_BY}"
        );
        self.query_recipes(&sql, params).await
    }

    /// Recipes whose author is in `author_ids`, newest first.
    pub async fn recipes_by_authors(
        &self,
        author_ids: &[String],
    ) -> Result<Vec<Recipe>, DatabaseError> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {SELECT_COLS} FROM recipes r WHERE r.author_id IN ({}) {ORDER_BY}",
            placeholders(1, author_ids.len())
        );
        let params = author_ids.iter().cloned().map(Into::into).collect();
        self.query_recipes(&sql, params).await
    }

    pub async fn recipe_exists(&self, recipe_id: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM recipes WHERE id = ?1", [recipe_id])
            .await?;
        Ok(rows.next().await?.is_some())
    }
}
