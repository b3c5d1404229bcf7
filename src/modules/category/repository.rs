use crate::modules::meal::repository::Meal;
use crate::utils::database::{map_sqlx_error, memory::MemoryStore, postgres::PgStore, Error, Result};
use crate::utils::id;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CategoryWithMeals {
    pub id: String,
    pub name: String,
    pub meals: Vec<MealSummary>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Category {
    pub fn with_meals(self, meals: Vec<MealSummary>) -> CategoryWithMeals {
        CategoryWithMeals {
            id: self.id,
            name: self.name,
            meals,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct CreateCategoryPayload {
    pub name: String,
}

pub struct UpdateCategoryPayload {
    pub name: String,
}

#[async_trait]
pub trait CategoryRepository {
    async fn create_category(&self, payload: CreateCategoryPayload) -> Result<Category>;
    async fn find_category_by_id(&self, id: String) -> Result<Option<CategoryWithMeals>>;
    async fn find_category_by_name(&self, name: String) -> Result<Option<Category>>;
    async fn find_many_categories(&self) -> Result<Vec<CategoryWithMeals>>;
    async fn update_category_by_id(&self, id: String, payload: UpdateCategoryPayload)
        -> Result<()>;
    /// Removes the category together with its meals.
    async fn delete_category_by_id(&self, id: String) -> Result<()>;
}

#[derive(sqlx::FromRow)]
struct CategoryMealRow {
    category_id: String,
    id: String,
    name: String,
}

impl PgStore {
    async fn find_meal_summaries(
        &self,
        category_ids: Vec<String>,
    ) -> Result<HashMap<String, Vec<MealSummary>>> {
        let rows = sqlx::query_as::<_, CategoryMealRow>(
            "
            SELECT category_id, id, name
            FROM meals
            WHERE category_id = ANY($1)
            ORDER BY created_at ASC
            ",
        )
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("fetch meals of categories", err))?;

        let mut grouped: HashMap<String, Vec<MealSummary>> = HashMap::new();
        for row in rows {
            grouped.entry(row.category_id).or_default().push(MealSummary {
                id: row.id,
                name: row.name,
            });
        }
        Ok(grouped)
    }
}

#[async_trait]
impl CategoryRepository for PgStore {
    async fn create_category(&self, payload: CreateCategoryPayload) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            "
            INSERT INTO categories (id, name)
            VALUES ($1, $2)
            RETURNING *
            ",
        )
        .bind(id::generate())
        .bind(payload.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("create a category", err))
    }

    async fn find_category_by_id(&self, id: String) -> Result<Option<CategoryWithMeals>> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch a category by id", err))?;

        match category {
            Some(category) => {
                let mut meals = self.find_meal_summaries(vec![category.id.clone()]).await?;
                let meals = meals.remove(&category.id).unwrap_or_default();
                Ok(Some(category.with_meals(meals)))
            }
            None => Ok(None),
        }
    }

    async fn find_category_by_name(&self, name: String) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch a category by name", err))
    }

    async fn find_many_categories(&self) -> Result<Vec<CategoryWithMeals>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|err| map_sqlx_error("fetch many categories", err))?;

        let mut meals = self
            .find_meal_summaries(categories.iter().map(|c| c.id.clone()).collect())
            .await?;

        Ok(categories
            .into_iter()
            .map(|category| {
                let category_meals = meals.remove(&category.id).unwrap_or_default();
                category.with_meals(category_meals)
            })
            .collect())
    }

    async fn update_category_by_id(
        &self,
        id: String,
        payload: UpdateCategoryPayload,
    ) -> Result<()> {
        sqlx::query("UPDATE categories SET name = $1, updated_at = NOW() WHERE id = $2")
            .bind(payload.name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("update a category", err))
            .and_then(|result| match result.rows_affected() {
                0 => Err(Error::NotFound),
                _ => Ok(()),
            })
    }

    async fn delete_category_by_id(&self, id: String) -> Result<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("delete a category", err))
            .and_then(|result| match result.rows_affected() {
                0 => Err(Error::NotFound),
                _ => Ok(()),
            })
    }
}

fn meal_summaries(meals: &[Meal], category_id: &str) -> Vec<MealSummary> {
    meals
        .iter()
        .filter(|meal| meal.category_id == category_id)
        .map(|meal| MealSummary {
            id: meal.id.clone(),
            name: meal.name.clone(),
        })
        .collect()
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn create_category(&self, payload: CreateCategoryPayload) -> Result<Category> {
        let mut collections = self.collections().await;
        if collections
            .categories
            .iter()
            .any(|category| category.name == payload.name)
        {
            return Err(Error::AlreadyExists);
        }

        let category = Category {
            id: id::generate(),
            name: payload.name,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };
        collections.categories.push(category.clone());
        Ok(category)
    }

    async fn find_category_by_id(&self, id: String) -> Result<Option<CategoryWithMeals>> {
        let collections = self.collections().await;
        Ok(collections
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .map(|category| {
                let meals = meal_summaries(&collections.meals, &category.id);
                category.with_meals(meals)
            }))
    }

    async fn find_category_by_name(&self, name: String) -> Result<Option<Category>> {
        Ok(self
            .collections()
            .await
            .categories
            .iter()
            .find(|category| category.name == name)
            .cloned())
    }

    async fn find_many_categories(&self) -> Result<Vec<CategoryWithMeals>> {
        let collections = self.collections().await;
        Ok(collections
            .categories
            .iter()
            .cloned()
            .map(|category| {
                let meals = meal_summaries(&collections.meals, &category.id);
                category.with_meals(meals)
            })
            .collect())
    }

    async fn update_category_by_id(
        &self,
        id: String,
        payload: UpdateCategoryPayload,
    ) -> Result<()> {
        let mut collections = self.collections().await;
        if collections
            .categories
            .iter()
            .any(|category| category.name == payload.name && category.id != id)
        {
            return Err(Error::AlreadyExists);
        }

        let category = collections
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or(Error::NotFound)?;
        category.name = payload.name;
        category.updated_at = Some(Utc::now().naive_utc());
        Ok(())
    }

    async fn delete_category_by_id(&self, id: String) -> Result<()> {
        let mut collections = self.collections().await;
        let before = collections.categories.len();
        collections.categories.retain(|category| category.id != id);
        if collections.categories.len() == before {
            return Err(Error::NotFound);
        }
        collections.meals.retain(|meal| meal.category_id != id);
        Ok(())
    }
}
