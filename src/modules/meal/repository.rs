use crate::modules::category::repository::CategorySummary;
use crate::utils::database::{map_sqlx_error, memory::MemoryStore, postgres::PgStore, Error, Result};
use crate::utils::id;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MealWithCategory {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub category: Option<CategorySummary>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(sqlx::FromRow)]
struct MealWithCategoryRow {
    id: String,
    name: String,
    category_id: String,
    category_name: Option<String>,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl From<MealWithCategoryRow> for MealWithCategory {
    fn from(row: MealWithCategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category_name.map(|name| CategorySummary {
                id: row.category_id.clone(),
                name,
            }),
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct CreateMealPayload {
    pub name: String,
    pub category_id: String,
}

pub struct UpdateMealPayload {
    pub name: String,
    pub category_id: String,
}

#[async_trait]
pub trait MealRepository {
    async fn create_meal(&self, payload: CreateMealPayload) -> Result<Meal>;
    async fn find_meal_by_id(&self, id: String) -> Result<Option<MealWithCategory>>;
    async fn find_meal_by_name(&self, name: String) -> Result<Option<Meal>>;
    async fn find_many_meals(&self) -> Result<Vec<MealWithCategory>>;
    async fn update_meal_by_id(&self, id: String, payload: UpdateMealPayload) -> Result<()>;
    async fn delete_meal_by_id(&self, id: String) -> Result<()>;
}

const SELECT_MEAL_WITH_CATEGORY: &str = "
    SELECT
        meals.id,
        meals.name,
        meals.category_id,
        categories.name AS category_name,
        meals.created_at,
        meals.updated_at
    FROM
        meals
    LEFT JOIN
        categories
    ON
        meals.category_id = categories.id
";

#[async_trait]
impl MealRepository for PgStore {
    async fn create_meal(&self, payload: CreateMealPayload) -> Result<Meal> {
        sqlx::query_as::<_, Meal>(
            "
            INSERT INTO meals (id, name, category_id)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(id::generate())
        .bind(payload.name)
        .bind(payload.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("create a meal", err))
    }

    async fn find_meal_by_id(&self, id: String) -> Result<Option<MealWithCategory>> {
        sqlx::query_as::<_, MealWithCategoryRow>(&format!(
            "{} WHERE meals.id = $1",
            SELECT_MEAL_WITH_CATEGORY
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(MealWithCategory::from))
        .map_err(|err| map_sqlx_error("fetch a meal by id", err))
    }

    async fn find_meal_by_name(&self, name: String) -> Result<Option<Meal>> {
        sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("fetch a meal by name", err))
    }

    async fn find_many_meals(&self) -> Result<Vec<MealWithCategory>> {
        sqlx::query_as::<_, MealWithCategoryRow>(&format!(
            "{} ORDER BY meals.created_at ASC",
            SELECT_MEAL_WITH_CATEGORY
        ))
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(MealWithCategory::from).collect())
        .map_err(|err| map_sqlx_error("fetch many meals", err))
    }

    async fn update_meal_by_id(&self, id: String, payload: UpdateMealPayload) -> Result<()> {
        sqlx::query(
            "
            UPDATE meals SET
                name = $1,
                category_id = $2,
                updated_at = NOW()
            WHERE
                id = $3
            ",
        )
        .bind(payload.name)
        .bind(payload.category_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|err| map_sqlx_error("update a meal", err))
        .and_then(|result| match result.rows_affected() {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        })
    }

    async fn delete_meal_by_id(&self, id: String) -> Result<()> {
        sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("delete a meal", err))
            .and_then(|result| match result.rows_affected() {
                0 => Err(Error::NotFound),
                _ => Ok(()),
            })
    }
}

fn with_category(
    meal: &Meal,
    categories: &[crate::modules::category::repository::Category],
) -> MealWithCategory {
    MealWithCategory {
        id: meal.id.clone(),
        name: meal.name.clone(),
        category_id: meal.category_id.clone(),
        category: categories
            .iter()
            .find(|category| category.id == meal.category_id)
            .map(|category| CategorySummary {
                id: category.id.clone(),
                name: category.name.clone(),
            }),
        created_at: meal.created_at,
        updated_at: meal.updated_at,
    }
}

#[async_trait]
impl MealRepository for MemoryStore {
    async fn create_meal(&self, payload: CreateMealPayload) -> Result<Meal> {
        let mut collections = self.collections().await;
        if collections.meals.iter().any(|meal| meal.name == payload.name) {
            return Err(Error::AlreadyExists);
        }
        if !collections
            .categories
            .iter()
            .any(|category| category.id == payload.category_id)
        {
            return Err(Error::NotFound);
        }

        let meal = Meal {
            id: id::generate(),
            name: payload.name,
            category_id: payload.category_id,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };
        collections.meals.push(meal.clone());
        Ok(meal)
    }

    async fn find_meal_by_id(&self, id: String) -> Result<Option<MealWithCategory>> {
        let collections = self.collections().await;
        Ok(collections
            .meals
            .iter()
            .find(|meal| meal.id == id)
            .map(|meal| with_category(meal, &collections.categories)))
    }

    async fn find_meal_by_name(&self, name: String) -> Result<Option<Meal>> {
        Ok(self
            .collections()
            .await
            .meals
            .iter()
            .find(|meal| meal.name == name)
            .cloned())
    }

    async fn find_many_meals(&self) -> Result<Vec<MealWithCategory>> {
        let collections = self.collections().await;
        Ok(collections
            .meals
            .iter()
            .map(|meal| with_category(meal, &collections.categories))
            .collect())
    }

    async fn update_meal_by_id(&self, id: String, payload: UpdateMealPayload) -> Result<()> {
        let mut collections = self.collections().await;
        if collections
            .meals
            .iter()
            .any(|meal| meal.name == payload.name && meal.id != id)
        {
            return Err(Error::AlreadyExists);
        }

        let meal = collections
            .meals
            .iter_mut()
            .find(|meal| meal.id == id)
            .ok_or(Error::NotFound)?;
        meal.name = payload.name;
        meal.category_id = payload.category_id;
        meal.updated_at = Some(Utc::now().naive_utc());
        Ok(())
    }

    async fn delete_meal_by_id(&self, id: String) -> Result<()> {
        let mut collections = self.collections().await;
        let before = collections.meals.len();
        collections.meals.retain(|meal| meal.id != id);
        match collections.meals.len() == before {
            true => Err(Error::NotFound),
            false => Ok(()),
        }
    }
}
