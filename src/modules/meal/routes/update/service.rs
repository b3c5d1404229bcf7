use super::types::{request, response};
use crate::{
    modules::meal::repository::UpdateMealPayload,
    types::Context,
    utils::{database, id},
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = id::parse(&payload.id).ok_or(response::Error::MalformedId)?;

    let meal = ctx
        .db
        .find_meal_by_id(id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateMeal)?
        .ok_or(response::Error::MealNotFound)?;

    let mut body = payload.body;
    body.name = body.name.trim().to_string();
    body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let category_id = match body.category_id {
        Some(raw) => id::parse(&raw).ok_or(response::Error::MalformedId)?,
        None => meal.category_id.clone(),
    };

    if meal.name == body.name && meal.category_id == category_id {
        return Ok(response::Success::MealUnchanged);
    }

    if meal.category_id != category_id {
        ctx.db
            .find_category_by_id(category_id.clone())
            .await
            .map_err(|_| response::Error::FailedToUpdateMeal)?
            .ok_or(response::Error::CategoryNotFound)?;
    }

    if meal.name != body.name {
        let taken = ctx
            .db
            .find_meal_by_name(body.name.clone())
            .await
            .map_err(|_| response::Error::FailedToUpdateMeal)?;

        if taken.is_some() {
            return Err(response::Error::MealAlreadyExists(body.name));
        }
    }

    ctx.db
        .update_meal_by_id(
            id,
            UpdateMealPayload {
                name: body.name.clone(),
                category_id,
            },
        )
        .await
        .map_err(|err| match err {
            database::Error::AlreadyExists => response::Error::MealAlreadyExists(body.name),
            database::Error::NotFound => response::Error::MealNotFound,
            database::Error::UnexpectedError => response::Error::FailedToUpdateMeal,
        })
        .map(|_| response::Success::MealUpdated)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::Harness;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn unchanged_values_are_not_written() {
        let harness = Harness::new();
        let token = harness.admin_token().await;
        let category = harness.seed_category("Soups").await;
        let meal = harness.seed_meal("Lagman", &category.id).await;

        let (status, _) = harness
            .request(
                Method::POST,
                &format!("/meal/{}/update", meal.id),
                Some(json!({"name": " Lagman "})),
                Some(&token),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(harness.store.collections().await.meals[0].updated_at, None);
    }

    #[tokio::test]
    async fn moves_a_meal_to_another_category() {
        let harness = Harness::new();
        let token = harness.admin_token().await;
        let soups = harness.seed_category("Soups").await;
        let mains = harness.seed_category("Mains").await;
        let meal = harness.seed_meal("Lagman", &soups.id).await;

        let (status, _) = harness
            .request(
                Method::POST,
                &format!("/meal/{}/update", meal.id),
                Some(json!({"name": "Lagman", "category_id": mains.id})),
                Some(&token),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let stored = harness.store.collections().await.meals[0].clone();
        assert_eq!(stored.category_id, mains.id);
        assert!(stored.updated_at.is_some());
    }

    #[tokio::test]
    async fn rejects_a_name_owned_by_another_meal() {
        let harness = Harness::new();
        let token = harness.admin_token().await;
        let category = harness.seed_category("Soups").await;
        let meal = harness.seed_meal("Lagman", &category.id).await;
        harness.seed_meal("Shurpa", &category.id).await;

        let (status, body) = harness
            .request(
                Method::POST,
                &format!("/meal/{}/update", meal.id),
                Some(json!({"name": "Shurpa"})),
                Some(&token),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            json!("Already exists meal with name Shurpa")
        );
    }
}
