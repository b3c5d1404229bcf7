use crate::utils::response;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;
use validator::ValidationErrors;

/// Flattens field errors into their messages, ordered by field name.
pub fn into_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| (field.to_string(), errors))
        .collect::<Vec<_>>();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

pub fn into_response(errors: ValidationErrors) -> Response {
    response::failure(StatusCode::BAD_REQUEST, into_messages(&errors))
}

/// `Json<T>` whose rejection is rendered in the API envelope.
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(payload)) => Ok(Self(payload)),
            Err(rejection) => {
                tracing::warn!("Failed to parse request body: {}", rejection.body_text());
                Err(response::failure(
                    StatusCode::BAD_REQUEST,
                    vec![rejection.body_text()],
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1, message = "Number must be positive"))]
        number: i32,
    }

    #[test]
    fn collects_messages_in_field_order() {
        let errors = Payload {
            name: String::new(),
            number: 0,
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            into_messages(&errors),
            vec!["Name is required".to_string(), "Number must be positive".to_string()]
        );
    }
}
