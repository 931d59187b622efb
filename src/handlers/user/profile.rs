use crate::{
    storage::{self, UserProfile},
    Json, Result, StateTrait, ValidatedJson,
};
use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[validate(length(min = 1))]
    user_id: String,
    #[validate(length(min = 1))]
    email: String,
    #[validate(length(min = 1))]
    name: String,
}

/// Registers the user on first sight. A new user answers with its id and
/// `201`, a known one with its stored name and `200`.
pub async fn user_profile<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<String>)> {
    let profile =
        storage::find_or_create_user(state.db(), &request.user_id, &request.email, &request.name)
            .await?;

    Ok(match profile {
        UserProfile::Created(user) => (StatusCode::CREATED, Json(user.id.to_string())),
        UserProfile::Existing(user) => (StatusCode::OK, Json(user.name)),
    })
}
