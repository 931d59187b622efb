use crate::{
    storage,
    trivia::{self, TriviaQuestion},
    utils::deserialize_movie_id,
    Json, Result, StateTrait, ValidatedJson,
};
use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(deserialize_with = "deserialize_movie_id")]
    movie_id: i32,
    #[validate(length(min = 1, max = 512))]
    movie_title: String,
    questions: Vec<TriviaQuestion>,
}

/// Stores a game with its generated questions and returns the new id.
pub async fn create_game<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<String>)> {
    let questions = trivia::validate_submitted(request.questions)?;

    let game_id = storage::create_game_with_questions(
        state.db(),
        request.movie_id,
        request.movie_title,
        questions,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(game_id.to_string())))
}

/// Same as [`create_game`] for reduced questions.
pub async fn create_game_top<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<String>)> {
    let questions = trivia::validate_submitted(request.questions)?;

    let game_id = storage::create_game_with_top_questions(
        state.db(),
        request.movie_id,
        request.movie_title,
        questions,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(game_id.to_string())))
}
