use crate::{
    llm::SamplingParams,
    trivia::{self, TriviaQuestion, TriviaSchema},
    Json, Result, StateTrait,
};
use axum::extract::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Request {
    prompt: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    title: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    release_date: String,
}

pub async fn generate_trivia<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Vec<TriviaQuestion>>> {
    let questions = trivia::synthesize(
        state.llm(),
        &request.prompt,
        TriviaSchema::DETAILED,
        &SamplingParams::TRIVIA,
    )
    .await?;

    Ok(Json(questions))
}

/// Generates reduced questions from a catalog entry.
pub async fn generate_trivia_from_movie<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<MovieRequest>,
) -> Result<Json<Vec<TriviaQuestion>>> {
    let questions = trivia::synthesize_from_movie(
        state.llm(),
        &request.title,
        &request.overview,
        &request.release_date,
        TriviaSchema::BASIC,
        &SamplingParams::TRIVIA,
    )
    .await?;

    Ok(Json(questions))
}
