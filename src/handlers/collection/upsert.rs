use crate::{
    storage::collections::{self, MovieRecord},
    utils::deserialize_movie_id,
    Json, StateTrait,
};
use axum::extract::State;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(deserialize_with = "deserialize_movie_id")]
    id: i32,
    title: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    overview: String,
}

/// Answers with the movie id, or with the storage error message when a
/// collection write fails. Failures are never turned into error statuses.
pub async fn upsert_movie<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Json<String> {
    let movie = MovieRecord {
        id: request.id.to_string(),
        title: request.title,
        release_date: request.release_date,
        overview: request.overview,
    };

    match collections::upsert_movie(state.db(), state.embedder(), &movie).await {
        Ok(()) => Json(movie.id),
        Err(error) => {
            warn!(movie_id = %movie.id, "failed to store movie: {error}");
            Json(error.message().to_owned())
        }
    }
}
