use crate::{clients::Movie, error, extractors::Query, Json, Result, StateTrait};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::Deserialize;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/top", get(top_movies::<S>))
        .route("/search", get(search_movies::<S>))
        .route("/{id}", get(get_movie::<S>))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    name: String,
}

pub async fn top_movies<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<Movie>>> {
    Ok(Json(state.catalog().top_rated().await?))
}

pub async fn search_movies<S: StateTrait>(
    State(state): State<S>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Movie>>> {
    Ok(Json(state.catalog().search(&query.name).await?))
}

pub async fn get_movie<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Movie>> {
    let id = id.parse::<i64>().map_err(|_| error::INVALID_MOVIE_ID)?;

    Ok(Json(state.catalog().get(id).await?))
}
