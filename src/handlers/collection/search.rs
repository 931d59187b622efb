use crate::{
    extractors::Query,
    storage::collections::{self, MovieRecord, MOVIE_OVERVIEWS, SEARCH_LIMIT, SEARCH_METHOD},
    Json, Result, StateTrait,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SearchQuery {
    query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSearchResult {
    collection: &'static str,
    search_method: &'static str,
    status: Status,
    error: Option<String>,
    search_objs: Vec<SearchObject>,
}

#[derive(Serialize)]
pub struct SearchObject {
    movie: MovieRecord,
    score: f64,
    distance: f64,
}

/// Semantic search over movie overviews. Failures are reported inside the
/// result.
pub async fn search_movie<S: StateTrait>(
    State(state): State<S>,
    Query(query): Query<SearchQuery>,
) -> Json<MovieSearchResult> {
    let (status, error, search_objs) = match find(&state, &query.query).await {
        Ok(objects) => (Status::Ok, None, objects),
        Err(error) => {
            warn!(query = %query.query, "movie search failed: {error}");
            (Status::Error, Some(error.message().to_owned()), Vec::new())
        }
    };

    Json(MovieSearchResult {
        collection: MOVIE_OVERVIEWS.name,
        search_method: SEARCH_METHOD,
        status,
        error,
        search_objs,
    })
}

async fn find<S: StateTrait>(state: &S, query: &str) -> Result<Vec<SearchObject>> {
    let hits = collections::search(
        state.db(),
        state.embedder(),
        &MOVIE_OVERVIEWS,
        SEARCH_METHOD,
        query,
        SEARCH_LIMIT,
    )
    .await?;

    let mut objects = Vec::with_capacity(hits.len());
    for hit in hits {
        objects.push(SearchObject {
            movie: collections::get_movie(state.db(), &hit.key).await?,
            score: hit.score,
            distance: hit.distance,
        });
    }

    Ok(objects)
}
