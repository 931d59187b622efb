mod embed;
mod search;
mod upsert;

pub use embed::embed;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for the movie collections
///
/// POST  /collections/movie
/// GET   /collections/movie/search?query=
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/movie", post(upsert::upsert_movie::<S>))
        .route("/movie/search", get(search::search_movie::<S>))
}
