mod collection;
mod game;
mod movie;
mod text;
mod trivia;
mod user;
mod wikipedia;

use crate::state::StateTrait;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

/// Routes of the service
///
/// GET   /v1/movies/top
/// GET   /v1/movies/search?name=
/// GET   /v1/movies/{id}
/// GET   /v1/wikipedia?name=
/// POST  /v1/trivia
/// POST  /v1/trivia/movie
/// POST  /v1/text
/// POST  /v1/game
/// POST  /v1/game/top
/// GET   /v1/game/{id}/questions
/// GET   /v1/game/{id}/top-questions
/// POST  /v1/user/profile
/// GET   /v1/user/{id}
/// POST  /v1/collections/movie
/// GET   /v1/collections/movie/search?query=
/// POST  /v1/embed
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .nest(
            "/v1",
            Router::new()
                .nest("/movies", movie::routes::<S>())
                .route("/wikipedia", get(wikipedia::get_wikipedia_info::<S>))
                .route("/trivia", post(trivia::generate_trivia::<S>))
                .route("/trivia/movie", post(trivia::generate_trivia_from_movie::<S>))
                .route("/text", post(text::generate_text::<S>))
                .nest("/game", game::routes::<S>())
                .nest("/user", user::routes::<S>())
                .nest("/collections", collection::routes::<S>())
                .route("/embed", post(collection::embed::<S>)),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
