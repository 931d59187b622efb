mod create;
mod questions;

use crate::{error, state::StateTrait, Result};
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for games
///
/// POST  /game
/// POST  /game/top
/// GET   /game/{id}/questions
/// GET   /game/{id}/top-questions
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", post(create::create_game::<S>))
        .route("/top", post(create::create_game_top::<S>))
        .route("/{id}/questions", get(questions::get_questions::<S>))
        .route("/{id}/top-questions", get(questions::get_top_questions::<S>))
}

fn parse_game_id(id: &str) -> Result<i64> {
    id.parse().map_err(|_| error::INVALID_GAME_ID)
}
