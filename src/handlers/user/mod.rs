mod profile;
mod verify;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes for users
///
/// POST  /user/profile
/// GET   /user/{id}
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/profile", post(profile::user_profile::<S>))
        .route("/{id}", get(verify::verify_user::<S>))
}
