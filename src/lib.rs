#[macro_use]
extern crate tracing;

pub mod clients;
pub mod config;
pub mod error;
mod extractors;
mod handlers;
pub mod llm;
mod middlewares;
mod state;
pub mod storage;
pub mod trivia;
mod utils;

use crate::{middlewares::middlewares, utils::SignalHandler};
use axum::Router;
use error::{Error, Result};
use extractors::{Json, ValidatedJson};
pub use state::*;
use tokio::net::TcpListener;
pub use utils::panic;

/// The complete application: routes, middlewares and state.
pub fn app<S: StateTrait>(state: S) -> Router {
    middlewares(state, handlers::routes::<S>())
}

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on port {}", listener.local_addr()?.port());

    axum::serve(listener, app(state).into_make_service())
        .with_graceful_shutdown(SignalHandler::new())
        .await?;

    Ok(())
}
