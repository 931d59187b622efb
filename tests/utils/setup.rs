use super::{request::RequestBuilder, upstream::Upstream};
use axum::Router;
use http::Method;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::{net::SocketAddr, sync::Arc};
use tracing::log::LevelFilter;
use trivia_backend::{
    config::{Config, ModelConfig, StackAuthConfig, TmdbConfig},
    State,
};

#[derive(Clone)]
pub struct App {
    router: Router,
    pub db: DbConn,
    pub upstream: Arc<Upstream>,
}

async fn setup_database() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

fn config(addr: SocketAddr) -> Config {
    let base = format!("http://{addr}");

    Config {
        database_url: "sqlite::memory:".to_owned(),
        listen_port: 0,
        tmdb: TmdbConfig {
            base_url: format!("{base}/tmdb"),
            api_token: "tmdb-token".to_owned(),
        },
        wikimedia_base_url: format!("{base}/wiki"),
        stack_auth: StackAuthConfig {
            base_url: format!("{base}/stack"),
            project_id: "project".to_owned(),
            secret_server_key: "secret".to_owned(),
        },
        chat: ModelConfig {
            base_url: format!("{base}/openai"),
            api_key: "openai-key".to_owned(),
            model: "gpt-4o-mini".to_owned(),
        },
        embeddings: ModelConfig {
            base_url: format!("{base}/openai"),
            api_key: "openai-key".to_owned(),
            model: "all-MiniLM-L6-v2".to_owned(),
        },
    }
}

impl App {
    pub async fn new() -> Self {
        let upstream = Upstream::start().await;
        let db = setup_database().await;

        let state = State::with_database(&config(upstream.addr()), db.clone())
            .expect("failed to build state");

        App {
            router: trivia_backend::app(state),
            db,
            upstream,
        }
    }

    fn request(&self, method: Method, uri: &str) -> RequestBuilder {
        RequestBuilder::new(
            self.router.clone(),
            http::request::Builder::new().method(method).uri(uri),
        )
    }

    #[allow(unused)]
    pub fn get(&self, uri: &str) -> RequestBuilder {
        self.request(Method::GET, uri)
    }

    #[allow(unused)]
    pub fn post(&self, uri: &str) -> RequestBuilder {
        self.request(Method::POST, uri)
    }
}
