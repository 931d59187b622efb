use crate::{
    clients::{MovieCatalog, StackAuth, Wikipedia},
    config::Config,
    llm::{ChatModel, EmbeddingModel, OpenAiChat, OpenAiEmbeddings},
};
use reqwest::Client;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::sync::Arc;
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone + Send + Sync;
    type Llm: ChatModel;
    type Embedder: EmbeddingModel;

    fn db(&self) -> &Self::Db;
    fn llm(&self) -> &Self::Llm;
    fn embedder(&self) -> &Self::Embedder;
    fn catalog(&self) -> &MovieCatalog;
    fn wikipedia(&self) -> &Wikipedia;
    fn identity(&self) -> &StackAuth;
}

pub struct State {
    database: DbConn,
    llm: OpenAiChat,
    embedder: OpenAiEmbeddings,
    catalog: MovieCatalog,
    wikipedia: Wikipedia,
    identity: StackAuth,
}

impl State {
    pub async fn new(config: &Config) -> anyhow::Result<Arc<Self>> {
        let database = Self::connect_database(&config.database_url).await?;

        Self::with_database(config, database)
    }

    /// Builds the state around an existing connection. Every upstream client
    /// shares one connection pool.
    pub fn with_database(config: &Config, database: DbConn) -> anyhow::Result<Arc<Self>> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Arc::new(Self {
            database,
            llm: OpenAiChat::new(client.clone(), &config.chat),
            embedder: OpenAiEmbeddings::new(client.clone(), &config.embeddings),
            catalog: MovieCatalog::new(client.clone(), &config.tmdb)?,
            wikipedia: Wikipedia::new(client.clone(), &config.wikimedia_base_url)?,
            identity: StackAuth::new(client, &config.stack_auth)?,
        }))
    }

    async fn connect_database(url: &str) -> anyhow::Result<DbConn> {
        info!("Trying to connect to database");

        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .inspect_err(|error| error!("failed to connect to database: {error}"))?;

        info!("Connected to database");

        Ok(db)
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Llm = OpenAiChat;
    type Embedder = OpenAiEmbeddings;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn llm(&self) -> &Self::Llm {
        &self.llm
    }

    fn embedder(&self) -> &Self::Embedder {
        &self.embedder
    }

    fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    fn wikipedia(&self) -> &Wikipedia {
        &self.wikipedia
    }

    fn identity(&self) -> &StackAuth {
        &self.identity
    }
}
