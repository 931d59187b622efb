use std::env;

const DEFAULT_LISTEN_PORT: u16 = 3002;
const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_WIKIMEDIA_BASE_URL: &str = "https://api.wikimedia.org/core/v1/wikipedia/en";
const DEFAULT_STACK_AUTH_BASE_URL: &str = "https://api.stack-auth.com/api/v1";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_EMBEDDINGS_MODEL: &str = "all-MiniLM-L6-v2";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_port: u16,
    pub tmdb: TmdbConfig,
    pub wikimedia_base_url: String,
    pub stack_auth: StackAuthConfig,
    pub chat: ModelConfig,
    pub embeddings: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub base_url: String,
    pub api_token: String,
}

#[derive(Debug, Clone)]
pub struct StackAuthConfig {
    pub base_url: String,
    pub project_id: String,
    pub secret_server_key: String,
}

/// Endpoint of an OpenAI-compatible model API.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let openai_base_url = optional("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL);
        let openai_api_key = required("OPENAI_API_KEY")?;

        let listen_port = match env::var("LISTEN_PORT") {
            Ok(port) => port
                .parse()
                .inspect_err(|_| error!("LISTEN_PORT is not a valid port"))?,
            Err(_) => DEFAULT_LISTEN_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_port,
            tmdb: TmdbConfig {
                base_url: optional("TMDB_BASE_URL", DEFAULT_TMDB_BASE_URL),
                api_token: required("TMDB_API_TOKEN")?,
            },
            wikimedia_base_url: optional("WIKIMEDIA_BASE_URL", DEFAULT_WIKIMEDIA_BASE_URL),
            stack_auth: StackAuthConfig {
                base_url: optional("STACK_AUTH_BASE_URL", DEFAULT_STACK_AUTH_BASE_URL),
                project_id: optional("STACK_AUTH_PROJECT_ID", ""),
                secret_server_key: optional("STACK_AUTH_SECRET_KEY", ""),
            },
            embeddings: ModelConfig {
                base_url: optional("EMBEDDINGS_BASE_URL", &openai_base_url),
                api_key: optional("EMBEDDINGS_API_KEY", &openai_api_key),
                model: optional("EMBEDDINGS_MODEL", DEFAULT_EMBEDDINGS_MODEL),
            },
            chat: ModelConfig {
                base_url: openai_base_url,
                api_key: openai_api_key,
                model: optional("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            },
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    Ok(env::var(name).inspect_err(|_| error!("{name} is not set"))?)
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}
