use super::{join_segments, parse_base_url};
use crate::{config::TmdbConfig, error, Error, Result};
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A movie as the catalog describes it. Search results omit `tagline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Deserialize)]
struct Page {
    results: Vec<Movie>,
}

/// The Movie Database (TMDB) v3 API.
#[derive(Debug, Clone)]
pub struct MovieCatalog {
    client: Client,
    base_url: Url,
    api_token: String,
}

impl MovieCatalog {
    pub fn new(client: Client, config: &TmdbConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            api_token: config.api_token.clone(),
        })
    }

    pub async fn top_rated(&self) -> Result<Vec<Movie>> {
        let page: Page = self
            .fetch(&["movie", "top_rated"], &[("language", "en-US"), ("page", "1")])
            .await?;

        Ok(page.results)
    }

    /// Fails with a not-found error naming `query` when nothing matches.
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        let page: Page = self
            .fetch(
                &["search", "movie"],
                &[
                    ("query", query),
                    ("include_adult", "false"),
                    ("language", "en-US"),
                    ("page", "1"),
                ],
            )
            .await?;

        if page.results.is_empty() {
            return Err(
                error::NOT_FOUND.with_message(format!("No movie found for the name: {query}"))
            );
        }

        Ok(page.results)
    }

    pub async fn get(&self, id: i64) -> Result<Movie> {
        self.fetch(&["movie", &id.to_string()], &[("language", "en-US")])
            .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = join_segments(&self.base_url, segments)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream("Failed to fetch movie data", status));
        }

        Ok(response.json().await?)
    }
}
