use super::{join_segments, parse_base_url};
use crate::{error, Error, Result};
use reqwest::{Client, Url};
use serde::Deserialize;

pub const NO_SUMMARY: &str = "No summary available for this page.";

#[derive(Deserialize)]
struct SearchResponse {
    pages: Vec<SearchPage>,
}

#[derive(Deserialize)]
struct SearchPage {
    key: String,
}

#[derive(Deserialize)]
struct PageContent {
    #[serde(default)]
    source: Option<String>,
}

/// Wikimedia core REST API for one Wikipedia edition.
#[derive(Debug, Clone)]
pub struct Wikipedia {
    client: Client,
    base_url: Url,
}

impl Wikipedia {
    pub fn new(client: Client, base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Key of the most relevant page for `query`.
    pub async fn search_page(&self, query: &str) -> Result<String> {
        let url = join_segments(&self.base_url, &["search", "page"])?;
        let response = self.client.get(url).query(&[("q", query)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream("Failed to fetch search results", status));
        }

        let search: SearchResponse = response.json().await?;

        let Some(page) = search.pages.into_iter().next() else {
            return Err(
                error::NOT_FOUND.with_message(format!("No Wikipedia page found for \"{query}\""))
            );
        };

        debug!(key = %page.key, "wikipedia page selected");

        Ok(page.key)
    }

    /// Raw wikitext of the page stored under `key`.
    pub async fn page_source(&self, key: &str) -> Result<String> {
        let url = join_segments(&self.base_url, &["page", key])?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(
                "Failed to fetch Wikipedia page content",
                status,
            ));
        }

        let page: PageContent = response.json().await?;

        Ok(page
            .source
            .filter(|source| !source.is_empty())
            .unwrap_or_else(|| NO_SUMMARY.to_owned()))
    }
}
