//! Third-party HTTP APIs. Every call is a single round trip; a non-success
//! status becomes an upstream error carrying the status code and reason.

mod stack_auth;
mod tmdb;
mod wikipedia;

pub use stack_auth::*;
pub use tmdb::*;
pub use wikipedia::*;

use crate::{error, Result};
use reqwest::Url;

fn parse_base_url(base_url: &str) -> anyhow::Result<Url> {
    let url = Url::parse(base_url.trim_end_matches('/'))?;
    anyhow::ensure!(!url.cannot_be_a_base(), "{base_url} cannot be a base url");
    Ok(url)
}

/// Appends percent-encoded path segments to `base`.
fn join_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| error::INTERNAL)?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
