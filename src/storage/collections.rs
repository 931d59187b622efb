//! Named text collections keyed by movie id. Collections bound to a search
//! method keep an embedding next to every text and can be ranked against a
//! query by cosine similarity.

use crate::{error, llm::EmbeddingModel, Result};
use entity::collection_texts::{self, Embedding};
use sea_orm::{sea_query::OnConflict, ConnectionTrait, EntityTrait, Set};
use serde::Serialize;

pub const SEARCH_METHOD: &str = "searchMethod1";
pub const SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub name: &'static str,
    pub search_method: Option<&'static str>,
}

pub const MOVIE_IDS: Collection = Collection {
    name: "movieIds",
    search_method: None,
};
pub const MOVIE_TITLES: Collection = Collection {
    name: "movieTitles",
    search_method: None,
};
pub const MOVIE_RELEASE_DATES: Collection = Collection {
    name: "movieReleaseDates",
    search_method: None,
};
pub const MOVIE_OVERVIEWS: Collection = Collection {
    name: "movieOverviews",
    search_method: Some(SEARCH_METHOD),
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub release_date: String,
    pub overview: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub key: String,
    pub score: f64,
    pub distance: f64,
}

/// Inserts or replaces `text` under `key`. The text is embedded first when the
/// collection has a search method.
pub async fn upsert_text<C, E>(
    db: &C,
    embedder: &E,
    collection: &Collection,
    key: &str,
    text: &str,
) -> Result<()>
where
    C: ConnectionTrait,
    E: EmbeddingModel + ?Sized,
{
    let embedding = match collection.search_method {
        Some(_) => {
            let mut vectors = embedder.embed(&[text.to_owned()]).await?;
            Some(Embedding(vectors.pop().ok_or(error::EMBEDDING_MISMATCH)?))
        }
        None => None,
    };

    let model = collection_texts::ActiveModel {
        collection: Set(collection.name.to_owned()),
        key: Set(key.to_owned()),
        text: Set(text.to_owned()),
        embedding: Set(embedding),
    };

    collection_texts::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([
                collection_texts::Column::Collection,
                collection_texts::Column::Key,
            ])
            .update_columns([
                collection_texts::Column::Text,
                collection_texts::Column::Embedding,
            ])
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(())
}

pub async fn get_text<C>(db: &C, collection: &Collection, key: &str) -> Result<Option<String>>
where
    C: ConnectionTrait,
{
    let row = collection_texts::Entity::find_by_id((collection.name.to_owned(), key.to_owned()))
        .one(db)
        .await?;

    Ok(row.map(|row| row.text))
}

/// Embeds `query` and returns the `limit` closest texts of `collection`, best
/// first.
pub async fn search<C, E>(
    db: &C,
    embedder: &E,
    collection: &Collection,
    method: &str,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchHit>>
where
    C: ConnectionTrait,
    E: EmbeddingModel + ?Sized,
{
    if collection.search_method != Some(method) {
        return Err(error::UNKNOWN_SEARCH_METHOD.with_message(format!(
            "Search method {method} is not defined for collection {}",
            collection.name
        )));
    }

    let query_vector = embedder
        .embed(&[query.to_owned()])
        .await?
        .pop()
        .ok_or(error::EMBEDDING_MISMATCH)?;

    let rows = collection_texts::Entity::find_in_collection(collection.name)
        .all(db)
        .await?;

    let candidates = rows
        .into_iter()
        .filter_map(|row| row.embedding.map(|embedding| (row.key, embedding.0)));

    Ok(rank(&query_vector, candidates, limit))
}

/// Writes the four movie collections in order, stopping at the first failure.
pub async fn upsert_movie<C, E>(db: &C, embedder: &E, movie: &MovieRecord) -> Result<()>
where
    C: ConnectionTrait,
    E: EmbeddingModel + ?Sized,
{
    let fields = [
        (MOVIE_IDS, &movie.id),
        (MOVIE_TITLES, &movie.title),
        (MOVIE_RELEASE_DATES, &movie.release_date),
        (MOVIE_OVERVIEWS, &movie.overview),
    ];

    for (collection, text) in &fields {
        upsert_text(db, embedder, collection, &movie.id, text).await?;
    }

    info!(movie_id = %movie.id, "movie stored in collections");

    Ok(())
}

/// Assembles a movie from the four collections. Missing fields stay empty.
pub async fn get_movie<C>(db: &C, id: &str) -> Result<MovieRecord>
where
    C: ConnectionTrait,
{
    Ok(MovieRecord {
        id: get_text(db, &MOVIE_IDS, id)
            .await?
            .unwrap_or_else(|| id.to_owned()),
        title: get_text(db, &MOVIE_TITLES, id).await?.unwrap_or_default(),
        release_date: get_text(db, &MOVIE_RELEASE_DATES, id)
            .await?
            .unwrap_or_default(),
        overview: get_text(db, &MOVIE_OVERVIEWS, id).await?.unwrap_or_default(),
    })
}

/// Orders candidates by cosine similarity to `query`. Candidates whose
/// dimension differs from the query are skipped.
pub fn rank<I>(query: &[f32], candidates: I, limit: usize) -> Vec<SearchHit>
where
    I: IntoIterator<Item = (String, Vec<f32>)>,
{
    let mut hits: Vec<SearchHit> = candidates
        .into_iter()
        .filter_map(|(key, vector)| {
            cosine_similarity(query, &vector).map(|score| SearchHit {
                key,
                score,
                distance: 1.0 - score,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(limit);
    hits
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.is_empty() || a.len() != b.len() {
        return None;
    }

    let dot = a
        .iter()
        .zip(b)
        .fold(0.0, |acc, (x, y)| f64::from(*x).mul_add(f64::from(*y), acc));

    let norm = |v: &[f32]| {
        v.iter()
            .fold(0.0, |acc: f64, x| f64::from(*x).mul_add(f64::from(*x), acc))
            .sqrt()
    };

    let norms = norm(a) * norm(b);
    if norms == 0.0 {
        return None;
    }

    Some(dot / norms)
}
