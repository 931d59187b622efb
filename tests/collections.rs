mod utils;

use entity::collection_texts;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use std::sync::atomic::Ordering;
use trivia_backend::storage::collections::{
    self, MOVIE_IDS, MOVIE_OVERVIEWS, MOVIE_RELEASE_DATES, MOVIE_TITLES,
};
use utils::prelude::*;

async fn upsert(app: &App, id: Value, title: &str, overview: &str) -> Value {
    let res = app
        .post("/v1/collections/movie")
        .json(&json!({
            "id": id,
            "title": title,
            "releaseDate": "1999-03-31",
            "overview": overview,
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    res.json().await
}

#[tokio::test]
async fn upsert_writes_every_collection() {
    let app = App::new().await;

    let body = upsert(&app, json!(603), "The Matrix", "A hacker learns the truth").await;

    assert_eq!(body, json!("603"));
    assert_eq!(
        collection_texts::Entity::find().count(&app.db).await.unwrap(),
        4
    );

    let title = collections::get_text(&app.db, &MOVIE_TITLES, "603")
        .await
        .unwrap();
    assert_eq!(title.as_deref(), Some("The Matrix"));

    let overview = collection_texts::Entity::find_by_id((
        MOVIE_OVERVIEWS.name.to_owned(),
        "603".to_owned(),
    ))
    .one(&app.db)
    .await
    .unwrap()
    .unwrap();
    assert!(overview.embedding.is_some());

    let row = collection_texts::Entity::find_by_id(("movieTitles".to_owned(), "603".to_owned()))
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    assert!(row.embedding.is_none());
    assert_eq!(app.upstream.hits.embeddings.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upsert_replaces_existing_texts() {
    let app = App::new().await;

    upsert(&app, json!("603"), "Matrix", "old overview").await;
    upsert(&app, json!(603), "The Matrix", "new overview").await;

    assert_eq!(
        collection_texts::Entity::find().count(&app.db).await.unwrap(),
        4
    );
    let movie = collections::get_movie(&app.db, "603").await.unwrap();
    assert_eq!(movie.title, "The Matrix");
    assert_eq!(movie.overview, "new overview");
}

#[tokio::test]
async fn search_ranks_by_similarity() {
    let app = App::new().await;

    upsert(&app, json!(603), "The Matrix", "zzz zzz zzz").await;
    upsert(&app, json!(550), "Fight Club", "aaa bbb").await;
    upsert(&app, json!(680), "Pulp Fiction", "aaa aaa aaa").await;

    let res = app
        .get("/v1/collections/movie/search?query=aaaa")
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await;
    assert_eq!(body["collection"], "movieOverviews");
    assert_eq!(body["searchMethod"], "searchMethod1");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["error"], Value::Null);

    let objects = body["searchObjs"].as_array().unwrap();
    assert_eq!(objects.len(), 3);
    assert_json_eq!(
        objects[0]["movie"],
        json!({
            "id": "680",
            "title": "Pulp Fiction",
            "release_date": "1999-03-31",
            "overview": "aaa aaa aaa",
        })
    );
    assert_eq!(objects[1]["movie"]["id"], "550");
    assert_eq!(objects[2]["movie"]["id"], "603");

    let score = objects[0]["score"].as_f64().unwrap();
    let distance = objects[0]["distance"].as_f64().unwrap();
    assert!((score - 1.0).abs() < 1e-6);
    assert!((score + distance - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn search_keeps_ten_best() {
    let app = App::new().await;

    for id in 0..12 {
        upsert(&app, json!(id), &format!("Movie {id}"), "some overview").await;
    }

    let res = app
        .get("/v1/collections/movie/search?query=overview")
        .send()
        .await;

    let body: Value = res.json().await;
    assert_eq!(body["searchObjs"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn embed_texts() {
    let app = App::new().await;

    let res = app
        .post("/v1/embed")
        .json(&json!({ "texts": ["ab", "c"] }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<Vec<f32>> = res.json().await;
    assert_eq!(body, vec![utils::upstream::embed_text("ab"), utils::upstream::embed_text("c")]);
}

#[tokio::test]
async fn embed_nothing() {
    let app = App::new().await;

    let res = app.post("/v1/embed").json(&json!({ "texts": [] })).send().await;

    let body: Vec<Vec<f32>> = res.json().await;
    assert!(body.is_empty());
    assert_eq!(app.upstream.hits.embeddings.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upsert_stops_at_first_failure() {
    let app = App::new().await;
    app.upstream.set_embeddings_down(true);

    let body = upsert(&app, json!(603), "The Matrix", "A hacker learns the truth").await;

    assert_eq!(
        body,
        json!("Failed to compute embeddings. Received: 500 Internal Server Error")
    );

    for collection in [MOVIE_IDS, MOVIE_TITLES, MOVIE_RELEASE_DATES] {
        let text = collections::get_text(&app.db, &collection, "603")
            .await
            .unwrap();
        assert!(text.is_some(), "{} should be written", collection.name);
    }

    let overview = collections::get_text(&app.db, &MOVIE_OVERVIEWS, "603")
        .await
        .unwrap();
    assert_eq!(overview, None);
}

#[tokio::test]
async fn upsert_reports_database_failure() {
    let app = App::new().await;
    app.db
        .execute_unprepared("DROP TABLE collection_texts")
        .await
        .unwrap();

    let body = upsert(&app, json!(603), "The Matrix", "A hacker learns the truth").await;

    assert_eq!(body, json!(error::DATABASE_ERROR.message()));
}

#[tokio::test]
async fn search_reports_embedding_failure() {
    let app = App::new().await;
    upsert(&app, json!(603), "The Matrix", "A hacker learns the truth").await;
    app.upstream.set_embeddings_down(true);

    let res = app
        .get("/v1/collections/movie/search?query=hacker")
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await;
    assert_json_eq!(
        body,
        json!({
            "collection": "movieOverviews",
            "searchMethod": "searchMethod1",
            "status": "error",
            "error": "Failed to compute embeddings. Received: 500 Internal Server Error",
            "searchObjs": [],
        })
    );
}

#[tokio::test]
async fn search_reports_database_failure() {
    let app = App::new().await;
    app.db
        .execute_unprepared("DROP TABLE collection_texts")
        .await
        .unwrap();

    let res = app
        .get("/v1/collections/movie/search?query=hacker")
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], error::DATABASE_ERROR.message());
    assert_json_eq!(body["searchObjs"], json!([]));
}
