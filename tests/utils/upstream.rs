#![allow(dead_code)]

//! Stand-ins for the third-party APIs, served on an ephemeral local port.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tokio::net::TcpListener;

#[derive(Debug, Default)]
pub struct Hits {
    pub tmdb: AtomicUsize,
    pub wikipedia: AtomicUsize,
    pub chat: AtomicUsize,
    pub embeddings: AtomicUsize,
    pub stack_auth: AtomicUsize,
}

#[derive(Debug)]
pub struct Upstream {
    addr: SocketAddr,
    pub hits: Hits,
    chat_reply: Mutex<String>,
    last_chat_request: Mutex<Option<Value>>,
    embeddings_down: AtomicBool,
}

#[allow(unused)]
impl Upstream {
    pub async fn start() -> Arc<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let upstream = Arc::new(Upstream {
            addr,
            hits: Hits::default(),
            chat_reply: Mutex::new(detailed_trivia(5).to_string()),
            last_chat_request: Mutex::new(None),
            embeddings_down: AtomicBool::new(false),
        });

        let router = Router::new()
            .route("/tmdb/movie/top_rated", get(top_rated))
            .route("/tmdb/search/movie", get(search_movie))
            .route("/tmdb/movie/{id}", get(movie))
            .route("/wiki/search/page", get(search_page))
            .route("/wiki/page/{key}", get(page))
            .route("/openai/chat/completions", post(chat))
            .route("/openai/embeddings", post(embeddings))
            .route("/stack/users/{id}", get(stack_user))
            .with_state(upstream.clone());

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        upstream
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Content of every following chat completion.
    pub fn set_chat_reply(&self, reply: impl Into<String>) {
        *self.chat_reply.lock().unwrap() = reply.into();
    }

    /// Makes the embeddings endpoint answer `500` until switched back.
    pub fn set_embeddings_down(&self, down: bool) {
        self.embeddings_down.store(down, Ordering::SeqCst);
    }

    pub fn last_chat_request(&self) -> Option<Value> {
        self.last_chat_request.lock().unwrap().clone()
    }

    pub fn hits(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

type Shared = State<Arc<Upstream>>;

pub fn detailed_trivia(count: usize) -> Value {
    let questions: Vec<Value> = (0..count)
        .map(|n| {
            json!({
                "question": format!("Question {n}?"),
                "options": ["Neo", "Trinity", "Morpheus", "Smith"],
                "answer": "Morpheus",
                "difficulty": "medium",
                "category": "Characters",
            })
        })
        .collect();

    json!({ "source": "The Matrix", "questions": questions })
}

pub fn basic_trivia(count: usize) -> Value {
    let questions: Vec<Value> = (0..count)
        .map(|n| {
            json!({
                "question": format!("Question {n}?"),
                "options": ["1997", "1998", "1999", "2000"],
                "answer": "1999",
            })
        })
        .collect();

    json!({ "questions": questions })
}

pub fn movie_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "release_date": "1999-03-31",
        "overview": format!("{title} overview"),
        "vote_average": 8.2,
        "backdrop_path": "/backdrop.jpg",
        "poster_path": "/poster.jpg",
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

async fn top_rated(State(upstream): Shared, headers: HeaderMap) -> Response {
    upstream.hits.tmdb.fetch_add(1, Ordering::SeqCst);

    if bearer(&headers) != Some("tmdb-token") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(json!({
        "page": 1,
        "results": [movie_json(278, "The Shawshank Redemption"), movie_json(238, "The Godfather")],
    }))
    .into_response()
}

async fn search_movie(
    State(upstream): Shared,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    upstream.hits.tmdb.fetch_add(1, Ordering::SeqCst);

    let results = match query.get("query").map(String::as_str) {
        Some("The Matrix") => vec![movie_json(603, "The Matrix")],
        _ => Vec::new(),
    };

    Json(json!({ "page": 1, "results": results })).into_response()
}

async fn movie(State(upstream): Shared, Path(id): Path<i64>) -> Response {
    upstream.hits.tmdb.fetch_add(1, Ordering::SeqCst);

    if id == 603 {
        let mut movie = movie_json(603, "The Matrix");
        movie["tagline"] = json!("Welcome to the Real World.");
        Json(movie).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "status_message": "The resource you requested could not be found." })),
        )
            .into_response()
    }
}

async fn search_page(
    State(upstream): Shared,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    upstream.hits.wikipedia.fetch_add(1, Ordering::SeqCst);

    match query.get("q").map(String::as_str) {
        Some("broken") => StatusCode::NOT_FOUND.into_response(),
        Some("nothing") => Json(json!({ "pages": [] })).into_response(),
        Some("stub") => Json(json!({ "pages": [{ "key": "Stub_page" }] })).into_response(),
        Some(q) => Json(json!({ "pages": [{ "key": q.replace(' ', "_") }] })).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn page(State(upstream): Shared, Path(key): Path<String>) -> Response {
    upstream.hits.wikipedia.fetch_add(1, Ordering::SeqCst);

    if key == "Stub_page" {
        return Json(json!({ "key": key, "source": "" })).into_response();
    }

    Json(json!({ "key": key, "source": format!("'''{key}''' wikitext") })).into_response()
}

async fn chat(State(upstream): Shared, Json(body): Json<Value>) -> Response {
    upstream.hits.chat.fetch_add(1, Ordering::SeqCst);

    *upstream.last_chat_request.lock().unwrap() = Some(body);
    let reply = upstream.chat_reply.lock().unwrap().clone();

    Json(json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": reply } }],
    }))
    .into_response()
}

#[derive(Deserialize)]
struct EmbeddingRequest {
    input: Vec<String>,
}

/// Letter-frequency vectors: texts sharing letters end up close.
pub fn embed_text(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0; 26];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        vector[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1.0;
    }
    vector
}

async fn embeddings(State(upstream): Shared, Json(body): Json<EmbeddingRequest>) -> Response {
    upstream.hits.embeddings.fetch_add(1, Ordering::SeqCst);

    if upstream.embeddings_down.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let data: Vec<Value> = body
        .input
        .iter()
        .enumerate()
        .rev()
        .map(|(index, text)| json!({ "index": index, "embedding": embed_text(text) }))
        .collect();

    Json(json!({ "data": data })).into_response()
}

async fn stack_user(
    State(upstream): Shared,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    upstream.hits.stack_auth.fetch_add(1, Ordering::SeqCst);

    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    if header("x-stack-access-type") != Some("server")
        || header("x-stack-project-id") != Some("project")
        || header("x-stack-secret-server-key") != Some("secret")
    {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if id != "user-1" {
        return StatusCode::NOT_FOUND.into_response();
    }

    Json(json!({
        "id": "user-1",
        "primary_email": "neo@example.com",
        "primary_email_verified": true,
        "display_name": "Neo",
        "profile_image_url": null,
        "signed_up_at_millis": 1_700_000_000_000_u64,
        "selected_team_id": null,
    }))
    .into_response()
}
